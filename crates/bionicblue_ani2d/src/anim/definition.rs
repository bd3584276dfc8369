//! Declarative animation definitions, as stored in animation directories.
//!
//! These are plain `serde` structures mirroring the JSON documents:
//!
//! - [`AnimationManifest`]: `metadata.json`, the part hierarchy, values,
//!   timing, blending, derived animations and recolor instructions
//! - [`SpriteSheet`]: a `.pxa` document holding sprite data and frame placement
//! - position lists: a `.pos` document, a plain array of `[x, y]` offsets
//!
//! Nothing here is validated beyond its shape; the resolver in
//! [`process`](super::process) checks every cross reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
	geometry::{Anchor, Vec2},
	surface::{BasicHue, SpriteData},
};

/// The manifest of an animation set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationManifest {
	/// Named part geometries
	pub geometry: BTreeMap<String, GeometryDef>,
	/// Parts, by name
	pub objects: BTreeMap<String, ObjectDef>,
	/// Named structures (part hierarchies)
	pub existing_structures: BTreeMap<String, StructureDef>,
	/// Every animation of the set, including derived ones
	pub animations: BTreeMap<String, AnimationDef>,
	/// Animation → part → values
	pub values: BTreeMap<String, BTreeMap<String, PartValuesDef>>,
	/// Animation → part → timing
	pub timing: BTreeMap<String, BTreeMap<String, PartTimingDef>>,
	/// Animation → directive → animation
	#[serde(default)]
	pub blending: BTreeMap<String, BTreeMap<String, String>>,
	/// Derived animations, by name
	#[serde(default)]
	pub derived_animations: BTreeMap<String, DerivedDef>,
	/// Previous animation → next animation → root exchange rule
	#[serde(default)]
	pub root_pos_exchange_map: BTreeMap<String, BTreeMap<String, ExchangeRuleDef>>,
	/// Recolored surface versions, by version name
	#[serde(default)]
	pub recolored_surface_versions: BTreeMap<String, RecolorVersionDef>,
}

/// Size and art placement of a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryDef {
	/// Size of the bounding rectangle
	pub size: Vec2,
	/// Size of the art rectangle, defaults to `size`
	#[serde(default)]
	pub art_size: Option<Vec2>,
	/// Anchor on the bounding rectangle and anchor on the art rectangle
	#[serde(default = "default_art_anchorage")]
	pub art_anchorage: (Anchor, Anchor),
	/// Offset applied when anchoring the art rectangle
	#[serde(default)]
	pub anchorage_offset: Vec2,
}

fn default_art_anchorage() -> (Anchor, Anchor) {
	(Anchor::Center, Anchor::Center)
}

/// A part declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectDef {
	/// Name of the part's geometry
	pub geometry: String,
}

/// A node of a part hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeNode {
	/// Part name
	pub name: String,
	/// Child parts
	#[serde(default)]
	pub children: Vec<TreeNode>,
}

impl TreeNode {
	/// Part names in pre-order (node, then each child subtree).
	///
	/// ```
	/// use bionicblue_ani2d::anim::TreeNode;
	///
	/// let tree: TreeNode = serde_json::from_str(
	///     r#"{"name": "body", "children": [
	///         {"name": "head", "children": [{"name": "eyes"}]},
	///         {"name": "arm"}
	///     ]}"#,
	/// )?;
	///
	/// assert_eq!(tree.names(), ["body", "head", "eyes", "arm"]);
	/// # Ok::<(), serde_json::Error>(())
	/// ```
	pub fn names(&self) -> Vec<&str> {
		let mut names = Vec::new();
		self.collect_names(&mut names);
		names
	}

	fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
		names.push(&self.name);
		for child in &self.children {
			child.collect_names(names);
		}
	}
}

/// A part hierarchy with its update and draw orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureDef {
	/// Root of the hierarchy
	pub tree: TreeNode,
	/// Order in which parts are positioned, defaults to pre-order
	#[serde(default)]
	pub updating_order: Option<Vec<String>>,
	/// Back-to-front draw order, defaults to pre-order
	#[serde(default)]
	pub drawing_order: Option<Vec<String>>,
}

/// An animation declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationDef {
	/// Name of the structure used by the animation
	pub structure: String,
}

/// Values of one part in one animation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartValuesDef {
	/// `sheet.animation` reference; no surfaces when absent
	#[serde(default)]
	pub surfaces: Option<String>,
	/// Position list name; a single `(0, 0)` when absent
	#[serde(default)]
	pub positions: Option<String>,
}

/// Timing of one part in one animation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartTimingDef {
	/// `sheet.animation` reference; a single frame `0` when absent
	#[serde(default)]
	pub surface_indices: Option<String>,
	/// Position list name; a single index `0` when absent
	#[serde(default)]
	pub position_indices: Option<String>,
}

/// Operation producing a derived animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedOperation {
	/// Mirror every surface horizontally
	FlipX,
	/// Play the timing tracks in reverse
	Backwards,
	/// Turn every visible pixel white
	Whiten,
}

/// A derived animation declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivedDef {
	/// Animation the values and timing are derived from
	pub target: String,
	/// Derivation applied
	pub operation_name: DerivedOperation,
	/// Lower priorities are resolved first
	#[serde(default)]
	pub priority: i64,
}

/// `[anchor_on_previous_root, anchor_on_new_root, [dx, dy]]`
pub type ExchangeRuleDef = (Anchor, Anchor, Vec2);

/// Instructions producing one recolored surface version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecolorVersionDef {
	/// Effects applied in order to every color
	pub effects: Vec<RecolorEffect>,
	/// `sheet.animation` references that get the recolored version
	pub surface_collections: Vec<String>,
}

/// A single HLS recolor effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecolorEffect {
	/// Change the hue (wraps around 360)
	Hue(HueOperation),
	/// Change the lightness (clamped to `[0, 100]`)
	Lightness(LevelOperation),
	/// Change the saturation (clamped to `[0, 100]`)
	Saturation(LevelOperation),
}

/// Hue change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueOperation {
	/// Replace the hue
	Set(f64),
	/// Add to the hue
	Increment(f64),
	/// Replace the hue by a basic hue plus an increment
	SetFromBasic {
		/// Basic hue
		basic: BasicHue,
		/// Added to the basic hue
		#[serde(default)]
		increment: f64,
	},
}

/// Lightness or saturation change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOperation {
	/// Replace the level
	Set(f64),
	/// Add to the level
	Increment(f64),
}

/// A `.pxa` sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteSheet {
	/// Sheet animations, by name
	pub animations: BTreeMap<String, SheetAnimation>,
}

/// One animation of a sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetAnimation {
	/// Side of the square sprites
	pub size: u32,
	/// Sprite pixel data
	pub sprites: Vec<SpriteData>,
	/// Number of frames of the animation
	pub number_of_frames: usize,
	/// Frame index → sprite shown from that frame on
	pub sprite_placement: BTreeMap<usize, usize>,
}

impl SheetAnimation {
	/// Sprite index of every frame: each frame shows the sprite placed at the
	/// latest placement at or before it. `None` when frame 0 has no placement.
	///
	/// ```
	/// use std::collections::BTreeMap;
	///
	/// use bionicblue_ani2d::anim::SheetAnimation;
	///
	/// let sheet = SheetAnimation {
	///     size: 8,
	///     sprites: vec![Default::default(); 2],
	///     number_of_frames: 5,
	///     sprite_placement: BTreeMap::from([(0, 0), (3, 1)]),
	/// };
	///
	/// assert_eq!(sheet.surface_indices(), Some(vec![0, 0, 0, 1, 1]));
	/// ```
	pub fn surface_indices(&self) -> Option<Vec<usize>> {
		let mut current = *self.sprite_placement.get(&0)?;

		Some(
			(0..self.number_of_frames)
				.map(|frame| {
					if let Some(&sprite) = self.sprite_placement.get(&frame) {
						current = sprite;
					}
					current
				})
				.collect(),
		)
	}
}
