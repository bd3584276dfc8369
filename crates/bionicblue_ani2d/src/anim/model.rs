//! The resolved, read-only animation data model.
//!
//! Names are resolved to dense ids once at load time: parts ([`PartId`]),
//! animations ([`AnimId`]) and surface versions ([`VersionId`]) are plain
//! indices into the tables of an [`AnimationData`].

use std::{collections::HashMap, fmt, rc::Rc};

use bionicblue_wdeque::WalkingDeque;

use crate::{
	geometry::{Anchor, Vec2},
	surface::{Surface, SurfaceCollection},
};

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub struct $name(pub(crate) usize);

		impl $name {
			/// Position in the owning table.
			pub fn index(self) -> usize {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}
	};
}

define_id!(
	/// Index of a part in [`AnimationData::parts`].
	PartId
);

define_id!(
	/// Index of an animation in [`AnimationData::animations`].
	AnimId
);

define_id!(
	/// Index of a surface version in [`AnimationData::versions`].
	VersionId
);

impl VersionId {
	/// The `default` version.
	pub const DEFAULT: Self = Self(0);
	/// The `invisible` version.
	pub const INVISIBLE: Self = Self(1);
}

/// Name of the built-in default version.
pub const DEFAULT_VERSION: &str = "default";

/// Name of the built-in invisible version.
pub const INVISIBLE_VERSION: &str = "invisible";

/// Geometry of a part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartGeometry {
	/// Part name
	pub name: String,
	/// Size of the bounding rectangle
	pub size: Vec2,
	/// Size of the art rectangle
	pub art_size: Vec2,
	/// Anchor read on the bounding rectangle
	pub anchor_from: Anchor,
	/// Anchor assigned on the art rectangle
	pub anchor_to: Anchor,
	/// Offset added when anchoring the art rectangle
	pub anchorage_offset: Vec2,
}

/// The resolved part hierarchy of an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStructure {
	/// Name of the structure in the manifest
	pub name: String,
	/// Root part
	pub root: PartId,
	/// `(child, parent)` links, in pre-order
	pub links: Vec<(PartId, PartId)>,
	/// Order in which parts are positioned
	pub updating_order: Vec<PartId>,
	/// Back-to-front draw order
	pub drawing_order: Vec<PartId>,
	/// Every part of the tree, in pre-order
	pub parts: Vec<PartId>,
}

/// Surfaces and positions of one part in one animation.
#[derive(Debug, Clone)]
pub struct PartValues {
	/// One collection per surface version, indexed by [`VersionId`]
	pub surfaces: Vec<SurfaceCollection>,
	/// Positions indexed by the position track
	pub positions: Rc<[Vec2]>,
}

impl PartValues {
	/// Surface shown for `version` at `index`.
	pub fn surface(&self, version: VersionId, index: usize) -> &Rc<Surface> {
		self.surfaces[version.0].get(index)
	}
}

/// Timing tracks of one part in one animation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartTiming {
	/// Indices into the part's surfaces
	pub surface_indices: WalkingDeque<usize>,
	/// Indices into the part's positions
	pub position_indices: WalkingDeque<usize>,
}

impl PartTiming {
	/// Walks both tracks back to their initial rotation.
	pub fn restore_walking(&mut self) {
		self.surface_indices.restore_walking();
		self.position_indices.restore_walking();
	}

	/// Fresh copies of both tracks in reverse order.
	#[must_use]
	pub fn reversed(&self) -> Self {
		Self {
			surface_indices: self.surface_indices.reversed(),
			position_indices: self.position_indices.reversed(),
		}
	}

	/// Fresh copies of both tracks.
	#[must_use]
	pub fn fresh_copy(&self) -> Self {
		Self {
			surface_indices: self.surface_indices.fresh_copy(),
			position_indices: self.position_indices.fresh_copy(),
		}
	}
}

/// Values and template timing of one part, in an animation's update order.
#[derive(Debug, Clone)]
pub struct PartTrack {
	/// The part
	pub part: PartId,
	/// Shared values
	pub values: PartValues,
	/// Timing template, cloned by every player
	pub timing: PartTiming,
}

/// A resolved animation.
#[derive(Debug, Clone)]
pub struct Animation {
	/// Animation name
	pub name: String,
	/// Part hierarchy, possibly shared with other animations
	pub structure: Rc<AnimationStructure>,
	/// One track per part, in updating order
	pub tracks: Vec<PartTrack>,
	/// Directive → animation to switch to
	pub blending: HashMap<String, AnimId>,
}

/// How to carry the root position over when the root part changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRule {
	/// Anchor read on the previous root
	pub from: Anchor,
	/// Anchor assigned on the new root
	pub to: Anchor,
	/// Offset added to the position
	pub offset: Vec2,
}

impl Default for ExchangeRule {
	fn default() -> Self {
		Self {
			from: Anchor::MidBottom,
			to: Anchor::MidBottom,
			offset: Vec2::ZERO,
		}
	}
}

/// A resolved animation set, shared by every player using it.
#[derive(Debug, Clone)]
pub struct AnimationData {
	pub(crate) parts: Vec<PartGeometry>,
	pub(crate) animations: Vec<Animation>,
	pub(crate) versions: Vec<String>,
	pub(crate) exchange_map: HashMap<(AnimId, AnimId), ExchangeRule>,
	pub(crate) empty: Rc<Surface>,
}

impl AnimationData {
	/// Every part geometry, indexed by [`PartId`].
	pub fn parts(&self) -> &[PartGeometry] {
		&self.parts
	}

	/// Every animation, indexed by [`AnimId`].
	pub fn animations(&self) -> &[Animation] {
		&self.animations
	}

	/// Every surface version name, indexed by [`VersionId`]; `default` and
	/// `invisible` come first.
	pub fn versions(&self) -> &[String] {
		&self.versions
	}

	/// Looks up a part by name.
	pub fn part_id(&self, name: &str) -> Option<PartId> {
		self.parts.iter().position(|part| part.name == name).map(PartId)
	}

	/// Looks up an animation by name.
	pub fn anim_id(&self, name: &str) -> Option<AnimId> {
		self.animations.iter().position(|anim| anim.name == name).map(AnimId)
	}

	/// Looks up a surface version by name.
	pub fn version_id(&self, name: &str) -> Option<VersionId> {
		self.versions.iter().position(|version| version == name).map(VersionId)
	}

	/// The animation with the given id.
	pub fn animation(&self, id: AnimId) -> &Animation {
		&self.animations[id.0]
	}

	/// The part geometry with the given id.
	pub fn part(&self, id: PartId) -> &PartGeometry {
		&self.parts[id.0]
	}

	/// Names of every animation.
	pub fn anim_names(&self) -> impl Iterator<Item = &str> {
		self.animations.iter().map(|anim| anim.name.as_str())
	}

	/// Root exchange rule used when switching from `from` to `to`.
	pub fn exchange_rule(&self, from: AnimId, to: AnimId) -> ExchangeRule {
		self.exchange_map.get(&(from, to)).copied().unwrap_or_default()
	}

	/// The shared empty surface.
	pub fn empty_surface(&self) -> &Rc<Surface> {
		&self.empty
	}
}
