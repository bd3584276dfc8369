//! Animation sets: definitions, resolution and the resolved data model.
//!
//! An animation set describes a composite sprite (a tree of parts) and every
//! named animation it can play. On disk a set is a directory holding:
//!
//! - `metadata.json`: the [`AnimationManifest`]
//! - `*.pxa`: [`SpriteSheet`]s with per-sprite pixel data and frame placement
//! - `*.pos`: position lists, arrays of `[x, y]` offsets
//!
//! The resolver turns such a directory into an [`AnimationData`]: surfaces are
//! painted (and recolored, flipped, whitened) once, names become ids, and every
//! cross reference is checked, so that playing an animation never fails.
//!
//! ```no_run
//! use bionicblue_ani2d::anim::{ProcessConfig, process_animation_dir};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = process_animation_dir("data/animations/hero", &ProcessConfig::default())?;
//!
//! for name in data.anim_names() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod definition;
mod derived;
mod model;
mod process;
mod recolor;
mod store;


pub use config::{MANIFEST_NAME, ProcessConfig, TRANSP_COLORKEY};
pub use definition::{
	AnimationDef, AnimationManifest, DerivedDef, DerivedOperation, ExchangeRuleDef, GeometryDef,
	HueOperation, LevelOperation, ObjectDef, PartTimingDef, PartValuesDef, RecolorEffect,
	RecolorVersionDef, SheetAnimation, SpriteSheet, StructureDef, TreeNode,
};
pub use model::{
	AnimId, Animation, AnimationData, AnimationStructure, DEFAULT_VERSION, ExchangeRule,
	INVISIBLE_VERSION, PartGeometry, PartId, PartTiming, PartTrack, PartValues, VersionId,
};
pub use process::{
	AnimationSource, POSITIONS_EXTENSION, SHEET_EXTENSION, process_animation_dir,
};
pub use recolor::{recolor, recolor_sprites};
pub use store::AnimationStore;
