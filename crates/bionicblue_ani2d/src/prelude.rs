//! Prelude module for `bionicblue_ani2d`.
//!
//! # Examples
//!
//! ```no_run
//! use bionicblue_ani2d::prelude::*;
//!
//! let data = process_animation_dir("data/animations/blue_boy", &ProcessConfig::strict());
//! ```

#[doc(inline)]
pub use crate::{
	// Errors
	LoadError,
	PlayerError,

	// Resolution
	anim::{
		AnimId, AnimationData, AnimationStore, PartId, ProcessConfig, VersionId,
		process_animation_dir,
	},

	// Geometry
	geometry::{Anchor, Rect, Vec2},

	// Playback
	player::{AnimationObject, AnimationPlayer, Canvas, DrawPhase, DrawSink, FrameRecorder},

	// Surfaces
	surface::{Color, Surface},
};
