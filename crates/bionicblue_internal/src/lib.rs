//! This module is separated into its own crate to enable simple dynamic linking for `bionicblue`, and should not be used directly.

/// `use bionicblue_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the engine crates for convenience
pub use bionicblue_ani2d;
pub use bionicblue_wdeque;

// Re-export commonly used types at crate root
pub use bionicblue_ani2d::{
	LoadError, PlayerError,
	anim::{AnimationData, AnimationStore, ProcessConfig},
	player::AnimationPlayer,
};
pub use bionicblue_wdeque::{ProxiedDeque, WalkingDeque, WalkingError};
