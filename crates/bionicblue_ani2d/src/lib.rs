//! This crate provides the sprite animation engine of the `bionicblue-rs` project.
//!
//! # Modules
//!
//! - **geometry**: integer points and rectangles with named anchors
//! - **surface**: drawable images, colors and the HLS colorspace
//! - **anim**: animation set definitions, their resolution and the resolved data model
//! - **player**: the per-entity animation player and its draw sinks
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use bionicblue_ani2d::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = AnimationStore::load_dir("data/animations", &ProcessConfig::default())?;
//! let mut player =
//!     AnimationPlayer::new(&store, "blue_boy", "idle_right", Anchor::MidBottom, Vec2::new(64, 128))?;
//!
//! let mut canvas = Canvas::new(320, 180, Color::new(0, 0, 0));
//! player.draw(&mut canvas);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod anim;
pub mod geometry;
pub mod player;
pub mod surface;

/// `use bionicblue_ani2d::prelude::*;` to import commonly used items.
pub mod prelude;

#[cfg(test)]
mod fixtures;

pub use error::{LoadError, PlayerError};
