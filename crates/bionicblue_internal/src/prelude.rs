//! Prelude module for `bionicblue_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use bionicblue_internal::prelude::*;
//!
//! // Timing tracks are walking deques of frame indices
//! let mut timing = WalkingDeque::new([0, 0, 1, 1]).unwrap();
//! timing.walk(2);
//! assert_eq!(timing.loops_no(), 0.5);
//!
//! // Rectangles are placed by named anchors
//! let mut rect = Rect::new(0, 0, 16, 24);
//! rect.set(Anchor::MidBottom, Vec2::new(50, 100));
//! assert_eq!(rect.topleft(), Vec2::new(42, 76));
//! ```

// Re-export everything from bionicblue_ani2d::prelude
#[doc(inline)]
pub use bionicblue_ani2d::prelude::*;

// Walking deques and their views
#[doc(inline)]
pub use bionicblue_wdeque::{ContentView, Identity, ProxiedDeque, ViewId, WalkingDeque, WalkingError};
