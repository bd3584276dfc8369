#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `bionicblue-rs` is the sprite animation engine of the Bionic Blue action platformer.
//!
//! Animated characters are trees of parts (a body, an arm, a weapon...). Every
//! part shows one surface per frame at a position relative to its parent, and
//! every animation of a character is a set of timing tracks walking over those
//! surfaces and positions.
//!
//! - [`bionicblue_wdeque`]: the walking deques timing tracks are made of
//! - [`bionicblue_ani2d`]: animation sets, their resolution, and the animation player
//!
pub use bionicblue_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use bionicblue_dylib;
