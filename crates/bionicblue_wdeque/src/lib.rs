//! Walking deques for the `bionicblue-rs` project.
//!
//! A walking deque is a fixed-length ring of values with a memory of how far it
//! has been rotated ("walked"). Every timing track of the animation engine is a
//! walking deque of frame indices: advancing one frame is `walk(1)`, and the
//! accumulated walking tells gameplay code how many loops an animation has
//! completed.
//!
//! # Walking
//!
//! Walking by `n` steps brings the `n`-th next value to the front, which is the
//! opposite sense of [`VecDeque::rotate_right`](std::collections::VecDeque):
//!
//! ```
//! use bionicblue_wdeque::WalkingDeque;
//!
//! let mut deque = WalkingDeque::new([0, 1, 2, 3])?;
//! deque.walk(2);
//!
//! assert_eq!(deque.to_vec(), vec![2, 3, 0, 1]);
//! assert_eq!(deque.total_walking(), 2);
//! assert_eq!(deque.loops_no(), 0.5);
//! assert_eq!(deque.get_original_index(0)?, 2);
//! # Ok::<(), bionicblue_wdeque::WalkingError>(())
//! ```
//!
//! # Memory
//!
//! Values keep their *original index*, the index they had before any walking,
//! and can be looked up by it regardless of the current rotation:
//!
//! ```
//! use bionicblue_wdeque::WalkingDeque;
//!
//! let mut deque = WalkingDeque::new([11, 22, 33, 44])?;
//! deque.walk(2);
//!
//! assert_eq!(*deque.get_mem_value(0)?, 11);
//! assert_eq!(*deque.get_mem_value(-2)?, 33);
//! # Ok::<(), bionicblue_wdeque::WalkingError>(())
//! ```
//!
//! # Content views
//!
//! A [`ProxiedDeque`] owns a source deque together with its content views:
//! secondary deques that walk on their own but always mirror the source's
//! values by original index.

mod deque;
mod error;
mod identity;
mod view;


pub use deque::WalkingDeque;
pub use error::WalkingError;
pub use identity::Identity;
pub use view::{ContentView, ContentViewMut, ProxiedDeque, ViewId};
