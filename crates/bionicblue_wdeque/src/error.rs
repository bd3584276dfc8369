//! Error types for walking deque operations.

use thiserror::Error;

use crate::ViewId;

/// Errors that can occur when building or accessing walking deques
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkingError {
	/// A walking deque needs at least one value
	#[error("Walking deque must not be empty")]
	Empty,

	/// Index outside of `[-length, length)`
	#[error("Index {index} out of range (length: {length})")]
	IndexOutOfRange {
		/// Index that was requested
		index: isize,
		/// Length of the deque
		length: usize,
	},

	/// A content view was written with a value that does not come from its source
	#[error(
		"Value written at index {index} must be identical to the source value at original index {original_index}"
	)]
	ValueMismatch {
		/// Current index of the rejected write
		index: isize,
		/// Original index shared by the view slot and the source slot
		original_index: usize,
	},

	/// The view handle does not belong to this deque
	#[error("Unknown content view: {0}")]
	UnknownView(ViewId),
}
