//! Integration tests for `bionicblue-rs`: animation sets loaded from disk

use std::path::PathBuf;

mod playback;
mod store;

/// Root of the fixture animation sets.
pub(crate) fn data_root() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Root of the animation sets that fail to resolve.
pub(crate) fn broken_root() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("broken")
}
