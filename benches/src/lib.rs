//! Benchmark helper utilities for bionicblue-rs
//!
//! This module generates synthetic animation sets of configurable size, so the
//! per-frame hot paths can be measured without asset files.

use bionicblue_ani2d::anim::{AnimationData, AnimationSource, ProcessConfig};

/// Name of the only sprite sheet of a synthetic set.
pub const SHEET_NAME: &str = "bench";

/// Name of the looping animation of a synthetic set.
pub const LOOP_ANIMATION: &str = "loop";

/// Name of the backwards animation derived from [`LOOP_ANIMATION`].
pub const REVERSED_ANIMATION: &str = "loop_back";

/// Builds the documents of a synthetic animation set.
///
/// The set has `parts` parts chained into a single branch (each part is the
/// child of the previous one) and two animations of `frames` frames each:
/// [`LOOP_ANIMATION`] and its reversed copy [`REVERSED_ANIMATION`]. Every part
/// cycles through 2 sprites and a 3-entry position list.
pub fn synthetic_source(parts: usize, frames: usize) -> AnimationSource {
	let names: Vec<String> = (0..parts).map(|i| format!("part{i:03}")).collect();

	let mut tree = format!(r#"{{"name": "{}"}}"#, names[parts - 1]);
	for name in names.iter().rev().skip(1) {
		tree = format!(r#"{{"name": "{name}", "children": [{tree}]}}"#);
	}

	let objects = join(&names, |name| format!(r#""{name}": {{"geometry": "box"}}"#));
	let values = join(&names, |name| {
		format!(r#""{name}": {{"surfaces": "{SHEET_NAME}.cycle", "positions": "sway"}}"#)
	});
	let timing = join(&names, |name| {
		format!(
			r#""{name}": {{"surface_indices": "{SHEET_NAME}.cycle", "position_indices": "sway"}}"#
		)
	});

	let manifest = format!(
		r#"{{
			"geometry": {{"box": {{"size": [8, 8]}}}},
			"objects": {{{objects}}},
			"existing_structures": {{"chain": {{"tree": {tree}}}}},
			"animations": {{
				"{LOOP_ANIMATION}": {{"structure": "chain"}},
				"{REVERSED_ANIMATION}": {{"structure": "chain"}}
			}},
			"values": {{"{LOOP_ANIMATION}": {{{values}}}}},
			"timing": {{"{LOOP_ANIMATION}": {{{timing}}}}},
			"derived_animations": {{
				"{REVERSED_ANIMATION}": {{"target": "{LOOP_ANIMATION}", "operation_name": "backwards"}}
			}}
		}}"#
	);

	let placement = join(&(0..frames).collect::<Vec<_>>(), |frame| {
		format!(r#""{frame}": {}"#, frame % 2)
	});
	let sheet = format!(
		r##"{{"animations": {{"cycle": {{
			"size": 8,
			"sprites": [{{"#ff0000": [[0, 0], [7, 7]]}}, {{"#0000ff": [[7, 0], [0, 7]]}}],
			"number_of_frames": {frames},
			"sprite_placement": {{{placement}}}
		}}}}}}"##
	);

	AnimationSource {
		manifest: serde_json::from_str(&manifest).unwrap(),
		sheets: [(SHEET_NAME.to_string(), serde_json::from_str(&sheet).unwrap())].into(),
		position_lists: [("sway".to_string(), serde_json::from_str("[[0, 0], [1, 0], [0, 1]]").unwrap())]
			.into(),
	}
}

/// Builds and resolves a synthetic animation set.
pub fn synthetic_data(parts: usize, frames: usize) -> AnimationData {
	synthetic_source(parts, frames).resolve(&ProcessConfig::default()).unwrap()
}

fn join<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
	items.iter().map(render).collect::<Vec<_>>().join(", ")
}
