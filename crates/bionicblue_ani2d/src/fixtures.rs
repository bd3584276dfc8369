//! In-memory animation set shared by unit tests.
//!
//! Parts (ids in name order): `arm` 0, `ball` 1, `body` 2.
//!
//! - `idle_right`: body (4 frames: sprites 0 0 1 1) with a child arm
//!   (2 frames, 3 positions)
//! - `walk_right`: body (4 frames: sprites 0 1 2 3) with a child arm
//! - `curled`: a lone ball, rooted differently
//! - `idle_left`: `flip_x` of `idle_right`
//! - `walk_back`: `backwards` of `walk_right`
//! - `idle_left_flash`: `whiten` of `idle_left`, resolved after it

use crate::anim::{AnimationData, AnimationSource, ProcessConfig};

pub(crate) const MANIFEST: &str = r#"{
	"geometry": {
		"body": {"size": [16, 24]},
		"arm": {
			"size": [8, 8],
			"art_size": [10, 10],
			"art_anchorage": ["center", "midleft"],
			"anchorage_offset": [1, 0]
		},
		"ball": {"size": [8, 8]}
	},
	"objects": {
		"body": {"geometry": "body"},
		"arm": {"geometry": "arm"},
		"ball": {"geometry": "ball"}
	},
	"existing_structures": {
		"body_arm": {
			"tree": {"name": "body", "children": [{"name": "arm"}]},
			"drawing_order": ["arm", "body"]
		},
		"ball_only": {"tree": {"name": "ball"}}
	},
	"animations": {
		"idle_right": {"structure": "body_arm"},
		"walk_right": {"structure": "body_arm"},
		"curled": {"structure": "ball_only"},
		"idle_left": {"structure": "body_arm"},
		"walk_back": {"structure": "body_arm"},
		"idle_left_flash": {"structure": "body_arm"}
	},
	"values": {
		"idle_right": {
			"body": {"surfaces": "hero.idle"},
			"arm": {"surfaces": "hero.arm", "positions": "arm_swing"}
		},
		"walk_right": {
			"body": {"surfaces": "hero.walk"},
			"arm": {"surfaces": "hero.arm", "positions": "arm_swing"}
		},
		"curled": {
			"ball": {"surfaces": "hero.ball"}
		}
	},
	"timing": {
		"idle_right": {
			"body": {"surface_indices": "hero.idle"},
			"arm": {"surface_indices": "hero.arm", "position_indices": "arm_swing"}
		},
		"walk_right": {
			"body": {"surface_indices": "hero.walk"},
			"arm": {"position_indices": "arm_swing"}
		},
		"curled": {
			"ball": {"surface_indices": "hero.ball"}
		}
	},
	"blending": {
		"idle_right": {"+walking": "walk_right"},
		"walk_right": {"-walking": "idle_right"}
	},
	"derived_animations": {
		"idle_left_flash": {"target": "idle_left", "operation_name": "whiten", "priority": 1},
		"idle_left": {"target": "idle_right", "operation_name": "flip_x"},
		"walk_back": {"target": "walk_right", "operation_name": "backwards"}
	},
	"root_pos_exchange_map": {
		"idle_right": {"curled": ["midbottom", "midbottom", [0, -2]]}
	},
	"recolored_surface_versions": {
		"caustic_blue": {
			"effects": [{"hue": {"set_from_basic": {"basic": "blue"}}}],
			"surface_collections": ["hero.idle"]
		}
	}
}"#;

pub(crate) const SHEET: &str = r##"{
	"animations": {
		"idle": {
			"size": 4,
			"sprites": [{"#ff0000": [[0, 0]]}, {"#ff0000": [[1, 1]]}],
			"number_of_frames": 4,
			"sprite_placement": {"0": 0, "2": 1}
		},
		"walk": {
			"size": 4,
			"sprites": [
				{"#00ff00": [[0, 0]]},
				{"#00ff00": [[1, 0]]},
				{"#00ff00": [[2, 0]]},
				{"#00ff00": [[3, 0]]}
			],
			"number_of_frames": 4,
			"sprite_placement": {"0": 0, "1": 1, "2": 2, "3": 3}
		},
		"arm": {
			"size": 4,
			"sprites": [{"#0000ff": [[0, 1]]}],
			"number_of_frames": 2,
			"sprite_placement": {"0": 0}
		},
		"ball": {
			"size": 4,
			"sprites": [{"#ffff00": [[2, 2]]}],
			"number_of_frames": 1,
			"sprite_placement": {"0": 0}
		}
	}
}"##;

pub(crate) const ARM_SWING: &str = "[[0, 0], [2, 0], [4, 0]]";

pub(crate) fn hero_source() -> AnimationSource {
	AnimationSource {
		manifest: serde_json::from_str(MANIFEST).unwrap(),
		sheets: [("hero".to_string(), serde_json::from_str(SHEET).unwrap())].into(),
		position_lists: [("arm_swing".to_string(), serde_json::from_str(ARM_SWING).unwrap())]
			.into(),
	}
}

pub(crate) fn hero_data() -> AnimationData {
	hero_source().resolve(&ProcessConfig::default()).unwrap()
}
