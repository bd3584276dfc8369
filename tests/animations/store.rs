//! Loading animation directories through the resource map

use bionicblue_rs::prelude::*;
use bionicblue_rs::bionicblue_ani2d::anim::AnimationSource;

use crate::{broken_root, data_root};

fn surface_of(data: &AnimationData, anim: &str, part: &str, version: VersionId) -> Surface {
	let anim = data.animation(data.anim_id(anim).unwrap());
	let part = data.part_id(part).unwrap();
	let track = anim.tracks.iter().find(|track| track.part == part).unwrap();
	(**track.values.surface(version, 0)).clone()
}

#[test_log::test]
fn test_load_every_set() {
	let store = AnimationStore::load_dir(data_root(), &ProcessConfig::default()).unwrap();

	assert_eq!(store.keys(), ["blue_boy", "shot"]);
	assert!(store.contains("shot"));
	assert!(!store.contains("broken"));

	let data = store.get("blue_boy").unwrap();
	let names: Vec<_> = data.anim_names().collect();
	assert_eq!(
		names,
		["hurt_right", "idle_left", "idle_right", "teleporting", "walk_left", "walk_right"]
	);
	assert_eq!(data.versions(), ["default", "invisible", "caustic_green", "pale"]);
	assert_eq!(data.parts().len(), 4);
}

#[test]
fn test_store_shares_sets() {
	let store = AnimationStore::load_dir(data_root(), &ProcessConfig::default()).unwrap();

	let first = store.get("shot").unwrap();
	let second = store.get("shot").unwrap();
	assert!(std::rc::Rc::ptr_eq(&first, &second));
	assert!(store.get("blue_girl").is_none());
}

#[test]
fn test_source_documents() {
	let dir = data_root().join("blue_boy");
	let source = AnimationSource::from_dir(&dir, &ProcessConfig::default()).unwrap();

	assert_eq!(source.sheets.keys().collect::<Vec<_>>(), ["blue_boy"]);
	assert_eq!(source.position_lists.keys().collect::<Vec<_>>(), ["gun_bob", "head_offset"]);
	assert_eq!(source.position_lists["gun_bob"].len(), 4);
	assert_eq!(source.manifest.derived_animations.len(), 3);
}

#[test]
fn test_derived_and_recolored_surfaces() {
	let data = process_animation_dir(data_root().join("blue_boy"), &ProcessConfig::default()).unwrap();
	let black = Color::new(0, 0, 0);

	// the head's mouth moves to the other side
	let right = surface_of(&data, "idle_right", "head", VersionId::DEFAULT);
	let left = surface_of(&data, "idle_left", "head", VersionId::DEFAULT);
	assert_eq!(right.get_at(Vec2::new(1, 2)), Some(black));
	assert_eq!(left.get_at(Vec2::new(2, 2)), Some(black));

	let hurt = surface_of(&data, "hurt_right", "torso", VersionId::DEFAULT);
	assert_eq!(hurt.get_at(Vec2::new(0, 0)), Some(Color::WHITE));
	assert_eq!(hurt.get_at(Vec2::new(0, 3)), hurt.colorkey());

	let green = data.version_id("caustic_green").unwrap();
	let torso = surface_of(&data, "idle_right", "torso", green).get_at(Vec2::ZERO).unwrap();
	assert!(torso.g > torso.r && torso.g > torso.b);

	let pale = data.version_id("pale").unwrap();
	let mouth = surface_of(&data, "idle_right", "head", pale).get_at(Vec2::new(1, 2)).unwrap();
	assert!(mouth.r > 0);
	assert_eq!((mouth.r, mouth.g), (mouth.g, mouth.b));

	// the torso is not targeted by `pale`
	let torso = surface_of(&data, "idle_right", "torso", pale);
	assert_eq!(torso.get_at(Vec2::ZERO), Some(Color::new(32, 64, 192)));
}

#[test]
fn test_broken_sets_fail_to_load() {
	let err = AnimationStore::load_dir(broken_root(), &ProcessConfig::default()).unwrap_err();
	assert!(matches!(err, LoadError::UnknownBlendTarget { .. }));
	assert!(err.to_string().contains("vanishing"));

	let err = process_animation_dir(data_root(), &ProcessConfig::default()).unwrap_err();
	assert!(matches!(err, LoadError::MissingManifest { .. }));

	let config = ProcessConfig::default().with_manifest_name("manifest.json");
	let err = process_animation_dir(data_root().join("shot"), &config).unwrap_err();
	assert!(matches!(err, LoadError::MissingManifest { ref name, .. } if name == "manifest.json"));
}
