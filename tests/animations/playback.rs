//! Driving animation players over sets loaded from disk

use bionicblue_rs::prelude::*;

use crate::data_root;

fn store() -> AnimationStore {
	AnimationStore::load_dir(data_root(), &ProcessConfig::default()).unwrap()
}

#[test_log::test]
fn test_composite_layout() {
	let store = store();
	let mut player =
		AnimationPlayer::new(&store, "blue_boy", "idle_right", Anchor::MidBottom, Vec2::new(100, 200))
			.unwrap();
	let mut sink = FrameRecorder::new();

	player.draw(&mut sink);

	assert_eq!(*player.root_rect(), Rect::new(94, 180, 12, 20));
	assert_eq!(*player.object("head").unwrap().rect(), Rect::new(96, 172, 8, 8));
	assert_eq!(*player.object("head").unwrap().art_rect(), Rect::new(95, 171, 10, 10));
	assert_eq!(*player.object("gun").unwrap().rect(), Rect::new(103, 190, 6, 4));

	let rects: Vec<_> = sink.blits().iter().map(|blit| blit.rect).collect();
	assert_eq!(
		rects,
		[
			*player.object("gun").unwrap().art_rect(),
			*player.object("torso").unwrap().art_rect(),
			*player.object("head").unwrap().art_rect(),
		]
	);

	// the gun bobs along its position list
	player.draw(&mut sink);
	assert_eq!(*player.object("gun").unwrap().rect(), Rect::new(103, 191, 6, 4));
}

#[test]
fn test_one_shot_animation() {
	let store = store();
	let mut player =
		AnimationPlayer::new(&store, "shot", "flying", Anchor::Center, Vec2::new(8, 8)).unwrap();
	let mut sink = FrameRecorder::new();

	player.draw(&mut sink);
	player.blend("+hit");
	assert_eq!(player.anim_name(), "exploding");

	let mut draws = 0;
	loop {
		player.draw(&mut sink);
		draws += 1;
		if player.main_timing().peek_loops_no(1) == 1.0 {
			break;
		}
	}

	// every one of the 5 frames has been shown once
	assert_eq!(draws, 5);
	assert_eq!(player.main_timing().index_of_first(), 4);
}

#[test]
fn test_teleport_root_exchange() {
	let store = store();
	let mut player =
		AnimationPlayer::new(&store, "blue_boy", "teleporting", Anchor::MidBottom, Vec2::new(40, 100))
			.unwrap();
	assert_eq!(*player.root_rect(), Rect::new(38, 68, 4, 32));

	player.switch_animation("idle_right").unwrap();
	assert_eq!(player.root().name(), "torso");
	assert_eq!(player.root_rect().get(Anchor::MidBottom), Vec2::new(40, 99));

	// default rule: midbottom to midbottom
	player.switch_animation("teleporting").unwrap();
	assert_eq!(player.root_rect().get(Anchor::MidBottom), Vec2::new(40, 99));
}

#[test]
fn test_hurt_blinking() {
	let store = store();
	let mut player =
		AnimationPlayer::new(&store, "blue_boy", "idle_right", Anchor::TopLeft, Vec2::ZERO).unwrap();
	let mut sink = FrameRecorder::new();

	player.blend("+hurt");
	assert_eq!(player.anim_name(), "hurt_right");
	player.set_custom_surface_cycling(["default", "invisible"]).unwrap();

	let mut visible = Vec::new();
	for _ in 0..4 {
		sink.clear();
		player.draw(&mut sink);
		visible.push(sink.blits().iter().any(|blit| !blit.surface.is_empty()));
	}
	assert_eq!(visible, [true, false, true, false]);

	// hurt animations have no blend directives of their own
	player.blend("+walking");
	assert_eq!(player.anim_name(), "hurt_right");

	player.restore_surface_cycling();
	player.switch_animation("idle_right").unwrap();
	player.blend("+walking");
	assert_eq!(player.anim_name(), "walk_right");
}

#[test]
fn test_canvas_export() {
	let store = store();
	let mut player =
		AnimationPlayer::new(&store, "blue_boy", "idle_right", Anchor::TopLeft, Vec2::ZERO).unwrap();
	let mut canvas = Canvas::new(32, 32, Color::new(0, 0, 0));

	player.draw(&mut canvas);

	let image = canvas.image();
	assert_eq!(image.get_pixel(0, 0).0, [32, 64, 192, 255]);
	assert_eq!(image.get_pixel(0, 3).0, [0, 0, 0, 255]);
	assert_eq!(image.get_pixel(9, 10).0, [128, 128, 128, 255]);
}
