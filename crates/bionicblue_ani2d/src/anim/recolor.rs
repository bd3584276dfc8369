//! Recoloring of sprite data in HLS space.

use std::collections::HashMap;

use crate::{
	anim::definition::{HueOperation, LevelOperation, RecolorEffect},
	surface::{Color, HLS_FACTORS, Hls, SpriteData},
};

/// Applies `effects` in order to a single color.
///
/// ```
/// use bionicblue_ani2d::anim::{HueOperation, RecolorEffect, recolor};
/// use bionicblue_ani2d::surface::Color;
///
/// let red = Color::new(255, 0, 0);
/// let blue = recolor(red, &[RecolorEffect::Hue(HueOperation::Set(240.0))]);
///
/// assert_eq!(blue, Color::new(0, 0, 255));
/// ```
pub fn recolor(color: Color, effects: &[RecolorEffect]) -> Color {
	effects.iter().fold(color, |color, effect| {
		let Hls {
			h,
			l,
			s,
		} = color.to_hls();

		let hls = match *effect {
			RecolorEffect::Hue(operation) => {
				let new_h = match operation {
					HueOperation::Set(value) => value,
					HueOperation::Increment(value) => h + value,
					HueOperation::SetFromBasic {
						basic,
						increment,
					} => basic.mid_point() + increment,
				};

				Hls {
					h: new_h.rem_euclid(HLS_FACTORS.0),
					l,
					s,
				}
			}
			RecolorEffect::Lightness(operation) => Hls {
				h,
				l: apply_level(l, operation, HLS_FACTORS.1),
				s,
			},
			RecolorEffect::Saturation(operation) => Hls {
				h,
				l,
				s: apply_level(s, operation, HLS_FACTORS.2),
			},
		};

		Color::from_hls(hls)
	})
}

fn apply_level(level: f64, operation: LevelOperation, max: f64) -> f64 {
	let new_level = match operation {
		LevelOperation::Set(value) => value,
		LevelOperation::Increment(value) => level + value,
	};

	new_level.clamp(0.0, max)
}

/// Recolors every sprite of a sprite sheet animation.
///
/// Each distinct color is converted once. When several colors end up as the
/// same new color their points are merged, so no point is lost.
pub fn recolor_sprites(sprites: &[SpriteData], effects: &[RecolorEffect]) -> Vec<SpriteData> {
	let mut recolor_map: HashMap<Color, Color> = HashMap::new();

	for sprite in sprites {
		for color in sprite.keys() {
			recolor_map.entry(*color).or_insert_with(|| recolor(*color, effects));
		}
	}

	sprites
		.iter()
		.map(|sprite| {
			let mut recolored = SpriteData::new();

			for (color, points) in sprite {
				let new_color = recolor_map.get(color).copied().unwrap_or(*color);
				recolored.entry(new_color).or_default().extend(points.iter().copied());
			}

			recolored
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{geometry::Vec2, surface::BasicHue};

	#[test]
	fn test_hue_wraps() {
		let red = Color::new(255, 0, 0);
		let effects = [RecolorEffect::Hue(HueOperation::Increment(480.0))];

		assert_eq!(recolor(red, &effects), Color::new(0, 255, 0));
	}

	#[test]
	fn test_hue_from_basic() {
		let red = Color::new(255, 0, 0);
		let effects = [RecolorEffect::Hue(HueOperation::SetFromBasic {
			basic: BasicHue::Cyan,
			increment: 0.0,
		})];

		assert_eq!(recolor(red, &effects), Color::new(0, 255, 255));
	}

	#[test]
	fn test_levels_are_clamped() {
		let color = Color::new(40, 90, 200);

		let white = recolor(color, &[RecolorEffect::Lightness(LevelOperation::Increment(500.0))]);
		assert_eq!(white, Color::WHITE);

		let black = recolor(color, &[RecolorEffect::Lightness(LevelOperation::Set(-3.0))]);
		assert_eq!(black, Color::new(0, 0, 0));

		let gray = recolor(color, &[RecolorEffect::Saturation(LevelOperation::Increment(-250.0))]);
		assert_eq!(gray.r, gray.g);
		assert_eq!(gray.g, gray.b);
	}

	#[test]
	fn test_effects_apply_in_order() {
		let red = Color::new(255, 0, 0);
		let effects = [
			RecolorEffect::Hue(HueOperation::Set(120.0)),
			RecolorEffect::Hue(HueOperation::Increment(120.0)),
		];

		assert_eq!(recolor(red, &effects), Color::new(0, 0, 255));
	}

	#[test]
	fn test_colliding_colors_keep_every_point() {
		let mut sprite = SpriteData::new();
		sprite.insert(Color::new(255, 0, 0), vec![Vec2::new(0, 0)]);
		sprite.insert(Color::new(0, 0, 255), vec![Vec2::new(1, 1), Vec2::new(2, 2)]);

		let effects = [RecolorEffect::Lightness(LevelOperation::Set(100.0))];
		let recolored = recolor_sprites(&[sprite], &effects);

		assert_eq!(recolored.len(), 1);
		assert_eq!(recolored[0].len(), 1);
		assert_eq!(recolored[0][&Color::WHITE].len(), 3);
	}
}
