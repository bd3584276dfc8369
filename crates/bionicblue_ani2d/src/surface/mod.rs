//! Surfaces: the drawable images animation parts display.
//!
//! A [`Surface`] is an RGBA image with an optional colorkey. Pixels matching
//! the colorkey, like fully transparent pixels, are skipped when the surface
//! is composited by a draw sink.
//!
//! Surfaces are shared through [`Rc`]: a resolved animation set hands the same
//! surface to every player, and identity of surfaces is what a
//! [`FrameRecorder`](crate::player::FrameRecorder) records.

mod color;

use std::{collections::BTreeMap, rc::Rc};

use image::{RgbaImage, imageops};

pub use color::{BasicHue, Color, HLS_FACTORS, Hls};

use crate::geometry::Vec2;

/// Pixel data of one sprite: every color with the points painted in it.
pub type SpriteData = BTreeMap<Color, Vec<Vec2>>;

/// A drawable image.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
	image: RgbaImage,
	colorkey: Option<Color>,
}

impl Surface {
	/// Creates a surface from an image without colorkey.
	pub fn new(image: RgbaImage) -> Self {
		Self {
			image,
			colorkey: None,
		}
	}

	/// Creates a 0×0 surface; drawing it has no effect.
	pub fn empty() -> Self {
		Self::new(RgbaImage::new(0, 0))
	}

	/// Creates a square surface filled with `colorkey`, which is also set as
	/// its colorkey, so that it starts fully transparent.
	pub fn keyed_square(size: u32, colorkey: Color) -> Self {
		Self {
			image: RgbaImage::from_pixel(size, size, colorkey.to_rgba()),
			colorkey: Some(colorkey),
		}
	}

	/// Paints sprite data on a copy of `base`. Points outside the surface are
	/// ignored.
	pub fn painted(base: &Self, sprite: &SpriteData) -> Self {
		let mut surface = base.clone();

		for (color, points) in sprite {
			for point in points {
				surface.set_at(*point, *color);
			}
		}

		surface
	}

	/// Sets a single pixel; out-of-bounds points are ignored.
	pub fn set_at(&mut self, point: Vec2, color: Color) {
		if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y))
			&& x < self.image.width()
			&& y < self.image.height()
		{
			self.image.put_pixel(x, y, color.to_rgba());
		}
	}

	/// Color of a single pixel, `None` if out of bounds.
	pub fn get_at(&self, point: Vec2) -> Option<Color> {
		let x = u32::try_from(point.x).ok()?;
		let y = u32::try_from(point.y).ok()?;
		let pixel = self.image.get_pixel_checked(x, y)?;
		Some(Color::new(pixel[0], pixel[1], pixel[2]))
	}

	/// Whether the pixel is skipped when compositing.
	pub fn is_transparent_at(&self, x: u32, y: u32) -> bool {
		match self.image.get_pixel_checked(x, y) {
			Some(pixel) => {
				pixel[3] == 0
					|| self
						.colorkey
						.is_some_and(|key| [key.r, key.g, key.b] == [pixel[0], pixel[1], pixel[2]])
			}
			None => true,
		}
	}

	/// Returns a copy mirrored horizontally.
	#[must_use]
	pub fn flipped_x(&self) -> Self {
		Self {
			image: imageops::flip_horizontal(&self.image),
			colorkey: self.colorkey,
		}
	}

	/// Returns a copy where every visible pixel is white.
	#[must_use]
	pub fn whitened(&self) -> Self {
		let mut surface = self.clone();
		let (width, height) = surface.image.dimensions();

		for y in 0..height {
			for x in 0..width {
				if !self.is_transparent_at(x, y) {
					surface.image.put_pixel(x, y, Color::WHITE.to_rgba());
				}
			}
		}

		surface
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Size in pixels as a vector.
	pub fn size(&self) -> Vec2 {
		Vec2::new(self.width() as i32, self.height() as i32)
	}

	/// Whether the surface has no pixels at all.
	pub fn is_empty(&self) -> bool {
		self.width() == 0 || self.height() == 0
	}

	/// The colorkey, if any.
	pub fn colorkey(&self) -> Option<Color> {
		self.colorkey
	}

	/// The underlying image.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}
}

/// The surfaces one surface version offers for a part.
#[derive(Debug, Clone)]
pub enum SurfaceCollection {
	/// Frames indexed by the surface timing track
	Frames(Rc<[Rc<Surface>]>),
	/// The shared empty surface, whatever the index
	Empty(Rc<Surface>),
}

impl SurfaceCollection {
	/// Surface shown for `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is past the frames; resolved animation sets never
	/// hold tracks that point past their values.
	pub fn get(&self, index: usize) -> &Rc<Surface> {
		match self {
			Self::Frames(frames) => &frames[index],
			Self::Empty(empty) => empty,
		}
	}

	/// Number of frames, `None` for [`SurfaceCollection::Empty`].
	pub fn frame_count(&self) -> Option<usize> {
		match self {
			Self::Frames(frames) => Some(frames.len()),
			Self::Empty(_) => None,
		}
	}

	/// Whether both collections hold the very same frames.
	pub fn is_same(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Frames(a), Self::Frames(b)) => Rc::ptr_eq(a, b),
			(Self::Empty(a), Self::Empty(b)) => Rc::ptr_eq(a, b),
			_ => false,
		}
	}

	/// Applies `transform` to every frame; empty collections stay empty.
	#[must_use]
	pub fn map_frames(&self, transform: impl Fn(&Surface) -> Surface) -> Self {
		match self {
			Self::Frames(frames) => {
				Self::Frames(frames.iter().map(|frame| Rc::new(transform(frame))).collect())
			}
			Self::Empty(empty) => Self::Empty(Rc::clone(empty)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEY: Color = Color::new(192, 192, 192);

	fn sample() -> Surface {
		let mut sprite = SpriteData::new();
		sprite.insert(Color::new(255, 0, 0), vec![Vec2::new(0, 0), Vec2::new(1, 0)]);
		sprite.insert(Color::new(0, 0, 255), vec![Vec2::new(2, 2), Vec2::new(9, 9)]);
		Surface::painted(&Surface::keyed_square(3, KEY), &sprite)
	}

	#[test]
	fn test_painting() {
		let surface = sample();

		assert_eq!(surface.size(), Vec2::new(3, 3));
		assert_eq!(surface.get_at(Vec2::new(1, 0)), Some(Color::new(255, 0, 0)));
		assert_eq!(surface.get_at(Vec2::new(2, 2)), Some(Color::new(0, 0, 255)));
		assert_eq!(surface.get_at(Vec2::new(1, 1)), Some(KEY));
		assert!(surface.is_transparent_at(1, 1));
		assert!(!surface.is_transparent_at(0, 0));
		assert!(surface.is_transparent_at(5, 5));
	}

	#[test]
	fn test_flip() {
		let flipped = sample().flipped_x();

		assert_eq!(flipped.get_at(Vec2::new(2, 0)), Some(Color::new(255, 0, 0)));
		assert_eq!(flipped.get_at(Vec2::new(0, 2)), Some(Color::new(0, 0, 255)));
		assert_eq!(flipped.get_at(Vec2::new(0, 0)), Some(KEY));
		assert_eq!(flipped.colorkey(), Some(KEY));
	}

	#[test]
	fn test_whiten() {
		let white = sample().whitened();

		assert_eq!(white.get_at(Vec2::new(0, 0)), Some(Color::WHITE));
		assert_eq!(white.get_at(Vec2::new(2, 2)), Some(Color::WHITE));
		assert_eq!(white.get_at(Vec2::new(1, 1)), Some(KEY));
	}

	#[test]
	fn test_empty_collection() {
		let empty = Rc::new(Surface::empty());
		let collection = SurfaceCollection::Empty(Rc::clone(&empty));

		assert!(Rc::ptr_eq(collection.get(42), &empty));
		assert_eq!(collection.frame_count(), None);
		assert!(collection.map_frames(Surface::whitened).is_same(&collection));
	}
}
