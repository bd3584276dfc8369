//! Draw sinks: where an animation player sends its parts every frame.

use std::rc::Rc;

use image::{Pixel, RgbaImage};

use crate::{
	geometry::{Rect, Vec2},
	surface::{Color, Surface},
};

/// Receives one blit per drawn part, in drawing order.
pub trait DrawSink {
	/// Draws `surface` with its top left corner at the top left of `rect`.
	fn blit(&mut self, surface: &Rc<Surface>, rect: &Rect);
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
	fn blit(&mut self, surface: &Rc<Surface>, rect: &Rect) {
		(**self).blit(surface, rect);
	}
}

/// A single recorded blit.
#[derive(Debug, Clone)]
pub struct Blit {
	/// The surface drawn, shared with the animation data
	pub surface: Rc<Surface>,
	/// Where it was drawn
	pub rect: Rect,
}

/// A sink that records every blit instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
	blits: Vec<Blit>,
}

impl FrameRecorder {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Blits recorded so far.
	pub fn blits(&self) -> &[Blit] {
		&self.blits
	}

	/// Takes the recorded blits, leaving the recorder empty.
	pub fn take(&mut self) -> Vec<Blit> {
		std::mem::take(&mut self.blits)
	}

	/// Forgets every recorded blit.
	pub fn clear(&mut self) {
		self.blits.clear();
	}
}

impl DrawSink for FrameRecorder {
	fn blit(&mut self, surface: &Rc<Surface>, rect: &Rect) {
		self.blits.push(Blit {
			surface: Rc::clone(surface),
			rect: *rect,
		});
	}
}

/// A sink compositing surfaces onto an RGBA image.
///
/// Colorkeyed and fully transparent pixels are skipped, translucent pixels
/// are alpha blended. Parts of a surface outside the canvas are clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
	image: RgbaImage,
	background: Color,
}

impl Canvas {
	/// Creates a canvas filled with `background`.
	pub fn new(width: u32, height: u32, background: Color) -> Self {
		Self {
			image: RgbaImage::from_pixel(width, height, background.to_rgba()),
			background,
		}
	}

	/// Refills the canvas with its background color.
	pub fn clear(&mut self) {
		let background = self.background.to_rgba();
		for pixel in self.image.pixels_mut() {
			*pixel = background;
		}
	}

	/// Size of the canvas.
	pub fn size(&self) -> Vec2 {
		Vec2::new(self.image.width() as i32, self.image.height() as i32)
	}

	/// The composited image.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Consumes the canvas, returning the composited image.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}
}

impl DrawSink for Canvas {
	fn blit(&mut self, surface: &Rc<Surface>, rect: &Rect) {
		let source = surface.image();

		for (x, y, pixel) in source.enumerate_pixels() {
			if surface.is_transparent_at(x, y) {
				continue;
			}

			let (Ok(dx), Ok(dy)) = (
				u32::try_from(i64::from(rect.x) + i64::from(x)),
				u32::try_from(i64::from(rect.y) + i64::from(y)),
			) else {
				continue;
			};

			if let Some(target) = self.image.get_pixel_mut_checked(dx, dy) {
				target.blend(pixel);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dot(color: Color) -> Rc<Surface> {
		let mut surface = Surface::keyed_square(2, Color::new(192, 192, 192));
		surface.set_at(Vec2::new(1, 0), color);
		Rc::new(surface)
	}

	#[test]
	fn test_recorder_keeps_order() {
		let red = dot(Color::new(255, 0, 0));
		let mut recorder = FrameRecorder::new();

		recorder.blit(&red, &Rect::new(0, 0, 2, 2));
		recorder.blit(&red, &Rect::new(4, 4, 2, 2));

		assert_eq!(recorder.blits().len(), 2);
		assert!(Rc::ptr_eq(&recorder.blits()[0].surface, &red));
		assert_eq!(recorder.take()[1].rect, Rect::new(4, 4, 2, 2));
		assert!(recorder.blits().is_empty());
	}

	#[test]
	fn test_canvas_skips_colorkey() {
		let black = Color::new(0, 0, 0);
		let mut canvas = Canvas::new(4, 4, black);

		canvas.blit(&dot(Color::new(255, 0, 0)), &Rect::new(1, 1, 2, 2));

		let image = canvas.image();
		assert_eq!(image.get_pixel(2, 1).0, [255, 0, 0, 255]);
		assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 255]);
		assert_eq!(image.get_pixel(1, 2).0, [0, 0, 0, 255]);
	}

	#[test]
	fn test_canvas_clips_and_clears() {
		let mut canvas = Canvas::new(2, 2, Color::WHITE);

		canvas.blit(&dot(Color::new(0, 0, 255)), &Rect::new(-1, 1, 2, 2));
		assert_eq!(canvas.image().get_pixel(0, 1).0, [0, 0, 255, 255]);

		canvas.blit(&dot(Color::new(0, 0, 255)), &Rect::new(5, 5, 2, 2));
		canvas.clear();
		assert!(canvas.image().pixels().all(|pixel| pixel.0 == [255, 255, 255, 255]));
	}
}
