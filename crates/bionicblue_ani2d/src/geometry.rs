//! Integer geometry used to place animation parts on screen.
//!
//! [`Rect`] follows the usual game-library conventions: `x`/`y` is the top-left
//! corner, the right and bottom edges are exclusive, and the nine named
//! [`Anchor`]s can be read and assigned (assigning moves the rectangle, it
//! never resizes it).
//!
//! ```
//! use bionicblue_ani2d::geometry::{Anchor, Rect, Vec2};
//!
//! let mut rect = Rect::new(0, 0, 10, 20);
//! rect.set(Anchor::MidBottom, Vec2::new(50, 100));
//!
//! assert_eq!(rect.topleft(), Vec2::new(45, 80));
//! assert_eq!(rect.get(Anchor::Center), Vec2::new(50, 90));
//! ```

use std::{
	fmt,
	ops::{Add, AddAssign, Neg, Sub},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LoadError;

/// Integer 2D point or offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Vec2 {
	/// Horizontal component
	pub x: i32,
	/// Vertical component (grows downwards)
	pub y: i32,
}

impl Vec2 {
	/// The origin / null offset.
	pub const ZERO: Self = Self {
		x: 0,
		y: 0,
	};

	/// Creates a new point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl From<[i32; 2]> for Vec2 {
	fn from([x, y]: [i32; 2]) -> Self {
		Self::new(x, y)
	}
}

impl From<Vec2> for [i32; 2] {
	fn from(value: Vec2) -> Self {
		[value.x, value.y]
	}
}

impl From<(i32, i32)> for Vec2 {
	fn from((x, y): (i32, i32)) -> Self {
		Self::new(x, y)
	}
}

impl Add for Vec2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Vec2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Neg for Vec2 {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self::new(-self.x, -self.y)
	}
}

impl fmt::Display for Vec2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// One of the nine named points of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
	/// Top-left corner
	TopLeft,
	/// Middle of the top edge
	MidTop,
	/// Top-right corner
	TopRight,
	/// Middle of the left edge
	MidLeft,
	/// Center
	Center,
	/// Middle of the right edge
	MidRight,
	/// Bottom-left corner
	BottomLeft,
	/// Middle of the bottom edge
	MidBottom,
	/// Bottom-right corner
	BottomRight,
}

impl Anchor {
	/// All anchors, row by row.
	pub const ALL: [Self; 9] = [
		Self::TopLeft,
		Self::MidTop,
		Self::TopRight,
		Self::MidLeft,
		Self::Center,
		Self::MidRight,
		Self::BottomLeft,
		Self::MidBottom,
		Self::BottomRight,
	];

	/// Lowercase name, as used in animation manifests.
	pub fn name(self) -> &'static str {
		match self {
			Self::TopLeft => "topleft",
			Self::MidTop => "midtop",
			Self::TopRight => "topright",
			Self::MidLeft => "midleft",
			Self::Center => "center",
			Self::MidRight => "midright",
			Self::BottomLeft => "bottomleft",
			Self::MidBottom => "midbottom",
			Self::BottomRight => "bottomright",
		}
	}

	// horizontal and vertical position as halves: 0 = start, 1 = middle, 2 = end
	fn halves(self) -> (i32, i32) {
		match self {
			Self::TopLeft => (0, 0),
			Self::MidTop => (1, 0),
			Self::TopRight => (2, 0),
			Self::MidLeft => (0, 1),
			Self::Center => (1, 1),
			Self::MidRight => (2, 1),
			Self::BottomLeft => (0, 2),
			Self::MidBottom => (1, 2),
			Self::BottomRight => (2, 2),
		}
	}
}

impl FromStr for Anchor {
	type Err = LoadError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|anchor| anchor.name() == s)
			.ok_or_else(|| LoadError::InvalidAnchor(s.to_string()))
	}
}

impl fmt::Display for Anchor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Axis-aligned integer rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
	/// Left edge
	pub x: i32,
	/// Top edge
	pub y: i32,
	/// Width
	pub w: i32,
	/// Height
	pub h: i32,
}

impl Rect {
	/// Creates a rectangle from its top-left corner and size.
	pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Creates a rectangle of the given size at the origin.
	pub const fn from_size(size: Vec2) -> Self {
		Self::new(0, 0, size.x, size.y)
	}

	/// Size as a vector.
	pub const fn size(&self) -> Vec2 {
		Vec2::new(self.w, self.h)
	}

	/// Exclusive right edge.
	pub const fn right(&self) -> i32 {
		self.x + self.w
	}

	/// Exclusive bottom edge.
	pub const fn bottom(&self) -> i32 {
		self.y + self.h
	}

	/// Reads a named anchor point.
	pub fn get(&self, anchor: Anchor) -> Vec2 {
		let (hx, hy) = anchor.halves();
		Vec2::new(self.x + self.w * hx / 2, self.y + self.h * hy / 2)
	}

	/// Moves the rectangle so that `anchor` lands on `pos`.
	pub fn set(&mut self, anchor: Anchor, pos: Vec2) {
		let (hx, hy) = anchor.halves();
		self.x = pos.x - self.w * hx / 2;
		self.y = pos.y - self.h * hy / 2;
	}

	/// Top-left corner.
	pub fn topleft(&self) -> Vec2 {
		self.get(Anchor::TopLeft)
	}

	/// Center point.
	pub fn center(&self) -> Vec2 {
		self.get(Anchor::Center)
	}

	/// Moves the rectangle so that its center lands on `pos`.
	pub fn set_center(&mut self, pos: Vec2) {
		self.set(Anchor::Center, pos);
	}

	/// Returns a copy translated by `offset`.
	#[must_use]
	pub fn moved(&self, offset: Vec2) -> Self {
		Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
	}

	/// Translates the rectangle in place.
	pub fn move_ip(&mut self, offset: Vec2) {
		self.x += offset.x;
		self.y += offset.y;
	}

	/// Whether `point` lies inside the rectangle.
	pub fn collidepoint(&self, point: Vec2) -> bool {
		(self.x..self.right()).contains(&point.x) && (self.y..self.bottom()).contains(&point.y)
	}

	/// Whether both rectangles overlap by at least one pixel.
	pub fn colliderect(&self, other: &Self) -> bool {
		self.x < other.right()
			&& other.x < self.right()
			&& self.y < other.bottom()
			&& other.y < self.bottom()
	}

	/// Whether `other` lies completely inside this rectangle.
	pub fn contains(&self, other: &Self) -> bool {
		other.x >= self.x
			&& other.y >= self.y
			&& other.right() <= self.right()
			&& other.bottom() <= self.bottom()
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<rect({}, {}, {}, {})>", self.x, self.y, self.w, self.h)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_anchor_points() {
		let rect = Rect::new(10, 20, 30, 40);

		assert_eq!(rect.get(Anchor::TopLeft), Vec2::new(10, 20));
		assert_eq!(rect.get(Anchor::MidTop), Vec2::new(25, 20));
		assert_eq!(rect.get(Anchor::BottomRight), Vec2::new(40, 60));
		assert_eq!(rect.get(Anchor::MidLeft), Vec2::new(10, 40));
		assert_eq!(rect.get(Anchor::MidBottom), Vec2::new(25, 60));
	}

	#[test]
	fn test_odd_sizes_round_down() {
		let rect = Rect::new(0, 0, 5, 3);
		assert_eq!(rect.center(), Vec2::new(2, 1));

		let mut moved = rect;
		moved.set_center(Vec2::new(2, 1));
		assert_eq!(moved, rect);
	}

	#[test]
	fn test_set_round_trips_every_anchor() {
		for anchor in Anchor::ALL {
			let mut rect = Rect::new(3, -7, 16, 9);
			rect.set(anchor, Vec2::new(100, 100));
			assert_eq!(rect.get(anchor), Vec2::new(100, 100), "{anchor}");
			assert_eq!(rect.size(), Vec2::new(16, 9));
		}
	}

	#[test]
	fn test_collisions() {
		let rect = Rect::new(0, 0, 10, 10);

		assert!(rect.collidepoint(Vec2::new(0, 0)));
		assert!(!rect.collidepoint(Vec2::new(10, 5)));
		assert!(rect.colliderect(&Rect::new(9, 9, 5, 5)));
		assert!(!rect.colliderect(&Rect::new(10, 0, 5, 5)));
		assert!(rect.contains(&Rect::new(2, 2, 8, 8)));
		assert!(!rect.contains(&Rect::new(2, 2, 9, 8)));
	}

	#[test]
	fn test_move() {
		let mut rect = Rect::new(1, 2, 3, 4);
		assert_eq!(rect.moved(Vec2::new(5, -2)), Rect::new(6, 0, 3, 4));

		rect.move_ip(Vec2::new(-1, -2));
		assert_eq!(rect.topleft(), Vec2::ZERO);
	}

	#[test]
	fn test_anchor_names() {
		assert_eq!("midbottom".parse::<Anchor>().unwrap(), Anchor::MidBottom);
		assert!("middle".parse::<Anchor>().is_err());

		let parsed: Anchor = serde_json::from_str("\"topright\"").unwrap();
		assert_eq!(parsed, Anchor::TopRight);
	}
}
