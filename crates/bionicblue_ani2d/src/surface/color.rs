//! RGB colors and their HLS representation.
//!
//! HLS values use "full" ranges: hue in `[0, 360)`, lightness and saturation
//! in `[0, 100]`.

use std::{fmt, str::FromStr};

use image::Rgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::LoadError;

/// Scale of hue, lightness and saturation.
pub const HLS_FACTORS: (f64, f64, f64) = (360.0, 100.0, 100.0);

/// Opaque RGB color, written `#rrggbb` in animation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl Color {
	/// Pure white.
	pub const WHITE: Self = Self::new(255, 255, 255);

	/// Creates a color from its channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Opaque RGBA pixel of this color.
	pub fn to_rgba(self) -> Rgba<u8> {
		Rgba([self.r, self.g, self.b, 255])
	}

	/// Converts to full-range HLS.
	///
	/// ```
	/// use bionicblue_ani2d::surface::{Color, Hls};
	///
	/// let hls = Color::new(255, 0, 0).to_hls();
	/// assert_eq!(hls, Hls { h: 0.0, l: 50.0, s: 100.0 });
	/// ```
	pub fn to_hls(self) -> Hls {
		let r = f64::from(self.r) / 255.0;
		let g = f64::from(self.g) / 255.0;
		let b = f64::from(self.b) / 255.0;

		let maxc = r.max(g).max(b);
		let minc = r.min(g).min(b);
		let sumc = maxc + minc;
		let rangec = maxc - minc;
		let l = sumc / 2.0;

		if rangec == 0.0 {
			return Hls {
				h: 0.0,
				l: l * HLS_FACTORS.1,
				s: 0.0,
			};
		}

		let s = if l <= 0.5 {
			rangec / sumc
		} else {
			rangec / (2.0 - sumc)
		};

		let rc = (maxc - r) / rangec;
		let gc = (maxc - g) / rangec;
		let bc = (maxc - b) / rangec;

		let h = if r == maxc {
			bc - gc
		} else if g == maxc {
			2.0 + rc - bc
		} else {
			4.0 + gc - rc
		};

		Hls {
			h: (h / 6.0).rem_euclid(1.0) * HLS_FACTORS.0,
			l: l * HLS_FACTORS.1,
			s: s * HLS_FACTORS.2,
		}
	}

	/// Converts back from full-range HLS, rounding each channel.
	pub fn from_hls(hls: Hls) -> Self {
		let h = hls.h / HLS_FACTORS.0;
		let l = hls.l / HLS_FACTORS.1;
		let s = hls.s / HLS_FACTORS.2;

		let (r, g, b) = if s == 0.0 {
			(l, l, l)
		} else {
			let m2 = if l <= 0.5 {
				l * (1.0 + s)
			} else {
				l + s - (l * s)
			};
			let m1 = 2.0 * l - m2;

			(
				hue_channel(m1, m2, h + 1.0 / 3.0),
				hue_channel(m1, m2, h),
				hue_channel(m1, m2, h - 1.0 / 3.0),
			)
		};

		Self::new(to_channel(r), to_channel(g), to_channel(b))
	}
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
	let hue = hue.rem_euclid(1.0);

	if hue < 1.0 / 6.0 {
		m1 + (m2 - m1) * hue * 6.0
	} else if hue < 0.5 {
		m2
	} else if hue < 2.0 / 3.0 {
		m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
	} else {
		m1
	}
}

fn to_channel(unit: f64) -> u8 {
	(unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Color {
	type Err = LoadError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || LoadError::InvalidColor(s.to_string());

		let hex = s.strip_prefix('#').ok_or_else(invalid)?;
		if hex.len() != 6 || !hex.is_ascii() {
			return Err(invalid());
		}

		let channel = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
		Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.parse().map_err(de::Error::custom)
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

/// A color in full-range HLS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
	/// Hue, `[0, 360)`
	pub h: f64,
	/// Lightness, `[0, 100]`
	pub l: f64,
	/// Saturation, `[0, 100]`
	pub s: f64,
}

/// Named hues with a more or less central hue value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicHue {
	/// 0°
	Red,
	/// 30°
	Orange,
	/// 60°
	Yellow,
	/// 120°
	Green,
	/// 180°
	Cyan,
	/// 240°
	Blue,
	/// 300°
	Magenta,
}

impl BasicHue {
	/// Hue value in degrees.
	pub fn mid_point(self) -> f64 {
		match self {
			Self::Red => 0.0,
			Self::Orange => 30.0,
			Self::Yellow => 60.0,
			Self::Green => 120.0,
			Self::Cyan => 180.0,
			Self::Blue => 240.0,
			Self::Magenta => 300.0,
		}
	}
}
