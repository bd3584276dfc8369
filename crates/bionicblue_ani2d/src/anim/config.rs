//! Configuration of animation set resolution.

use crate::surface::Color;

/// Reserved transparent colorkey of sprite sheets.
pub const TRANSP_COLORKEY: Color = Color::new(192, 192, 192);

/// Default manifest file name of an animation directory.
pub const MANIFEST_NAME: &str = "metadata.json";

/// Configuration for resolving animation sets.
///
/// # Missing Parts
///
/// Every part of an animation's structure needs an entry in the manifest's
/// `values` and `timing` tables. With `strict_parts` a missing entry aborts
/// resolution; otherwise the part gets neutral data: no surfaces, a single
/// `(0, 0)` position and single-frame tracks.
///
/// # Presets
///
/// - `default()`: strict parts, `metadata.json`, colorkey `#c0c0c0`
/// - `strict()`: same as `default()`
/// - `lenient()`: missing parts are filled with neutral data
///
/// # Examples
///
/// ```
/// use bionicblue_ani2d::anim::ProcessConfig;
///
/// let config = ProcessConfig::lenient();
/// assert!(!config.strict_parts);
///
/// let config = ProcessConfig::default().with_manifest_name("anim.json");
/// assert_eq!(config.manifest_name, "anim.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
	/// Color painted under sprite pixels and treated as transparent
	pub colorkey: Color,
	/// File name of the manifest inside an animation directory
	pub manifest_name: String,
	/// Whether a structure part missing values or timing is an error
	pub strict_parts: bool,
}

impl Default for ProcessConfig {
	fn default() -> Self {
		Self {
			colorkey: TRANSP_COLORKEY,
			manifest_name: MANIFEST_NAME.to_string(),
			strict_parts: true,
		}
	}
}

impl ProcessConfig {
	/// Strict configuration: every structure part must be fully declared.
	pub fn strict() -> Self {
		Self::default()
	}

	/// Lenient configuration: undeclared parts get neutral data.
	pub fn lenient() -> Self {
		Self {
			strict_parts: false,
			..Self::default()
		}
	}

	/// Replaces the manifest file name.
	#[must_use]
	pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
		self.manifest_name = name.into();
		self
	}

	/// Replaces the transparent colorkey.
	#[must_use]
	pub fn with_colorkey(mut self, colorkey: Color) -> Self {
		self.colorkey = colorkey;
		self
	}
}
