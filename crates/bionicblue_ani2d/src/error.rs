//! Error types for loading animation sets and driving animation players.

use std::path::PathBuf;

use bionicblue_wdeque::WalkingError;
use thiserror::Error;

/// Errors that can occur when reading or resolving an animation set
#[derive(Debug, Error)]
pub enum LoadError {
	/// A file of the animation directory could not be read
	#[error("Failed to read {}: {source}", path.display())]
	Io {
		/// Path of the file or directory
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// A JSON document is malformed or misses required keys
	#[error("Failed to parse {}: {source}", path.display())]
	Json {
		/// Path of the document
		path: PathBuf,
		/// Underlying parse error
		#[source]
		source: serde_json::Error,
	},

	/// The animation directory has no manifest
	#[error("No {name} found in {}", dir.display())]
	MissingManifest {
		/// Animation directory
		dir: PathBuf,
		/// Expected manifest file name
		name: String,
	},

	/// An object refers to a geometry that is not declared
	#[error("Object '{object}' refers to unknown geometry '{geometry}'")]
	UnknownGeometry {
		/// Object name
		object: String,
		/// Geometry name
		geometry: String,
	},

	/// An animation refers to a structure that is not declared
	#[error("Animation '{animation}' refers to unknown structure '{structure}'")]
	UnknownStructure {
		/// Animation name
		animation: String,
		/// Structure name
		structure: String,
	},

	/// A structure or a value table refers to an object that is not declared
	#[error("'{context}' refers to unknown object '{object}'")]
	UnknownObject {
		/// Structure or animation holding the reference
		context: String,
		/// Object name
		object: String,
	},

	/// A value or timing table is keyed by an animation that is not declared
	#[error("Unknown animation '{0}'")]
	UnknownAnimation(String),

	/// A `sheet.animation` reference that does not resolve
	#[error("Part '{part}' of animation '{animation}' refers to unknown surfaces '{reference}'")]
	UnknownSurfaces {
		/// Animation name
		animation: String,
		/// Part name
		part: String,
		/// Sprite sheet reference
		reference: String,
	},

	/// A position list reference that does not resolve
	#[error("Part '{part}' of animation '{animation}' refers to unknown positions '{reference}'")]
	UnknownPositions {
		/// Animation name
		animation: String,
		/// Part name
		part: String,
		/// Position list name
		reference: String,
	},

	/// A recolor version targets a sprite sheet animation that does not exist
	#[error("Recolor version '{version}' targets unknown surfaces '{reference}'")]
	UnknownRecolorTarget {
		/// Version name
		version: String,
		/// Sprite sheet reference
		reference: String,
	},

	/// A derived animation targets an animation that is not declared
	#[error("Derived animation '{animation}' targets unknown animation '{target}'")]
	UnknownDerivedTarget {
		/// Derived animation name
		animation: String,
		/// Target animation name
		target: String,
	},

	/// A derived animation targets a derived animation resolved after it
	#[error(
		"Derived animation '{animation}' targets '{target}', which is derived later; give '{target}' a lower priority"
	)]
	DerivedTargetNotReady {
		/// Derived animation name
		animation: String,
		/// Target animation name
		target: String,
	},

	/// A blend directive switches to an animation that is not declared
	#[error("Blend directive '{directive}' of '{animation}' targets unknown animation '{target}'")]
	UnknownBlendTarget {
		/// Animation owning the directive
		animation: String,
		/// Directive token
		directive: String,
		/// Target animation name
		target: String,
	},

	/// A root exchange rule names an animation that is not declared
	#[error("Root exchange map names unknown animation '{0}'")]
	UnknownExchangeAnimation(String),

	/// Recolor versions cannot reuse the built-in version names
	#[error("Recolored versions cannot be named '{0}'")]
	ReservedVersionName(String),

	/// A color string is not of the `#rrggbb` form
	#[error("Invalid color '{0}', expected #rrggbb")]
	InvalidColor(String),

	/// An anchor name is not one of the nine rectangle anchors
	#[error("Invalid anchor '{0}'")]
	InvalidAnchor(String),

	/// A `sheet.animation` reference does not contain exactly one dot
	#[error("Invalid surfaces reference '{0}', expected 'sheet.animation'")]
	InvalidReference(String),

	/// A structure declares an empty updating order
	#[error("Structure '{0}' has an empty updating order")]
	EmptyUpdatingOrder(String),

	/// An explicit updating or drawing order names a part outside the tree
	#[error("{order} of structure '{structure}' names '{part}', which is not in its tree")]
	PartOutsideTree {
		/// Structure name
		structure: String,
		/// `updating_order` or `drawing_order`
		order: &'static str,
		/// Part name
		part: String,
	},

	/// An explicit updating or drawing order names a part twice
	#[error("{order} of structure '{structure}' names '{part}' more than once")]
	DuplicateOrderedPart {
		/// Structure name
		structure: String,
		/// `updating_order` or `drawing_order`
		order: &'static str,
		/// Part name
		part: String,
	},

	/// A part of the animation structure has no values or timing
	#[error("Part '{part}' of animation '{animation}' has no {table}")]
	MissingPartData {
		/// Animation name
		animation: String,
		/// Part name
		part: String,
		/// Missing table, either `values` or `timing`
		table: &'static str,
	},

	/// The first frame of a sprite sheet animation has no sprite placed
	#[error("First frame of '{0}' has no sprite placed")]
	UnplacedFirstFrame(String),

	/// A sprite placement refers to a sprite that does not exist
	#[error("'{reference}' places sprite {sprite} but only has {count} sprites")]
	SpriteOutOfRange {
		/// Sprite sheet reference
		reference: String,
		/// Placed sprite index
		sprite: usize,
		/// Number of sprites
		count: usize,
	},

	/// A timing track points past the end of the values it indexes
	#[error(
		"Part '{part}' of animation '{animation}' indexes {kind} {index} but only has {available}"
	)]
	TrackOutOfRange {
		/// Animation name
		animation: String,
		/// Part name
		part: String,
		/// Either `surfaces` or `positions`
		kind: &'static str,
		/// Largest index of the track
		index: usize,
		/// Number of values available
		available: usize,
	},

	/// A timing track would be empty
	#[error("Empty timing track '{reference}'")]
	EmptyTrack {
		/// Source of the track
		reference: String,
		/// Underlying deque error
		#[source]
		source: WalkingError,
	},
}

/// Errors that can occur when creating or driving an animation player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
	/// The resource map holds no animation set with this key
	#[error("Unknown animation data set '{0}'")]
	UnknownDataSet(String),

	/// The animation set has no animation with this name
	#[error("Unknown animation '{0}'")]
	UnknownAnimation(String),

	/// The animation set has no surface version with this name
	#[error("Unknown surface version '{0}'")]
	UnknownVersion(String),

	/// A surface cycle needs at least one version
	#[error("Surface cycling needs at least one version")]
	EmptyCycle,
}
