//! Resolution of declarative animation definitions into [`AnimationData`].
//!
//! Resolution runs once per animation set, at load time:
//!
//! 1. parts get their geometry, structures get their pre-order defaults
//! 2. sprite sheets are painted into surfaces, once per surface version,
//!    recolored where a recolor version asks for it
//! 3. the manifest's value and timing tables are bound to those surfaces,
//!    position lists and timing tracks
//! 4. derived animations are computed in ascending priority order
//! 5. every animation gets one track per part, in updating order, and every
//!    cross reference (blending, root exchange) is checked
//!
//! Any failure aborts resolution with a [`LoadError`] naming the offending
//! animation or part.

use std::{
	collections::{BTreeMap, HashMap, HashSet},
	fs,
	path::Path,
	rc::Rc,
};

use bionicblue_wdeque::WalkingDeque;
use log::debug;
use serde::de::DeserializeOwned;

use crate::{
	LoadError,
	anim::{
		config::ProcessConfig,
		definition::{
			AnimationManifest, PartTimingDef, PartValuesDef, RecolorEffect, SheetAnimation,
			SpriteSheet, StructureDef, TreeNode,
		},
		derived::{AnimTables, derive_tables},
		model::{
			AnimId, Animation, AnimationData, AnimationStructure, DEFAULT_VERSION, ExchangeRule,
			INVISIBLE_VERSION, PartGeometry, PartId, PartTiming, PartTrack, PartValues, VersionId,
		},
		recolor::recolor_sprites,
	},
	geometry::Vec2,
	surface::{SpriteData, Surface, SurfaceCollection},
};

/// File extension of sprite sheets.
pub const SHEET_EXTENSION: &str = "pxa";

/// File extension of position lists.
pub const POSITIONS_EXTENSION: &str = "pos";

/// Every document of an animation directory, parsed but not resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSource {
	/// The manifest
	pub manifest: AnimationManifest,
	/// Sprite sheets, by file stem
	pub sheets: BTreeMap<String, SpriteSheet>,
	/// Position lists, by file stem
	pub position_lists: BTreeMap<String, Vec<Vec2>>,
}

impl AnimationSource {
	/// Reads the manifest, every `.pxa` sprite sheet and every `.pos` position
	/// list of an animation directory.
	///
	/// # Errors
	///
	/// Returns an error if the directory or a document cannot be read or
	/// parsed, or if the directory has no manifest.
	pub fn from_dir(dir: impl AsRef<Path>, config: &ProcessConfig) -> Result<Self, LoadError> {
		let dir = dir.as_ref();
		let io_error = |source| LoadError::Io {
			path: dir.to_path_buf(),
			source,
		};

		let mut manifest = None;
		let mut sheets = BTreeMap::new();
		let mut position_lists = BTreeMap::new();

		for entry in fs::read_dir(dir).map_err(io_error)? {
			let path = entry.map_err(io_error)?.path();
			if !path.is_file() {
				continue;
			}

			let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
				continue;
			};
			let extension = path
				.extension()
				.and_then(|ext| ext.to_str())
				.map(str::to_ascii_lowercase)
				.unwrap_or_default();

			if path.file_name().is_some_and(|name| name == config.manifest_name.as_str()) {
				manifest = Some(read_json(&path)?);
			} else if extension == SHEET_EXTENSION {
				sheets.insert(stem.to_string(), read_json(&path)?);
			} else if extension == POSITIONS_EXTENSION {
				position_lists.insert(stem.to_string(), read_json(&path)?);
			}
		}

		let manifest = manifest.ok_or_else(|| LoadError::MissingManifest {
			dir: dir.to_path_buf(),
			name: config.manifest_name.clone(),
		})?;

		Ok(Self {
			manifest,
			sheets,
			position_lists,
		})
	}

	/// Resolves the documents into an animation set.
	///
	/// # Errors
	///
	/// Returns an error on the first unresolvable reference or invalid value.
	pub fn resolve(&self, config: &ProcessConfig) -> Result<AnimationData, LoadError> {
		Resolver::new(self, config).run()
	}
}

/// Reads and resolves an animation directory.
///
/// # Errors
///
/// See [`AnimationSource::from_dir`] and [`AnimationSource::resolve`].
pub fn process_animation_dir(
	dir: impl AsRef<Path>,
	config: &ProcessConfig,
) -> Result<AnimationData, LoadError> {
	AnimationSource::from_dir(dir, config)?.resolve(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
	let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	serde_json::from_str(&text).map_err(|source| LoadError::Json {
		path: path.to_path_buf(),
		source,
	})
}

/// Surfaces (per version) and surface indices of a sprite sheet animation.
struct SheetFrames {
	surfaces: Vec<SurfaceCollection>,
	indices: Vec<usize>,
}

struct Resolver<'a> {
	source: &'a AnimationSource,
	config: &'a ProcessConfig,
	empty: Rc<Surface>,
	default_positions: Rc<[Vec2]>,
	part_ids: HashMap<&'a str, PartId>,
	versions: Vec<String>,
}

impl<'a> Resolver<'a> {
	fn new(source: &'a AnimationSource, config: &'a ProcessConfig) -> Self {
		Self {
			source,
			config,
			empty: Rc::new(Surface::empty()),
			default_positions: Rc::from(vec![Vec2::ZERO]),
			part_ids: HashMap::new(),
			versions: Vec::new(),
		}
	}

	fn run(mut self) -> Result<AnimationData, LoadError> {
		let source = self.source;
		let manifest = &source.manifest;

		let parts = self.resolve_parts()?;
		let recolor_map = self.resolve_versions()?;
		let sheet_frames = self.paint_sheets(&recolor_map)?;
		let structures = self.resolve_structures()?;

		let anim_ids: HashMap<&str, AnimId> = manifest
			.animations
			.keys()
			.enumerate()
			.map(|(i, name)| (name.as_str(), AnimId(i)))
			.collect();

		let mut tables = self.bind_tables(&anim_ids, &sheet_frames)?;
		self.derive_animations(&anim_ids, &mut tables)?;

		let mut animations = Vec::with_capacity(anim_ids.len());
		for (name, anim_def) in &manifest.animations {
			let structure = structures.get(anim_def.structure.as_str()).ok_or_else(|| {
				LoadError::UnknownStructure {
					animation: name.clone(),
					structure: anim_def.structure.clone(),
				}
			})?;

			let tracks = self.build_tracks(name, structure, tables.remove(name.as_str()))?;
			let blending = self.resolve_blending(name, &anim_ids)?;

			animations.push(Animation {
				name: name.clone(),
				structure: Rc::clone(structure),
				tracks,
				blending,
			});
		}

		if let Some(name) =
			manifest.blending.keys().find(|name| !anim_ids.contains_key(name.as_str()))
		{
			return Err(LoadError::UnknownAnimation(name.clone()));
		}

		let exchange_map = self.resolve_exchange_map(&anim_ids)?;

		debug!(
			"Resolved animation set: {} animations ({} derived), {} parts, {} versions, {} sheets",
			animations.len(),
			manifest.derived_animations.len(),
			parts.len(),
			self.versions.len(),
			self.source.sheets.len()
		);

		Ok(AnimationData {
			parts,
			animations,
			versions: self.versions,
			exchange_map,
			empty: self.empty,
		})
	}

	fn resolve_parts(&mut self) -> Result<Vec<PartGeometry>, LoadError> {
		let source = self.source;
		let manifest = &source.manifest;
		let mut parts = Vec::with_capacity(manifest.objects.len());

		for (i, (name, object)) in manifest.objects.iter().enumerate() {
			let geometry = manifest.geometry.get(&object.geometry).ok_or_else(|| {
				LoadError::UnknownGeometry {
					object: name.clone(),
					geometry: object.geometry.clone(),
				}
			})?;

			let (anchor_from, anchor_to) = geometry.art_anchorage;
			parts.push(PartGeometry {
				name: name.clone(),
				size: geometry.size,
				art_size: geometry.art_size.unwrap_or(geometry.size),
				anchor_from,
				anchor_to,
				anchorage_offset: geometry.anchorage_offset,
			});
			self.part_ids.insert(name.as_str(), PartId(i));
		}

		Ok(parts)
	}

	/// Registers every version and maps each sheet reference to the recolor
	/// effects of the versions targeting it.
	fn resolve_versions(
		&mut self,
	) -> Result<HashMap<&'a str, Vec<(VersionId, &'a [RecolorEffect])>>, LoadError> {
		let source = self.source;
		self.versions = vec![DEFAULT_VERSION.to_string(), INVISIBLE_VERSION.to_string()];

		let mut recolor_map: HashMap<&str, Vec<(VersionId, &[RecolorEffect])>> = HashMap::new();

		for (version, recolor) in &source.manifest.recolored_surface_versions {
			if version == DEFAULT_VERSION || version == INVISIBLE_VERSION {
				return Err(LoadError::ReservedVersionName(version.clone()));
			}

			let id = VersionId(self.versions.len());
			self.versions.push(version.clone());

			for reference in &recolor.surface_collections {
				if self.sheet_animation(reference).is_none() {
					return Err(LoadError::UnknownRecolorTarget {
						version: version.clone(),
						reference: reference.clone(),
					});
				}

				recolor_map
					.entry(reference.as_str())
					.or_default()
					.push((id, recolor.effects.as_slice()));
			}
		}

		Ok(recolor_map)
	}

	fn sheet_animation(&self, reference: &str) -> Option<&'a SheetAnimation> {
		let (stem, name) = reference.split_once('.')?;
		self.source.sheets.get(stem)?.animations.get(name)
	}

	fn paint_sheets(
		&self,
		recolor_map: &HashMap<&str, Vec<(VersionId, &[RecolorEffect])>>,
	) -> Result<HashMap<String, SheetFrames>, LoadError> {
		let mut all_frames = HashMap::new();

		for (stem, sheet) in &self.source.sheets {
			for (name, animation) in &sheet.animations {
				let reference = format!("{stem}.{name}");

				let indices = animation
					.surface_indices()
					.ok_or_else(|| LoadError::UnplacedFirstFrame(reference.clone()))?;

				let count = animation.sprites.len();
				if let Some(&sprite) = indices.iter().find(|&&sprite| sprite >= count) {
					return Err(LoadError::SpriteOutOfRange {
						reference,
						sprite,
						count,
					});
				}

				let base = Surface::keyed_square(animation.size, self.config.colorkey);
				let paint = |sprites: &[SpriteData]| -> SurfaceCollection {
					SurfaceCollection::Frames(
						sprites.iter().map(|sprite| Rc::new(Surface::painted(&base, sprite))).collect(),
					)
				};

				let default_frames = paint(animation.sprites.as_slice());
				let mut surfaces = vec![default_frames.clone(); self.versions.len()];
				surfaces[VersionId::INVISIBLE.index()] = SurfaceCollection::Empty(Rc::clone(&self.empty));

				for (version, effects) in recolor_map.get(reference.as_str()).into_iter().flatten() {
					let recolored = recolor_sprites(&animation.sprites, effects);
					surfaces[version.index()] = paint(recolored.as_slice());
				}

				all_frames.insert(
					reference,
					SheetFrames {
						surfaces,
						indices,
					},
				);
			}
		}

		Ok(all_frames)
	}

	fn resolve_structures(&self) -> Result<HashMap<&'a str, Rc<AnimationStructure>>, LoadError> {
		self.source
			.manifest
			.existing_structures
			.iter()
			.map(|(name, structure)| {
				Ok((name.as_str(), Rc::new(self.resolve_structure(name, structure)?)))
			})
			.collect()
	}

	fn resolve_structure(
		&self,
		name: &str,
		structure: &StructureDef,
	) -> Result<AnimationStructure, LoadError> {
		let part_id = |part: &str| {
			self.part_ids.get(part).copied().ok_or_else(|| LoadError::UnknownObject {
				context: name.to_string(),
				object: part.to_string(),
			})
		};

		let parts = structure
			.tree
			.names()
			.into_iter()
			.map(part_id)
			.collect::<Result<Vec<_>, _>>()?;

		let mut links = Vec::new();
		collect_links(&structure.tree, &part_id, &mut links)?;

		let resolve_order = |kind, order: &Option<Vec<String>>| match order {
			Some(order) => order_parts(name, kind, order, &parts, &part_id),
			None => Ok(parts.clone()),
		};

		let updating_order = resolve_order("updating_order", &structure.updating_order)?;
		if updating_order.is_empty() {
			return Err(LoadError::EmptyUpdatingOrder(name.to_string()));
		}
		let drawing_order = resolve_order("drawing_order", &structure.drawing_order)?;

		Ok(AnimationStructure {
			name: name.to_string(),
			root: part_id(&structure.tree.name)?,
			links,
			updating_order,
			drawing_order,
			parts,
		})
	}

	/// Binds the manifest's value and timing tables to resolved data.
	fn bind_tables(
		&self,
		anim_ids: &HashMap<&str, AnimId>,
		sheet_frames: &HashMap<String, SheetFrames>,
	) -> Result<HashMap<&'a str, AnimTables>, LoadError> {
		let manifest = &self.source.manifest;
		let mut tables: HashMap<&str, AnimTables> = HashMap::new();

		for (anim, parts) in &manifest.values {
			let anim_tables = tables.entry(self.known_animation(anim, anim_ids)?).or_default();

			for (part, values) in parts {
				let id = self.object_id(anim, part)?;
				anim_tables.values.insert(id, self.bind_values(anim, part, values, sheet_frames)?);
			}
		}

		for (anim, parts) in &manifest.timing {
			let anim_tables = tables.entry(self.known_animation(anim, anim_ids)?).or_default();

			for (part, timing) in parts {
				let id = self.object_id(anim, part)?;
				anim_tables.timing.insert(id, self.bind_timing(anim, part, timing, sheet_frames)?);
			}
		}

		Ok(tables)
	}

	fn known_animation(
		&self,
		anim: &'a str,
		anim_ids: &HashMap<&str, AnimId>,
	) -> Result<&'a str, LoadError> {
		if anim_ids.contains_key(anim) {
			Ok(anim)
		} else {
			Err(LoadError::UnknownAnimation(anim.to_string()))
		}
	}

	fn object_id(&self, anim: &str, part: &str) -> Result<PartId, LoadError> {
		self.part_ids.get(part).copied().ok_or_else(|| LoadError::UnknownObject {
			context: anim.to_string(),
			object: part.to_string(),
		})
	}

	fn bind_values(
		&self,
		anim: &str,
		part: &str,
		values: &PartValuesDef,
		sheet_frames: &HashMap<String, SheetFrames>,
	) -> Result<PartValues, LoadError> {
		let surfaces = match &values.surfaces {
			Some(reference) => {
				let frames = lookup_sheet(sheet_frames, reference, || LoadError::UnknownSurfaces {
					animation: anim.to_string(),
					part: part.to_string(),
					reference: reference.clone(),
				})?;
				frames.surfaces.clone()
			}
			None => self.empty_surfaces(),
		};

		let positions = match &values.positions {
			Some(reference) => {
				let list = self.source.position_lists.get(reference).ok_or_else(|| {
					LoadError::UnknownPositions {
						animation: anim.to_string(),
						part: part.to_string(),
						reference: reference.clone(),
					}
				})?;
				Rc::from(list.as_slice())
			}
			None => Rc::clone(&self.default_positions),
		};

		Ok(PartValues {
			surfaces,
			positions,
		})
	}

	fn bind_timing(
		&self,
		anim: &str,
		part: &str,
		timing: &PartTimingDef,
		sheet_frames: &HashMap<String, SheetFrames>,
	) -> Result<PartTiming, LoadError> {
		let surface_indices = match &timing.surface_indices {
			Some(reference) => {
				let frames = lookup_sheet(sheet_frames, reference, || LoadError::UnknownSurfaces {
					animation: anim.to_string(),
					part: part.to_string(),
					reference: reference.clone(),
				})?;
				track(reference, frames.indices.iter().copied())?
			}
			None => single_frame_track(),
		};

		let position_indices = match &timing.position_indices {
			Some(reference) => {
				let list = self.source.position_lists.get(reference).ok_or_else(|| {
					LoadError::UnknownPositions {
						animation: anim.to_string(),
						part: part.to_string(),
						reference: reference.clone(),
					}
				})?;
				track(reference, 0..list.len())?
			}
			None => single_frame_track(),
		};

		Ok(PartTiming {
			surface_indices,
			position_indices,
		})
	}

	fn derive_animations(
		&self,
		anim_ids: &HashMap<&str, AnimId>,
		tables: &mut HashMap<&'a str, AnimTables>,
	) -> Result<(), LoadError> {
		let mut derived: Vec<_> = self.source.manifest.derived_animations.iter().collect();
		derived.sort_by_key(|(_, def)| def.priority);
		let mut pending: HashSet<&str> = derived.iter().map(|&(name, _)| name.as_str()).collect();

		for (name, def) in derived {
			let name = self.known_animation(name, anim_ids)?;
			let target = def.target.as_str();

			if !anim_ids.contains_key(target) {
				return Err(LoadError::UnknownDerivedTarget {
					animation: name.to_string(),
					target: target.to_string(),
				});
			}
			if pending.contains(target) {
				return Err(LoadError::DerivedTargetNotReady {
					animation: name.to_string(),
					target: target.to_string(),
				});
			}

			// a declared target without any table derives to an empty one
			let derived_tables = match tables.get(target) {
				Some(target) => derive_tables(name, def.operation_name, target),
				None => AnimTables::default(),
			};
			tables.insert(name, derived_tables);
			pending.remove(name);
		}

		Ok(())
	}

	fn build_tracks(
		&self,
		anim: &str,
		structure: &AnimationStructure,
		tables: Option<AnimTables>,
	) -> Result<Vec<PartTrack>, LoadError> {
		let mut tables = tables.unwrap_or_default();
		let part_name = |part: PartId| self.source.manifest.objects.keys().nth(part.index());

		structure
			.updating_order
			.iter()
			.map(|&part| {
				let name = part_name(part).cloned().unwrap_or_default();
				let missing = |table| LoadError::MissingPartData {
					animation: anim.to_string(),
					part: name.clone(),
					table,
				};

				let values = match tables.values.remove(&part) {
					Some(values) => values,
					None if self.config.strict_parts => return Err(missing("values")),
					None => PartValues {
						surfaces: self.empty_surfaces(),
						positions: Rc::clone(&self.default_positions),
					},
				};

				let timing = match tables.timing.remove(&part) {
					Some(timing) => timing,
					None if self.config.strict_parts => return Err(missing("timing")),
					None => PartTiming {
						surface_indices: single_frame_track(),
						position_indices: single_frame_track(),
					},
				};

				check_track_range(anim, &name, &values, &timing)?;

				Ok(PartTrack {
					part,
					values,
					timing,
				})
			})
			.collect()
	}

	fn resolve_blending(
		&self,
		anim: &str,
		anim_ids: &HashMap<&str, AnimId>,
	) -> Result<HashMap<String, AnimId>, LoadError> {
		let Some(directives) = self.source.manifest.blending.get(anim) else {
			return Ok(HashMap::new());
		};

		directives
			.iter()
			.map(|(directive, target)| {
				let id = anim_ids.get(target.as_str()).copied().ok_or_else(|| {
					LoadError::UnknownBlendTarget {
						animation: anim.to_string(),
						directive: directive.clone(),
						target: target.clone(),
					}
				})?;
				Ok((directive.clone(), id))
			})
			.collect()
	}

	fn resolve_exchange_map(
		&self,
		anim_ids: &HashMap<&str, AnimId>,
	) -> Result<HashMap<(AnimId, AnimId), ExchangeRule>, LoadError> {
		let mut exchange_map = HashMap::new();

		for &a in anim_ids.values() {
			for &b in anim_ids.values() {
				if a != b {
					exchange_map.insert((a, b), ExchangeRule::default());
				}
			}
		}

		let lookup = |name: &String| {
			anim_ids
				.get(name.as_str())
				.copied()
				.ok_or_else(|| LoadError::UnknownExchangeAnimation(name.clone()))
		};

		for (from, rules) in &self.source.manifest.root_pos_exchange_map {
			let from_id = lookup(from)?;

			for (to, &(from_anchor, to_anchor, offset)) in rules {
				exchange_map.insert(
					(from_id, lookup(to)?),
					ExchangeRule {
						from: from_anchor,
						to: to_anchor,
						offset,
					},
				);
			}
		}

		Ok(exchange_map)
	}

	fn empty_surfaces(&self) -> Vec<SurfaceCollection> {
		vec![SurfaceCollection::Empty(Rc::clone(&self.empty)); self.versions.len()]
	}
}

fn collect_links<F>(
	node: &TreeNode,
	part_id: &F,
	links: &mut Vec<(PartId, PartId)>,
) -> Result<(), LoadError>
where
	F: Fn(&str) -> Result<PartId, LoadError>,
{
	let parent = part_id(&node.name)?;

	for child in &node.children {
		links.push((part_id(&child.name)?, parent));
		collect_links(child, part_id, links)?;
	}

	Ok(())
}

/// Resolves an explicit order, which may skip parts of the tree but never
/// add or repeat one.
fn order_parts<F>(
	structure: &str,
	kind: &'static str,
	order: &[String],
	parts: &[PartId],
	part_id: &F,
) -> Result<Vec<PartId>, LoadError>
where
	F: Fn(&str) -> Result<PartId, LoadError>,
{
	let mut resolved = Vec::with_capacity(order.len());

	for part in order {
		let id = part_id(part)?;
		if !parts.contains(&id) {
			return Err(LoadError::PartOutsideTree {
				structure: structure.to_string(),
				order: kind,
				part: part.clone(),
			});
		}
		if resolved.contains(&id) {
			return Err(LoadError::DuplicateOrderedPart {
				structure: structure.to_string(),
				order: kind,
				part: part.clone(),
			});
		}
		resolved.push(id);
	}

	Ok(resolved)
}

fn lookup_sheet<'f>(
	sheet_frames: &'f HashMap<String, SheetFrames>,
	reference: &str,
	unknown: impl FnOnce() -> LoadError,
) -> Result<&'f SheetFrames, LoadError> {
	if !reference.contains('.') {
		return Err(LoadError::InvalidReference(reference.to_string()));
	}
	sheet_frames.get(reference).ok_or_else(unknown)
}

fn track(
	reference: &str,
	indices: impl IntoIterator<Item = usize>,
) -> Result<WalkingDeque<usize>, LoadError> {
	WalkingDeque::new(indices).map_err(|source| LoadError::EmptyTrack {
		reference: reference.to_string(),
		source,
	})
}

fn single_frame_track() -> WalkingDeque<usize> {
	WalkingDeque::from_single(0)
}

fn check_track_range(
	anim: &str,
	part: &str,
	values: &PartValues,
	timing: &PartTiming,
) -> Result<(), LoadError> {
	let out_of_range = |kind, index, available| LoadError::TrackOutOfRange {
		animation: anim.to_string(),
		part: part.to_string(),
		kind,
		index,
		available,
	};

	let max_surface = timing.surface_indices.iter().copied().max().unwrap_or(0);
	for collection in &values.surfaces {
		if let Some(count) = collection.frame_count()
			&& max_surface >= count
		{
			return Err(out_of_range("surfaces", max_surface, count));
		}
	}

	let max_position = timing.position_indices.iter().copied().max().unwrap_or(0);
	if max_position >= values.positions.len() {
		return Err(out_of_range("positions", max_position, values.positions.len()));
	}

	Ok(())
}
