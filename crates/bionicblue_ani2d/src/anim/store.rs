//! The resource map of resolved animation sets.

use std::{collections::HashMap, fs, path::Path, rc::Rc};

use log::info;

use crate::{
	LoadError,
	anim::{config::ProcessConfig, model::AnimationData, process::process_animation_dir},
};

/// Resolved animation sets, keyed by name.
///
/// Sets are shared: every player created from the store holds an [`Rc`] to
/// the same read-only data.
///
/// # Examples
///
/// ```no_run
/// use bionicblue_ani2d::anim::{AnimationStore, ProcessConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = AnimationStore::load_dir("data/animations", &ProcessConfig::default())?;
///
/// for key in store.keys() {
///     println!("{key}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimationStore {
	sets: HashMap<String, Rc<AnimationData>>,
}

impl AnimationStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolves every sub-directory of `root` as an animation set keyed by
	/// the directory name.
	///
	/// # Errors
	///
	/// Returns the first error met while reading `root` or resolving one of
	/// its sub-directories.
	pub fn load_dir(root: impl AsRef<Path>, config: &ProcessConfig) -> Result<Self, LoadError> {
		let root = root.as_ref();
		let io_error = |source| LoadError::Io {
			path: root.to_path_buf(),
			source,
		};

		let mut dirs = Vec::new();
		for entry in fs::read_dir(root).map_err(io_error)? {
			let path = entry.map_err(io_error)?.path();
			if path.is_dir() {
				dirs.push(path);
			}
		}
		dirs.sort();

		let mut store = Self::new();
		for dir in dirs {
			let Some(key) = dir.file_name().and_then(|name| name.to_str()) else {
				continue;
			};
			store.load_set(key, &dir, config)?;
		}

		info!("Loaded {} animation sets from {}", store.len(), root.display());
		Ok(store)
	}

	/// Resolves a single animation directory and stores it under `key`.
	///
	/// # Errors
	///
	/// Returns an error if the directory cannot be resolved.
	pub fn load_set(
		&mut self,
		key: impl Into<String>,
		dir: impl AsRef<Path>,
		config: &ProcessConfig,
	) -> Result<Rc<AnimationData>, LoadError> {
		let key = key.into();
		let data = Rc::new(process_animation_dir(&dir, config)?);

		info!(
			"Loaded animation set '{key}' from {} ({} animations)",
			dir.as_ref().display(),
			data.animations().len()
		);

		self.sets.insert(key, Rc::clone(&data));
		Ok(data)
	}

	/// Stores an already resolved set, returning the one it replaces.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		data: AnimationData,
	) -> Option<Rc<AnimationData>> {
		self.sets.insert(key.into(), Rc::new(data))
	}

	/// Returns the set stored under `key`.
	pub fn get(&self, key: &str) -> Option<Rc<AnimationData>> {
		self.sets.get(key).cloned()
	}

	/// Whether a set is stored under `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.sets.contains_key(key)
	}

	/// Keys of every stored set, sorted.
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<_> = self.sets.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	/// Number of stored sets.
	pub fn len(&self) -> usize {
		self.sets.len()
	}

	/// Whether the store is empty.
	pub fn is_empty(&self) -> bool {
		self.sets.is_empty()
	}
}
