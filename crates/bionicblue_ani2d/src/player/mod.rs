//! The animation player: the per-entity driver of an animation set.
//!
//! A player holds the playback state of one game entity. The animation data
//! is shared, the timing tracks are owned: every player starts from its own
//! copy of the template tracks, so entities sharing a set advance
//! independently.
//!
//! Each call to [`AnimationPlayer::draw`] renders one frame. Right after a
//! switch the current frame is drawn without advancing ([`DrawPhase::Settle`]);
//! every later call advances every track of the animation by one step before
//! drawing ([`DrawPhase::Advance`]).
//!
//! ```no_run
//! use bionicblue_ani2d::{
//!     anim::{AnimationStore, ProcessConfig},
//!     geometry::{Anchor, Vec2},
//!     player::{AnimationPlayer, FrameRecorder},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = AnimationStore::load_dir("data/animations", &ProcessConfig::default())?;
//! let mut player =
//!     AnimationPlayer::new(&store, "blue_boy", "idle_right", Anchor::MidBottom, Vec2::new(64, 128))?;
//!
//! let mut recorder = FrameRecorder::new();
//! player.blend("+walking");
//! player.draw(&mut recorder);
//!
//! if player.main_timing().peek_loops_no(1) == 1.0 {
//!     println!("one loop done next frame");
//! }
//! # Ok(())
//! # }
//! ```

mod object;
mod sink;


use std::rc::Rc;

use bionicblue_wdeque::WalkingDeque;
use log::trace;

pub use object::AnimationObject;
pub use sink::{Blit, Canvas, DrawSink, FrameRecorder};

use crate::{
	PlayerError,
	anim::{
		AnimId, Animation, AnimationData, AnimationStore, DEFAULT_VERSION, PartId, PartTiming,
		VersionId,
	},
	geometry::{Anchor, Rect, Vec2},
};

/// What the next [`AnimationPlayer::draw`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawPhase {
	/// Draw the current frame as is
	Settle,
	/// Walk every track one step, then draw
	Advance,
}

/// Which of the two tracks of a part timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackKind {
	Surfaces,
	Positions,
}

/// Location of the longest track of the current animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MainTiming {
	slot: usize,
	kind: TrackKind,
}

/// Playback state of one entity.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
	data: Rc<AnimationData>,
	objects: Vec<AnimationObject>,
	// per animation, per track in updating order
	timing: Vec<Vec<PartTiming>>,
	anim: AnimId,
	root: PartId,
	main_timing: MainTiming,
	phase: DrawPhase,
	cycle: WalkingDeque<VersionId>,
	cycle_values: Vec<String>,
}

impl AnimationPlayer {
	/// Creates a player for the set stored under `key`, starting in
	/// `anim_name` with the root's `anchor` placed at `pos`.
	///
	/// # Errors
	///
	/// Returns an error if the set or the animation does not exist.
	pub fn new(
		store: &AnimationStore,
		key: &str,
		anim_name: &str,
		anchor: Anchor,
		pos: Vec2,
	) -> Result<Self, PlayerError> {
		let data = store
			.get(key)
			.ok_or_else(|| PlayerError::UnknownDataSet(key.to_string()))?;
		Self::from_data(data, anim_name, anchor, pos)
	}

	/// Creates a player for an already shared set.
	///
	/// # Errors
	///
	/// Returns an error if the animation does not exist.
	pub fn from_data(
		data: Rc<AnimationData>,
		anim_name: &str,
		anchor: Anchor,
		pos: Vec2,
	) -> Result<Self, PlayerError> {
		let anim = data
			.anim_id(anim_name)
			.ok_or_else(|| PlayerError::UnknownAnimation(anim_name.to_string()))?;

		let objects: Vec<_> = data
			.parts()
			.iter()
			.map(|geometry| AnimationObject::new(geometry, Rc::clone(data.empty_surface())))
			.collect();

		let timing = data
			.animations()
			.iter()
			.map(|animation| {
				animation
					.tracks
					.iter()
					.map(|track| track.timing.clone())
					.collect()
			})
			.collect();

		let root = data.animation(anim).structure.root;

		let mut player = Self {
			data,
			objects,
			timing,
			anim,
			root,
			main_timing: MainTiming {
				slot: 0,
				kind: TrackKind::Surfaces,
			},
			phase: DrawPhase::Settle,
			cycle: WalkingDeque::from_single(VersionId::DEFAULT),
			cycle_values: vec![DEFAULT_VERSION.to_string()],
		};

		player.objects[root.index()].rect_mut().set(anchor, pos);
		player.switch_to(anim);
		Ok(player)
	}

	/// Switches to `name`, even if it is the current animation.
	///
	/// The tracks of the animation left are walked back to their origin, and
	/// the next draw shows the first frame of `name` without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the set has no such animation; the player is left
	/// untouched.
	pub fn switch_animation(&mut self, name: &str) -> Result<(), PlayerError> {
		let anim = self.lookup(name)?;
		self.switch_to(anim);
		Ok(())
	}

	/// Switches to `name` unless it is already the current animation.
	///
	/// # Errors
	///
	/// Returns an error if the set has no such animation.
	pub fn ensure_animation(&mut self, name: &str) -> Result<(), PlayerError> {
		let anim = self.lookup(name)?;
		self.ensure(anim);
		Ok(())
	}

	/// Follows a blend directive of the current animation, such as
	/// `"+walking"`. Directives the animation does not know are ignored.
	pub fn blend(&mut self, directive: &str) {
		if let Some(&target) = self.animation().blending.get(directive) {
			self.ensure(target);
		}
	}

	/// Cycles through `versions`, one per draw, instead of always drawing the
	/// default surfaces.
	///
	/// # Errors
	///
	/// Returns an error if `versions` is empty or names an unknown version;
	/// the current cycle is kept.
	pub fn set_custom_surface_cycling<I, S>(&mut self, versions: I) -> Result<(), PlayerError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names: Vec<String> = versions
			.into_iter()
			.map(|name| name.as_ref().to_string())
			.collect();

		let ids = names
			.iter()
			.map(|name| {
				self.data
					.version_id(name)
					.ok_or_else(|| PlayerError::UnknownVersion(name.clone()))
			})
			.collect::<Result<Vec<_>, _>>()?;

		self.cycle = WalkingDeque::new(ids).map_err(|_| PlayerError::EmptyCycle)?;
		self.cycle_values = names;
		Ok(())
	}

	/// Goes back to drawing the default surfaces only.
	pub fn restore_surface_cycling(&mut self) {
		self.cycle = WalkingDeque::from_single(VersionId::DEFAULT);
		self.cycle_values = vec![DEFAULT_VERSION.to_string()];
	}

	/// Names of the versions currently cycled through.
	pub fn cycle_values(&self) -> &[String] {
		&self.cycle_values
	}

	/// Renders one frame of the current animation into `sink`.
	///
	/// Parts are positioned in updating order and drawn in drawing order.
	pub fn draw<S: DrawSink + ?Sized>(&mut self, sink: &mut S) {
		let version = *self.cycle.front();
		self.cycle.walk(1);

		let advance = self.phase == DrawPhase::Advance;
		let data = Rc::clone(&self.data);
		let animation = data.animation(self.anim);

		for (track, timing) in animation
			.tracks
			.iter()
			.zip(self.timing[self.anim.index()].iter_mut())
		{
			if advance {
				timing.surface_indices.walk(1);
				timing.position_indices.walk(1);
			}

			let surface = track.values.surface(version, *timing.surface_indices.front());
			let pos = track.values.positions[*timing.position_indices.front()];

			self.objects[track.part.index()].set_image(Rc::clone(surface));
			object::position_part(&mut self.objects, track.part, pos);
		}

		for &part in &animation.structure.drawing_order {
			self.objects[part.index()].draw(sink);
		}

		self.phase = DrawPhase::Advance;
	}

	/// Name of the current animation.
	pub fn anim_name(&self) -> &str {
		&self.animation().name
	}

	/// Id of the current animation.
	pub fn anim_id(&self) -> AnimId {
		self.anim
	}

	/// Names of every animation the player can switch to.
	pub fn anim_names(&self) -> impl Iterator<Item = &str> {
		self.data.anim_names()
	}

	/// Whether the player can switch to `name`.
	pub fn has_animation(&self, name: &str) -> bool {
		self.data.anim_id(name).is_some()
	}

	/// Root part of the current structure.
	pub fn root(&self) -> &AnimationObject {
		&self.objects[self.root.index()]
	}

	/// Bounding rectangle of the root part, the position of the entity.
	pub fn root_rect(&self) -> &Rect {
		self.root().rect()
	}

	/// Mutable bounding rectangle of the root part. Moving it moves the whole
	/// sprite on the next draw.
	pub fn root_rect_mut(&mut self) -> &mut Rect {
		self.objects[self.root.index()].rect_mut()
	}

	/// The longest timing track of the current animation.
	///
	/// Gameplay code polls it to detect loop boundaries, e.g.
	/// `main_timing().peek_loops_no(1) == 1.0` for "the first loop completes
	/// with the next step".
	pub fn main_timing(&self) -> &WalkingDeque<usize> {
		let timing = &self.timing[self.anim.index()][self.main_timing.slot];
		match self.main_timing.kind {
			TrackKind::Surfaces => &timing.surface_indices,
			TrackKind::Positions => &timing.position_indices,
		}
	}

	/// Timing of every part of the current animation, in updating order.
	pub fn timing(&self) -> impl Iterator<Item = (PartId, &PartTiming)> {
		self.animation()
			.tracks
			.iter()
			.map(|track| track.part)
			.zip(&self.timing[self.anim.index()])
	}

	/// Every part, indexed by [`PartId`].
	pub fn objects(&self) -> &[AnimationObject] {
		&self.objects
	}

	/// Looks up a part by name.
	pub fn object(&self, name: &str) -> Option<&AnimationObject> {
		self.data.part_id(name).map(|part| &self.objects[part.index()])
	}

	/// What the next draw does.
	pub fn phase(&self) -> DrawPhase {
		self.phase
	}

	/// Whether the next draw shows the current frame without advancing.
	pub fn is_settling(&self) -> bool {
		self.phase == DrawPhase::Settle
	}

	/// The shared animation set.
	pub fn data(&self) -> &Rc<AnimationData> {
		&self.data
	}

	fn animation(&self) -> &Animation {
		self.data.animation(self.anim)
	}

	fn lookup(&self, name: &str) -> Result<AnimId, PlayerError> {
		self.data
			.anim_id(name)
			.ok_or_else(|| PlayerError::UnknownAnimation(name.to_string()))
	}

	fn ensure(&mut self, anim: AnimId) {
		if anim != self.anim {
			self.switch_to(anim);
		}
	}

	fn switch_to(&mut self, anim: AnimId) {
		let previous = self.anim;
		self.anim = anim;

		for timing in &mut self.timing[previous.index()] {
			timing.restore_walking();
		}

		let data = Rc::clone(&self.data);
		let structure = &data.animation(anim).structure;

		if structure.root != self.root {
			self.exchange_root(previous, structure.root);
		}

		self.objects[structure.root.index()].set_parent(None);
		for &(child, parent) in &structure.links {
			self.objects[child.index()].set_parent(Some(parent));
		}

		self.main_timing = self.find_main_timing();
		self.phase = DrawPhase::Settle;

		trace!(
			"Switched from '{}' to '{}'",
			data.animation(previous).name,
			data.animation(anim).name
		);
	}

	fn exchange_root(&mut self, previous: AnimId, new_root: PartId) {
		let rule = self.data.exchange_rule(previous, self.anim);
		let pos = self.objects[self.root.index()].rect().get(rule.from) + rule.offset;
		self.objects[new_root.index()].rect_mut().set(rule.to, pos);

		trace!(
			"Exchanged root '{}' for '{}' at {pos}",
			self.objects[self.root.index()].name(),
			self.objects[new_root.index()].name()
		);

		self.root = new_root;
	}

	fn find_main_timing(&self) -> MainTiming {
		let mut main = MainTiming {
			slot: 0,
			kind: TrackKind::Surfaces,
		};
		let mut longest = 0;

		for (slot, timing) in self.timing[self.anim.index()].iter().enumerate() {
			for (kind, track) in [
				(TrackKind::Surfaces, &timing.surface_indices),
				(TrackKind::Positions, &timing.position_indices),
			] {
				if track.len() > longest {
					longest = track.len();
					main = MainTiming {
						slot,
						kind,
					};
				}
			}
		}

		main
	}
}
