//! Derived animations: values and timing computed from another animation.

use std::{collections::BTreeMap, rc::Rc};

use log::trace;

use crate::{
	anim::{
		definition::DerivedOperation,
		model::{PartId, PartTiming, PartValues, VersionId},
	},
	surface::{Surface, SurfaceCollection},
};

/// Values and timing of an animation being resolved, by part.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnimTables {
	pub values: BTreeMap<PartId, PartValues>,
	pub timing: BTreeMap<PartId, PartTiming>,
}

/// Computes the tables of a derived animation from its target's tables.
///
/// - `flip_x`: every surface but the invisible ones mirrored, timing copied
/// - `backwards`: surfaces shared, timing reversed
/// - `whiten`: every surface but the invisible ones whitened, timing copied
///
/// Positions are always shared with the target. Derived timing tracks start
/// with no walking memory.
pub(crate) fn derive_tables(
	name: &str,
	operation: DerivedOperation,
	target: &AnimTables,
) -> AnimTables {
	trace!("Deriving '{name}' with {operation:?} from {} parts", target.values.len());

	let transform: Option<fn(&Surface) -> Surface> = match operation {
		DerivedOperation::FlipX => Some(Surface::flipped_x),
		DerivedOperation::Whiten => Some(Surface::whitened),
		DerivedOperation::Backwards => None,
	};

	// recolor versions without instructions share the default frames
	let mut converted: Vec<(SurfaceCollection, SurfaceCollection)> = Vec::new();

	let values = target
		.values
		.iter()
		.map(|(&part, target_values)| {
			let surfaces = match transform {
				Some(transform) => target_values
					.surfaces
					.iter()
					.enumerate()
					.map(|(version, collection)| {
						if version == VersionId::INVISIBLE.index() {
							return collection.clone();
						}

						if let Some((_, done)) =
							converted.iter().find(|(source, _)| source.is_same(collection))
						{
							return done.clone();
						}

						let done = collection.map_frames(transform);
						converted.push((collection.clone(), done.clone()));
						done
					})
					.collect(),
				None => target_values.surfaces.clone(),
			};

			(
				part,
				PartValues {
					surfaces,
					positions: Rc::clone(&target_values.positions),
				},
			)
		})
		.collect();

	let timing = target
		.timing
		.iter()
		.map(|(&part, target_timing)| {
			let timing = match operation {
				DerivedOperation::Backwards => target_timing.reversed(),
				DerivedOperation::FlipX | DerivedOperation::Whiten => target_timing.fresh_copy(),
			};
			(part, timing)
		})
		.collect();

	AnimTables {
		values,
		timing,
	}
}
