//! Per-part state of an animation player.

use std::rc::Rc;

use crate::{
	anim::{PartGeometry, PartId},
	geometry::{Anchor, Rect, Vec2},
	player::DrawSink,
	surface::Surface,
};

/// One part of a composite sprite, as positioned and drawn by a player.
///
/// `rect` is the part's bounding rectangle, used for positioning children and
/// for collision queries. `art_rect` is where the current surface is drawn; it
/// is anchored to `rect` every frame.
#[derive(Debug, Clone)]
pub struct AnimationObject {
	name: String,
	rect: Rect,
	art_rect: Rect,
	anchor_from: Anchor,
	anchor_to: Anchor,
	anchorage_offset: Vec2,
	parent: Option<PartId>,
	image: Rc<Surface>,
}

impl AnimationObject {
	pub(crate) fn new(geometry: &PartGeometry, image: Rc<Surface>) -> Self {
		Self {
			name: geometry.name.clone(),
			rect: Rect::from_size(geometry.size),
			art_rect: Rect::from_size(geometry.art_size),
			anchor_from: geometry.anchor_from,
			anchor_to: geometry.anchor_to,
			anchorage_offset: geometry.anchorage_offset,
			parent: None,
			image,
		}
	}

	/// Part name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Bounding rectangle.
	pub fn rect(&self) -> &Rect {
		&self.rect
	}

	/// Mutable bounding rectangle.
	pub fn rect_mut(&mut self) -> &mut Rect {
		&mut self.rect
	}

	/// Rectangle the surface is drawn at.
	pub fn art_rect(&self) -> &Rect {
		&self.art_rect
	}

	/// Parent part in the current structure, `None` for the root or a part
	/// outside of it.
	pub fn parent(&self) -> Option<PartId> {
		self.parent
	}

	/// Surface shown by the part.
	pub fn image(&self) -> &Rc<Surface> {
		&self.image
	}

	pub(crate) fn set_parent(&mut self, parent: Option<PartId>) {
		self.parent = parent;
	}

	pub(crate) fn set_image(&mut self, image: Rc<Surface>) {
		self.image = image;
	}

	/// Anchors the art rectangle to the bounding rectangle.
	pub(crate) fn position_art(&mut self) {
		let pos = self.rect.get(self.anchor_from) + self.anchorage_offset;
		self.art_rect.set(self.anchor_to, pos);
	}

	/// Blits the current surface at the art rectangle.
	pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
		sink.blit(&self.image, &self.art_rect);
	}
}

/// Positions `part` at `pos` relative to its parent and anchors its art.
///
/// Parts without parent ignore `pos`: the root is placed by the entity owning
/// the player, through [`AnimationPlayer::root_rect_mut`](super::AnimationPlayer::root_rect_mut).
pub(crate) fn position_part(objects: &mut [AnimationObject], part: PartId, pos: Vec2) {
	if let Some(parent) = objects[part.index()].parent {
		let center = objects[parent.index()].rect.moved(pos).center();
		objects[part.index()].rect.set_center(center);
	}

	objects[part.index()].position_art();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fixtures::hero_data;

	#[test]
	fn test_art_follows_anchorage() {
		let data = hero_data();
		let arm = data.part(data.part_id("arm").unwrap());
		let mut object = AnimationObject::new(arm, Rc::clone(data.empty_surface()));

		object.rect_mut().set(Anchor::TopLeft, Vec2::new(10, 10));
		object.position_art();

		// center (14, 14) + (1, 0) becomes the art's midleft
		assert_eq!(object.art_rect().get(Anchor::MidLeft), Vec2::new(15, 14));
		assert_eq!(*object.art_rect(), Rect::new(15, 9, 10, 10));
	}
}
