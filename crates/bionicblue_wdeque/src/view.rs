//! Content views: independently walking mirrors of a source deque.
//!
//! A [`ProxiedDeque`] owns a source [`WalkingDeque`] and every content view
//! derived from it. Keeping them in one owner replaces back-references with
//! plain handles ([`ViewId`]): the source can reach its views to propagate
//! writes, a view can reach its source to authorize writes, and cloning the
//! owner clones the source and its views as one unit, with every handle still
//! pointing at the cloned counterparts. A view can never be cloned on its own.
//!
//! # Examples
//!
//! ```
//! use bionicblue_wdeque::{ProxiedDeque, WalkingDeque};
//!
//! let mut proxied = ProxiedDeque::new(WalkingDeque::new([0, 1, 2, 3])?);
//! let view = proxied.content_view();
//!
//! proxied.walk(2);
//! proxied.set(0, 45)?;
//!
//! // the view did not walk, but got the value at the same original index
//! assert_eq!(proxied.source().to_vec(), vec![45, 3, 0, 1]);
//! assert_eq!(proxied.view(view)?.to_vec(), vec![0, 1, 45, 3]);
//! # Ok::<(), bionicblue_wdeque::WalkingError>(())
//! ```

use std::{
	fmt,
	ops::Deref,
	sync::atomic::{AtomicU64, Ordering},
};

use crate::{Identity, WalkingDeque, WalkingError};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Handle to a content view owned by a [`ProxiedDeque`].
///
/// Handles are scoped to the deque that minted them (and its clones): any
/// other deque answers [`WalkingError::UnknownView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId {
	owner: u64,
	index: usize,
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view#{}.{}", self.owner, self.index)
	}
}

/// Read access to a content view.
///
/// Derefs to [`WalkingDeque`] for every read operation. Mutation goes through
/// [`ProxiedDeque::view_mut`].
pub struct ContentView<T> {
	deque: WalkingDeque<T>,
}

impl<T> Deref for ContentView<T> {
	type Target = WalkingDeque<T>;

	fn deref(&self) -> &Self::Target {
		&self.deque
	}
}

impl<T: fmt::Debug> fmt::Debug for ContentView<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ContentView").field(&self.deque).finish()
	}
}

/// Mutable access to a content view, borrowed together with its source.
pub struct ContentViewMut<'a, T> {
	source: &'a WalkingDeque<T>,
	view: &'a mut WalkingDeque<T>,
}

impl<T> ContentViewMut<'_, T> {
	/// Walks the view; the source is not affected.
	pub fn walk(&mut self, steps: i64) {
		self.view.walk(steps);
	}

	/// Walks the view back to its initial rotation.
	pub fn restore_walking(&mut self) {
		self.view.restore_walking();
	}

	/// Writes `value` at the view's current `index`.
	///
	/// The write is only legal when `value` is the very object the source
	/// holds at the same original index; since the view already mirrors that
	/// object the write never changes the content.
	///
	/// # Errors
	///
	/// - [`WalkingError::IndexOutOfRange`] for an invalid index
	/// - [`WalkingError::ValueMismatch`] when `value` is not identical to the
	///   source value
	pub fn set(&mut self, index: isize, value: T) -> Result<(), WalkingError>
	where
		T: Identity,
	{
		let original_index = self.view.get_original_index(index)?;
		let proxied_value = self.source.get_mem_value(original_index as isize)?;

		if !proxied_value.is_identical(&value) {
			return Err(WalkingError::ValueMismatch {
				index,
				original_index,
			});
		}

		self.view.set(index, value)?;
		Ok(())
	}
}

impl<T> Deref for ContentViewMut<'_, T> {
	type Target = WalkingDeque<T>;

	fn deref(&self) -> &Self::Target {
		self.view
	}
}

/// A source walking deque together with its content views.
///
/// Each content view starts as a copy of the source's unwalked content with
/// no walking memory, walks independently afterwards, and receives every value
/// the source writes, at the slot holding the same original index.
pub struct ProxiedDeque<T> {
	owner: u64,
	source: WalkingDeque<T>,
	views: Vec<ContentView<T>>,
}

impl<T> ProxiedDeque<T> {
	/// Wraps `source`; no views exist yet.
	pub fn new(source: WalkingDeque<T>) -> Self {
		Self {
			owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
			source,
			views: Vec::new(),
		}
	}

	/// Returns the source deque.
	pub fn source(&self) -> &WalkingDeque<T> {
		&self.source
	}

	/// Consumes the owner and returns the source deque.
	pub fn into_source(self) -> WalkingDeque<T> {
		self.source
	}

	/// Walks the source; views are not affected.
	pub fn walk(&mut self, steps: i64) {
		self.source.walk(steps);
	}

	/// Walks the source back to its initial rotation.
	pub fn restore_walking(&mut self) {
		self.source.restore_walking();
	}

	/// Replaces the source value at the current `index` and propagates the new
	/// value to every view, returning the old source value.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::IndexOutOfRange`] for an invalid index.
	pub fn set(&mut self, index: isize, value: T) -> Result<T, WalkingError>
	where
		T: Clone,
	{
		let original_index = self.source.get_original_index(index)?;

		for view in &mut self.views {
			view.deque.set_mem_value(original_index, value.clone());
		}

		self.source.set(index, value)
	}

	/// Derives a new content view from the source.
	pub fn content_view(&mut self) -> ViewId
	where
		T: Clone,
	{
		let id = self.view_id(self.views.len());
		self.views.push(ContentView {
			deque: self.source.fresh_copy(),
		});
		id
	}

	/// Derives a sibling of `of`: a new view of the same source, never a view
	/// of the view.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::UnknownView`] if `of` does not belong here.
	pub fn sibling_view(&mut self, of: ViewId) -> Result<ViewId, WalkingError>
	where
		T: Clone,
	{
		self.view(of)?;
		Ok(self.content_view())
	}

	/// Returns read access to a view.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::UnknownView`] if `id` does not belong here.
	pub fn view(&self, id: ViewId) -> Result<&ContentView<T>, WalkingError> {
		self.views.get(self.local_index(id)?).ok_or(WalkingError::UnknownView(id))
	}

	/// Returns mutable access to a view.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::UnknownView`] if `id` does not belong here.
	pub fn view_mut(&mut self, id: ViewId) -> Result<ContentViewMut<'_, T>, WalkingError> {
		let index = self.local_index(id)?;
		let view = self.views.get_mut(index).ok_or(WalkingError::UnknownView(id))?;

		Ok(ContentViewMut {
			source: &self.source,
			view: &mut view.deque,
		})
	}

	/// Number of views derived so far.
	pub fn view_count(&self) -> usize {
		self.views.len()
	}

	/// Iterates the views with their handles.
	pub fn views(&self) -> impl Iterator<Item = (ViewId, &ContentView<T>)> {
		self.views.iter().enumerate().map(|(i, view)| (self.view_id(i), view))
	}

	fn view_id(&self, index: usize) -> ViewId {
		ViewId {
			owner: self.owner,
			index,
		}
	}

	fn local_index(&self, id: ViewId) -> Result<usize, WalkingError> {
		if id.owner == self.owner {
			Ok(id.index)
		} else {
			Err(WalkingError::UnknownView(id))
		}
	}
}

impl<T: Clone> Clone for ProxiedDeque<T> {
	fn clone(&self) -> Self {
		Self {
			owner: self.owner,
			source: self.source.clone(),
			views: self
				.views
				.iter()
				.map(|view| ContentView {
					deque: view.deque.clone(),
				})
				.collect(),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for ProxiedDeque<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProxiedDeque")
			.field("source", &self.source)
			.field("views", &self.views)
			.finish()
	}
}
