//! The walking deque.

use std::{collections::VecDeque, fmt, ops::Index};

use crate::WalkingError;

/// A fixed-length deque with custom rotation ("walking") and rotation memory.
///
/// The length is set at construction and never changes: the type exposes no
/// operation that could insert or remove values, since every original-index
/// computation relies on it. Values can still be replaced in place with
/// [`set`](Self::set), which keeps the walking memory untouched.
///
/// # Walking Memory
///
/// - `total_walking`: net amount of steps walked so far (signed, kept as an
///   `i128` so that no sequence of `i64` walks can overflow it)
/// - `loops_no`: `total_walking / length`, the (possibly fractional and
///   negative) number of loops walked around the content
///
/// # Examples
///
/// ```
/// use bionicblue_wdeque::WalkingDeque;
///
/// let mut deque = WalkingDeque::new([0, 1, 2, 3])?;
/// deque.walk(3);
/// deque.walk(-1);
///
/// assert_eq!(deque.total_walking(), 2);
/// assert_eq!(deque.loops_no(), 0.5);
///
/// // one more step completes a loop
/// deque.walk(1);
/// assert_eq!(deque.peek_loops_no(1), 1.0);
///
/// deque.restore_walking();
/// assert_eq!(deque.to_vec(), vec![0, 1, 2, 3]);
/// # Ok::<(), bionicblue_wdeque::WalkingError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WalkingDeque<T> {
	items: VecDeque<T>,
	length: usize,
	total_walking: i128,
}

impl<T> WalkingDeque<T> {
	/// Creates a walking deque from a non-empty collection of values.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::Empty`] if `items` yields no values.
	pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, WalkingError> {
		let items: VecDeque<T> = items.into_iter().collect();
		let length = items.len();

		if length == 0 {
			return Err(WalkingError::Empty);
		}

		Ok(Self {
			items,
			length,
			total_walking: 0,
		})
	}

	/// Creates a single-value walking deque; walking it never changes its
	/// content, but still counts loops.
	pub fn from_single(value: T) -> Self {
		Self {
			items: VecDeque::from([value]),
			length: 1,
			total_walking: 0,
		}
	}

	/// Walks the deque `steps` steps, bringing the value `steps` positions
	/// ahead to the front. Negative steps walk backwards.
	#[inline]
	pub fn walk(&mut self, steps: i64) {
		self.rotate(i128::from(steps));
		self.total_walking = self.total_walking.saturating_add(i128::from(steps));
	}

	/// Walks the deque back to its construction-time rotation.
	pub fn restore_walking(&mut self) {
		self.rotate(-self.walked_offset());
		self.total_walking = 0;
	}

	/// Net amount of steps walked since construction.
	#[inline]
	pub fn total_walking(&self) -> i128 {
		self.total_walking
	}

	/// Number of loops walked around the content (`total_walking / length`).
	#[inline]
	pub fn loops_no(&self) -> f64 {
		self.total_walking as f64 / self.length as f64
	}

	/// Returns what [`loops_no`](Self::loops_no) would be after walking
	/// `steps` steps, without walking.
	///
	/// Gameplay code uses `peek_loops_no(1) == 1.0` to detect that the next
	/// step completes the first loop.
	#[inline]
	pub fn peek_loops_no(&self, steps: i64) -> f64 {
		self.total_walking.saturating_add(i128::from(steps)) as f64 / self.length as f64
	}

	/// Returns the number of values (fixed at construction).
	#[inline]
	pub fn len(&self) -> usize {
		self.length
	}

	/// Always `false`: a walking deque cannot be empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns the value currently at the front.
	#[inline]
	pub fn front(&self) -> &T {
		&self.items[0]
	}

	/// Returns the value at the current `index`; negative indices count from
	/// the back.
	pub fn get(&self, index: isize) -> Option<&T> {
		self.resolve(index).ok().map(|i| &self.items[i])
	}

	/// Returns the value that would be at `original_index` had the deque never
	/// walked.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::IndexOutOfRange`] unless
	/// `-length <= original_index < length`.
	pub fn get_mem_value(&self, original_index: isize) -> Result<&T, WalkingError> {
		let original = self.resolve(original_index)?;
		Ok(&self.items[self.current_index_of(original)])
	}

	/// Returns the original index of the value currently at `index`.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::IndexOutOfRange`] unless
	/// `-length <= index < length`.
	pub fn get_original_index(&self, index: isize) -> Result<usize, WalkingError> {
		let current = self.resolve(index)?;
		Ok(self.original_index_of(current))
	}

	/// Original index of the value at the front; `0` right after every
	/// completed loop.
	#[inline]
	pub fn index_of_first(&self) -> usize {
		self.original_index_of(0)
	}

	/// Replaces the value at the current `index`, returning the old one.
	///
	/// Replacing a passenger keeps the vehicle's mileage: the walking memory
	/// is left untouched.
	///
	/// # Errors
	///
	/// Returns [`WalkingError::IndexOutOfRange`] for an invalid index.
	pub fn set(&mut self, index: isize, value: T) -> Result<T, WalkingError> {
		let current = self.resolve(index)?;
		Ok(std::mem::replace(&mut self.items[current], value))
	}

	/// Iterates the values in their current order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
		self.items.iter()
	}

	/// Iterates the values in their original (unwalked) order.
	pub fn iter_unwalked(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
		(0..self.length).map(move |original| &self.items[self.current_index_of(original)])
	}

	/// Maps an index in `[-length, length)` to a position in `items`.
	pub(crate) fn resolve(&self, index: isize) -> Result<usize, WalkingError> {
		let length = self.length as isize;

		if !(-length..length).contains(&index) {
			return Err(WalkingError::IndexOutOfRange {
				index,
				length: self.length,
			});
		}

		Ok(index.rem_euclid(length) as usize)
	}

	/// Replaces the value at an already validated original index.
	pub(crate) fn set_mem_value(&mut self, original: usize, value: T) {
		let current = self.current_index_of(original);
		self.items[current] = value;
	}

	#[inline]
	fn rotate(&mut self, steps: i128) {
		let shift = steps.rem_euclid(self.length as i128) as usize;
		self.items.rotate_left(shift);
	}

	#[inline]
	fn original_index_of(&self, current: usize) -> usize {
		(current as i128 + self.walked_offset()).rem_euclid(self.length as i128) as usize
	}

	#[inline]
	fn current_index_of(&self, original: usize) -> usize {
		(original as i128 - self.walked_offset()).rem_euclid(self.length as i128) as usize
	}

	/// `total_walking` reduced modulo the length.
	#[inline]
	fn walked_offset(&self) -> i128 {
		self.total_walking.rem_euclid(self.length as i128)
	}
}

impl<T: Clone> WalkingDeque<T> {
	/// Collects the values in their current order.
	pub fn to_vec(&self) -> Vec<T> {
		self.items.iter().cloned().collect()
	}

	/// Collects the values in their original order, as if the deque had never
	/// walked.
	pub fn unwalked(&self) -> Vec<T> {
		self.iter_unwalked().cloned().collect()
	}

	/// Creates a fresh deque (no walking memory) holding the values in
	/// original order reversed.
	///
	/// # Examples
	///
	/// ```
	/// use bionicblue_wdeque::WalkingDeque;
	///
	/// let mut deque = WalkingDeque::new([0, 1, 2, 3])?;
	/// deque.walk(1);
	///
	/// let reversed = deque.reversed();
	/// assert_eq!(reversed.to_vec(), vec![3, 2, 1, 0]);
	/// assert_eq!(reversed.total_walking(), 0);
	/// # Ok::<(), bionicblue_wdeque::WalkingError>(())
	/// ```
	pub fn reversed(&self) -> Self {
		Self {
			items: self.iter_unwalked().rev().cloned().collect(),
			length: self.length,
			total_walking: 0,
		}
	}

	/// Creates a fresh deque (no walking memory) holding the values in
	/// original order.
	pub fn fresh_copy(&self) -> Self {
		Self {
			items: self.iter_unwalked().cloned().collect(),
			length: self.length,
			total_walking: 0,
		}
	}
}

impl<T> Index<usize> for WalkingDeque<T> {
	type Output = T;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		&self.items[index]
	}
}

impl<T> TryFrom<Vec<T>> for WalkingDeque<T> {
	type Error = WalkingError;

	fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl<'a, T> IntoIterator for &'a WalkingDeque<T> {
	type Item = &'a T;
	type IntoIter = std::collections::vec_deque::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: fmt::Debug> fmt::Debug for WalkingDeque<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "WalkingDeque(")?;
		f.debug_list().entries(self.items.iter()).finish()?;
		write!(f, ", total_walking={})", self.total_walking)
	}
}

impl<T: fmt::Display> fmt::Display for WalkingDeque<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "WalkingDeque([")?;
		for (i, item) in self.items.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{item}")?;
		}
		write!(f, "])")
	}
}
