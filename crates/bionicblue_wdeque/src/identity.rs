//! Identity comparison used to authorize content view writes.

use std::{rc::Rc, sync::Arc};

/// Values that can tell whether they are *the same object*, not merely equal.
///
/// Shared pointers compare by address. Plain value types have no identity of
/// their own, so for them identity is equality.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
///
/// use bionicblue_wdeque::Identity;
///
/// let a = Rc::new(String::from("frame"));
/// let b = Rc::new(String::from("frame"));
///
/// assert!(a.is_identical(&a.clone()));
/// assert!(!a.is_identical(&b));
/// assert!(7usize.is_identical(&7));
/// ```
pub trait Identity {
	/// Returns `true` when `self` and `other` are the same object.
	fn is_identical(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Rc<T> {
	#[inline]
	fn is_identical(&self, other: &Self) -> bool {
		Rc::ptr_eq(self, other)
	}
}

impl<T: ?Sized> Identity for Arc<T> {
	#[inline]
	fn is_identical(&self, other: &Self) -> bool {
		Arc::ptr_eq(self, other)
	}
}

impl<T: ?Sized> Identity for &T {
	#[inline]
	fn is_identical(&self, other: &Self) -> bool {
		std::ptr::eq(*self, *other)
	}
}

macro_rules! impl_value_identity {
	($($ty:ty),* $(,)?) => {
		$(
			impl Identity for $ty {
				#[inline]
				fn is_identical(&self, other: &Self) -> bool {
					self == other
				}
			}
		)*
	};
}

impl_value_identity!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, char);
