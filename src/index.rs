//! Integer types accepted as sizes, capacities and element positions.

use core::fmt::{Debug, Display};

/// Types which may be used to specify a size or an element position.
///
/// Signed types are accepted so that a negative request can be rejected
/// with an error rather than being unrepresentable.
pub trait Index: Copy + Clone + Debug + Display + PartialEq + PartialOrd + Send + Sync + 'static {
    /// The value as a `usize`, or `None` if it is negative or too large
    fn to_index(self) -> Option<usize>;
}

macro_rules! impl_index {
    ($($ty:ty),+) => {
        $(
            impl Index for $ty {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )+
    };
}

impl_index!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, isize);

impl Index for usize {
    #[inline]
    fn to_index(self) -> Option<usize> {
        Some(self)
    }
}
