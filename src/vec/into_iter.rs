use core::iter::FusedIterator;
use core::ops::Range;

use crate::storage::RawStorage;

/// An iterator which takes ownership of the elements of a `FloatVec`.
#[derive(Debug)]
pub struct IntoIter {
    remain: Range<usize>,
    buf: RawStorage,
}

impl IntoIter {
    pub(super) fn new(buf: RawStorage, length: usize) -> Self {
        Self {
            remain: Range {
                start: 0,
                end: length,
            },
            buf,
        }
    }

    /// The remaining elements as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.buf.as_slice()[self.remain.clone()]
    }

    /// The remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.buf.as_mut_slice()[self.remain.clone()]
    }

    /// The number of remaining elements.
    pub const fn len(&self) -> usize {
        self.remain.end - self.remain.start
    }

    /// Check if all elements have been consumed.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsRef<[f32]> for IntoIter {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl AsMut<[f32]> for IntoIter {
    fn as_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

impl Iterator for IntoIter {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.next()?;
        Some(self.buf.as_slice()[index])
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.remain.next_back()?;
        Some(self.buf.as_slice()[index])
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
