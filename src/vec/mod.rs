//! The growable `f32` buffer.

use core::fmt;
use core::mem;
use core::ops;
use core::slice;

use crate::capacity::Growth;
use crate::error::{StorageError, VecError};
use crate::index::Index;
use crate::storage::RawStorage;

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

mod into_iter;

#[cold]
#[inline(never)]
fn index_panic() -> ! {
    VecError::IndexOutOfRange.panic()
}

/// Convert a requested size, rejecting negative values.
#[inline]
fn to_size(size: impl Index) -> Result<usize, VecError> {
    size.to_index().ok_or(VecError::InvalidSize)
}

/// Convert a requested size, rejecting negative and zero values.
#[inline]
fn to_positive_size(size: impl Index) -> Result<usize, VecError> {
    match size.to_index() {
        Some(size) if size > 0 => Ok(size),
        _ => Err(VecError::InvalidSize),
    }
}

/// A growable, contiguous buffer of `f32` values.
///
/// The buffer tracks its length (the number of valid elements) separately
/// from its capacity (the number of allocated slots). With the default
/// [`Growth::Exact`] policy every reallocation produces a capacity equal to
/// the length that was requested, never more.
///
/// Operations taking a size or position accept any integer type, so that
/// negative requests may be rejected. Every fallible operation is offered as
/// a `try_` method returning a [`VecError`], and as a method which panics
/// with the same error. A failed operation leaves the buffer unchanged.
pub struct FloatVec {
    storage: RawStorage,
    length: usize,
    growth: Growth,
}

impl FloatVec {
    /// Constructs a new, empty `FloatVec`.
    ///
    /// The buffer will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::FloatVec;
    /// let buf = FloatVec::new();
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::EMPTY,
            length: 0,
            growth: Growth::Exact,
        }
    }

    /// Constructs a buffer of `len` zeroes. The length must be positive.
    pub fn try_with_len(len: impl Index) -> Result<Self, VecError> {
        Self::try_from_elem(0.0, len)
    }

    /// Constructs a buffer of `len` zeroes, panicking if the length is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::FloatVec;
    /// let buf = FloatVec::with_len(3);
    /// assert_eq!(buf, [0.0, 0.0, 0.0]);
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    pub fn with_len(len: impl Index) -> Self {
        match Self::try_with_len(len) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a buffer of `len` copies of `value`. The length must be positive.
    pub fn try_from_elem(value: f32, len: impl Index) -> Result<Self, VecError> {
        let len = to_positive_size(len)?;
        let mut storage = RawStorage::try_alloc(len)?;
        storage.as_mut_slice().fill(value);
        Ok(Self {
            storage,
            length: len,
            growth: Growth::Exact,
        })
    }

    /// Constructs a buffer of `len` copies of `value`, panicking if the length
    /// is not positive.
    pub fn from_elem(value: f32, len: impl Index) -> Self {
        match Self::try_from_elem(value, len) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a buffer holding a copy of `data`, with a capacity equal
    /// to its length.
    pub fn try_from_slice(data: &[f32]) -> Result<Self, VecError> {
        let mut storage = RawStorage::try_alloc(data.len())?;
        storage.as_mut_slice().copy_from_slice(data);
        Ok(Self {
            storage,
            length: data.len(),
            growth: Growth::Exact,
        })
    }

    /// Constructs a buffer holding a copy of `data`.
    pub fn from_slice(data: &[f32]) -> Self {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Select the growth policy applied when this buffer must reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::{FloatVec, Growth};
    /// let mut buf = FloatVec::new().with_growth(Growth::Doubling);
    /// buf.push(1.0);
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    #[inline]
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// The growth policy of this buffer.
    #[inline]
    pub fn growth(&self) -> Growth {
        self.growth
    }
}

impl FloatVec {
    /// A raw pointer to the first element. The pointer is dangling when
    /// nothing has been allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.storage.as_ptr()
    }

    /// A mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut f32 {
        self.storage.as_mut_ptr()
    }

    /// The valid elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.storage.as_slice()[..self.length]
    }

    /// The valid elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.storage.as_mut_slice()[..self.length]
    }

    /// The number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the buffer holds no valid elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// An iterator over the valid elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.as_slice().iter()
    }

    /// A mutable iterator over the valid elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, f32> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    fn check_index(&self, index: impl Index) -> Result<usize, VecError> {
        match index.to_index() {
            Some(index) if index < self.length => Ok(index),
            _ => Err(VecError::IndexOutOfRange),
        }
    }

    /// Read the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::{float_vec, VecError};
    /// let buf = float_vec![1.0, 2.0, 3.0];
    /// assert_eq!(buf.at(2), Ok(3.0));
    /// assert_eq!(buf.at(-1), Err(VecError::IndexOutOfRange));
    /// ```
    #[inline]
    pub fn at(&self, index: impl Index) -> Result<f32, VecError> {
        let index = self.check_index(index)?;
        Ok(self.storage.as_slice()[index])
    }

    /// Get a mutable reference to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: impl Index) -> Result<&mut f32, VecError> {
        let index = self.check_index(index)?;
        Ok(&mut self.storage.as_mut_slice()[index])
    }

    /// Overwrite the element at `index`.
    #[inline]
    pub fn try_set(&mut self, index: impl Index, value: f32) -> Result<(), VecError> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Overwrite the element at `index`, panicking if it is out of range.
    #[inline]
    pub fn set(&mut self, index: impl Index, value: f32) {
        match self.try_set(index, value) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Ensure the storage has room for `length` elements, reallocating
    /// according to the growth policy. Elements up to the current length
    /// are carried over and all new slots are zeroed.
    fn try_grow_to(&mut self, length: usize) -> Result<(), VecError> {
        let capacity = self.storage.capacity();
        if length > capacity {
            let capacity = self.growth.next_capacity(capacity, length);
            self.storage = self.storage.try_relocate(capacity, self.length)?;
        }
        Ok(())
    }

    fn _try_resize(&mut self, new_len: usize, value: f32) -> Result<(), VecError> {
        let len = self.length;
        self.try_grow_to(new_len)?;
        if new_len > len {
            self.storage.as_mut_slice()[len..new_len].fill(value);
        }
        self.length = new_len;
        Ok(())
    }

    /// Change the length of the buffer, filling any new elements with zero.
    ///
    /// Shrinking never releases storage. Growing beyond the current
    /// capacity reallocates according to the growth policy.
    pub fn try_resize(&mut self, new_len: impl Index) -> Result<(), VecError> {
        self._try_resize(to_size(new_len)?, 0.0)
    }

    /// Change the length of the buffer, panicking if the length is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::FloatVec;
    /// let mut buf = FloatVec::with_len(2);
    /// buf.resize(5);
    /// assert_eq!(buf, [0.0; 5]);
    /// assert_eq!(buf.capacity(), 5);
    /// buf.resize(1);
    /// assert_eq!(buf.capacity(), 5);
    /// ```
    #[inline]
    pub fn resize(&mut self, new_len: impl Index) {
        match self.try_resize(new_len) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Change the length of the buffer, filling any new elements with `value`.
    pub fn try_resize_fill(&mut self, new_len: impl Index, value: f32) -> Result<(), VecError> {
        self._try_resize(to_size(new_len)?, value)
    }

    /// Change the length of the buffer, filling any new elements with `value`.
    #[inline]
    pub fn resize_fill(&mut self, new_len: impl Index, value: f32) {
        match self.try_resize_fill(new_len, value) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Ensure the capacity is at least `capacity` without changing the
    /// contents. Any reallocation is to exactly the requested capacity.
    pub fn try_reserve(&mut self, capacity: impl Index) -> Result<(), VecError> {
        let capacity = to_size(capacity)?;
        if capacity > self.storage.capacity() {
            self.storage = self.storage.try_relocate(capacity, self.length)?;
        }
        Ok(())
    }

    /// Ensure the capacity is at least `capacity`, panicking if it is negative.
    #[inline]
    pub fn reserve(&mut self, capacity: impl Index) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Reallocate the storage to exactly the current length. A buffer
    /// with no elements releases its storage.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), VecError> {
        if self.storage.capacity() > self.length {
            self.storage = self.storage.try_relocate(self.length, self.length)?;
        }
        Ok(())
    }

    /// Reallocate the storage to exactly the current length.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Insert `value` at position `index`, shifting all following elements
    /// to the right. An index equal to the length appends the value.
    pub fn try_insert(&mut self, index: impl Index, value: f32) -> Result<(), VecError> {
        let prev_len = self.length;
        let index = match index.to_index() {
            Some(index) if index <= prev_len => index,
            _ => return Err(VecError::IndexOutOfRange),
        };
        let Some(new_len) = prev_len.checked_add(1) else {
            return Err(StorageError::CapacityLimit.into());
        };
        self.try_grow_to(new_len)?;
        let data = self.storage.as_mut_slice();
        if index < prev_len {
            data.copy_within(index..prev_len, index + 1);
        }
        data[index] = value;
        self.length = new_len;
        Ok(())
    }

    /// Insert `value` at position `index`, panicking if the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use float_vec::float_vec;
    /// let mut buf = float_vec![1.0, 2.0, 3.0];
    /// buf.insert(1, 9.0);
    /// assert_eq!(buf, [1.0, 9.0, 2.0, 3.0]);
    /// ```
    pub fn insert(&mut self, index: impl Index, value: f32) {
        match self.try_insert(index, value) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Remove and return the element at `index`, shifting all following
    /// elements to the left. The capacity is unchanged.
    pub fn try_remove(&mut self, index: impl Index) -> Result<f32, VecError> {
        let len = self.length;
        let index = self.check_index(index)?;
        let data = self.storage.as_mut_slice();
        let result = data[index];
        // moves the `len - index - 1` elements following the removed one
        data.copy_within(index + 1..len, index);
        self.length = len - 1;
        Ok(result)
    }

    /// Remove and return the element at `index`, panicking if the index is
    /// out of range.
    pub fn remove(&mut self, index: impl Index) -> f32 {
        match self.try_remove(index) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Append a value to the end of the buffer.
    #[inline]
    pub fn try_push(&mut self, value: f32) -> Result<(), VecError> {
        self.try_insert(self.length, value)
    }

    /// Append a value to the end of the buffer.
    ///
    /// With the default growth policy each push beyond the capacity
    /// reallocates, so reserve ahead of a long sequence of pushes.
    #[inline]
    pub fn push(&mut self, value: f32) {
        match self.try_push(value) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Remove and return the last element, failing if the buffer is empty.
    pub fn try_pop(&mut self) -> Result<f32, VecError> {
        if self.length == 0 {
            return Err(VecError::Empty);
        }
        self.try_remove(self.length - 1)
    }

    /// Remove and return the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<f32> {
        self.try_pop().ok()
    }

    /// Remove all elements, retaining the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Exchange the contents and storage of two buffers without copying
    /// any elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Replace the contents of the buffer with a copy of `data`, reusing
    /// the current storage when it is large enough.
    pub fn try_assign(&mut self, data: &[f32]) -> Result<(), VecError> {
        let capacity = self.storage.capacity();
        if data.len() > capacity {
            let capacity = self.growth.next_capacity(capacity, data.len());
            // the previous contents are overwritten, so nothing is carried over
            self.storage = self.storage.try_relocate(capacity, 0)?;
        }
        self.storage.as_mut_slice()[..data.len()].copy_from_slice(data);
        self.length = data.len();
        Ok(())
    }

    /// Replace the contents of the buffer with a copy of `data`.
    pub fn assign(&mut self, data: &[f32]) {
        match self.try_assign(data) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Append a copy of `data` to the end of the buffer.
    pub fn try_extend_from_slice(&mut self, data: &[f32]) -> Result<(), VecError> {
        let len = self.length;
        let Some(new_len) = len.checked_add(data.len()) else {
            return Err(StorageError::CapacityLimit.into());
        };
        self.try_grow_to(new_len)?;
        self.storage.as_mut_slice()[len..new_len].copy_from_slice(data);
        self.length = new_len;
        Ok(())
    }

    /// Append a copy of `data` to the end of the buffer.
    pub fn extend_from_slice(&mut self, data: &[f32]) {
        match self.try_extend_from_slice(data) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    fn try_extend(&mut self, iter: &mut impl Iterator<Item = f32>) -> Result<(), VecError> {
        let (min_len, _) = iter.size_hint();
        let Some(needed) = self.length.checked_add(min_len) else {
            return Err(StorageError::CapacityLimit.into());
        };
        self.try_grow_to(needed)?;
        for value in iter {
            self.try_push(value)?;
        }
        Ok(())
    }
}

impl AsRef<[f32]> for FloatVec {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl AsMut<[f32]> for FloatVec {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        self.as_mut_slice()
    }
}

impl Clone for FloatVec {
    fn clone(&self) -> Self {
        match Self::try_from_slice(self.as_slice()) {
            Ok(inst) => inst.with_growth(self.growth),
            Err(error) => error.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source.as_slice());
    }
}

impl const_default::ConstDefault for FloatVec {
    const DEFAULT: Self = Self::new();
}

impl fmt::Debug for FloatVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl Default for FloatVec {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ops::Index<usize> for FloatVec {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => index_panic(),
        }
    }
}

impl ops::IndexMut<usize> for FloatVec {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => index_panic(),
        }
    }
}

impl Extend<f32> for FloatVec {
    #[inline]
    fn extend<A: IntoIterator<Item = f32>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<'a> Extend<&'a f32> for FloatVec {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a f32>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter().copied()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl FromIterator<f32> for FloatVec {
    #[inline]
    fn from_iter<A: IntoIterator<Item = f32>>(iter: A) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl From<&[f32]> for FloatVec {
    #[inline]
    fn from(data: &[f32]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<&[f32; N]> for FloatVec {
    #[inline]
    fn from(data: &[f32; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<[f32; N]> for FloatVec {
    #[inline]
    fn from(data: [f32; N]) -> Self {
        Self::from_slice(&data)
    }
}

impl From<alloc::vec::Vec<f32>> for FloatVec {
    #[inline]
    fn from(vec: alloc::vec::Vec<f32>) -> Self {
        Self::from_slice(&vec)
    }
}

impl From<FloatVec> for alloc::vec::Vec<f32> {
    #[inline]
    fn from(vec: FloatVec) -> Self {
        vec.as_slice().to_vec()
    }
}

impl IntoIterator for FloatVec {
    type Item = f32;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage, self.length)
    }
}

impl<'a> IntoIterator for &'a FloatVec {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a mut FloatVec {
    type Item = &'a mut f32;
    type IntoIter = slice::IterMut<'a, f32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl PartialEq for FloatVec {
    #[inline]
    fn eq(&self, other: &FloatVec) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl PartialEq<[f32]> for FloatVec {
    #[inline]
    fn eq(&self, other: &[f32]) -> bool {
        self.as_slice().eq(other)
    }
}

impl PartialEq<&[f32]> for FloatVec {
    #[inline]
    fn eq(&self, other: &&[f32]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<const N: usize> PartialEq<[f32; N]> for FloatVec {
    #[inline]
    fn eq(&self, other: &[f32; N]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<const N: usize> PartialEq<&[f32; N]> for FloatVec {
    #[inline]
    fn eq(&self, other: &&[f32; N]) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl PartialEq<FloatVec> for [f32] {
    #[inline]
    fn eq(&self, other: &FloatVec) -> bool {
        self.eq(other.as_slice())
    }
}

impl PartialEq<FloatVec> for &[f32] {
    #[inline]
    fn eq(&self, other: &FloatVec) -> bool {
        (*self).eq(other.as_slice())
    }
}

impl<const N: usize> PartialEq<FloatVec> for [f32; N] {
    #[inline]
    fn eq(&self, other: &FloatVec) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for FloatVec {
    /// Overwrite every allocated slot, including spare capacity, and
    /// reset the length to zero.
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(self.storage.as_mut_slice());
        self.length = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::FloatVec;
    use crate::{Growth, VecError};

    #[test]
    fn remove_last_moves_nothing() {
        let mut buf = float_vec![1.0, 2.0, 3.0];
        assert_eq!(buf.remove(2), 3.0);
        assert_eq!(buf, [1.0, 2.0]);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn remove_does_not_read_spare_slots() {
        let mut buf = FloatVec::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        buf.storage.as_mut_slice()[3] = 99.0;
        buf.length = 3;
        assert_eq!(buf.remove(0), 1.0);
        assert_eq!(buf, [2.0, 3.0]);
        assert_eq!(buf.storage.as_slice()[2], 3.0);
        assert_eq!(buf.storage.as_slice()[3], 99.0);
    }

    #[test]
    fn resize_rezeroes_within_capacity() {
        let mut buf = float_vec![1.0, 2.0, 3.0];
        buf.resize(1);
        buf.resize(3);
        assert_eq!(buf, [1.0, 0.0, 0.0]);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn failed_growth_leaves_buffer() {
        let mut buf = float_vec![1.0, 2.0];
        let ptr = buf.as_ptr();
        assert!(matches!(buf.try_resize(usize::MAX), Err(VecError::Storage(_))));
        assert!(matches!(buf.try_reserve(usize::MAX), Err(VecError::Storage(_))));
        assert_eq!(buf, [1.0, 2.0]);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.as_ptr(), ptr);
    }

    #[test]
    fn doubling_growth_push() {
        let mut res = [0usize; 10];
        let mut buf = FloatVec::new().with_growth(Growth::Doubling);
        for cap in res.iter_mut() {
            buf.push(1.0);
            *cap = buf.capacity();
        }
        assert_eq!(res, [4, 4, 4, 4, 8, 8, 8, 8, 16, 16]);
    }

    #[test]
    fn exact_growth_push() {
        let mut res = [0usize; 6];
        let mut buf = FloatVec::new();
        for cap in res.iter_mut() {
            buf.push(1.0);
            *cap = buf.capacity();
        }
        assert_eq!(res, [1, 2, 3, 4, 5, 6]);
    }
}
