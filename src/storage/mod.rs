use core::alloc::Layout;
use core::fmt;
use core::mem::{align_of, size_of};
use core::ptr::NonNull;
use core::slice;

use alloc::alloc::{alloc_zeroed, dealloc};

use crate::error::StorageError;

use self::utils::array_layout;

pub(crate) mod utils;

/// The exclusive owner of a heap block of `f32` slots.
///
/// Every slot is initialized: blocks are allocated zeroed, so the whole
/// capacity may be viewed as a slice. A capacity of zero never owns an
/// allocation and uses a dangling pointer.
pub(crate) struct RawStorage {
    data: NonNull<f32>,
    capacity: usize,
}

impl RawStorage {
    pub const EMPTY: Self = Self {
        data: NonNull::dangling(),
        capacity: 0,
    };

    pub fn try_alloc(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::EMPTY);
        }
        let layout = array_layout(capacity)?;
        let Some(data) = NonNull::new(unsafe { alloc_zeroed(layout) }) else {
            return Err(StorageError::AllocError);
        };
        Ok(Self {
            data: data.cast(),
            capacity,
        })
    }

    /// Allocate a new block of `capacity` slots holding a copy of the
    /// first `keep` elements of this one. The current block is untouched,
    /// so a failed allocation leaves the owner intact.
    pub fn try_relocate(&self, capacity: usize, keep: usize) -> Result<Self, StorageError> {
        let keep = keep.min(capacity).min(self.capacity);
        let mut next = Self::try_alloc(capacity)?;
        next.as_mut_slice()[..keep].copy_from_slice(&self.as_slice()[..keep]);
        Ok(next)
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut f32 {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: the block holds `capacity` initialized values, or is
        // dangling with a capacity of zero
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.capacity) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.capacity) }
    }
}

impl fmt::Debug for RawStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Drop for RawStorage {
    fn drop(&mut self) {
        if self.capacity > 0 {
            unsafe {
                // the layout was validated when the block was allocated
                let layout = Layout::from_size_align_unchecked(
                    self.capacity * size_of::<f32>(),
                    align_of::<f32>(),
                );
                dealloc(self.data.as_ptr().cast(), layout);
            }
        }
    }
}

// The block is uniquely owned, the same as a `Box<[f32]>`.
unsafe impl Send for RawStorage {}

unsafe impl Sync for RawStorage {}

#[cfg(test)]
mod tests {
    use super::RawStorage;

    #[test]
    fn alloc_zeroed_block() {
        let storage = RawStorage::try_alloc(6).expect("alloc error");
        assert_eq!(storage.capacity(), 6);
        assert_eq!(storage.as_slice(), &[0.0; 6]);
    }

    #[test]
    fn alloc_empty_block() {
        let storage = RawStorage::try_alloc(0).expect("alloc error");
        assert_eq!(storage.capacity(), 0);
        assert!(storage.as_slice().is_empty());
    }

    #[test]
    fn relocate_keeps_prefix() {
        let mut storage = RawStorage::try_alloc(3).expect("alloc error");
        storage.as_mut_slice().copy_from_slice(&[1.0, 2.0, 3.0]);
        let grown = storage.try_relocate(5, 2).expect("alloc error");
        assert_eq!(grown.as_slice(), &[1.0, 2.0, 0.0, 0.0, 0.0]);
        let shrunk = storage.try_relocate(2, 3).expect("alloc error");
        assert_eq!(shrunk.as_slice(), &[1.0, 2.0]);
        assert_ne!(grown.as_ptr(), storage.as_ptr());
    }
}
