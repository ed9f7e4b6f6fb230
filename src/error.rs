//! Error handling.

use core::alloc::LayoutError;
use core::fmt;

/// An enumeration of errors raised while managing the backing allocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed
    AllocError,
    /// The requested number of elements cannot be represented
    CapacityLimit,
    /// The provided layout was not allocatable
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// An error raised by `FloatVec` operations. Every operation checks its
/// arguments before modifying the buffer, so a returned error means the
/// buffer is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// A size was negative, or zero where a positive size is required
    InvalidSize,
    /// An element index was outside of the valid range for the operation
    IndexOutOfRange,
    /// An element was requested from an empty buffer
    Empty,
    /// The backing storage could not be allocated
    Storage(StorageError),
}

impl VecError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSize => "Invalid size",
            Self::IndexOutOfRange => "Invalid element index",
            Self::Empty => "Buffer is empty",
            Self::Storage(err) => err.as_str(),
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StorageError> for VecError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<LayoutError> for VecError {
    fn from(err: LayoutError) -> Self {
        Self::Storage(StorageError::LayoutError(err))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StorageError, VecError};
    use core::alloc::Layout;

    #[test]
    #[should_panic(expected = "Invalid element index")]
    fn index_error_panic() {
        VecError::IndexOutOfRange.panic();
    }

    #[test]
    #[should_panic(expected = "Layout error")]
    fn layout_error_panic() {
        let err = Layout::from_size_align(0, 3).expect_err("expected layout error");
        let a = VecError::from(err);
        a.panic();
    }

    #[test]
    fn storage_error_display() {
        let err = VecError::from(StorageError::AllocError);
        assert_eq!(err, VecError::Storage(StorageError::AllocError));
        assert_eq!(format!("{}", err), "Allocation error");
        assert_eq!(format!("{}", VecError::InvalidSize), "Invalid size");
    }
}
