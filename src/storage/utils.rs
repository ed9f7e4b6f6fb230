use core::alloc::Layout;

use crate::error::StorageError;

/// The first capacity requested by a doubling buffer.
pub const MIN_NON_ZERO_CAP: usize = 4;

#[inline]
pub fn array_layout(count: usize) -> Result<Layout, StorageError> {
    Layout::array::<f32>(count).map_err(StorageError::LayoutError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_array_layout() {
        let layout = array_layout(3).expect("layout error");
        assert_eq!(layout.size(), 12);
        assert_eq!(layout.align(), 4);
        assert!(matches!(
            array_layout(usize::MAX),
            Err(StorageError::LayoutError(_))
        ));
    }
}
