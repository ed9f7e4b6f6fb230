//! Growth behavior for buffers which have exceeded their available storage.

use crate::storage::utils::MIN_NON_ZERO_CAP;

/// The policy used to pick a new capacity when a buffer must grow.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Growth {
    /// Never request extra capacity: after growing, the capacity is exactly
    /// the requested length. Appending `n` values one at a time therefore
    /// copies `O(n^2)` elements.
    #[default]
    Exact,
    /// Double the previous capacity, or request the minimum if that is larger
    Doubling,
}

impl Growth {
    /// Calculate the next capacity to request from the allocator
    #[inline]
    pub fn next_capacity(self, prev: usize, minimum: usize) -> usize {
        match self {
            Self::Exact => minimum,
            Self::Doubling => {
                let preferred = if prev == 0 {
                    MIN_NON_ZERO_CAP
                } else {
                    prev.saturating_mul(2)
                };
                preferred.max(minimum)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Growth;

    #[test]
    fn check_exact_growth() {
        assert_eq!(Growth::Exact.next_capacity(0, 1), 1);
        assert_eq!(Growth::Exact.next_capacity(4, 5), 5);
        assert_eq!(Growth::default(), Growth::Exact);
    }

    #[test]
    fn check_doubling_growth() {
        assert_eq!(Growth::Doubling.next_capacity(0, 1), 4);
        assert_eq!(Growth::Doubling.next_capacity(4, 5), 8);
        assert_eq!(Growth::Doubling.next_capacity(4, 20), 20);
        assert_eq!(Growth::Doubling.next_capacity(usize::MAX, usize::MAX), usize::MAX);
    }
}
