/// Construct a [`FloatVec`](crate::FloatVec) from a list of values, or from a
/// value and a positive count.
///
/// ```
/// # use float_vec::float_vec;
/// let buf = float_vec![1.0, 2.0, 3.0];
/// assert_eq!(buf.capacity(), 3);
/// assert_eq!(float_vec![0.5; 2], [0.5, 0.5]);
/// assert!(float_vec![].is_empty());
/// ```
#[macro_export]
macro_rules! float_vec {
    () => (
        $crate::vec::FloatVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::FloatVec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::FloatVec::from_slice(&[$($x),+])
    );
}
