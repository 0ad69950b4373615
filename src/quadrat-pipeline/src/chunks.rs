use std::array;

/// Groups a flat slice into fixed-arity records of optional values.
///
/// Every `N` consecutive items form one record; a short final group
/// is padded with `None`. An empty slice yields no records.
///
/// ```
/// use quadrat_pipeline::fixed_chunks;
///
/// let records: Vec<[Option<u32>; 3]> = fixed_chunks(&[1, 2, 3, 4]).collect();
/// assert_eq!(
///     records,
///     [[Some(1), Some(2), Some(3)], [Some(4), None, None]]
/// );
/// ```
pub fn fixed_chunks<T: Clone, const N: usize>(
    items: &[T],
) -> impl Iterator<Item = [Option<T>; N]> + '_ {
    items
        .chunks(N)
        .map(|chunk| array::from_fn(|i| chunk.get(i).cloned()))
}
