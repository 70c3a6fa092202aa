#![forbid(unsafe_code)]

//! Mapping between flattened row indices and group indices.

/// Index of the group that owns `start_row`.
///
/// Walks the groups accumulating row counts and returns the first group
/// whose cumulative end exceeds `start_row`. A start past every group maps
/// to the last group; an empty group list maps to 0.
///
/// ```
/// use emojipick_grid::active_group;
///
/// let counts = [2, 3, 1];
/// assert_eq!(active_group(0, counts), 0);
/// assert_eq!(active_group(2, counts), 1);
/// assert_eq!(active_group(5, counts), 2);
/// assert_eq!(active_group(99, counts), 2);
/// ```
#[must_use]
pub fn active_group<I>(start_row: usize, row_counts: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut cumulative = 0usize;
    let mut last = 0usize;
    for (index, count) in row_counts.into_iter().enumerate() {
        last = index;
        cumulative = cumulative.saturating_add(count);
        if cumulative > start_row {
            return index;
        }
    }
    last
}

/// First flattened row of group `index` (the sum of the preceding counts).
#[must_use]
pub fn group_start<I>(index: usize, row_counts: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    row_counts.into_iter().take(index).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rows_to_groups() {
        let counts = [2, 3, 1];
        assert_eq!(active_group(0, counts), 0);
        assert_eq!(active_group(1, counts), 0);
        assert_eq!(active_group(2, counts), 1);
        assert_eq!(active_group(4, counts), 1);
        assert_eq!(active_group(5, counts), 2);
    }

    #[test]
    fn out_of_range_maps_to_last_group() {
        assert_eq!(active_group(6, [2, 3, 1]), 2);
        assert_eq!(active_group(usize::MAX, [2, 3, 1]), 2);
    }

    #[test]
    fn empty_groups_map_to_zero() {
        assert_eq!(active_group(0, []), 0);
        assert_eq!(active_group(10, []), 0);
    }

    #[test]
    fn group_starts() {
        let counts = [2, 3, 1];
        assert_eq!(group_start(0, counts), 0);
        assert_eq!(group_start(1, counts), 2);
        assert_eq!(group_start(2, counts), 5);
        assert_eq!(group_start(3, counts), 6);
    }
}
