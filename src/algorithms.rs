use ncollide2d::na::RealField;

/// Finds the index of the last element in a sorted slice which is less than or equal to the test
/// value. Values below the first element resolve to index 0, so the result is always a valid
/// index for a non-empty slice.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    slice
        .partition_point(|v| *v <= test_value)
        .saturating_sub(1)
}

/// Index of the interval `[slice[i], slice[i + 1]]` used to evaluate a piecewise function at the
/// test value. Values outside the slice map to the first or last interval.
pub fn interval_index<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    preceding_index_search(slice, test_value).min(slice.len().saturating_sub(2))
}
