//! Linear search helpers

/// First index of `target` in `values`, or -1 when absent.
pub fn index_of<S: AsRef<str>>(values: &[S], target: &str) -> isize {
    values
        .iter()
        .position(|candidate| candidate.as_ref() == target)
        .map_or(-1, |index| index as isize)
}
