//! Generator of numbers series.
use crate::field::FieldValue;

/// Generator (iterator) state.
///
/// Produces `from`, `from + step`, `from + 2 * step`, ... while value doesn't exceed `to`.
/// The last produced value isn't guaranteed to be equal to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep {
    max: FieldValue,
    step: FieldValue,
    next: Option<FieldValue>,
}

impl SeriesWithStep {
    /// Empty series is produced if `from` is greater than `to` or `step` is zero.
    #[inline]
    pub(crate) fn new(from: FieldValue, to: FieldValue, step: FieldValue) -> Self {
        let next = if from > to || step == 0 { None } else { Some(from) };

        Self { max: to, step, next }
    }
}

impl Iterator for SeriesWithStep {
    type Item = FieldValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(self.step).filter(|next| *next <= self.max);
        Some(current)
    }
}
