// File: crates/chart-core/src/series.rs
// Summary: Series model: ordered integer values, replaced wholesale.

use crate::error::{ChartError, ChartResult};

/// Ordered integer values; index order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    values: Vec<i32>,
}

impl Series {
    /// Construct a series, rejecting empty input.
    pub fn try_new(values: impl Into<Vec<i32>>) -> ChartResult<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[i32] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// `(min, max)` of the values, or `None` for an empty series.
    pub fn min_max(&self) -> Option<(i32, i32)> {
        min_max(&self.values)
    }
}

pub(crate) fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
