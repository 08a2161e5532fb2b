use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::{BarDatum, BarId};
use crate::error::{ChartError, ChartResult};

pub(super) fn validate_max_value(max_value: f64) -> ChartResult<()> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(ChartError::InvalidScale { max_value });
    }
    Ok(())
}

pub(super) fn validate_bars(bars: &[BarDatum]) -> ChartResult<()> {
    index_bars(bars.to_vec()).map(|_| ())
}

/// Indexes bars by id in display order, rejecting duplicates and
/// non-finite values.
pub(super) fn index_bars(bars: Vec<BarDatum>) -> ChartResult<IndexMap<BarId, BarDatum>> {
    let mut indexed = IndexMap::with_capacity(bars.len());
    for bar in bars {
        bar.validate()?;
        let id = bar.id;
        if indexed.insert(id, bar).is_some() {
            return Err(ChartError::DuplicateBarId(id));
        }
    }
    Ok(indexed)
}

/// Largest bar value, handy for hosts deriving a max value from data.
#[must_use]
pub fn max_bar_value(bars: &[BarDatum]) -> Option<f64> {
    bars.iter()
        .map(|bar| OrderedFloat(bar.value))
        .max()
        .map(OrderedFloat::into_inner)
}
