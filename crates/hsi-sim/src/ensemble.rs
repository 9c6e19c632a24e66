use hsi_core::errors::{ErrorInfo, HsiError};

use crate::discretize::TimeSeries;

/// Averages per-run series into one ensemble trajectory.
///
/// The reduction is a commutative, associative sum-then-normalize, so any
/// execution or reduction order over the runs yields the same result. All
/// series must share the same grid.
pub fn mean_series(series: &[TimeSeries]) -> Result<TimeSeries, HsiError> {
    let first = series.first().ok_or_else(|| {
        HsiError::Config(ErrorInfo::new(
            "empty-ensemble",
            "cannot average an empty collection of series",
        ))
    })?;
    for (idx, entry) in series.iter().enumerate() {
        if entry.len() != first.len() || entry.dt().to_bits() != first.dt().to_bits() {
            return Err(HsiError::Config(
                ErrorInfo::new("grid-mismatch", "all series must share one grid")
                    .with_context("series", idx)
                    .with_context("expected_len", first.len())
                    .with_context("found_len", entry.len()),
            ));
        }
    }

    let mut sums = vec![0.0f64; first.len()];
    for entry in series {
        for (sum, value) in sums.iter_mut().zip(entry.samples()) {
            *sum += value;
        }
    }
    let count = series.len() as f64;
    for sum in &mut sums {
        *sum /= count;
    }
    Ok(TimeSeries::from_parts(first.dt(), sums))
}
