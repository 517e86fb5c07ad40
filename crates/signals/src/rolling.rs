//! Trailing rolling mean.
//!
//! Entry `i` only reads positions `i - window + 1 ..= i`, so no future value
//! ever leaks into the average.

use crate::error::SignalError;

/// Computes the trailing mean over `window` rows.
///
/// The output has the same length as `prices`. Entries before the first full
/// window are `None`, as is any entry whose window contains a missing price
/// or whose mean is not finite.
///
/// # Errors
///
/// Returns [`SignalError::EmptySeries`] for an empty input, and
/// [`SignalError::InvalidWindow`] when `window` is zero or longer than the
/// series.
///
/// # Examples
/// ```
/// use rollsig_signals::rolling_mean;
///
/// let mean = rolling_mean(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)], 3).unwrap();
/// assert_eq!(mean, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
pub fn rolling_mean(prices: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>, SignalError> {
    if prices.is_empty() {
        return Err(SignalError::EmptySeries);
    }
    if window == 0 || window > prices.len() {
        return Err(SignalError::InvalidWindow {
            window,
            len: prices.len(),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;

    let mut means = vec![None; window - 1];
    means.extend(
        prices
            .windows(window)
            .map(|slice| {
                slice
                    .iter()
                    .copied()
                    .sum::<Option<f64>>()
                    .map(|sum| sum / divisor)
                    .filter(|mean| mean.is_finite())
            }),
    );

    Ok(means)
}
