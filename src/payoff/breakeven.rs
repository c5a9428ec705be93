//! Breakeven locator
//!
//! Finds where a sampled P&L curve crosses zero. Between two samples of
//! opposite sign the curve is treated as a straight line and its root is
//! taken exactly, so a strategy whose payoff is linear between the two
//! samples gets an exact answer. Several kinks packed between two samples
//! can still be smoothed over; raise the sample count if that matters.

use tracing::debug;

use crate::common::errors::{PayoffError, Result};
use crate::common::types::{Instrument, Leg};

/// Prices at which the sampled P&L is zero, in ascending order
///
/// A crossing between `pnl[i]` and `pnl[i + 1]` is detected by
/// `sign(pnl[i]) * sign(pnl[i + 1]) < 0` and interpolated linearly.
/// That test never fires for a pair containing an exact zero, so a single
/// zero sample is reported on its own, once. A run of two or more zero
/// samples is a flat stretch, not a crossing: it is reported once, at its
/// first price, only when the samples on either side of it have opposite
/// signs. A curve that is zero everywhere has no breakeven to report.
pub fn find_breakevens(prices: &[f64], pnl: &[f64]) -> Result<Vec<f64>> {
    if prices.len() != pnl.len() {
        return Err(PayoffError::LengthMismatch {
            prices: prices.len(),
            pnl: pnl.len(),
        });
    }
    if prices.len() < 2 {
        return Err(PayoffError::InsufficientSamples { len: prices.len() });
    }

    let mut breakevens = Vec::new();
    let mut i = 0;
    while i < pnl.len() {
        let y1 = pnl[i];

        if y1 == 0.0 {
            let start = i;
            while pnl.get(i + 1) == Some(&0.0) {
                i += 1;
            }
            if start == i || crosses_over(pnl, start, i) {
                breakevens.push(prices[start]);
            }
            i += 1;
            continue;
        }

        if let Some(&y2) = pnl.get(i + 1) {
            if sign(y1) * sign(y2) < 0.0 {
                let (x1, x2) = (prices[i], prices[i + 1]);
                breakevens.push(x1 - y1 * (x2 - x1) / (y2 - y1));
            }
        }
        i += 1;
    }

    debug!(count = breakevens.len(), ?breakevens, "located breakevens");
    Ok(breakevens)
}

/// Whether the zero run `pnl[start..=end]` has samples of opposite sign on
/// both sides
fn crosses_over(pnl: &[f64], start: usize, end: usize) -> bool {
    match (start.checked_sub(1).map(|i| pnl[i]), pnl.get(end + 1)) {
        (Some(before), Some(&after)) => sign(before) * sign(after) < 0.0,
        _ => false,
    }
}

/// numpy-style sign: -1, 0 or 1
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Closed-form covered call breakeven: `entry - premium * call_qty / fut_qty`
///
/// Only defined for exactly one long future plus one short call. It ignores
/// the call's intrinsic value, so it is an approximation that drifts from the
/// numeric breakeven whenever the two legs' quantities differ or the strike
/// sits below the entry price. Treat it as a sanity check, never as the
/// answer.
pub fn covered_call_estimate(legs: &[Leg]) -> Option<f64> {
    let [a, b] = legs else {
        return None;
    };

    let (future, call) = match (a.instrument, b.instrument) {
        (Instrument::Future { .. }, Instrument::Call { .. }) => (a, b),
        (Instrument::Call { .. }, Instrument::Future { .. }) => (b, a),
        _ => return None,
    };
    if !future.is_long() || call.is_long() {
        return None;
    }
    if future.quantity == 0.0 {
        return None;
    }

    match (future.instrument, call.instrument) {
        (Instrument::Future { entry_price }, Instrument::Call { premium, .. }) => {
            Some(entry_price - premium * call.quantity / future.quantity)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Direction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_crossing_interpolated() {
        let prices = [1.0, 2.0, 3.0];
        let pnl = [-2.0, -1.0, 3.0];
        assert_eq!(find_breakevens(&prices, &pnl).unwrap(), vec![2.25]);
    }

    #[test]
    fn test_two_crossings_in_order() {
        let prices = [0.0, 1.0, 2.0, 3.0, 4.0];
        let pnl = [4.0, -2.0, -4.0, -2.0, 6.0];
        let found = find_breakevens(&prices, &pnl).unwrap();
        assert_eq!(found.len(), 2);
        assert!((found[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((found[1] - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_no_crossing_is_empty() {
        let prices = [1.0, 2.0, 3.0, 4.0];
        let pnl = [1.0, 2.0, 3.0, 4.0];
        assert!(find_breakevens(&prices, &pnl).unwrap().is_empty());
    }

    #[test]
    fn test_exact_zero_sample_counted_once() {
        let prices = [1.0, 2.0, 3.0];
        let pnl = [-1.0, 0.0, 1.0];
        assert_eq!(find_breakevens(&prices, &pnl).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_zero_touch_counted_once() {
        let prices = [1.0, 2.0, 3.0];
        let pnl = [-1.0, 0.0, -1.0];
        assert_eq!(find_breakevens(&prices, &pnl).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_zero_run_reported_at_first_price() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        let pnl = [-1.0, 0.0, 0.0, 0.0, 2.0];
        assert_eq!(find_breakevens(&prices, &pnl).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_zero_plateau_without_crossing_is_skipped() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(find_breakevens(&prices, &[1.0, 0.0, 0.0, 0.0, 2.0]).unwrap().is_empty());
        assert!(find_breakevens(&prices, &[-1.0, 0.0, 0.0, -3.0, -2.0]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_plateau_at_range_edge_is_skipped() {
        let prices = [1.0, 2.0, 3.0, 4.0];
        assert!(find_breakevens(&prices, &[0.0, 0.0, 1.0, 2.0]).unwrap().is_empty());
        assert!(find_breakevens(&prices, &[-2.0, -1.0, 0.0, 0.0]).unwrap().is_empty());
    }

    #[test]
    fn test_flat_zero_curve_has_none() {
        let prices = [1.0, 2.0, 3.0];
        assert!(find_breakevens(&prices, &[0.0, 0.0, 0.0]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_at_boundaries() {
        let prices = [1.0, 2.0, 3.0];
        assert_eq!(find_breakevens(&prices, &[0.0, 1.0, 2.0]).unwrap(), vec![1.0]);
        assert_eq!(find_breakevens(&prices, &[2.0, 1.0, 0.0]).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_too_few_samples() {
        let err = find_breakevens(&[1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, PayoffError::InsufficientSamples { len: 1 }));
        let err = find_breakevens(&[], &[]).unwrap_err();
        assert!(matches!(err, PayoffError::InsufficientSamples { len: 0 }));
    }

    #[test]
    fn test_length_mismatch() {
        let err = find_breakevens(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PayoffError::LengthMismatch { prices: 2, pnl: 1 }
        ));
    }

    #[test]
    fn test_covered_call_estimate() {
        let legs = [
            Leg::future(Direction::Long, 630.0, 1325.0),
            Leg::call(Direction::Short, 620.0, 8.0, 1250.0),
        ];
        let estimate = covered_call_estimate(&legs).unwrap();
        assert!((estimate - (630.0 - 8.0 * 1250.0 / 1325.0)).abs() < 1e-12);

        let reversed = [legs[1], legs[0]];
        assert_eq!(covered_call_estimate(&reversed), Some(estimate));
    }

    #[test]
    fn test_covered_call_estimate_needs_exact_shape() {
        let future = Leg::future(Direction::Long, 630.0, 75.0);
        let call = Leg::call(Direction::Short, 660.0, 10.0, 75.0);

        assert_eq!(covered_call_estimate(&[future]), None);
        assert_eq!(covered_call_estimate(&[future.flipped(), call.flipped()]), None);
        assert_eq!(covered_call_estimate(&[future, call, call]), None);
        assert_eq!(
            covered_call_estimate(&[future, Leg::put(Direction::Short, 600.0, 5.0, 75.0)]),
            None
        );
    }
}
