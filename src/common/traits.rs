//! Trait definitions for anything with an expiry payoff

use super::types::{Leg, PriceSample};

/// Something whose P&L at expiry depends only on the settlement price
///
/// Implementations must be pure: the same price always yields the same P&L.
/// This is what lets curves be recomputed freely and from any thread.
pub trait Payoff {
    /// P&L if the underlying settles at `price`
    fn pnl_at(&self, price: f64) -> f64;

    /// P&L at every price of the sample, in sample order
    fn pnl_curve(&self, prices: &PriceSample) -> Vec<f64> {
        prices.as_slice().iter().map(|&s| self.pnl_at(s)).collect()
    }
}

impl Payoff for Leg {
    fn pnl_at(&self, price: f64) -> f64 {
        self.direction.sign() * self.instrument.long_unit_pnl(price) * self.quantity
    }
}
