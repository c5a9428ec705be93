//! Leg evaluator: one leg, one price sample, one P&L vector

use crate::common::traits::Payoff;
use crate::common::types::{Leg, PriceSample};

/// P&L of holding `leg` alone at every price of the sample
///
/// | instrument | long | short |
/// |---|---|---|
/// | future | (S − E) × Q | (E − S) × Q |
/// | call | (max(S−K, 0) − P) × Q | (P − max(S−K, 0)) × Q |
/// | put | (max(K−S, 0) − P) × Q | (P − max(K−S, 0)) × Q |
///
/// Short is computed as the exact negation of long, so the two directions
/// mirror each other bit for bit.
pub fn evaluate_leg(leg: &Leg, prices: &PriceSample) -> Vec<f64> {
    leg.pnl_curve(prices)
}
