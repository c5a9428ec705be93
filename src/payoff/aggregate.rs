//! Strategy aggregation: sum legs, optionally invert, locate breakevens

use serde::Serialize;
use tracing::{debug, instrument};

use super::breakeven::find_breakevens;
use super::leg::evaluate_leg;
use crate::common::errors::{PayoffError, Result};
use crate::common::types::{Leg, PnLCurve, PriceSample};

/// Output of one strategy evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResult {
    pub curve: PnLCurve,
    pub breakevens: Vec<f64>,
}

impl StrategyResult {
    pub fn total_pnl(&self) -> &[f64] {
        self.curve.pnl()
    }
}

/// Copy of `legs` with every direction flipped (short the whole combination)
///
/// The input is left untouched; inverting the result again gives back the
/// original legs.
pub fn invert(legs: &[Leg]) -> Vec<Leg> {
    legs.iter().map(Leg::flipped).collect()
}

/// Elementwise sum of every leg's P&L over the sample
///
/// No legs yields an all-zero vector of the sample's length.
pub fn total_pnl(legs: &[Leg], prices: &PriceSample) -> Vec<f64> {
    let mut total = vec![0.0; prices.len()];
    for leg in legs {
        for (acc, value) in total.iter_mut().zip(evaluate_leg(leg, prices)) {
            *acc += value;
        }
    }
    total
}

/// Evaluate a strategy and find its breakevens
///
/// With `inverse` set, the legs are flipped on a copy before evaluation.
/// Fails with [`PayoffError::InsufficientSamples`] when the sample has fewer
/// than two prices; an empty strategy is fine and comes back flat.
#[instrument(skip(legs, prices), fields(leg_count = legs.len(), sample_count = prices.len()))]
pub fn compute_strategy(
    legs: &[Leg],
    prices: &PriceSample,
    inverse: bool,
) -> Result<StrategyResult> {
    if prices.len() < 2 {
        return Err(PayoffError::InsufficientSamples { len: prices.len() });
    }

    let pnl = if inverse {
        total_pnl(&invert(legs), prices)
    } else {
        total_pnl(legs, prices)
    };

    let breakevens = find_breakevens(prices.as_slice(), &pnl)?;
    debug!(breakevens = breakevens.len(), "strategy evaluated");

    Ok(StrategyResult {
        curve: PnLCurve::new(prices.as_slice().to_vec(), pnl)?,
        breakevens,
    })
}

/// Everything needed for one evaluation, fixed at construction
///
/// Built once per user interaction and never mutated; evaluating it twice
/// gives identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    legs: Vec<Leg>,
    prices: PriceSample,
    inverse: bool,
    spot: Option<f64>,
}

impl EvaluationRequest {
    pub fn new(legs: Vec<Leg>, prices: PriceSample) -> Self {
        Self {
            legs,
            prices,
            inverse: false,
            spot: None,
        }
    }

    /// Short the whole combination
    pub fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Current underlying price, used for the "P&L at spot" readout
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn prices(&self) -> &PriceSample {
        &self.prices
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub fn spot(&self) -> Option<f64> {
        self.spot
    }

    /// Legs as they are actually evaluated, after any inversion
    pub fn effective_legs(&self) -> Vec<Leg> {
        if self.inverse {
            invert(&self.legs)
        } else {
            self.legs.clone()
        }
    }

    pub fn evaluate(&self) -> Result<StrategyResult> {
        compute_strategy(&self.legs, &self.prices, self.inverse)
    }
}
