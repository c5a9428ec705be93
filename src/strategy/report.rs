//! Human- and machine-readable summary of one evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::payoff::{covered_call_estimate, legs_to_specs, EvaluationRequest, LegSpec, StrategyResult};

/// A single (price, P&L) point on the curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub pnl: f64,
}

impl From<(f64, f64)> for PricePoint {
    fn from((price, pnl): (f64, f64)) -> Self {
        Self { price, pnl }
    }
}

/// "Long" for the usual orientation, "Short" for the inverse
pub fn position_label(inverse: bool) -> &'static str {
    if inverse {
        "Short"
    } else {
        "Long"
    }
}

/// Summary handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    /// e.g. "Short Straddle Payoff"
    pub title: String,
    /// Legs as evaluated, after any inversion
    pub legs: Vec<LegSpec>,
    pub breakevens: Vec<f64>,
    /// Closed-form covered call estimate; approximate, for cross-checking only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_breakeven: Option<f64>,
    /// Sample point nearest the current underlying price, if it is in range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_spot: Option<PricePoint>,
    pub max_profit: Option<PricePoint>,
    pub max_loss: Option<PricePoint>,
    /// Sample with the smallest absolute P&L
    pub nearest_zero: Option<PricePoint>,
    pub samples: usize,
    pub price_range: Option<(f64, f64)>,
}

impl StrategyReport {
    pub fn build(strategy_name: &str, request: &EvaluationRequest, result: &StrategyResult) -> Self {
        let effective = request.effective_legs();
        let curve = &result.curve;

        Self {
            title: format!(
                "{} {} Payoff",
                position_label(request.is_inverse()),
                strategy_name
            ),
            legs: legs_to_specs(&effective),
            breakevens: result.breakevens.clone(),
            approximate_breakeven: covered_call_estimate(&effective),
            at_spot: request
                .spot()
                .filter(|&spot| request.prices().contains(spot))
                .and_then(|spot| curve.nearest(spot))
                .map(PricePoint::from),
            max_profit: curve.max_profit().map(PricePoint::from),
            max_loss: curve.max_loss().map(PricePoint::from),
            nearest_zero: curve.nearest_to_zero().map(PricePoint::from),
            samples: curve.len(),
            price_range: request.prices().low().zip(request.prices().high()),
        }
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;

        writeln!(f, "Legs:")?;
        for spec in &self.legs {
            write!(f, "  {:<5} {:<6} qty {:>10.2}", spec.direction, spec.instrument, spec.quantity)?;
            if let Some(entry) = spec.entry_price {
                write!(f, "  entry {entry:.2}")?;
            }
            if let Some(strike) = spec.strike {
                write!(f, "  strike {strike:.2}")?;
            }
            if let Some(premium) = spec.premium {
                write!(f, "  premium {premium:.2}")?;
            }
            writeln!(f)?;
        }

        if let Some((low, high)) = self.price_range {
            writeln!(f, "Expiry prices: {low:.2} .. {high:.2} ({} samples)", self.samples)?;
        }

        if self.breakevens.is_empty() {
            writeln!(f, "Breakevens: none in range")?;
        } else {
            let list: Vec<String> = self.breakevens.iter().map(|be| format!("{be:.2}")).collect();
            writeln!(f, "Breakevens: {}", list.join(", "))?;
        }
        if let Some(approx) = self.approximate_breakeven {
            writeln!(f, "Approx. covered call breakeven (closed form): {approx:.2}")?;
        }

        if let Some(point) = self.at_spot {
            writeln!(f, "P&L at spot {:.2}: {:.2}", point.price, point.pnl)?;
        }
        if let Some(point) = self.max_profit {
            writeln!(f, "Max profit in range: {:.2} at {:.2}", point.pnl, point.price)?;
        }
        if let Some(point) = self.max_loss {
            writeln!(f, "Max loss in range: {:.2} at {:.2}", point.pnl, point.price)?;
        }
        if let Some(point) = self.nearest_zero {
            writeln!(f, "Closest sample to zero: {:.2} (P&L {:.2})", point.price, point.pnl)?;
        }
        Ok(())
    }
}
