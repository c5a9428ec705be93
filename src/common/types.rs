//! Core domain types shared by the evaluator, the locator and the CLI

use serde::{Deserialize, Serialize};

use super::errors::{PayoffError, Result};

/// Position direction of a single leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Sign applied to the long-side payoff
    pub fn sign(self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

/// Instrument held by a leg, carrying only the fields its payoff needs
///
/// The flat, loosely typed record form lives in
/// [`LegSpec`](crate::payoff::wire::LegSpec).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instrument {
    Future { entry_price: f64 },
    Call { strike: f64, premium: f64 },
    Put { strike: f64, premium: f64 },
}

impl Instrument {
    /// Lowercase tag, as used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            Instrument::Future { .. } => "future",
            Instrument::Call { .. } => "call",
            Instrument::Put { .. } => "put",
        }
    }

    /// Per-unit P&L of a long position settling at `price`
    ///
    /// Futures settle linearly against the entry price. Options pay their
    /// intrinsic value at expiry less the premium paid.
    pub fn long_unit_pnl(&self, price: f64) -> f64 {
        match *self {
            Instrument::Future { entry_price } => price - entry_price,
            Instrument::Call { strike, premium } => (price - strike).max(0.0) - premium,
            Instrument::Put { strike, premium } => (strike - price).max(0.0) - premium,
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instrument::Future { entry_price } => write!(f, "future @ {entry_price}"),
            Instrument::Call { strike, premium } => write!(f, "call K={strike} P={premium}"),
            Instrument::Put { strike, premium } => write!(f, "put K={strike} P={premium}"),
        }
    }
}

/// One position within a strategy
///
/// `quantity` scales the per-unit payoff (contracts × lot size). A negative
/// quantity is not rejected here; it simply mirrors the direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub instrument: Instrument,
    pub direction: Direction,
    pub quantity: f64,
}

impl Leg {
    pub fn new(instrument: Instrument, direction: Direction, quantity: f64) -> Self {
        Self {
            instrument,
            direction,
            quantity,
        }
    }

    pub fn future(direction: Direction, entry_price: f64, quantity: f64) -> Self {
        Self::new(Instrument::Future { entry_price }, direction, quantity)
    }

    pub fn call(direction: Direction, strike: f64, premium: f64, quantity: f64) -> Self {
        Self::new(Instrument::Call { strike, premium }, direction, quantity)
    }

    pub fn put(direction: Direction, strike: f64, premium: f64, quantity: f64) -> Self {
        Self::new(Instrument::Put { strike, premium }, direction, quantity)
    }

    /// Same leg with the opposite direction
    pub fn flipped(&self) -> Self {
        Self {
            direction: self.direction.flipped(),
            ..*self
        }
    }

    pub fn is_long(&self) -> bool {
        self.direction == Direction::Long
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} x{}", self.direction, self.instrument, self.quantity)
    }
}

/// Hypothetical underlying prices at expiry, in increasing order
///
/// Shared x-axis for every leg of one evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSample(Vec<f64>);

impl PriceSample {
    /// Wrap an already ordered price vector
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    /// `n` evenly spaced prices from `low` to `high`, both ends included
    pub fn linspace(low: f64, high: f64, n: usize) -> Self {
        match n {
            0 => Self(Vec::new()),
            1 => Self(vec![low]),
            _ => {
                let step = (high - low) / (n - 1) as f64;
                let mut prices: Vec<f64> = (0..n).map(|i| low + step * i as f64).collect();
                // pin the last point so rounding never overshoots the range
                prices[n - 1] = high;
                Self(prices)
            }
        }
    }

    /// `n` prices spanning `spot` ± `range_pct` percent
    pub fn around(spot: f64, range_pct: f64, n: usize) -> Self {
        let low = spot * (1.0 - range_pct / 100.0);
        let high = spot * (1.0 + range_pct / 100.0);
        Self::linspace(low, high, n)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn low(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn high(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Whether `price` lies within the sampled range
    pub fn contains(&self, price: f64) -> bool {
        match (self.low(), self.high()) {
            (Some(low), Some(high)) => price >= low && price <= high,
            _ => false,
        }
    }
}

impl From<Vec<f64>> for PriceSample {
    fn from(prices: Vec<f64>) -> Self {
        Self::new(prices)
    }
}

impl AsRef<[f64]> for PriceSample {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Total strategy P&L sampled at each price of a [`PriceSample`]
///
/// Both vectors always have the same length; the only way in is
/// [`PnLCurve::new`], which checks it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnLCurve {
    prices: Vec<f64>,
    pnl: Vec<f64>,
}

impl PnLCurve {
    pub fn new(prices: Vec<f64>, pnl: Vec<f64>) -> Result<Self> {
        if prices.len() != pnl.len() {
            return Err(PayoffError::LengthMismatch {
                prices: prices.len(),
                pnl: pnl.len(),
            });
        }
        Ok(Self { prices, pnl })
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn pnl(&self) -> &[f64] {
        &self.pnl
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// (price, pnl) pairs in sample order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.prices.iter().copied().zip(self.pnl.iter().copied())
    }

    /// Sample point whose price is closest to `price`
    pub fn nearest(&self, price: f64) -> Option<(f64, f64)> {
        self.points()
            .min_by(|a, b| (a.0 - price).abs().total_cmp(&(b.0 - price).abs()))
    }

    /// Sample point whose P&L is closest to zero
    pub fn nearest_to_zero(&self) -> Option<(f64, f64)> {
        self.points().min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
    }

    /// Highest sampled P&L and where it occurs
    pub fn max_profit(&self) -> Option<(f64, f64)> {
        self.points().max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Lowest sampled P&L and where it occurs
    pub fn max_loss(&self) -> Option<(f64, f64)> {
        self.points().min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Render as `price,pnl` CSV with a header row
    pub fn to_csv(&self) -> String {
        let mut out = String::from("price,pnl\n");
        for (price, pnl) in self.points() {
            out.push_str(&format!("{price:.6},{pnl:.6}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flip_round_trips() {
        assert_eq!(Direction::Long.flipped(), Direction::Short);
        assert_eq!(Direction::Long.flipped().flipped(), Direction::Long);
        assert_eq!(Direction::Short.sign(), -1.0);
    }

    #[test]
    fn test_long_unit_pnl_per_instrument() {
        let fut = Instrument::Future { entry_price: 100.0 };
        assert_eq!(fut.long_unit_pnl(110.0), 10.0);
        assert_eq!(fut.long_unit_pnl(90.0), -10.0);

        let call = Instrument::Call {
            strike: 100.0,
            premium: 4.0,
        };
        assert_eq!(call.long_unit_pnl(90.0), -4.0);
        assert_eq!(call.long_unit_pnl(110.0), 6.0);

        let put = Instrument::Put {
            strike: 100.0,
            premium: 3.0,
        };
        assert_eq!(put.long_unit_pnl(90.0), 7.0);
        assert_eq!(put.long_unit_pnl(110.0), -3.0);
    }

    #[test]
    fn test_leg_flip_keeps_instrument() {
        let leg = Leg::call(Direction::Long, 650.0, 20.0, 75.0);
        let flipped = leg.flipped();
        assert_eq!(flipped.direction, Direction::Short);
        assert_eq!(flipped.instrument, leg.instrument);
        assert_eq!(flipped.quantity, 75.0);
        assert_eq!(flipped.flipped(), leg);
    }

    #[test]
    fn test_leg_display() {
        let leg = Leg::put(Direction::Short, 640.0, 10.5, 75.0);
        assert_eq!(leg.to_string(), "short put K=640 P=10.5 x75");
        assert_eq!(
            Leg::future(Direction::Long, 630.0, 1325.0).to_string(),
            "long future @ 630 x1325"
        );
    }

    #[test]
    fn test_linspace_endpoints() {
        let sample = PriceSample::linspace(504.0, 756.0, 400);
        assert_eq!(sample.len(), 400);
        assert_eq!(sample.low(), Some(504.0));
        assert_eq!(sample.high(), Some(756.0));
        assert!(sample.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate_sizes() {
        assert!(PriceSample::linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(PriceSample::linspace(1.0, 2.0, 1).as_slice(), &[1.0]);
    }

    #[test]
    fn test_around_spans_percentage() {
        let sample = PriceSample::around(100.0, 25.0, 11);
        assert_eq!(sample.low(), Some(75.0));
        assert_eq!(sample.high(), Some(125.0));
        assert!(sample.contains(100.0));
        assert!(!sample.contains(130.0));
    }

    #[test]
    fn test_curve_lookups() {
        let curve = PnLCurve::new(vec![1.0, 2.0, 3.0, 4.0], vec![-5.0, -1.0, 2.0, 8.0]).unwrap();
        assert_eq!(curve.nearest(2.4), Some((2.0, -1.0)));
        assert_eq!(curve.nearest_to_zero(), Some((2.0, -1.0)));
        assert_eq!(curve.max_profit(), Some((4.0, 8.0)));
        assert_eq!(curve.max_loss(), Some((1.0, -5.0)));
    }

    #[test]
    fn test_curve_rejects_uneven_vectors() {
        let err = PnLCurve::new(vec![1.0, 2.0, 3.0], vec![0.5]).unwrap_err();
        assert!(matches!(err, PayoffError::LengthMismatch { prices: 3, pnl: 1 }));
    }

    #[test]
    fn test_curve_csv() {
        let curve = PnLCurve::new(vec![1.0, 2.0], vec![-0.5, 0.25]).unwrap();
        assert_eq!(
            curve.to_csv(),
            "price,pnl\n1.000000,-0.500000\n2.000000,0.250000\n"
        );
    }
}
