//! Payoff engine: expiry P&L of multi-leg strategies and their breakevens
//!
//! # Pipeline
//!
//! ```text
//!   JSON leg records ──► wire::LegSpec::into_leg ──► Leg
//!                                                    │
//!   PriceSample ─────────────────────────────────────┤
//!                                                    ▼
//!                              leg::evaluate_leg  (per leg)
//!                                                    │
//!                                                    ▼
//!                  aggregate::compute_strategy  (sum, optional inverse)
//!                                                    │
//!                                                    ▼
//!                  breakeven::find_breakevens  (sign change + interpolation)
//! ```
//!
//! Every step is a pure function over owned data. Nothing is cached and
//! nothing is shared, so any number of evaluations can run side by side.
//!
//! # Example
//!
//! ```
//! use payoff_builder::common::types::{Direction, Leg, PriceSample};
//! use payoff_builder::payoff::compute_strategy;
//!
//! let legs = vec![
//!     Leg::call(Direction::Long, 650.0, 20.0, 75.0),
//!     Leg::put(Direction::Long, 650.0, 18.0, 75.0),
//! ];
//! let prices = PriceSample::around(650.0, 30.0, 500);
//! let result = compute_strategy(&legs, &prices, false).unwrap();
//! assert_eq!(result.breakevens.len(), 2);
//! ```

pub mod aggregate;
pub mod breakeven;
pub mod leg;
pub mod wire;

pub use aggregate::{compute_strategy, invert, total_pnl, EvaluationRequest, StrategyResult};
pub use breakeven::{covered_call_estimate, find_breakevens};
pub use leg::evaluate_leg;
pub use wire::{legs_from_specs, legs_to_specs, parse_legs, LegSpec};
