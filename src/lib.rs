//! PayoffBuilder Library
//!
//! Expiry profit-and-loss curves for multi-leg futures and options
//! strategies, and the breakeven prices where those curves cross zero.

pub mod common;
pub mod config;
pub mod payoff;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{PayoffError, Result};
pub use common::traits::Payoff;
pub use common::types::{Direction, Instrument, Leg, PnLCurve, PriceSample};
pub use config::types::AppConfig;
pub use payoff::{compute_strategy, evaluate_leg, find_breakevens, EvaluationRequest, StrategyResult};
pub use strategy::{StrategyKind, StrategyPreset, StrategyReport};
