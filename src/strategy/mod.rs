//! Strategy catalogue and reporting
//!
//! # Components
//!
//! - [`StrategyKind`]: the strategy families the builder knows by name
//! - [`StrategyPreset`]: a family with concrete strikes, premiums and sizes,
//!   expandable into [`Leg`](crate::common::types::Leg)s
//! - [`StrategyReport`]: breakevens, extremes and the spot readout for one
//!   evaluated request
//!
//! # Example
//!
//! ```
//! use payoff_builder::common::types::PriceSample;
//! use payoff_builder::payoff::EvaluationRequest;
//! use payoff_builder::strategy::{StrategyKind, StrategyReport};
//!
//! let preset = StrategyKind::BullCallSpread.with_defaults(650.0);
//! let request = EvaluationRequest::new(preset.legs(), PriceSample::around(650.0, 30.0, 500))
//!     .with_spot(650.0);
//! let result = request.evaluate().unwrap();
//! let report = StrategyReport::build(preset.name(), &request, &result);
//! assert_eq!(report.title, "Long Bull Call Spread Payoff");
//! ```

mod presets;
mod report;

pub use presets::{StrategyKind, StrategyPreset};
pub use report::{position_label, PricePoint, StrategyReport};
