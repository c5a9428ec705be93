//! Loosely typed leg records as they arrive from the outside
//!
//! The presentation layer speaks in flat records such as
//! `{"type": "call", "pos": "short", "strike": 650, "premium": 10, "qty": 75}`.
//! This is the one place where an unknown instrument or a missing field can
//! still happen; past [`LegSpec::into_leg`] every leg is well formed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::errors::{PayoffError, Result};
use crate::common::types::{Direction, Instrument, Leg};

/// Flat leg record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegSpec {
    /// Instrument tag: future, call or put (case-insensitive)
    #[serde(rename = "type", alias = "instrument")]
    pub instrument: String,
    /// Direction tag: long or short (case-insensitive)
    #[serde(rename = "pos", alias = "direction")]
    pub direction: String,
    /// Scaling factor, contracts × lot size
    #[serde(rename = "qty", alias = "quantity", default = "default_qty")]
    pub quantity: f64,
    /// Entry price, futures only
    #[serde(
        rename = "entry",
        alias = "entry_price",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_price: Option<f64>,
    /// Strike, options only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,
    /// Per-unit premium, options only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<f64>,
}

fn default_qty() -> f64 {
    1.0
}

impl LegSpec {
    /// Convert into a typed leg; `index` identifies the leg in errors
    pub fn into_leg(self, index: usize) -> Result<Leg> {
        let direction = match self.direction.trim().to_lowercase().as_str() {
            "long" => Direction::Long,
            "short" => Direction::Short,
            _ => {
                return Err(PayoffError::UnknownDirection {
                    leg: index,
                    tag: self.direction,
                })
            }
        };

        let require = |value: Option<f64>, field: &'static str, instrument: &'static str| {
            value.ok_or(PayoffError::MissingField {
                leg: index,
                field,
                instrument,
            })
        };

        let instrument = match self.instrument.trim().to_lowercase().as_str() {
            "future" => Instrument::Future {
                entry_price: require(self.entry_price, "entry_price", "future")?,
            },
            "call" => Instrument::Call {
                strike: require(self.strike, "strike", "call")?,
                premium: require(self.premium, "premium", "call")?,
            },
            "put" => Instrument::Put {
                strike: require(self.strike, "strike", "put")?,
                premium: require(self.premium, "premium", "put")?,
            },
            _ => {
                return Err(PayoffError::UnknownInstrument {
                    leg: index,
                    tag: self.instrument,
                })
            }
        };

        if self.quantity < 0.0 {
            warn!(
                leg = index,
                quantity = self.quantity,
                "negative quantity mirrors the leg's direction"
            );
        }

        Ok(Leg::new(instrument, direction, self.quantity))
    }
}

impl From<&Leg> for LegSpec {
    fn from(leg: &Leg) -> Self {
        let (entry_price, strike, premium) = match leg.instrument {
            Instrument::Future { entry_price } => (Some(entry_price), None, None),
            Instrument::Call { strike, premium } | Instrument::Put { strike, premium } => {
                (None, Some(strike), Some(premium))
            }
        };
        Self {
            instrument: leg.instrument.tag().to_string(),
            direction: leg.direction.to_string(),
            quantity: leg.quantity,
            entry_price,
            strike,
            premium,
        }
    }
}

/// Convert a list of records, failing on the first bad leg
pub fn legs_from_specs(specs: Vec<LegSpec>) -> Result<Vec<Leg>> {
    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| spec.into_leg(index))
        .collect()
}

/// Parse a JSON array of leg records
pub fn parse_legs(json: &str) -> Result<Vec<Leg>> {
    let specs: Vec<LegSpec> = serde_json::from_str(json)?;
    legs_from_specs(specs)
}

/// Render legs back into their flat record form
pub fn legs_to_specs(legs: &[Leg]) -> Vec<LegSpec> {
    legs.iter().map(LegSpec::from).collect()
}
