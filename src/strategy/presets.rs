use crate::common::errors::PayoffError;
use crate::common::types::{Direction, Leg};

/// Strategy families offered by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    CoveredCall,
    Straddle,
    Strangle,
    BullCallSpread,
    BearPutSpread,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::CoveredCall,
        StrategyKind::Straddle,
        StrategyKind::Strangle,
        StrategyKind::BullCallSpread,
        StrategyKind::BearPutSpread,
    ];

    /// Human-readable name, e.g. "Bull Call Spread"
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::CoveredCall => "Covered Call",
            StrategyKind::Straddle => "Straddle",
            StrategyKind::Strangle => "Strangle",
            StrategyKind::BullCallSpread => "Bull Call Spread",
            StrategyKind::BearPutSpread => "Bear Put Spread",
        }
    }

    /// Kebab-case identifier used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            StrategyKind::CoveredCall => "covered-call",
            StrategyKind::Straddle => "straddle",
            StrategyKind::Strangle => "strangle",
            StrategyKind::BullCallSpread => "bull-call-spread",
            StrategyKind::BearPutSpread => "bear-put-spread",
        }
    }

    /// Preset populated with the builder's default inputs around `spot`
    pub fn with_defaults(self, spot: f64) -> StrategyPreset {
        match self {
            StrategyKind::CoveredCall => StrategyPreset::CoveredCall {
                future_entry: spot,
                future_qty: 75.0,
                call_strike: spot + 30.0,
                call_premium: 10.0,
                call_qty: 75.0,
            },
            StrategyKind::Straddle => StrategyPreset::Straddle {
                strike: spot,
                call_premium: 20.0,
                put_premium: 18.0,
                qty: 75.0,
            },
            StrategyKind::Strangle => StrategyPreset::Strangle {
                call_strike: spot + 30.0,
                call_premium: 12.0,
                put_strike: spot - 30.0,
                put_premium: 10.0,
                qty: 75.0,
            },
            StrategyKind::BullCallSpread => StrategyPreset::BullCallSpread {
                lower_strike: spot - 10.0,
                lower_premium: 18.0,
                higher_strike: spot + 20.0,
                higher_premium: 8.0,
                qty: 75.0,
            },
            StrategyKind::BearPutSpread => StrategyPreset::BearPutSpread {
                higher_strike: spot + 20.0,
                higher_premium: 20.0,
                lower_strike: spot - 10.0,
                lower_premium: 10.0,
                qty: 75.0,
            },
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| PayoffError::UnknownStrategy(s.to_string()))
    }
}

/// A strategy family with concrete inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyPreset {
    /// Long future plus a short call above it
    CoveredCall {
        future_entry: f64,
        future_qty: f64,
        call_strike: f64,
        call_premium: f64,
        call_qty: f64,
    },
    /// Long call and long put at the same strike
    Straddle {
        strike: f64,
        call_premium: f64,
        put_premium: f64,
        qty: f64,
    },
    /// Long out-of-the-money call and put
    Strangle {
        call_strike: f64,
        call_premium: f64,
        put_strike: f64,
        put_premium: f64,
        qty: f64,
    },
    /// Long lower-strike call, short higher-strike call
    BullCallSpread {
        lower_strike: f64,
        lower_premium: f64,
        higher_strike: f64,
        higher_premium: f64,
        qty: f64,
    },
    /// Long higher-strike put, short lower-strike put
    BearPutSpread {
        higher_strike: f64,
        higher_premium: f64,
        lower_strike: f64,
        lower_premium: f64,
        qty: f64,
    },
}

impl StrategyPreset {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyPreset::CoveredCall { .. } => StrategyKind::CoveredCall,
            StrategyPreset::Straddle { .. } => StrategyKind::Straddle,
            StrategyPreset::Strangle { .. } => StrategyKind::Strangle,
            StrategyPreset::BullCallSpread { .. } => StrategyKind::BullCallSpread,
            StrategyPreset::BearPutSpread { .. } => StrategyKind::BearPutSpread,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The legs this preset stands for, in their usual (long) orientation
    pub fn legs(&self) -> Vec<Leg> {
        use Direction::{Long, Short};

        match *self {
            StrategyPreset::CoveredCall {
                future_entry,
                future_qty,
                call_strike,
                call_premium,
                call_qty,
            } => vec![
                Leg::future(Long, future_entry, future_qty),
                Leg::call(Short, call_strike, call_premium, call_qty),
            ],
            StrategyPreset::Straddle {
                strike,
                call_premium,
                put_premium,
                qty,
            } => vec![
                Leg::call(Long, strike, call_premium, qty),
                Leg::put(Long, strike, put_premium, qty),
            ],
            StrategyPreset::Strangle {
                call_strike,
                call_premium,
                put_strike,
                put_premium,
                qty,
            } => vec![
                Leg::call(Long, call_strike, call_premium, qty),
                Leg::put(Long, put_strike, put_premium, qty),
            ],
            StrategyPreset::BullCallSpread {
                lower_strike,
                lower_premium,
                higher_strike,
                higher_premium,
                qty,
            } => vec![
                Leg::call(Long, lower_strike, lower_premium, qty),
                Leg::call(Short, higher_strike, higher_premium, qty),
            ],
            StrategyPreset::BearPutSpread {
                higher_strike,
                higher_premium,
                lower_strike,
                lower_premium,
                qty,
            } => vec![
                Leg::put(Long, higher_strike, higher_premium, qty),
                Leg::put(Short, lower_strike, lower_premium, qty),
            ],
        }
    }
}
