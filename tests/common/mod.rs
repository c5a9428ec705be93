//! Common test utilities and fixtures

#![allow(dead_code)]

use payoff_builder::common::types::{Direction, Leg, PriceSample};

/// Tolerance for interpolated breakevens on piecewise-linear payoffs
pub const TOLERANCE: f64 = 1e-6;

/// Reference covered call: 1325 futures at 630 against 1250 short 620 calls
pub fn covered_call_legs() -> Vec<Leg> {
    vec![
        Leg::future(Direction::Long, 630.0, 1325.0),
        Leg::call(Direction::Short, 620.0, 8.0, 1250.0),
    ]
}

/// 630 ± 20%, 400 points: 504 .. 756
pub fn covered_call_sample() -> PriceSample {
    PriceSample::around(630.0, 20.0, 400)
}

/// Long call + long put at 650, premiums 20 and 18, 75 each
pub fn straddle_legs() -> Vec<Leg> {
    vec![
        Leg::call(Direction::Long, 650.0, 20.0, 75.0),
        Leg::put(Direction::Long, 650.0, 18.0, 75.0),
    ]
}

/// A four-leg mix of every instrument and both directions
pub fn mixed_legs() -> Vec<Leg> {
    vec![
        Leg::future(Direction::Short, 648.5, 50.0),
        Leg::call(Direction::Long, 660.0, 11.25, 75.0),
        Leg::put(Direction::Short, 610.0, 6.5, 25.0),
        Leg::put(Direction::Long, 640.0, 14.0, 75.0),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Legs sample used by the JSON wire tests
pub mod wire {
    pub const STRANGLE: &str = r#"[
        {"type": "call", "pos": "long", "strike": 680, "premium": 12, "qty": 75},
        {"type": "put",  "pos": "long", "strike": 620, "premium": 10, "qty": 75}
    ]"#;

    pub const CALL_WITHOUT_STRIKE: &str = r#"[
        {"type": "future", "pos": "long", "entry": 650, "qty": 75},
        {"type": "call", "pos": "short", "premium": 10, "qty": 75}
    ]"#;

    pub const UNKNOWN_INSTRUMENT: &str = r#"[
        {"type": "forward", "pos": "long", "entry": 650, "qty": 75}
    ]"#;
}
