//! Output types of the relative rotation engine.

use serde::{Deserialize, Serialize};

/// RS-Ratio / RS-Momentum pair for the latest date of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationCoordinates {
    pub rs_ratio: f64,
    pub rs_momentum: f64,
}

/// One point of a symbol's rotation trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationPoint {
    /// Ticker of the tracked symbol.
    pub symbol: String,
    /// Epoch millis of the window's most recent candle.
    pub date: i64,
    /// Calendar date of the window's most recent candle.
    pub date_str: String,
    /// Symbol close on `date_str`.
    pub price: f64,
    /// Benchmark close on `date_str`.
    pub benchmark_price: f64,
    /// `price / benchmark_price`.
    pub rs_value: f64,
    /// Normalized relative strength, 100 = parity with the benchmark trend.
    pub rs_ratio: f64,
    /// Rate of change of `rs_ratio`, centered on 100.
    pub rs_momentum: f64,
}

/// RRG quadrant of a point, read clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// ratio >= 100, momentum >= 100
    Leading,
    /// ratio >= 100, momentum < 100
    Weakening,
    /// ratio < 100, momentum < 100
    Lagging,
    /// ratio < 100, momentum >= 100
    Improving,
}

impl RotationCoordinates {
    pub fn quadrant(&self) -> Quadrant {
        match (self.rs_ratio >= 100.0, self.rs_momentum >= 100.0) {
            (true, true) => Quadrant::Leading,
            (true, false) => Quadrant::Weakening,
            (false, false) => Quadrant::Lagging,
            (false, true) => Quadrant::Improving,
        }
    }
}

impl RotationPoint {
    pub fn coordinates(&self) -> RotationCoordinates {
        RotationCoordinates {
            rs_ratio: self.rs_ratio,
            rs_momentum: self.rs_momentum,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.coordinates().quadrant()
    }
}
