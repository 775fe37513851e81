use serde::{Deserialize, Serialize};

/// Lower and upper tick of a liquidity position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl TickRange {
    pub fn new(tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            tick_lower,
            tick_upper,
        }
    }

    pub fn width(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }

    pub fn is_aligned(&self, tick_spacing: i32) -> bool {
        tick_spacing > 0 && self.tick_lower % tick_spacing == 0 && self.tick_upper % tick_spacing == 0
    }
}
