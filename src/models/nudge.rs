use super::{Model, Prob};

/// Adaptive probability moving by a single step after every bit.
///
/// A 0 bit makes the next 0 more likely (+1/16), a 1 bit less likely (-1/16).
/// The estimate never leaves 1..=15, so neither symbol becomes impossible.
#[derive(Clone, Copy)]
pub struct Nudge {
    p: Prob,
}

impl Nudge {
    pub fn new(p: Prob) -> Self {
        Self { p }
    }
}

impl Default for Nudge {
    fn default() -> Self {
        Self::new(Prob::HALF)
    }
}

impl Model for Nudge {
    fn predict(&self) -> Prob {
        self.p
    }

    fn update(&mut self, bit: u8) {
        self.p = self.p.nudge(bit == 0);
    }
}
