mod fixed;
mod nudge;

use std::fmt;

use crate::error::{Error, Result};

pub use self::{fixed::*, nudge::*};

/// Probabilities are expressed as multiples of 1/16
pub const PROB_BITS: u32 = 4;

/// Probability of the low symbol (bit 0) in sixteenths, always within 1..=15
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prob(u8);

impl Prob {
    pub const MIN: Prob = Prob(1);
    pub const HALF: Prob = Prob(8);
    pub const MAX: Prob = Prob((1 << PROB_BITS) - 1);

    pub fn new(p: u8) -> Result<Self> {
        match p {
            1..=15 => Ok(Self(p)),
            _ => Err(Error::InvalidProbability(p)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Moves one step up (towards 15) or down (towards 1), saturating
    #[must_use]
    pub fn nudge(self, up: bool) -> Self {
        if up {
            Self((self.0 + 1).min(Self::MAX.0))
        } else {
            Self((self.0 - 1).max(Self::MIN.0))
        }
    }
}

impl TryFrom<u8> for Prob {
    type Error = Error;

    fn try_from(p: u8) -> Result<Self> {
        Self::new(p)
    }
}

impl fmt::Display for Prob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:2} / 16", self.0)
    }
}

pub trait Model {
    /// Probability that the next bit is 0
    fn predict(&self) -> Prob;
    fn update(&mut self, bit: u8);
}
