use crate::error::PayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a symbol in a variation's `symbol_names`.
///
/// The index is the canonical symbol id everywhere else in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolIndex(pub u8);

impl SymbolIndex {
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for SymbolIndex {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three reels, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReelIndex {
    Left,
    Middle,
    Right,
}

impl ReelIndex {
    pub const ALL: [ReelIndex; 3] = [ReelIndex::Left, ReelIndex::Middle, ReelIndex::Right];

    pub fn position(self) -> usize {
        match self {
            ReelIndex::Left => 0,
            ReelIndex::Middle => 1,
            ReelIndex::Right => 2,
        }
    }
}

impl TryFrom<usize> for ReelIndex {
    type Error = PayoutError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReelIndex::Left),
            1 => Ok(ReelIndex::Middle),
            2 => Ok(ReelIndex::Right),
            other => Err(PayoutError::InvalidInput(format!(
                "reel index {other} is out of range 0-2"
            ))),
        }
    }
}

/// The three symbols that decide a round, one per reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payline(pub [SymbolIndex; 3]);

impl Payline {
    pub fn new(left: SymbolIndex, middle: SymbolIndex, right: SymbolIndex) -> Self {
        Self([left, middle, right])
    }

    pub fn at(&self, reel: ReelIndex) -> SymbolIndex {
        self.0[reel.position()]
    }

    pub fn symbols(&self) -> &[SymbolIndex; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Payline {
    fn from(raw: [u8; 3]) -> Self {
        Self(raw.map(SymbolIndex))
    }
}

impl fmt::Display for Payline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.0[0], self.0[1], self.0[2])
    }
}
