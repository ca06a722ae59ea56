use crate::error::PayoutError;
use serde::{Deserialize, Serialize};

/// Coins placed on the payline (or on the lucky coin) for one round.
///
/// Only 0 to 3 coins can be bet; anything else is rejected at construction so
/// that payout and bonus lookups never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Bet(u8);

impl Bet {
    pub const MAX_COINS: u8 = 3;
    pub const NONE: Self = Self(0);

    pub fn new(coins: i64) -> Result<Self, PayoutError> {
        if (0..=Self::MAX_COINS as i64).contains(&coins) {
            Ok(Self(coins as u8))
        } else {
            Err(PayoutError::InvalidInput(format!(
                "bet of {coins} coins is out of range 0-{}",
                Self::MAX_COINS
            )))
        }
    }

    pub fn coins(&self) -> u8 {
        self.0
    }

    pub fn is_wager(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for Bet {
    type Error = PayoutError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bet> for u8 {
    fn from(bet: Bet) -> Self {
        bet.0
    }
}
