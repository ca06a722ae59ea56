use super::bet::Bet;
use super::symbol::Payline;
use serde::Serialize;
use std::fmt;

/// Result of evaluating a payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "amount", rename_all = "snake_case")]
pub enum PayoutResult {
    /// No rule matched; the wager is lost.
    Lost,
    /// A rule matched but nothing was wagered, so nothing is paid.
    MatchedNoWager,
    /// A rule matched; the amount is added to the player's coins.
    Won(u32),
}

impl PayoutResult {
    pub fn amount(&self) -> u32 {
        match self {
            PayoutResult::Won(amount) => *amount,
            PayoutResult::Lost | PayoutResult::MatchedNoWager => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, PayoutResult::Lost)
    }
}

impl fmt::Display for PayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutResult::Lost => write!(f, "lost"),
            PayoutResult::MatchedNoWager => write!(f, "matched_no_wager"),
            PayoutResult::Won(amount) => write!(f, "won {amount}"),
        }
    }
}

/// Everything that happened in one played round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub payline: Payline,
    pub bet: Bet,
    pub lucky_coin: bool,
    pub rule: Option<usize>,
    pub payout: PayoutResult,
    pub bonus: u32,
}

impl RoundOutcome {
    /// Coins put at stake. Playing the lucky coin does not cost extra coins.
    pub fn wagered(&self) -> u32 {
        self.bet.coins() as u32
    }

    pub fn returned(&self) -> u32 {
        self.payout.amount() + self.bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_amounts() {
        assert_eq!(PayoutResult::Lost.amount(), 0);
        assert_eq!(PayoutResult::MatchedNoWager.amount(), 0);
        assert_eq!(PayoutResult::Won(12).amount(), 12);
        assert!(!PayoutResult::Lost.is_match());
        assert!(PayoutResult::MatchedNoWager.is_match());
    }

    #[test]
    fn test_round_totals() {
        let round = RoundOutcome {
            payline: Payline::from([0, 0, 0]),
            bet: Bet::new(2).unwrap(),
            lucky_coin: true,
            rule: Some(0),
            payout: PayoutResult::Won(10),
            bonus: 5,
        };
        assert_eq!(round.wagered(), 2);
        assert_eq!(round.returned(), 15);
    }
}
