use crate::domain::outcome::{PayoutResult, RoundOutcome};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct RoundRecord {
    round: u64,
    left: u8,
    middle: u8,
    right: u8,
    bet: u8,
    lucky_coin: bool,
    rule: Option<usize>,
    result: &'static str,
    payout: u32,
    bonus: u32,
}

/// Writes played rounds as CSV, one row per round.
///
/// Columns: `round,left,middle,right,bet,lucky_coin,rule,result,payout,bonus`.
/// `rule` is empty when nothing matched.
pub struct RoundWriter<W: Write> {
    writer: csv::Writer<W>,
    rounds: u64,
}

impl<W: Write> RoundWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            rounds: 0,
        }
    }

    pub fn write_round(&mut self, round: &RoundOutcome) -> Result<()> {
        self.rounds += 1;
        let [left, middle, right] = round.payline.0.map(|s| s.0);
        self.writer.serialize(RoundRecord {
            round: self.rounds,
            left,
            middle,
            right,
            bet: round.bet.coins(),
            lucky_coin: round.lucky_coin,
            rule: round.rule,
            result: match round.payout {
                PayoutResult::Lost => "lost",
                PayoutResult::MatchedNoWager => "matched_no_wager",
                PayoutResult::Won(_) => "won",
            },
            payout: round.payout.amount(),
            bonus: round.bonus,
        })?;
        Ok(())
    }

    /// Flushes buffered rows to the sink.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
