use super::engine::PayoutEngine;
use crate::domain::bet::Bet;
use crate::domain::outcome::{PayoutResult, RoundOutcome};
use crate::error::Result;
use serde::Serialize;
use tracing::info;

/// Aggregated results of a batch of rounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SimulationReport {
    pub machine: String,
    pub rounds: u64,
    pub wagered: u64,
    pub paid: u64,
    pub bonus_paid: u64,
    pub wins: u64,
    pub losses: u64,
    pub no_wager_matches: u64,
    pub bonus_hits: u64,
    /// Matches per paytable rule, in table order.
    pub rule_hits: Vec<u64>,
}

impl SimulationReport {
    pub fn new(machine: impl Into<String>, rules: usize) -> Self {
        Self {
            machine: machine.into(),
            rule_hits: vec![0; rules],
            ..Self::default()
        }
    }

    pub fn record(&mut self, round: &RoundOutcome) {
        self.rounds += 1;
        self.wagered += round.wagered() as u64;
        match round.payout {
            PayoutResult::Lost => self.losses += 1,
            PayoutResult::MatchedNoWager => self.no_wager_matches += 1,
            PayoutResult::Won(amount) => {
                self.wins += 1;
                self.paid += amount as u64;
            }
        }
        if round.bonus > 0 {
            self.bonus_hits += 1;
            self.bonus_paid += round.bonus as u64;
        }
        if let Some(hits) = round.rule.and_then(|index| self.rule_hits.get_mut(index)) {
            *hits += 1;
        }
    }

    /// Coins returned (payouts and bonuses) per coin wagered; 0 when nothing was wagered.
    pub fn return_to_player(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            (self.paid + self.bonus_paid) as f64 / self.wagered as f64
        }
    }

    /// Share of rounds whose payline matched a rule.
    pub fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            (self.wins + self.no_wager_matches) as f64 / self.rounds as f64
        }
    }
}

/// Plays rounds back to back at a fixed wager.
pub struct Simulator {
    engine: PayoutEngine,
    bet: Bet,
    lucky_coin: bool,
}

impl Simulator {
    pub fn new(engine: PayoutEngine, bet: Bet, lucky_coin: bool) -> Self {
        Self {
            engine,
            bet,
            lucky_coin,
        }
    }

    pub fn run(&mut self, rounds: u64) -> Result<SimulationReport> {
        self.run_with(rounds, |_| Ok(()))
    }

    /// Like [`Simulator::run`], handing every round to `on_round` as it is played.
    pub fn run_with<F>(&mut self, rounds: u64, mut on_round: F) -> Result<SimulationReport>
    where
        F: FnMut(&RoundOutcome) -> Result<()>,
    {
        let config = self.engine.config().clone();
        let mut report = SimulationReport::new(config.machine_name(), config.paytable().len());
        for _ in 0..rounds {
            let round = self.engine.play_round(self.bet, self.lucky_coin)?;
            report.record(&round);
            on_round(&round)?;
        }
        info!(
            machine = %report.machine,
            rounds = report.rounds,
            rtp = report.return_to_player(),
            "simulation finished"
        );
        Ok(report)
    }
}
