use crate::domain::bet::Bet;
use crate::domain::outcome::{PayoutResult, RoundOutcome};
use crate::domain::ports::RandomSourceBox;
use crate::domain::sequence::SymbolSequence;
use crate::domain::symbol::{Payline, ReelIndex, SymbolIndex};
use crate::domain::variation::{DISPLAY_RULES, ReelConfiguration};
use crate::error::{PayoutError, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// Payout engine for one machine session.
///
/// `PayoutEngine` draws reel symbols, evaluates paylines against the
/// variation's paytable and rolls the lucky-coin bonus. The configuration is
/// shared read-only; the random source and the optional symbol sequence are
/// owned by this session alone, which is why drawing operations take
/// `&mut self`.
pub struct PayoutEngine {
    config: Arc<ReelConfiguration>,
    rng: RandomSourceBox,
    sequence: Option<SymbolSequence>,
}

impl PayoutEngine {
    /// Creates a new `PayoutEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated variation to play.
    /// * `rng` - The random source this session draws from.
    pub fn new(config: Arc<ReelConfiguration>, rng: RandomSourceBox) -> Self {
        Self {
            config,
            rng,
            sequence: None,
        }
    }

    /// Attaches a scripted symbol sequence consumed by [`PayoutEngine::pick`].
    ///
    /// Fails if the sequence names a symbol the variation does not define.
    pub fn with_sequence(mut self, sequence: SymbolSequence) -> Result<Self> {
        self.set_sequence(Some(sequence))?;
        Ok(self)
    }

    /// Replaces (or with `None`, removes) the scripted symbol sequence.
    pub fn set_sequence(&mut self, sequence: Option<SymbolSequence>) -> Result<()> {
        if let Some(sequence) = &sequence {
            let symbols = self.config.symbol_names().len();
            if let Some(bad) = sequence.symbols().iter().find(|s| s.value() >= symbols) {
                return Err(PayoutError::InvalidConfiguration(format!(
                    "symbol sequence references unknown symbol {bad}"
                )));
            }
        }
        self.sequence = sequence;
        Ok(())
    }

    /// Scripted symbols not consumed yet, 0 without a sequence.
    pub fn sequence_remaining(&self) -> usize {
        self.sequence.as_ref().map_or(0, SymbolSequence::remaining)
    }

    pub fn config(&self) -> &Arc<ReelConfiguration> {
        &self.config
    }

    /// Draws one symbol for `reel`.
    ///
    /// A pending scripted symbol is returned as-is, whatever the reel. Otherwise
    /// an entry of the reel's weight row is chosen uniformly, so symbols listed
    /// more often come up more often.
    pub fn pick(&mut self, reel: ReelIndex) -> Result<SymbolIndex> {
        if let Some(sequence) = self.sequence.as_mut()
            && let Some(symbol) = sequence.next_symbol()
        {
            trace!(?reel, %symbol, "scripted pick");
            if sequence.is_exhausted() {
                debug!("symbol sequence exhausted, back to weighted draws");
            }
            return Ok(symbol);
        }

        let weights = self.config.weights(reel);
        if weights.is_empty() {
            return Err(PayoutError::InvalidConfiguration(format!(
                "weight table for {reel:?} reel is empty"
            )));
        }
        let symbol = weights[self.rng.next_index(weights.len())];
        trace!(?reel, %symbol, "weighted pick");
        Ok(symbol)
    }

    /// Draws a full payline, left to right.
    pub fn spin(&mut self) -> Result<Payline> {
        Ok(Payline::new(
            self.pick(ReelIndex::Left)?,
            self.pick(ReelIndex::Middle)?,
            self.pick(ReelIndex::Right)?,
        ))
    }

    /// Index of the first paytable rule matching `payline`.
    pub fn match_rule(&self, payline: &Payline) -> Option<usize> {
        self.config.paytable().match_payline(payline)
    }

    /// Evaluates `payline` for a wager of `bet` coins.
    pub fn payout(&self, bet: Bet, payline: &Payline) -> PayoutResult {
        let result = match self.match_rule(payline) {
            None => PayoutResult::Lost,
            Some(_) if !bet.is_wager() => PayoutResult::MatchedNoWager,
            Some(index) => {
                let per_coin = self
                    .config
                    .paytable()
                    .rule(index)
                    .map_or(0, |rule| rule.payout_per_coin);
                PayoutResult::Won(per_coin.saturating_mul(bet.coins() as u32))
            }
        };
        debug!(
            payline = %self.config.describe_payline(payline),
            coins = bet.coins(),
            %result,
            "payline evaluated"
        );
        result
    }

    /// Rolls the lucky-coin bonus for a wager of `bet` coins.
    ///
    /// Nothing is drawn when no coins were bet. With the feature disabled the
    /// roll still happens but can only award 0.
    pub fn bonus(&mut self, bet: Bet) -> u32 {
        let Some(threshold) = self.config.lucky_coin().chance_for(bet) else {
            return 0;
        };
        let roll = self.rng.next_unit();
        let bonus = if roll <= threshold {
            u32::try_from(self.config.lucky_coin().bonus).unwrap_or(0)
        } else {
            0
        };
        debug!(coins = bet.coins(), roll, threshold, bonus, "lucky coin rolled");
        bonus
    }

    /// Symbols shown before the first spin, packed reel by reel.
    ///
    /// Each reel contributes three symbols bottom to top: rule 1, rule 0 and
    /// rule 2 of the paytable. The best paying combination therefore sits on the
    /// payline (indices 1, 4 and 7).
    pub fn initial_faces(&self) -> Result<[SymbolIndex; 9]> {
        let paytable = self.config.paytable();
        if paytable.len() < DISPLAY_RULES {
            return Err(PayoutError::InvalidConfiguration(format!(
                "paytable needs at least {DISPLAY_RULES} rules, found {}",
                paytable.len()
            )));
        }

        let mut rows = [[SymbolIndex(0); 3]; DISPLAY_RULES];
        for (row, rule_index) in rows.iter_mut().zip([1, 0, 2]) {
            *row = paytable
                .rule(rule_index)
                .and_then(|rule| rule.exact_symbols())
                .ok_or_else(|| {
                    PayoutError::InvalidConfiguration(format!(
                        "rule {rule_index} is shown on the idle display and must not contain wildcards"
                    ))
                })?;
        }

        let mut faces = [SymbolIndex(0); 9];
        for reel in ReelIndex::ALL {
            for (height, row) in rows.iter().enumerate() {
                faces[reel.position() * 3 + height] = row[reel.position()];
            }
        }
        Ok(faces)
    }

    /// Plays one round: spin, evaluate the payline and, when the lucky coin is
    /// played, roll the bonus for the same bet.
    pub fn play_round(&mut self, bet: Bet, lucky_coin: bool) -> Result<RoundOutcome> {
        let payline = self.spin()?;
        let rule = self.match_rule(&payline);
        let payout = self.payout(bet, &payline);
        let bonus = if lucky_coin { self.bonus(bet) } else { 0 };
        Ok(RoundOutcome {
            payline,
            bet,
            lucky_coin,
            rule,
            payout,
            bonus,
        })
    }
}
