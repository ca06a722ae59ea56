use super::bet::Bet;
use super::paytable::{PayRule, Paytable, RuleSlot};
use super::symbol::{Payline, ReelIndex, SymbolIndex};
use crate::error::{PayoutError, Result};
use serde::{Deserialize, Serialize};

/// Number of leading paytable rules shown on the idle display.
pub const DISPLAY_RULES: usize = 3;

/// Parameters of the lucky-coin side wager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckyCoin {
    /// Bonus coins awarded when the lucky coin hits. Zero or less disables the feature.
    pub bonus: i32,
    /// Rounds between lucky-coin rerolls. Scheduling belongs to the game runtime.
    pub reroll: u32,
    /// Chance of a hit, indexed by coins bet minus one.
    pub chance: [f32; 3],
}

impl Default for LuckyCoin {
    fn default() -> Self {
        Self {
            bonus: 0,
            reroll: 10,
            chance: [0.5, 0.25, 0.125],
        }
    }
}

impl LuckyCoin {
    pub fn enabled(&self) -> bool {
        self.bonus > 0
    }

    /// Hit threshold for a wager, `None` when nothing was bet.
    pub fn chance_for(&self, bet: Bet) -> Option<f32> {
        match bet.coins() {
            0 => None,
            coins => self.chance.get(coins as usize - 1).copied(),
        }
    }
}

/// One playable machine layout: symbols, per-reel weights, pay schedule and
/// lucky-coin parameters.
///
/// Immutable once built. Every structural invariant is checked by
/// [`ReelConfiguration::new`], including the convention that the first three
/// paytable rules are wildcard-free (they are drawn on the idle display).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVariation", into = "RawVariation")]
pub struct ReelConfiguration {
    symbol_names: Vec<String>,
    machine_name: String,
    weight_table: [Vec<SymbolIndex>; 3],
    paytable: Paytable,
    seed_capital: u32,
    lucky_coin: LuckyCoin,
}

impl ReelConfiguration {
    pub fn new(
        symbol_names: Vec<String>,
        machine_name: impl Into<String>,
        weight_table: [Vec<SymbolIndex>; 3],
        paytable: Paytable,
        seed_capital: u32,
        lucky_coin: LuckyCoin,
    ) -> Result<Self> {
        let config = Self {
            symbol_names,
            machine_name: machine_name.into(),
            weight_table,
            paytable,
            seed_capital,
            lucky_coin,
        };
        config.validate()?;
        Ok(config)
    }

    /// A seven-symbol fruit machine used by the simulator and demos.
    pub fn classic() -> Result<Self> {
        let symbol_names = ["seven", "bar", "bell", "plum", "orange", "lemon", "cherry"]
            .into_iter()
            .map(String::from)
            .collect();
        let weight_table: [Vec<SymbolIndex>; 3] = [
            vec![0, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 6],
            vec![0, 1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 6],
            vec![0, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6],
        ]
        .map(|row| row.into_iter().map(SymbolIndex).collect());
        let paytable: [[i64; 4]; 9] = [
            [0, 0, 0, 100],
            [1, 1, 1, 50],
            [2, 2, 2, 20],
            [3, 3, 3, 15],
            [4, 4, 4, 10],
            [5, 5, 5, 8],
            [6, 6, 6, 5],
            [6, 6, -1, 3],
            [6, -1, -1, 1],
        ];
        let paytable = paytable
            .into_iter()
            .map(PayRule::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(
            symbol_names,
            "Classic Fruits",
            weight_table,
            Paytable(paytable),
            100,
            LuckyCoin {
                bonus: 10,
                reroll: 10,
                chance: [0.1, 0.05, 0.025],
            },
        )
    }

    fn validate(&self) -> Result<()> {
        let symbols = self.symbol_names.len();
        if symbols == 0 {
            return invalid("variation defines no symbols".to_string());
        }
        if symbols > u8::MAX as usize + 1 {
            return invalid(format!("{symbols} symbols exceed the limit of 256"));
        }

        for reel in ReelIndex::ALL {
            let row = &self.weight_table[reel.position()];
            if row.is_empty() {
                return invalid(format!("weight table for {reel:?} reel is empty"));
            }
            if let Some(bad) = row.iter().find(|s| s.value() >= symbols) {
                return invalid(format!(
                    "weight table for {reel:?} reel references unknown symbol {bad}"
                ));
            }
        }

        for (index, rule) in self.paytable.iter().enumerate() {
            for slot in rule.slots {
                if let RuleSlot::Exact(symbol) = slot
                    && symbol.value() >= symbols
                {
                    return invalid(format!("rule {index} references unknown symbol {symbol}"));
                }
            }
        }

        if self.paytable.len() < DISPLAY_RULES {
            return invalid(format!(
                "paytable needs at least {DISPLAY_RULES} rules, found {}",
                self.paytable.len()
            ));
        }
        if let Some(index) = self
            .paytable
            .iter()
            .take(DISPLAY_RULES)
            .position(PayRule::has_wildcard)
        {
            return invalid(format!(
                "rule {index} is shown on the idle display and must not contain wildcards"
            ));
        }

        if let Some(chance) = self
            .lucky_coin
            .chance
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return invalid(format!("lucky coin chance {chance} is outside [0, 1]"));
        }
        if self.lucky_coin.reroll == 0 {
            return invalid("lucky coin reroll period must be positive".to_string());
        }
        Ok(())
    }

    pub fn symbol_names(&self) -> &[String] {
        &self.symbol_names
    }

    pub fn symbol_name(&self, symbol: SymbolIndex) -> Option<&str> {
        self.symbol_names.get(symbol.value()).map(String::as_str)
    }

    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }

    pub fn weights(&self, reel: ReelIndex) -> &[SymbolIndex] {
        &self.weight_table[reel.position()]
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    pub fn seed_capital(&self) -> u32 {
        self.seed_capital
    }

    pub fn lucky_coin(&self) -> &LuckyCoin {
        &self.lucky_coin
    }

    pub fn lucky_coin_enabled(&self) -> bool {
        self.lucky_coin.enabled()
    }

    /// Payline rendered with symbol names, e.g. `seven|seven|bar`.
    pub fn describe_payline(&self, payline: &Payline) -> String {
        payline
            .symbols()
            .iter()
            .map(|s| self.symbol_name(*s).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn invalid<T>(message: String) -> Result<T> {
    Err(PayoutError::InvalidConfiguration(message))
}

/// Serialized shape of a variation, using the numeric rule encoding where
/// `-1` stands for a wildcard slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVariation {
    symbol_names: Vec<String>,
    machine_name: String,
    weight_table: Vec<Vec<u8>>,
    paytable: Vec<[i64; 4]>,
    #[serde(default)]
    seed_capital: u32,
    #[serde(default)]
    lucky_coin_bonus: i32,
    #[serde(default = "default_reroll", rename = "luckyCoinReRoll")]
    lucky_coin_reroll: u32,
    #[serde(default = "default_chance")]
    lucky_coin_chance: [f32; 3],
}

fn default_reroll() -> u32 {
    LuckyCoin::default().reroll
}

fn default_chance() -> [f32; 3] {
    LuckyCoin::default().chance
}

impl TryFrom<RawVariation> for ReelConfiguration {
    type Error = PayoutError;

    fn try_from(raw: RawVariation) -> Result<Self> {
        let rows = raw.weight_table.len();
        let weight_table: [Vec<SymbolIndex>; 3] = raw
            .weight_table
            .into_iter()
            .map(|row| row.into_iter().map(SymbolIndex).collect())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| {
                PayoutError::InvalidConfiguration(format!(
                    "weight table must have 3 rows, found {rows}"
                ))
            })?;
        let paytable = raw
            .paytable
            .into_iter()
            .map(PayRule::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(
            raw.symbol_names,
            raw.machine_name,
            weight_table,
            Paytable(paytable),
            raw.seed_capital,
            LuckyCoin {
                bonus: raw.lucky_coin_bonus,
                reroll: raw.lucky_coin_reroll,
                chance: raw.lucky_coin_chance,
            },
        )
    }
}

impl From<ReelConfiguration> for RawVariation {
    fn from(config: ReelConfiguration) -> Self {
        Self {
            symbol_names: config.symbol_names,
            machine_name: config.machine_name,
            weight_table: config
                .weight_table
                .into_iter()
                .map(|row| row.into_iter().map(|s| s.0).collect())
                .collect(),
            paytable: config.paytable.0.into_iter().map(<[i64; 4]>::from).collect(),
            seed_capital: config.seed_capital,
            lucky_coin_bonus: config.lucky_coin.bonus,
            lucky_coin_reroll: config.lucky_coin.reroll,
            lucky_coin_chance: config.lucky_coin.chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{i}")).collect()
    }

    fn weights() -> [Vec<SymbolIndex>; 3] {
        [
            vec![SymbolIndex(0), SymbolIndex(1)],
            vec![SymbolIndex(1), SymbolIndex(2)],
            vec![SymbolIndex(2)],
        ]
    }

    fn rules() -> Paytable {
        Paytable(vec![
            PayRule::exact([0, 0, 0], 10),
            PayRule::exact([1, 1, 1], 5),
            PayRule::exact([2, 2, 2], 2),
        ])
    }

    #[test]
    fn test_classic_is_valid() {
        let config = ReelConfiguration::classic().unwrap();
        assert_eq!(config.machine_name(), "Classic Fruits");
        assert_eq!(config.symbol_name(SymbolIndex(0)), Some("seven"));
        assert!(config.lucky_coin_enabled());
    }

    #[test]
    fn test_empty_weight_row_rejected() {
        let mut table = weights();
        table[1].clear();
        let result = ReelConfiguration::new(names(3), "m", table, rules(), 0, LuckyCoin::default());
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_unknown_weight_symbol_rejected() {
        let mut table = weights();
        table[2].push(SymbolIndex(7));
        let result = ReelConfiguration::new(names(3), "m", table, rules(), 0, LuckyCoin::default());
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_short_paytable_rejected() {
        let mut paytable = rules();
        paytable.0.pop();
        let result =
            ReelConfiguration::new(names(3), "m", weights(), paytable, 0, LuckyCoin::default());
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_wildcard_in_display_rules_rejected() {
        let mut paytable = rules();
        paytable.0[1].slots[2] = RuleSlot::Wildcard;
        let result =
            ReelConfiguration::new(names(3), "m", weights(), paytable, 0, LuckyCoin::default());
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));

        // Wildcards after the display rules are fine.
        let mut paytable = rules();
        paytable.0.push(PayRule::new([RuleSlot::Wildcard; 3], 0));
        assert!(
            ReelConfiguration::new(names(3), "m", weights(), paytable, 0, LuckyCoin::default())
                .is_ok()
        );
    }

    #[test]
    fn test_lucky_coin_bounds() {
        let lucky = LuckyCoin {
            chance: [0.5, 1.5, 0.1],
            ..LuckyCoin::default()
        };
        let result = ReelConfiguration::new(names(3), "m", weights(), rules(), 0, lucky);
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));

        let lucky = LuckyCoin {
            chance: [0.5, 0.25, f32::NAN],
            ..LuckyCoin::default()
        };
        let result = ReelConfiguration::new(names(3), "m", weights(), rules(), 0, lucky);
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));

        let lucky = LuckyCoin {
            reroll: 0,
            ..LuckyCoin::default()
        };
        let result = ReelConfiguration::new(names(3), "m", weights(), rules(), 0, lucky);
        assert!(matches!(result, Err(PayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_lucky_coin_chance_for() {
        let lucky = LuckyCoin::default();
        assert_eq!(lucky.chance_for(Bet::NONE), None);
        assert_eq!(lucky.chance_for(Bet::new(3).unwrap()), Some(0.125));
        assert!(!lucky.enabled());
    }

    #[test]
    fn test_describe_payline() {
        let config = ReelConfiguration::classic().unwrap();
        assert_eq!(
            config.describe_payline(&Payline::from([0, 0, 6])),
            "seven|seven|cherry"
        );
    }
}
