use super::symbol::{Payline, SymbolIndex};
use crate::error::PayoutError;

/// Raw value used for "any symbol" in the numeric rule encoding.
pub const WILDCARD: i64 = -1;

/// One position of a pay rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSlot {
    Exact(SymbolIndex),
    Wildcard,
}

impl RuleSlot {
    pub fn matches(self, symbol: SymbolIndex) -> bool {
        match self {
            RuleSlot::Exact(expected) => expected == symbol,
            RuleSlot::Wildcard => true,
        }
    }

    pub fn is_wildcard(self) -> bool {
        matches!(self, RuleSlot::Wildcard)
    }
}

impl TryFrom<i64> for RuleSlot {
    type Error = PayoutError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw == WILDCARD {
            return Ok(RuleSlot::Wildcard);
        }
        u8::try_from(raw)
            .map(|index| RuleSlot::Exact(SymbolIndex(index)))
            .map_err(|_| {
                PayoutError::InvalidConfiguration(format!("rule slot {raw} is not a symbol index"))
            })
    }
}

impl From<RuleSlot> for i64 {
    fn from(slot: RuleSlot) -> Self {
        match slot {
            RuleSlot::Exact(symbol) => symbol.0 as i64,
            RuleSlot::Wildcard => WILDCARD,
        }
    }
}

/// A single row of the pay schedule: three slots and the payout per coin bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayRule {
    pub slots: [RuleSlot; 3],
    pub payout_per_coin: u32,
}

impl PayRule {
    pub fn new(slots: [RuleSlot; 3], payout_per_coin: u32) -> Self {
        Self {
            slots,
            payout_per_coin,
        }
    }

    /// Rule with three exact symbols.
    pub fn exact(symbols: [u8; 3], payout_per_coin: u32) -> Self {
        Self::new(symbols.map(|s| RuleSlot::Exact(SymbolIndex(s))), payout_per_coin)
    }

    pub fn matches(&self, payline: &Payline) -> bool {
        self.slots
            .iter()
            .zip(payline.symbols())
            .all(|(slot, symbol)| slot.matches(*symbol))
    }

    pub fn has_wildcard(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_wildcard())
    }

    /// Symbols of a wildcard-free rule, `None` otherwise.
    pub fn exact_symbols(&self) -> Option<[SymbolIndex; 3]> {
        let mut out = [SymbolIndex(0); 3];
        for (dst, slot) in out.iter_mut().zip(self.slots) {
            match slot {
                RuleSlot::Exact(symbol) => *dst = symbol,
                RuleSlot::Wildcard => return None,
            }
        }
        Some(out)
    }
}

impl TryFrom<[i64; 4]> for PayRule {
    type Error = PayoutError;

    fn try_from(row: [i64; 4]) -> Result<Self, Self::Error> {
        let payout_per_coin = u32::try_from(row[3]).map_err(|_| {
            PayoutError::InvalidConfiguration(format!("payout {} in paytable is out of range", row[3]))
        })?;
        Ok(Self::new(
            [
                RuleSlot::try_from(row[0])?,
                RuleSlot::try_from(row[1])?,
                RuleSlot::try_from(row[2])?,
            ],
            payout_per_coin,
        ))
    }
}

impl From<PayRule> for [i64; 4] {
    fn from(rule: PayRule) -> Self {
        [
            rule.slots[0].into(),
            rule.slots[1].into(),
            rule.slots[2].into(),
            rule.payout_per_coin as i64,
        ]
    }
}

/// Ordered pay schedule. Lower index means higher priority.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paytable(pub Vec<PayRule>);

impl Paytable {
    /// Index of the first rule matching `payline`.
    ///
    /// Table order wins over payout size: a wildcard rule placed before an exact
    /// rule shadows it.
    pub fn match_payline(&self, payline: &Payline) -> Option<usize> {
        self.0.iter().position(|rule| rule.matches(payline))
    }

    pub fn rule(&self, index: usize) -> Option<&PayRule> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PayRule> {
        self.0.iter()
    }
}
