#![allow(dead_code)]

use reelpay::application::engine::PayoutEngine;
use reelpay::domain::paytable::{PayRule, Paytable, RuleSlot};
use reelpay::domain::symbol::SymbolIndex;
use reelpay::domain::variation::{LuckyCoin, ReelConfiguration};
use reelpay::infrastructure::rng::ScriptedRandomSource;
use std::sync::Arc;

pub fn symbols(raw: &[u8]) -> Vec<SymbolIndex> {
    raw.iter().copied().map(SymbolIndex).collect()
}

/// Four symbols; rule 3 generalizes rule 4 and is listed first.
pub fn variation(lucky_bonus: i32) -> Arc<ReelConfiguration> {
    let names = ["cherry", "bell", "bar", "seven"]
        .into_iter()
        .map(String::from)
        .collect();
    let weights = [
        symbols(&[0, 0, 1, 2, 3]),
        symbols(&[0, 1, 1, 2, 3, 3]),
        symbols(&[3, 2, 1, 0]),
    ];
    let paytable = Paytable(vec![
        PayRule::exact([3, 3, 3], 50),
        PayRule::exact([2, 2, 2], 20),
        PayRule::exact([1, 1, 1], 5),
        PayRule::new(
            [
                RuleSlot::Exact(SymbolIndex(0)),
                RuleSlot::Exact(SymbolIndex(0)),
                RuleSlot::Wildcard,
            ],
            2,
        ),
        PayRule::exact([0, 0, 0], 10),
    ]);
    let lucky = LuckyCoin {
        bonus: lucky_bonus,
        reroll: 10,
        chance: [0.5, 0.25, 0.125],
    };
    Arc::new(ReelConfiguration::new(names, "Test Machine", weights, paytable, 100, lucky).unwrap())
}

pub fn engine(rng: ScriptedRandomSource) -> PayoutEngine {
    PayoutEngine::new(variation(15), Box::new(rng))
}
