use super::symbol::SymbolIndex;

/// Pre-selected symbols handed out in order instead of random reel draws.
///
/// Attached to an engine for reproducible spins. Once every entry has been
/// consumed the engine goes back to weighted sampling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSequence {
    symbols: Vec<SymbolIndex>,
    cursor: usize,
}

impl SymbolSequence {
    pub fn new(symbols: impl IntoIterator<Item = SymbolIndex>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Returns the next scripted symbol and advances the cursor.
    pub fn next_symbol(&mut self) -> Option<SymbolIndex> {
        let symbol = self.symbols.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(symbol)
    }

    pub fn symbols(&self) -> &[SymbolIndex] {
        &self.symbols
    }

    pub fn remaining(&self) -> usize {
        self.symbols.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl From<Vec<u8>> for SymbolSequence {
    fn from(raw: Vec<u8>) -> Self {
        Self::new(raw.into_iter().map(SymbolIndex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_consumed_in_order() {
        let mut seq = SymbolSequence::from(vec![2, 0, 1]);
        assert_eq!(seq.remaining(), 3);
        assert_eq!(seq.next_symbol(), Some(SymbolIndex(2)));
        assert_eq!(seq.next_symbol(), Some(SymbolIndex(0)));
        assert_eq!(seq.next_symbol(), Some(SymbolIndex(1)));
        assert!(seq.is_exhausted());
        assert_eq!(seq.next_symbol(), None);
        assert_eq!(seq.remaining(), 0);
    }
}
