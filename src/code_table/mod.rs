use std::{collections::BTreeMap, fmt, ops::Deref};

use crate::{frequency::FrequencyTable, tree::CodeTree, Symbol};

/// One unit of a code stream: the label of a tree edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    #[inline(always)]
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Parses the textual units `'0'` and `'1'`.
    #[inline(always)]
    pub fn from_ascii(unit: u8) -> Option<Self> {
        match unit {
            b'0' => Some(Bit::Zero),
            b'1' => Some(Bit::One),
            _ => None,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Root-to-leaf path of one symbol. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword(Vec<Bit>);

impl Codeword {
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl Deref for Codeword {
    type Target = [Bit];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Codeword of every symbol of a [`CodeTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: BTreeMap<S, Codeword>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derives each codeword by climbing from the symbol's leaf to the root.
    ///
    /// A tree made of a single leaf gets the one-unit codeword `0`.
    pub fn from_tree(tree: &CodeTree<S>) -> Self {
        let root = tree.root();
        let mut codes = BTreeMap::new();

        for (symbol, leaf) in tree.registry().iter() {
            if leaf == root {
                codes.insert(symbol, Codeword(vec![Bit::Zero]));
                continue;
            }

            let mut code = Vec::new();
            let mut current = leaf;

            while let Some(parent) = tree.node(current).parent() {
                match tree.node(parent).children() {
                    Some((left, _)) if left == current => code.push(Bit::Zero),
                    _ => code.push(Bit::One),
                }
                current = parent;
            }

            debug_assert_eq!(current, root);
            code.reverse();
            codes.insert(symbol, Codeword(code));
        }

        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Codeword)> {
        self.codes.iter()
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(|c| c.len()).max().unwrap_or(0)
    }

    /// Length of the stream the encoder produces for an input with these
    /// frequencies. Symbols missing from the table are ignored.
    pub fn weighted_len(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies.iter()
            .filter_map(|(s, w)| self.codes.get(&s).map(|c| c.len() as u64 * w))
            .sum()
    }
}

/// Space separated `symbol:codeword` pairs.
impl<S: Symbol> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, code) in self.codes.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{:?}:{}", symbol, code)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
