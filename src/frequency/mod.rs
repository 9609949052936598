use std::collections::BTreeMap;

use crate::{error::{HuffmanError, Result}, Symbol};

/// Occurrence count of every distinct symbol of an input, in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    weights: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Counts the symbols of `input`.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] when `input` is empty.
    pub fn from_symbols(input: &[S]) -> Result<Self> {
        if input.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut weights = BTreeMap::new();
        for &x in input.iter() {
            weights.entry(x).and_modify(|freq| *freq += 1).or_insert(1u64);
        }

        Ok(Self { weights, total: input.len() as u64 })
    }

    /// Builds a table from explicit `(symbol, weight)` pairs. Repeated
    /// symbols have their weights summed.
    ///
    /// The total is bounded by `u64::MAX`, which also bounds every internal
    /// weight of a tree built from the table.
    pub fn from_weights<I: IntoIterator<Item = (S, u64)>>(pairs: I) -> Result<Self> {
        let mut weights = BTreeMap::new();
        let mut total = 0u64;

        for (symbol, weight) in pairs {
            if weight == 0 {
                return Err(HuffmanError::zero_weight(&symbol));
            }
            total = total.checked_add(weight).ok_or(HuffmanError::WeightOverflow)?;
            *weights.entry(symbol).or_insert(0) += weight;
        }

        if weights.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        Ok(Self { weights, total })
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn weight(&self, symbol: &S) -> Option<u64> {
        self.weights.get(symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.weights.iter().map(|(&s, &w)| (s, w))
    }
}
