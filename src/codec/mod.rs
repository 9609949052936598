pub mod encoder;
pub mod decoder;

use std::{fmt, ops::Deref, str::FromStr};

use crate::{
    code_table::{Bit, CodeTable, Codeword},
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
    stats::CompressionStats,
    tree::CodeTree,
    Symbol,
};

pub use encoder::Encoder;
pub use decoder::Decoder;

/// Unpacked sequence of code units, one [`Bit`] per unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeStream {
    units: Vec<Bit>,
}

impl CodeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { units: Vec::with_capacity(capacity) }
    }

    /// Parses a stream written as ASCII `'0'` and `'1'` bytes.
    ///
    /// Any other byte is a [`HuffmanError::MalformedCodeStream`].
    pub fn parse_units(units: &[u8]) -> Result<Self> {
        let mut stream = Self::with_capacity(units.len());

        for (i, &unit) in units.iter().enumerate() {
            match Bit::from_ascii(unit) {
                Some(bit) => stream.push(bit),
                None => return Err(HuffmanError::malformed(i, format!("invalid unit {:?}", unit as char))),
            }
        }

        Ok(stream)
    }

    #[inline(always)]
    pub fn push(&mut self, bit: Bit) {
        self.units.push(bit);
    }

    #[inline(always)]
    pub fn extend_from_codeword(&mut self, code: &Codeword) {
        self.units.extend_from_slice(code.bits());
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.units.truncate(len);
    }

    pub fn into_units(self) -> Vec<Bit> {
        self.units
    }
}

impl Deref for CodeStream {
    type Target = [Bit];

    fn deref(&self) -> &Self::Target {
        &self.units
    }
}

impl From<Vec<Bit>> for CodeStream {
    fn from(units: Vec<Bit>) -> Self {
        Self { units }
    }
}

impl FromIterator<Bit> for CodeStream {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self { units: iter.into_iter().collect() }
    }
}

impl FromStr for CodeStream {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_units(s.as_bytes())
    }
}

impl fmt::Display for CodeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.units.iter() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// A code tree together with the code table derived from it.
///
/// The tree outlives every encode and decode call made through the codec.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S: Symbol> {
    tree: CodeTree<S>,
    table: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Builds the codec for the alphabet and frequencies of `input`.
    pub fn from_symbols(input: &[S]) -> Result<Self> {
        Ok(Self::from_frequencies(&FrequencyTable::from_symbols(input)?))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Self {
        let tree = CodeTree::build(frequencies);
        let table = CodeTable::from_tree(&tree);
        Self { tree, table }
    }

    pub fn tree(&self) -> &CodeTree<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    pub fn encoder(&self) -> Encoder<'_, S> {
        Encoder::new(&self.table)
    }

    pub fn decoder(&self) -> Decoder<'_, S> {
        Decoder::new(&self.tree)
    }

    pub fn encode(&self, input: &[S]) -> Result<CodeStream> {
        self.encoder().encode(input)
    }

    pub fn decode(&self, stream: &CodeStream) -> Result<Vec<S>> {
        self.decoder().decode(stream)
    }

    pub fn stats(&self, input: &[S], stream: &CodeStream) -> CompressionStats {
        CompressionStats::new(input.len(), self.table.len(), stream.len(), self.table.max_len())
    }
}
