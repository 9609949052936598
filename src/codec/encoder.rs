use crate::{code_table::CodeTable, error::{HuffmanError, Result}, Symbol};

use super::CodeStream;

/// Room for `len` symbols of at most `max_len` units each, saturating.
#[inline(always)]
pub(crate) fn capacity_hint(len: usize, max_len: usize) -> usize {
    len.saturating_mul(max_len.max(1))
}

/// Turns symbol sequences into code streams. Needs only the code table.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a, S: Symbol> {
    table: &'a CodeTable<S>,
}

impl<'a, S: Symbol> Encoder<'a, S> {
    pub fn new(table: &'a CodeTable<S>) -> Self {
        Self { table }
    }

    /// Concatenates the codewords of `input`, in order.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] on the first symbol the
    /// table has no codeword for.
    pub fn encode(&self, input: &[S]) -> Result<CodeStream> {
        let mut stream = CodeStream::with_capacity(capacity_hint(input.len(), self.table.max_len()));
        self.encode_into(input, &mut stream)?;
        Ok(stream)
    }

    /// Appends the codewords of `input` to `stream`. On error `stream` is
    /// left as it was.
    pub fn encode_into(&self, input: &[S], stream: &mut CodeStream) -> Result<()> {
        let start = stream.len();

        for symbol in input.iter() {
            match self.table.get(symbol) {
                Some(code) => stream.extend_from_codeword(code),
                None => {
                    stream.truncate(start);
                    return Err(HuffmanError::unknown_symbol(symbol));
                },
            }
        }

        Ok(())
    }
}
