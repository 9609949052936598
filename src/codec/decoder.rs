use crate::{code_table::Bit, error::{HuffmanError, Result}, tree::CodeTree, Symbol};

use super::CodeStream;

/// Turns code streams back into symbols by walking the code tree.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a, S: Symbol> {
    tree: &'a CodeTree<S>,
}

impl<'a, S: Symbol> Decoder<'a, S> {
    pub fn new(tree: &'a CodeTree<S>) -> Self {
        Self { tree }
    }

    /// Decodes a whole stream.
    ///
    /// Fails with [`HuffmanError::MalformedCodeStream`] when the stream stops
    /// in the middle of a codeword. A tree made of one leaf reads every unit
    /// as one occurrence of its symbol, and only accepts `0` units.
    pub fn decode(&self, stream: &CodeStream) -> Result<Vec<S>> {
        let root = self.tree.root();

        if let Some(symbol) = self.tree.node(root).symbol() {
            return match stream.iter().position(|&b| b != Bit::Zero) {
                Some(position) => Err(HuffmanError::malformed(position, "only 0 units encode a single-symbol alphabet")),
                None => Ok(vec![symbol; stream.len()]),
            };
        }

        let mut output = Vec::new();
        let mut cursor = root;
        let mut codeword_start = 0;

        for (i, &bit) in stream.iter().enumerate() {
            // Internal nodes always have both children.
            cursor = match self.tree.child(cursor, bit) {
                Some(next) => next,
                None => unreachable!("the decoding cursor never rests on a leaf"),
            };

            if let Some(symbol) = self.tree.node(cursor).symbol() {
                output.push(symbol);
                cursor = root;
                codeword_start = i + 1;
            }
        }

        if cursor != root {
            return Err(HuffmanError::malformed(
                codeword_start,
                format!("stream ends inside a codeword after {} units", stream.len() - codeword_start),
            ));
        }

        Ok(output)
    }

    /// Parses textual units (`'0'` / `'1'`) and decodes them.
    pub fn decode_str(&self, units: &str) -> Result<Vec<S>> {
        self.decode(&units.parse()?)
    }
}
