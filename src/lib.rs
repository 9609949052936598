pub mod error;
pub mod frequency;
pub mod priority_queue;
pub mod tree;
pub mod code_table;
pub mod codec;
pub mod stats;
pub mod properties;
pub mod utils;

pub use code_table::{Bit, CodeTable, Codeword};
pub use codec::{CodeStream, Decoder, Encoder, HuffmanCodec};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use stats::{compression_factor, CompressionStats};
pub use tree::{CodeTree, NodeId, SymbolRegistry};

/// Anything that can be counted and coded: bytes, chars, small integers,
/// interned tokens.
pub trait Symbol: Copy + Ord + std::fmt::Debug {}

impl<T> Symbol for T where T: Copy + Ord + std::fmt::Debug {}
