use thiserror::Error;

/// Errors raised while building a code tree, encoding or decoding.
///
/// Every error is terminal for the call that raised it: nothing is retried
/// and no partial output is returned.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// No symbols were supplied, so no tree can be built
    #[error("Cannot build a code tree from an empty input")]
    EmptyInput,

    /// The encoder was asked for a symbol its code table does not contain
    #[error("Symbol {symbol} has no codeword in the code table")]
    UnknownSymbol {
        /// Debug rendering of the offending symbol
        symbol: String,
    },

    /// The code stream ends mid-codeword or holds a unit that is neither 0 nor 1
    #[error("Malformed code stream at unit {position}: {reason}")]
    MalformedCodeStream {
        /// Index of the unit where decoding stopped
        position: usize,
        /// What was wrong with the stream
        reason: String,
    },

    /// An explicit frequency of zero was given for a symbol
    #[error("Symbol {symbol} has a zero weight")]
    ZeroWeight {
        /// Debug rendering of the offending symbol
        symbol: String,
    },

    /// The weights add up to more than a u64 can hold
    #[error("Weights overflow a 64-bit total")]
    WeightOverflow,

    /// The input is longer than the configured maximum
    #[error("Input of {len} symbols exceeds the maximum of {max}")]
    InputTooLong { len: usize, max: usize },

    /// A properties file could not be read back into codec parameters
    #[error("Invalid properties: {message}")]
    InvalidProperties { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    pub fn unknown_symbol<S: std::fmt::Debug>(symbol: &S) -> Self {
        Self::UnknownSymbol { symbol: format!("{:?}", symbol) }
    }

    pub fn malformed<R: Into<String>>(position: usize, reason: R) -> Self {
        Self::MalformedCodeStream { position, reason: reason.into() }
    }

    pub fn zero_weight<S: std::fmt::Debug>(symbol: &S) -> Self {
        Self::ZeroWeight { symbol: format!("{:?}", symbol) }
    }

    pub fn invalid_properties<M: Into<String>>(message: M) -> Self {
        Self::InvalidProperties { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
