use serde::{Deserialize, Serialize};

/// Number of units an uncompressed symbol is assumed to take.
pub const BITS_PER_SYMBOL: usize = 8;

/// Ratio between the encoded length and an 8-unit-per-symbol baseline.
///
/// Units are not packed, so this shows how compressible the input is rather
/// than how much storage the stream takes. Returns 0 for an empty input.
pub fn compression_factor(input_len: usize, encoded_len: usize) -> f64 {
    if input_len == 0 {
        return 0.0;
    }
    encoded_len as f64 / (BITS_PER_SYMBOL * input_len) as f64
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompressionStats {
    pub input_len: usize,
    pub distinct_symbols: usize,
    pub encoded_len: usize,
    pub max_codeword_len: usize,
    pub compression_factor: f64,
}

impl CompressionStats {
    pub fn new(input_len: usize, distinct_symbols: usize, encoded_len: usize, max_codeword_len: usize) -> Self {
        Self {
            input_len,
            distinct_symbols,
            encoded_len,
            max_codeword_len,
            compression_factor: compression_factor(input_len, encoded_len),
        }
    }

    /// Average number of units spent per input symbol.
    pub fn units_per_symbol(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.encoded_len as f64 / self.input_len as f64
    }
}

#[test]
fn test_compression_factor() {
    assert_eq!(compression_factor(2, 4), 0.25);
    assert_eq!(compression_factor(1, 8), 1.0);
    assert_eq!(compression_factor(0, 0), 0.0);
}

#[test]
fn test_stats_serialize() {
    let stats = CompressionStats::new(9, 2, 9, 1);
    let json = serde_json::to_string(&stats).unwrap();

    assert!(json.contains("\"encoded_len\":9"));
    assert_eq!(serde_json::from_str::<CompressionStats>(&json).unwrap(), stats);
    assert_eq!(stats.units_per_symbol(), 1.0);
}
