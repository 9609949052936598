use std::{collections::HashMap, fs::{self, File}, io::BufReader, path::Path};

use crate::{error::{HuffmanError, Result}, frequency::FrequencyTable};

pub const PROPERTIES_VERSION: u32 = 0;

/// Parameters stored next to an encoded stream, enough to rebuild the code
/// tree that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub version: u32,
    /// Number of symbols of the original input
    pub length: usize,
    /// Number of units of the encoded stream
    pub encoded_length: usize,
    /// `(symbol, weight)` pairs in ascending symbol order
    pub frequencies: Vec<(char, u64)>,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            version: PROPERTIES_VERSION,
            length: 0,
            encoded_length: 0,
            frequencies: Vec::new(),
        }
    }
}

impl Properties {
    pub fn new(frequencies: &FrequencyTable<char>, encoded_length: usize) -> Self {
        Self {
            length: frequencies.total() as usize,
            encoded_length,
            frequencies: frequencies.iter().collect(),
            ..Default::default()
        }
    }

    pub fn frequency_table(&self) -> Result<FrequencyTable<char>> {
        FrequencyTable::from_weights(self.frequencies.iter().copied())
    }

    /// Reads `<basename>.properties`.
    pub fn load(basename: &str) -> Result<Self> {
        let path = format!("{}.properties", basename);
        let file = File::open(&path)?;
        let map = java_properties::read(BufReader::new(file))
            .map_err(|e| HuffmanError::invalid_properties(format!("failed parsing {}: {}", path, e)))?;

        Self::try_from(map)
    }

    /// Writes `<basename>.properties`.
    pub fn store(self, basename: &str) -> Result<()> {
        let path = format!("{}.properties", basename);
        fs::write(Path::new(&path), String::from(self))?;
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(value: &HashMap<String, String>, key: &str) -> Result<T> {
    value.get(key)
        .ok_or_else(|| HuffmanError::invalid_properties(format!("missing {}", key)))?
        .trim()
        .parse()
        .map_err(|_| HuffmanError::invalid_properties(format!("malformed {}", key)))
}

fn parse_frequencies(s: &str) -> Result<Vec<(char, u64)>> {
    let mut frequencies = Vec::new();

    for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (code_point, weight) = pair.split_once(':')
            .ok_or_else(|| HuffmanError::invalid_properties(format!("malformed frequency pair {}", pair)))?;

        let symbol = code_point.trim().parse::<u32>().ok()
            .and_then(char::from_u32)
            .ok_or_else(|| HuffmanError::invalid_properties(format!("invalid code point {}", code_point)))?;
        let weight = weight.trim().parse::<u64>()
            .map_err(|_| HuffmanError::invalid_properties(format!("invalid weight {}", weight)))?;

        frequencies.push((symbol, weight));
    }

    Ok(frequencies)
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffmanError;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let props = Properties {
            version: parse_field(&value, "version")?,
            length: parse_field(&value, "length")?,
            encoded_length: parse_field(&value, "encodedlength")?,
            frequencies: parse_frequencies(
                value.get("frequencies").ok_or_else(|| HuffmanError::invalid_properties("missing frequencies"))?
            )?,
        };

        if props.version != PROPERTIES_VERSION {
            return Err(HuffmanError::invalid_properties(format!("unsupported version {}", props.version)));
        }

        let total = props.frequencies.iter()
            .try_fold(0u64, |acc, &(_, w)| acc.checked_add(w))
            .ok_or_else(|| HuffmanError::invalid_properties("frequencies overflow a 64-bit total"))?;
        if total != props.length as u64 {
            return Err(HuffmanError::invalid_properties(format!(
                "frequencies sum to {} but length is {}", total, props.length
            )));
        }

        Ok(props)
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman code properties\n");
        s.push_str(&format!("version={}\n", val.version));
        s.push_str(&format!("length={}\n", val.length));
        s.push_str(&format!("encodedlength={}\n", val.encoded_length));
        s.push_str("frequencies=");
        s.push_str(
            &val.frequencies.iter()
                .map(|&(symbol, weight)| format!("{}:{}", symbol as u32, weight))
                .collect::<Vec<_>>()
                .join(",")
        );
        s.push('\n');

        s
    }
}
