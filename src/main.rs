use std::fs;

use clap::{Parser, Subcommand};
use log::{info, warn};
use huffman_rust::{properties::Properties, CodeStream, FrequencyTable, HuffmanCodec, HuffmanError};

#[derive(Parser, Debug)]
#[command(about = "Huffman-encodes text into a stream of '0'/'1' units and decodes it back")]
struct Args {
    /// Maximum number of characters accepted as input
    #[arg(short, long = "max-input-len", default_value_t = 1000)]
    max_input_len: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode, print the stream, decode it back and print the compression factor
    Roundtrip {
        /// Input filename, or the text itself with --text
        input: String,
        /// Treat the input argument as the text to encode
        #[arg(short, long, default_value_t = false)]
        text: bool,
        /// Print the statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Print the code tree and the code table
        #[arg(long, default_value_t = false)]
        tree: bool,
    },
    /// Write <DEST_NAME>.code and <DEST_NAME>.properties
    Encode {
        /// Input filename
        source_name: String,
        /// The destination basename
        dest_name: String,
    },
    /// Rebuild the code tree from <SOURCE_NAME>.properties and decode <SOURCE_NAME>.code
    Decode {
        /// The basename of the encoded files
        source_name: String,
        /// The filename of the decoded text
        dest_name: String,
    },
}

fn read_input(input: &str, literal: bool, max: usize) -> Result<Vec<char>, HuffmanError> {
    let text = if literal { input.to_owned() } else { fs::read_to_string(input)? };
    let symbols: Vec<char> = text.chars().collect();

    if symbols.len() > max {
        return Err(HuffmanError::InputTooLong { len: symbols.len(), max });
    }

    Ok(symbols)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Roundtrip { input, text, json, tree } => {
            let symbols = read_input(&input, text, args.max_input_len)?;
            let codec = HuffmanCodec::from_symbols(&symbols)?;

            if tree {
                println!("{}", codec.tree());
                println!("{}", codec.table());
            }

            let stream = codec.encode(&symbols)?;
            println!("{}", stream);

            let decoded = codec.decode(&stream)?;
            println!("{}", decoded.iter().collect::<String>());

            if decoded != symbols {
                warn!("decoded text differs from the input");
            }

            let stats = codec.stats(&symbols, &stream);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{:.6}", stats.compression_factor);
            }
        },
        Command::Encode { source_name, dest_name } => {
            let symbols = read_input(&source_name, false, args.max_input_len)?;
            let frequencies = FrequencyTable::from_symbols(&symbols)?;
            let codec = HuffmanCodec::from_frequencies(&frequencies);

            let stream = codec.encode(&symbols)?;
            fs::write(format!("{}.code", dest_name), stream.to_string())?;
            Properties::new(&frequencies, stream.len()).store(&dest_name)?;

            info!("encoded {} symbols into {} units ({}.code)", symbols.len(), stream.len(), dest_name);
        },
        Command::Decode { source_name, dest_name } => {
            let props = Properties::load(&source_name)?;
            let codec = HuffmanCodec::from_frequencies(&props.frequency_table()?);

            let stream: CodeStream = fs::read_to_string(format!("{}.code", source_name))?.trim_end().parse()?;
            if stream.len() != props.encoded_length {
                warn!("{}.code holds {} units, properties say {}", source_name, stream.len(), props.encoded_length);
            }

            let decoded: String = codec.decode(&stream)?.into_iter().collect();
            fs::write(&dest_name, &decoded)?;

            info!("decoded {} units into {} symbols ({})", stream.len(), decoded.chars().count(), dest_name);
        },
    }

    Ok(())
}
