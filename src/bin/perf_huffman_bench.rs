use clap::Parser;
use huffman_rust::{utils::timer::Timer, HuffmanCodec};
use log::info;
use rand::Rng;

#[derive(Parser, Debug)]
#[command(about = "Times tree construction, encoding and decoding on random inputs")]
struct Args {
    /// Number of symbols of each input
    #[arg(short, long, default_value_t = 100_000)]
    len: usize,
    /// Number of distinct symbols to draw from
    #[arg(short, long, default_value_t = 128)]
    alphabet: u16,
    /// Number of inputs to time
    #[arg(short, long, default_value_t = 10)]
    rounds: usize,
    /// Skew the distribution towards small symbols
    #[arg(short, long, default_value_t = false)]
    skewed: bool,
}

fn gen_input(len: usize, alphabet: u16, skewed: bool) -> Vec<u16> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let x = rng.gen_range(0..alphabet.max(1));
            if skewed { rng.gen_range(0..=x) } else { x }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut build_time = Timer::new();
    let mut encode_time = Timer::new();
    let mut decode_time = Timer::new();
    let mut factor = 0.0;

    for round in 0..args.rounds {
        let input = gen_input(args.len, args.alphabet, args.skewed);

        let codec = build_time.time(|| HuffmanCodec::from_symbols(&input))?;
        let stream = encode_time.time(|| codec.encode(&input))?;
        let decoded = decode_time.time(|| codec.decode(&stream))?;

        if decoded != input {
            return Err(format!("round {} did not survive the round trip", round).into());
        }

        factor += codec.stats(&input, &stream).compression_factor;
        info!("round {}: {} units, height {}", round, stream.len(), codec.tree().height());
    }

    let mut out_stats = String::new();

    out_stats.push_str("################### Huffman coding stats ###################\n");
    out_stats.push_str(&format!("mean time build {} ns\n", build_time.mean()));
    out_stats.push_str(&format!("mean time encode {} ns\n", encode_time.mean()));
    out_stats.push_str(&format!("mean time decode {} ns\n", decode_time.mean()));
    out_stats.push_str(&format!("mean compression factor {:.4}\n", factor / args.rounds.max(1) as f64));

    print!("{}", out_stats);

    Ok(())
}
