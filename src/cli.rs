use crate::bits;
use crate::error::Result;
use crate::mask::LivenessMask;
use crate::report;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Sparse commitment liveness mask compressor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generates a random mask and reports compression statistics
    Report {
        /// Number of commitments tracked by the mask
        #[arg(short, long)]
        total: usize,

        /// Number of live commitments among them
        #[arg(short, long)]
        live: usize,

        /// Seed for the mask shuffle (default: from entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Compresses a mask given as a 0/1 string
    Compress {
        /// The mask, one character per commitment
        #[arg(short, long, value_name = "MASK")]
        mask: String,
    },
    /// Decompresses a 0/1 bitstream back into a mask
    Decompress {
        /// The compressed bitstream as 0/1 text
        #[arg(short, long, value_name = "BITS")]
        bits: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Report { total, live, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            let start = Instant::now();
            let (_mask, stats) = report::random_report(*total, *live, &mut rng)?;
            let duration = start.elapsed();

            println!("Total commitments:        {}", stats.total);
            println!("Live commitments:         {}", stats.live);
            println!("Fraction live:            {:.2}%", 100.0 * stats.fraction_live);
            println!("Compressed size:          {} bits", stats.compressed_bits);
            println!("Bits per live commitment: {:.3}", stats.bits_per_live);
            println!(
                "Round-trip check:         {}",
                if stats.round_trip_ok { "pass" } else { "fail" }
            );
            println!("Elapsed time:             {:.2?}", duration);
        }
        Commands::Compress { mask } => {
            let mask = LivenessMask::from_text(mask)?;
            let compressed = mask.compress()?;
            println!("{}", bits::to_text(&compressed));
            println!("{} commitments -> {} bits", mask.len(), compressed.len());
        }
        Commands::Decompress { bits: text } => {
            let compressed = bits::from_text(text)?;
            let mask = LivenessMask::decompress(&compressed)?;
            println!("{}", mask);
        }
    }

    Ok(())
}
