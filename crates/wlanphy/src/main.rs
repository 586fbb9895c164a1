use std::io::{Read, Write};
use std::path::PathBuf;

use bitvec::vec::BitVec;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wlanphy_modem::{bits_from_bytes, parse_bits, OfdmModulator, TailPolicy};

mod output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "wlanphy", about = "Map coded 802.11 OFDM bits onto data subcarriers")]
struct Args {
    /// Payload modulation scheme: BPSK, QPSK, QAM-16 or QAM-64.
    #[arg(short, long, env = "WLANPHY_MODULATION", default_value = "BPSK")]
    modulation: String,

    /// Handling of DATA bits that do not fill a whole OFDM symbol: drop or pad.
    #[arg(long, default_value = "drop")]
    tail: TailPolicy,

    /// Read raw bytes (LSB first) instead of '0'/'1' text.
    #[arg(long)]
    bytes: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Coded bits to modulate; stdin when omitted.
    input: Option<PathBuf>,
}

/// Resolve the configured scheme. Runs before any input is read.
fn configure(args: &Args) -> Result<OfdmModulator, wlanphy_modem::Error> {
    OfdmModulator::builder(&args.modulation)
        .tail_policy(args.tail)
        .build()
}

fn read_input(args: &Args) -> Result<BitVec, Box<dyn std::error::Error>> {
    let raw = match &args.input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    if args.bytes {
        return Ok(bits_from_bytes(&raw));
    }
    Ok(parse_bits(std::str::from_utf8(&raw)?)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let modulator = configure(&args)?;
    tracing::info!(
        scheme = %modulator.scheme(),
        tail = %modulator.tail_policy(),
        "modulator configured"
    );

    let bits = read_input(&args)?;
    let model = modulator.modulate(&bits)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => output::write_text(&model, &mut out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &output::to_json(&model))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
