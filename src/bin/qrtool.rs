use clap::{Parser, Subcommand};
use qr_payload::tools::{load_batch, parse_hex, render_result};
use qr_payload::{BatchInput, decode, decode_batch};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one buffer of error-corrected data codewords
    Decode {
        /// Codewords as hex, whitespace allowed
        #[arg(long)]
        hex: String,
        /// Symbol version (1-40)
        #[arg(long)]
        version: u8,
    },
    /// Decode every `<version> <hex>` line of a file in parallel
    Batch {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { hex, version } => decode_cmd(&hex, version),
        Command::Batch { file } => batch_cmd(&file),
    }
}

fn decode_cmd(hex: &str, version: u8) -> ExitCode {
    let data = match parse_hex(hex) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Invalid codewords: {err}");
            return ExitCode::FAILURE;
        }
    };

    match decode(&data, version) {
        Ok(result) => {
            print!("{}", render_result(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Decode failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn batch_cmd(file: &Path) -> ExitCode {
    let lines = match load_batch(file) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let inputs: Vec<BatchInput<'_>> = lines
        .iter()
        .map(|l| (l.data.as_slice(), l.version))
        .collect();

    let start = Instant::now();
    let results = decode_batch(&inputs);
    let elapsed = start.elapsed();

    let mut failures = 0usize;
    for (line, result) in lines.iter().zip(&results) {
        match result {
            Ok(decoded) => println!(
                "line {}: ok chunks={} text={:?}",
                line.line,
                decoded.chunks.len(),
                decoded.text
            ),
            Err(err) => {
                failures += 1;
                println!("line {}: error {}", line.line, err);
            }
        }
    }

    println!(
        "Decoded {} buffers ({} failed) in {:.2?}",
        results.len(),
        failures,
        elapsed
    );
    ExitCode::SUCCESS
}
