use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bitcoin::hashes::{sha256, Hash};
use bitcoin::hex::{DisplayHex, FromHex};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use vibestamp::address::SHA256_LEN;

#[derive(Parser, Debug)]
#[command(name = "vibestamp")]
#[command(about = "Base58 codec and human-readable pseudo-addresses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Encode hex bytes as base58
    Encode {
        /// Bytes to encode, in hex
        hex: String,
    },
    /// Decode base58 into hex bytes
    Decode {
        /// Base58 string
        data: String,
    },
    /// Address for a 20-byte digest, or a 32-byte SHA-256 digest
    Address {
        /// Digest in hex
        hex: String,
    },
    /// Checksum-valid address starting with the given prefix
    HrAddress {
        /// Base58 prefix, normally starting with '1'
        prefix: String,
    },
    /// Pseudo-addresses for the SHA-256 of a file
    Stamp {
        /// File to hash
        file: PathBuf,
        /// Print a JSON object instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize, Debug)]
struct StampReport {
    file: String,
    sha256: String,
    addresses: Vec<String>,
}

fn stamp(path: &Path) -> Result<StampReport, Box<dyn Error>> {
    let data = fs::read(path)?;
    let sha256 = sha256::Hash::hash(&data).to_string();
    debug!("{} bytes from {}, sha256 {}", data.len(), path.display(), sha256);
    let addresses = vibestamp::sha256_to_hr_addresses(&sha256)?;
    Ok(StampReport { file: path.display().to_string(), sha256, addresses })
}

fn run(command: Command) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Command::Encode { hex } => vibestamp::encode_base58(&Vec::<u8>::from_hex(&hex)?),
        Command::Decode { data } => vibestamp::decode_base58(&data)?.as_slice().to_lower_hex_string(),
        Command::Address { hex } => {
            let digest = Vec::<u8>::from_hex(&hex)?;
            match digest.len() {
                SHA256_LEN => vibestamp::sha256_to_address(&digest)?,
                _ => vibestamp::digest_to_address(&digest)?,
            }
        }
        Command::HrAddress { prefix } => vibestamp::hr_address(&prefix)?,
        Command::Stamp { file, json } => {
            let report = stamp(&file)?;
            info!("stamped {}", report.file);
            if json {
                serde_json::to_string_pretty(&report)?
            } else {
                report.addresses.join("\n")
            }
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    debug!("{:?}", cli);
    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
