//! Command-line interface for pbopack

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pbopack_core::{collect_pbo_info, read_pbo_info, write_pbo_info, TimestampProvider};

#[derive(Parser, Debug)]
#[command(name = "pbopack")]
#[command(about = "PBO archive header tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the header of an archive
    Info(InfoArgs),
    /// Collect a directory into a header-only archive
    Collect(CollectArgs),
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Archive file to inspect
    #[arg(required = true)]
    archive: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Directory to collect
    #[arg(required = true)]
    directory: PathBuf,

    /// Output archive file
    #[arg(short, long)]
    output: PathBuf,
}

pub fn dispatch() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Info(args) => cmd_info(args),
        Commands::Collect(args) => cmd_collect(args),
    }
}

/// Per-file modification time in seconds since the Unix epoch, zero when
/// the filesystem cannot provide one.
struct MtimeTimestamps;

impl TimestampProvider for MtimeTimestamps {
    fn timestamp(&self, path: &Path) -> u32 {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(SystemTime::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0)
    }
}

fn cmd_info(args: InfoArgs) -> Result<()> {
    let file = File::open(&args.archive)
        .with_context(|| format!("Failed to open {}", args.archive.display()))?;
    let mut reader = BufReader::new(file);
    let info = read_pbo_info(&mut reader)?;

    match &info.signature {
        Some(_) => println!("Signature: present"),
        None => println!("Signature: none"),
    }

    if !info.extensions.is_empty() {
        println!("Extensions:");
        for (key, value) in &info.extensions {
            println!("  {} = {}", key, value);
        }
    }

    println!("Records: {}", info.records.len());
    for record in &info.records {
        println!(
            "  {} ({}, {} bytes at offset {}, timestamp {})",
            record.name, record.packing, record.data_size, record.data_offset, record.timestamp
        );
    }

    println!(
        "Data block: {}..{}",
        info.data_block_start, info.data_block_end
    );
    match &info.checksum {
        Some(checksum) => println!("Checksum: {}", hex::encode(checksum)),
        None => println!("Checksum: none"),
    }

    Ok(())
}

fn cmd_collect(args: CollectArgs) -> Result<()> {
    let info = collect_pbo_info(&args.directory, &MtimeTimestamps)
        .with_context(|| format!("Failed to collect {}", args.directory.display()))?;

    let mut output = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_pbo_info(&mut output, &info)?;

    println!(
        "Collected {} entries from {} -> {}",
        info.records.len(),
        args.directory.display(),
        args.output.display()
    );
    Ok(())
}
