//! pbopack - PBO archive header tool

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::dispatch()
}
