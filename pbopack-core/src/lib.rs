//! PBO archive header codec.
//!
//! A PBO file is a flat header of named entries, the raw data blocks in
//! record order, and optionally a zero byte plus a 20-byte integrity hash.
//! Entry data offsets are never stored on disk; they are derived by
//! accumulating data sizes while walking the header.
//!
//! This crate parses and serializes that header and builds one from a
//! directory tree. Data-block contents, compression, and hash computation
//! stay with the caller.

pub mod collect;
pub mod constants;
pub mod entry;
pub mod error;
pub mod info;
pub mod io;
pub mod reader;
pub mod writer;

pub use collect::{collect_entry, collect_pbo_info, TimestampProvider};
pub use constants::PackingMethod;
pub use entry::HeaderEntry;
pub use error::{PboError, PboResult};
pub use info::PboInfo;
pub use reader::read_pbo_info;
pub use writer::write_pbo_info;
