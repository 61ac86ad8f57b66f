use std::path::PathBuf;

use thiserror::Error;

/// Codec errors
#[derive(Debug, Error)]
pub enum PboError {
    /// A caller-supplied argument was unusable; names the parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The stream ended in the middle of a header field.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// A header text field was not valid UTF-8.
    #[error("header text field is not valid UTF-8")]
    InvalidString,

    /// Unknown packing method tag in an entry.
    #[error("unknown packing method tag: {0:#010x}")]
    InvalidPackingMethod(u32),

    /// A collected file does not fit the 32-bit size fields.
    #[error("file too large for a 32-bit entry size: {}", .0.display())]
    EntryTooLarge(PathBuf),

    /// A path could not be represented as an entry name.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type PboResult<T> = Result<T, PboError>;
