use std::fmt;

use crate::error::PboError;

/// "Cprs" — entry payload is compressed.
pub const TAG_COMPRESSED: u32 = 0x4370_7273;
/// "Vers" — sentinel tag of the extended-header signature entry.
pub const TAG_PRODUCT: u32 = 0x5665_7273;

/// Length of the trailing integrity hash.
pub const CHECKSUM_LEN: usize = 20;
/// One zero separator byte plus the hash.
pub const TRAILER_LEN: u64 = 1 + CHECKSUM_LEN as u64;

/// Packing method tag of a header entry.
///
/// `Product` is a structural sentinel marking the signature entry, not a
/// compression scheme. The set is closed; any other on-disk tag is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingMethod {
    Uncompressed,
    Compressed,
    Product,
}

impl TryFrom<u32> for PackingMethod {
    type Error = PboError;

    fn try_from(tag: u32) -> Result<Self, PboError> {
        match tag {
            0 => Ok(PackingMethod::Uncompressed),
            TAG_COMPRESSED => Ok(PackingMethod::Compressed),
            TAG_PRODUCT => Ok(PackingMethod::Product),
            other => Err(PboError::InvalidPackingMethod(other)),
        }
    }
}

impl From<PackingMethod> for u32 {
    fn from(method: PackingMethod) -> Self {
        match method {
            PackingMethod::Uncompressed => 0,
            PackingMethod::Compressed => TAG_COMPRESSED,
            PackingMethod::Product => TAG_PRODUCT,
        }
    }
}

impl fmt::Display for PackingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackingMethod::Uncompressed => "uncompressed",
            PackingMethod::Compressed => "compressed",
            PackingMethod::Product => "product",
        };
        f.write_str(name)
    }
}
