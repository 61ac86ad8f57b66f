use crate::constants::CHECKSUM_LEN;
use crate::entry::HeaderEntry;

/// Parsed description of one archive.
///
/// Built fresh by every read/collect call; `write_pbo_info` consumes it
/// whole. `extensions` is populated only when `signature` is present, and
/// duplicate extension keys are preserved in on-disk order.
#[derive(Debug, Clone, Default)]
pub struct PboInfo {
    /// Present iff the archive opens with a product-tagged sentinel entry.
    pub signature: Option<HeaderEntry>,
    /// Extended-header key/value pairs, in on-disk order.
    pub extensions: Vec<(String, String)>,
    /// One entry per packed member, in on-disk order.
    pub records: Vec<HeaderEntry>,
    /// Trailing integrity hash, when the stream carries one.
    pub checksum: Option<[u8; CHECKSUM_LEN]>,
    /// First byte of the data-block region (equals the header-end position).
    pub data_block_start: u64,
    /// One past the last data-block byte.
    pub data_block_end: u64,
}
