use std::io::{Read, Write};

use crate::constants::PackingMethod;
use crate::error::PboResult;
use crate::io::{read_stringz, read_u32, write_stringz, write_u32};

/// One archive member's header metadata.
///
/// On disk an entry is a null-terminated name followed by five little-endian
/// u32 fields. `data_offset` is never stored; it is derived by accumulating
/// data sizes while walking a resolved header, and stays zero for entries
/// freshly collected from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub packing: PackingMethod,
    pub original_size: u32,
    pub reserved: u32,
    pub timestamp: u32,
    pub data_size: u32,
    pub data_offset: u64,
}

impl HeaderEntry {
    /// The sentinel entry opening an extended header: empty name, product
    /// tag, all numeric fields zero.
    pub fn signature() -> Self {
        HeaderEntry {
            name: String::new(),
            packing: PackingMethod::Product,
            original_size: 0,
            reserved: 0,
            timestamp: 0,
            data_size: 0,
            data_offset: 0,
        }
    }

    /// The all-zero entry terminating the record list.
    pub fn boundary() -> Self {
        HeaderEntry {
            packing: PackingMethod::Uncompressed,
            ..HeaderEntry::signature()
        }
    }

    pub fn is_signature(&self) -> bool {
        self.name.is_empty() && self.packing == PackingMethod::Product
    }

    pub fn is_boundary(&self) -> bool {
        self.name.is_empty() && self.original_size == 0 && self.data_size == 0
    }

    pub fn read<R: Read>(reader: &mut R) -> PboResult<Self> {
        // 1. Entry name
        let name = read_stringz(reader)?;

        // 2. Packing method tag
        let packing = PackingMethod::try_from(read_u32(reader)?)?;

        // 3. Fixed numeric fields
        let original_size = read_u32(reader)?;
        let reserved = read_u32(reader)?;
        let timestamp = read_u32(reader)?;
        let data_size = read_u32(reader)?;

        Ok(HeaderEntry {
            name,
            packing,
            original_size,
            reserved,
            timestamp,
            data_size,
            data_offset: 0,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> PboResult<()> {
        write_stringz(writer, &self.name)?;
        write_u32(writer, u32::from(self.packing))?;
        write_u32(writer, self.original_size)?;
        write_u32(writer, self.reserved)?;
        write_u32(writer, self.timestamp)?;
        write_u32(writer, self.data_size)?;
        Ok(())
    }
}
