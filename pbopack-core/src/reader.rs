use std::io::{Read, Seek, SeekFrom};

use crate::constants::{CHECKSUM_LEN, TRAILER_LEN};
use crate::entry::HeaderEntry;
use crate::error::PboResult;
use crate::info::PboInfo;
use crate::io::{read_bytes, read_stringz};

/// Parse an archive header from the start of `reader`.
///
/// The header walk is forward-only; seeking is used once to learn the total
/// stream length for the trailer probe, and data-block bytes are never read.
pub fn read_pbo_info<R: Read + Seek>(reader: &mut R) -> PboResult<PboInfo> {
    let mut info = PboInfo::default();

    // 1. First entry: either the extended-header signature or a record.
    let mut entry = HeaderEntry::read(reader)?;
    if entry.is_signature() {
        info.signature = Some(entry);
        read_extensions(reader, &mut info.extensions)?;
        entry = HeaderEntry::read(reader)?;
    }

    // 2. Record entries, terminated by the all-zero boundary entry. The
    //    boundary is consumed and not kept.
    while !entry.is_boundary() {
        info.records.push(entry);
        entry = HeaderEntry::read(reader)?;
    }

    // 3. Offsets are not stored on disk: accumulate data sizes starting at
    //    the header-end position, right after the boundary entry.
    let header_end = reader.stream_position()?;
    let mut offset = header_end;
    for record in &mut info.records {
        record.data_offset = offset;
        offset += u64::from(record.data_size);
    }
    info.data_block_start = header_end;
    info.data_block_end = offset;

    // 4. Trailer: a zero separator byte plus a 20-byte hash, present iff
    //    exactly those 21 bytes remain. Any other remainder means no
    //    checksum, never an error.
    let stream_len = reader.seek(SeekFrom::End(0))?;
    if stream_len.saturating_sub(info.data_block_end) == TRAILER_LEN {
        reader.seek(SeekFrom::Start(info.data_block_end))?;
        read_bytes(reader, 1)?;
        let hash = read_bytes(reader, CHECKSUM_LEN)?;
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&hash);
        info.checksum = Some(checksum);
    } else if stream_len > info.data_block_end {
        log::debug!(
            "{} trailing bytes after the data block, treating as no checksum",
            stream_len - info.data_block_end
        );
    }

    Ok(info)
}

// Key/value pairs; an empty key closes the section.
fn read_extensions<R: Read>(
    reader: &mut R,
    extensions: &mut Vec<(String, String)>,
) -> PboResult<()> {
    loop {
        let key = read_stringz(reader)?;
        if key.is_empty() {
            return Ok(());
        }
        let value = read_stringz(reader)?;
        extensions.push((key, value));
    }
}
