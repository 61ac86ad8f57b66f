use std::io::Write;

use crate::entry::HeaderEntry;
use crate::error::PboResult;
use crate::info::PboInfo;
use crate::io::write_stringz;

/// Serialize the archive header described by `info`.
///
/// Header metadata only: data-block bytes and the trailing hash belong to
/// the caller laying out the archive body. Field combinations are written
/// verbatim, garbage in, garbage out.
pub fn write_pbo_info<W: Write>(writer: &mut W, info: &PboInfo) -> PboResult<()> {
    // 1. Extended header: signature entry, key/value pairs, empty-key
    //    terminator. The terminator is written even with zero pairs.
    if let Some(signature) = &info.signature {
        signature.write(writer)?;
        for (key, value) in &info.extensions {
            write_stringz(writer, key)?;
            write_stringz(writer, value)?;
        }
        write_stringz(writer, "")?;
    }

    // 2. Record entries, in order.
    for record in &info.records {
        record.write(writer)?;
    }

    // 3. Closing boundary entry.
    HeaderEntry::boundary().write(writer)?;

    Ok(())
}
