use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::constants::PackingMethod;
use crate::entry::HeaderEntry;
use crate::error::{PboError, PboResult};
use crate::info::PboInfo;

/// Source of per-file timestamps for collected entries. The codec stores
/// the value opaquely and never interprets it.
pub trait TimestampProvider {
    fn timestamp(&self, path: &Path) -> u32;
}

/// Describe a directory tree as an unpacked archive: one record per regular
/// file, a bare signature entry, no extensions, and zero data offsets (a
/// packer assigns real offsets when it lays out the data blocks).
///
/// Records are sorted by entry name so the same tree always produces the
/// same header.
pub fn collect_pbo_info(
    directory: &Path,
    timestamps: &dyn TimestampProvider,
) -> PboResult<PboInfo> {
    if directory.as_os_str().is_empty() {
        return Err(PboError::InvalidArgument("directory"));
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(directory).follow_links(false) {
        let entry = entry.map_err(|e| {
            let msg = e.to_string();
            e.into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, msg))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let prefix = entry_prefix(directory, entry.path())?;
        records.push(collect_entry(entry.path(), &prefix, timestamps)?);
    }

    records.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    Ok(PboInfo {
        signature: Some(HeaderEntry::signature()),
        records,
        ..PboInfo::default()
    })
}

/// Build the header entry for one file: entry path prefix joined with the
/// file's base name, uncompressed, sizes from the file length, timestamp
/// from the injected provider.
pub fn collect_entry(
    file_path: &Path,
    entry_path: &str,
    timestamps: &dyn TimestampProvider,
) -> PboResult<HeaderEntry> {
    if file_path.as_os_str().is_empty() {
        return Err(PboError::InvalidArgument("filePath"));
    }

    let file_name = file_path
        .file_name()
        .ok_or(PboError::InvalidArgument("filePath"))?
        .to_str()
        .ok_or_else(|| PboError::NonUtf8Path(file_path.to_path_buf()))?;

    let len = fs::metadata(file_path)?.len();
    let data_size =
        u32::try_from(len).map_err(|_| PboError::EntryTooLarge(file_path.to_path_buf()))?;

    Ok(HeaderEntry {
        name: join_entry_name(entry_path, file_name),
        packing: PackingMethod::Uncompressed,
        original_size: data_size,
        reserved: 0,
        timestamp: timestamps.timestamp(file_path),
        data_size,
        data_offset: 0,
    })
}

// Entry names use forward slashes regardless of host separator, with no
// leading slash.
fn join_entry_name(prefix: &str, file_name: &str) -> String {
    let normalized = prefix.replace('\\', "/");
    let trimmed = normalized.trim_matches('/');
    if trimmed.is_empty() {
        file_name.to_string()
    } else {
        format!("{trimmed}/{file_name}")
    }
}

// The entry-path prefix for a collected file: its parent directory relative
// to the collection root.
fn entry_prefix(root: &Path, file_path: &Path) -> PboResult<String> {
    let relative = file_path
        .strip_prefix(root)
        .map_err(|_| PboError::InvalidArgument("directory"))?;
    let parent = relative.parent().unwrap_or_else(|| Path::new(""));

    let mut prefix = String::new();
    for component in parent.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| PboError::NonUtf8Path(file_path.to_path_buf()))?;
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(part);
    }
    Ok(prefix)
}
