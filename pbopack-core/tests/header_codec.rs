use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use pbopack_core::{
    collect_pbo_info, read_pbo_info, write_pbo_info, HeaderEntry, PackingMethod, PboInfo,
    TimestampProvider,
};

struct FixedTimestamps(u32);

impl TimestampProvider for FixedTimestamps {
    fn timestamp(&self, _path: &Path) -> u32 {
        self.0
    }
}

fn record(name: &str, data_size: u32, timestamp: u32) -> HeaderEntry {
    HeaderEntry {
        name: name.to_string(),
        packing: PackingMethod::Uncompressed,
        original_size: data_size,
        reserved: 0,
        timestamp,
        data_size,
        data_offset: 0,
    }
}

#[test]
fn test_roundtrip_preserves_fields_and_recomputes_offsets() -> Result<()> {
    let info = PboInfo {
        signature: Some(HeaderEntry::signature()),
        extensions: vec![
            ("property1".to_string(), "value1".to_string()),
            ("property2".to_string(), "value2".to_string()),
        ],
        records: vec![
            record("file1.txt", 15, 1469979348),
            record("file2.txt", 15, 1469979359),
            record("file3.txt", 15, 1469979372),
        ],
        ..PboInfo::default()
    };

    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;
    let header_len = buf.len() as u64;

    // Append the matching data blocks so the derived offsets line up with a
    // real archive body.
    buf.extend_from_slice(&[b'x'; 45]);

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;

    assert!(parsed.signature.is_some());
    assert_eq!(parsed.extensions, info.extensions);
    assert_eq!(parsed.records.len(), 3);
    for (parsed_record, original) in parsed.records.iter().zip(&info.records) {
        assert_eq!(parsed_record.name, original.name);
        assert_eq!(parsed_record.packing, original.packing);
        assert_eq!(parsed_record.original_size, original.original_size);
        assert_eq!(parsed_record.reserved, original.reserved);
        assert_eq!(parsed_record.timestamp, original.timestamp);
        assert_eq!(parsed_record.data_size, original.data_size);
    }

    // Offsets accumulate from the header end; they were zero on input.
    assert_eq!(parsed.records[0].data_offset, header_len);
    assert_eq!(parsed.records[1].data_offset, header_len + 15);
    assert_eq!(parsed.records[2].data_offset, header_len + 30);
    assert_eq!(parsed.data_block_start, parsed.records[0].data_offset);
    assert_eq!(
        parsed.data_block_end,
        parsed.records[2].data_offset + u64::from(parsed.records[2].data_size)
    );
    assert!(parsed.checksum.is_none());
    Ok(())
}

#[test]
fn test_signature_and_extensions_with_no_records() -> Result<()> {
    let info = PboInfo {
        signature: Some(HeaderEntry::signature()),
        extensions: vec![
            ("property1".to_string(), "value1".to_string()),
            ("property2".to_string(), "value2".to_string()),
        ],
        ..PboInfo::default()
    };

    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;
    let stream_len = buf.len() as u64;

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;
    assert!(parsed.signature.is_some());
    assert_eq!(parsed.extensions.len(), 2);
    assert!(parsed.records.is_empty());
    assert!(parsed.checksum.is_none());

    // With zero records both bounds sit at the header end.
    assert_eq!(parsed.data_block_start, stream_len);
    assert_eq!(parsed.data_block_end, stream_len);
    Ok(())
}

#[test]
fn test_no_signature_three_records_no_trailer() -> Result<()> {
    let info = PboInfo {
        records: vec![
            record("file1.txt", 15, 1),
            record("file2.txt", 15, 2),
            record("file3.txt", 15, 3),
        ],
        ..PboInfo::default()
    };

    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;
    buf.extend_from_slice(&[b'.'; 45]);
    let stream_len = buf.len() as u64;

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;
    assert!(parsed.signature.is_none());
    assert!(parsed.extensions.is_empty());
    assert_eq!(parsed.records.len(), 3);
    assert!(parsed.checksum.is_none());
    assert_eq!(parsed.data_block_end, stream_len);
    Ok(())
}

#[test]
fn test_trailer_of_exactly_21_bytes_is_the_checksum() -> Result<()> {
    let info = PboInfo {
        records: vec![record("file1.txt", 15, 1469979348)],
        ..PboInfo::default()
    };

    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;
    buf.extend_from_slice(&[b'x'; 15]);

    let sha1: [u8; 20] = [
        0x45, 0xd1, 0x33, 0x5e, 0x96, 0x6c, 0x5b, 0xd1, 0x27, 0x01, 0x3a, 0xff, 0x28, 0xee, 0x71,
        0xe2, 0x49, 0x3f, 0x98, 0x9d,
    ];
    buf.push(0);
    buf.extend_from_slice(&sha1);
    let stream_len = buf.len() as u64;

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;
    assert_eq!(parsed.checksum, Some(sha1));
    assert_eq!(parsed.data_block_end, stream_len - 21);
    Ok(())
}

#[test]
fn test_trailer_of_any_other_length_means_no_checksum() -> Result<()> {
    let info = PboInfo {
        records: vec![record("file1.txt", 4, 0)],
        ..PboInfo::default()
    };

    for extra in [1usize, 7, 20, 22, 40] {
        let mut buf = Vec::new();
        write_pbo_info(&mut buf, &info)?;
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&vec![0u8; extra]);

        let parsed = read_pbo_info(&mut Cursor::new(buf))?;
        assert!(
            parsed.checksum.is_none(),
            "{} trailing bytes must not parse as a checksum",
            extra
        );
    }
    Ok(())
}

#[test]
fn test_signature_with_zero_extensions_roundtrips() -> Result<()> {
    let info = PboInfo {
        signature: Some(HeaderEntry::signature()),
        ..PboInfo::default()
    };

    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;

    // Signature entry, immediate extensions terminator, boundary entry.
    assert_eq!(buf.len(), 21 + 1 + 21);

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;
    assert!(parsed.signature.is_some());
    assert_eq!(parsed.extensions.len(), 0);
    assert!(parsed.records.is_empty());
    Ok(())
}

#[test]
fn test_collect_directory_is_sorted_and_header_only() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::create_dir(dir.path().join("scripts"))?;
    std::fs::write(dir.path().join("zebra.txt"), "zzzz")?;
    std::fs::write(dir.path().join("alpha.txt"), "aa")?;
    std::fs::write(dir.path().join("scripts").join("init.sqf"), "hint 1;")?;

    let provider = FixedTimestamps(42);
    let info = collect_pbo_info(dir.path(), &provider)?;

    let signature = info.signature.as_ref().expect("signature entry");
    assert_eq!(signature.name, "");
    assert_eq!(signature.packing, PackingMethod::Product);
    assert_eq!(signature.original_size, 0);
    assert_eq!(signature.data_size, 0);
    assert!(info.extensions.is_empty());

    let names: Vec<&str> = info.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["alpha.txt", "scripts/init.sqf", "zebra.txt"]);

    for record in &info.records {
        assert_eq!(record.packing, PackingMethod::Uncompressed);
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.data_offset, 0);
        assert_eq!(record.original_size, record.data_size);
    }
    assert_eq!(info.records[0].data_size, 2);
    assert_eq!(info.records[1].data_size, 7);
    assert_eq!(info.records[2].data_size, 4);

    // A second collection of the same tree yields the same record order.
    let again = collect_pbo_info(dir.path(), &provider)?;
    let again_names: Vec<&str> = again.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, again_names);
    Ok(())
}

#[test]
fn test_collected_header_roundtrips_through_the_codec() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("file1.txt"), "file 10 contents")?;
    std::fs::write(dir.path().join("file2.txt"), "file 100 contents")?;

    let info = collect_pbo_info(dir.path(), &FixedTimestamps(7))?;
    let mut buf = Vec::new();
    write_pbo_info(&mut buf, &info)?;
    let header_len = buf.len() as u64;

    let parsed = read_pbo_info(&mut Cursor::new(buf))?;
    assert!(parsed.signature.is_some());
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].name, "file1.txt");
    assert_eq!(parsed.records[1].name, "file2.txt");

    // The written stream has no data blocks yet, so the derived offsets
    // point past the header as a packer would lay them out.
    assert_eq!(parsed.records[0].data_offset, header_len);
    assert_eq!(
        parsed.records[1].data_offset,
        header_len + u64::from(parsed.records[0].data_size)
    );
    Ok(())
}
