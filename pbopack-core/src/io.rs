use std::io::{ErrorKind, Read, Write};

use crate::error::{PboError, PboResult};

pub fn read_stringz<R: Read>(reader: &mut R) -> PboResult<String> {
    let mut bytes = Vec::new();
    let mut buf = [0u8; 1];
    loop {
        read_exact(reader, &mut buf)?;
        if buf[0] == 0 {
            break;
        }
        bytes.push(buf[0]);
    }
    String::from_utf8(bytes).map_err(|_| PboError::InvalidString)
}

pub fn write_stringz<W: Write>(writer: &mut W, s: &str) -> PboResult<usize> {
    let bytes = s.as_bytes();
    writer.write_all(bytes)?;
    writer.write_all(&[0])?;
    Ok(bytes.len() + 1)
}

pub fn read_u32<R: Read>(reader: &mut R) -> PboResult<u32> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> PboResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub fn read_bytes<R: Read>(reader: &mut R, count: usize) -> PboResult<Vec<u8>> {
    let mut buf = vec![0u8; count];
    read_exact(reader, &mut buf)?;
    Ok(buf)
}

pub fn write_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> PboResult<()> {
    writer.write_all(bytes)?;
    Ok(())
}

// A short read mid-field is a truncated header, not partial data.
fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> PboResult<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => PboError::UnexpectedEof,
        _ => PboError::Io(e),
    })
}
