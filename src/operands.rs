//! Provides the `read` function, which returns the whole contents of an
//! operand file as UTF-8 (or at least UTF-8-compatible) bytes. Each operand is
//! read into memory in its entirety: the calculator needs both texts at once.
use anyhow::{Context, Result};
use log::debug;
use std::{fs, path::Path};

/// Read the file at `path`, translating UTF-16 to UTF-8 and dropping a leading
/// Byte Order Mark.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    let contents = fs::read(path).with_context(|| format!("can't read {}", path.display()))?;
    debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(without_bom(decode_if_utf16(contents)))
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER.
    //
    // "without BOM handling" means that the UTF-16 BOM is translated to a UTF-8 BOM
    //
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";

/// Strip a (UTF-8) Byte Order Mark, so that the first element of a file with a
/// BOM compares equal to the same element in a file without one.
fn without_bom(mut contents: Vec<u8>) -> Vec<u8> {
    if contents.starts_with(BOM_BYTES) {
        contents.drain(..BOM_BYTES.len());
    }
    contents
}
