//! Document loading.
//!
//! This module provides functions to load text documents from files or stdin
//! into [`TextBuffer`]s. Files ending in `.gz` and stdin starting with the
//! gzip magic bytes are decompressed first.

use crate::document::buffer::TextBuffer;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Gzip stream header.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads a text file from the filesystem.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (doesn't exist, permission denied, etc.)
/// - A `.gz` file is not valid gzip
/// - The contents are not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use kindleloc::file::loader::load_text_file;
///
/// let buffer = load_text_file("book.txt").unwrap();
/// ```
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<TextBuffer> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        let bytes = fs::read(path_ref).context("Failed to open gzipped file")?;
        decompress_gzip_bytes(&bytes)
            .context("Failed to decompress gzipped file - file may be corrupted")?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    tracing::info!(
        path = %path_ref.display(),
        bytes = content.len(),
        gzipped = is_gzipped,
        "loaded document"
    );
    Ok(TextBuffer::new(content))
}

/// Loads a document from standard input, reading until EOF.
///
/// # Errors
///
/// Returns an error if reading stdin fails or the input is neither UTF-8
/// nor valid gzip.
pub fn load_text_from_stdin() -> Result<TextBuffer> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let buffer = decode_bytes(buffer)?;
    tracing::info!(bytes = buffer.byte_len(), "loaded document from stdin");
    Ok(buffer)
}

/// Decodes raw bytes into a document, decompressing gzip input.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<TextBuffer> {
    let content = if bytes.starts_with(&GZIP_MAGIC) {
        decompress_gzip_bytes(&bytes).context("Failed to decompress gzipped stdin")?
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in stdin")?
    };
    Ok(TextBuffer::new(content))
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder.read_to_string(&mut content)?;
    Ok(content)
}
