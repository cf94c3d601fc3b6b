//! Text decoding and encoding for input and output files.
//!
//! Input decoding never fails: malformed byte sequences become U+FFFD.
//! Output may carry a UTF-8 byte-order mark (`utf-8-sig`) so spreadsheet
//! programs detect the encoding.

use encoding_rs::{Encoding, UTF_8};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A resolved text encoding plus the BOM flag.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    bom: bool,
}

impl TextEncoding {
    #[must_use]
    pub const fn utf8() -> Self {
        Self {
            encoding: UTF_8,
            bom: false,
        }
    }

    /// UTF-8 with a leading byte-order mark.
    #[must_use]
    pub const fn utf8_sig() -> Self {
        Self {
            encoding: UTF_8,
            bom: true,
        }
    }

    /// Resolve an encoding label such as `utf-8`, `gbk`, `utf-8-sig`.
    ///
    /// Labels are case-insensitive; `_` is accepted in place of `-`.
    pub fn from_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        if matches!(normalized.as_str(), "utf-8-sig" | "utf8-sig") {
            return Ok(Self::utf8_sig());
        }

        Encoding::for_label(label.trim().as_bytes())
            .or_else(|| Encoding::for_label(normalized.as_bytes()))
            .map(|encoding| Self {
                encoding,
                bom: false,
            })
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    #[must_use]
    pub fn name(&self) -> String {
        if self.bom {
            format!("{}-sig", self.encoding.name())
        } else {
            self.encoding.name().to_string()
        }
    }

    /// Decode bytes, replacing malformed sequences and dropping a BOM.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, had_errors) = self.encoding.decode_with_bom_removal(bytes);
        if had_errors {
            debug!("Replaced malformed {} sequences while decoding", self.encoding.name());
        }
        text.into_owned()
    }

    /// Encode text. Encodings without an encoder (the UTF-16 family) write UTF-8.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.encoding.encode(text);
        if self.bom && self.encoding == UTF_8 {
            let mut out = Vec::with_capacity(UTF8_BOM.len() + bytes.len());
            out.extend_from_slice(UTF8_BOM);
            out.extend_from_slice(&bytes);
            out
        } else {
            bytes.into_owned()
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Read and decode a whole file.
pub fn read_text_file(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(encoding.decode(&bytes))
}

/// Encode and write a whole file, replacing any existing content.
pub fn write_text_file(path: &Path, text: &str, encoding: TextEncoding) -> Result<()> {
    std::fs::write(path, encoding.encode(text)).map_err(|e| Error::io(path, e))
}

/// Split decoded text into lines, accepting both `\n` and `\r\n`.
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
