//! Byte-to-text decoding of corpus files.
//!
//! The encoding comes from a byte order mark when present, otherwise from
//! the XML declaration, otherwise UTF-8. Decoding is strict: a byte
//! sequence that is invalid in that encoding makes the document malformed.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::DocumentError;

/// Decode a whole file into text ready for [`crate::parse_document`].
pub fn decode_document(bytes: &[u8]) -> Result<String, DocumentError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (declared_encoding(bytes)?, bytes),
    };

    if encoding == UTF_8 {
        return std::str::from_utf8(body)
            .map(str::to_string)
            .map_err(|_| invalid(encoding));
    }
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(Cow::into_owned)
        .ok_or_else(|| invalid(encoding))
}

/// Encoding named by the XML declaration, UTF-8 when there is none.
///
/// A declaration readable as ASCII cannot be UTF-16, so a UTF-16 label
/// without a byte order mark falls back to UTF-8.
fn declared_encoding(bytes: &[u8]) -> Result<&'static Encoding, DocumentError> {
    let mut reader = Reader::from_reader(bytes);
    let label = match reader.read_event() {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => label.into_owned(),
            Some(Err(error)) => {
                return Err(DocumentError::Malformed {
                    message: format!("bad XML declaration: {error}"),
                });
            }
            None => return Ok(UTF_8),
        },
        _ => return Ok(UTF_8),
    };

    match Encoding::for_label(&label) {
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => Ok(UTF_8),
        Some(encoding) => Ok(encoding),
        None => Err(DocumentError::UnsupportedEncoding {
            label: String::from_utf8_lossy(&label).into_owned(),
        }),
    }
}

fn invalid(encoding: &'static Encoding) -> DocumentError {
    DocumentError::InvalidEncoding {
        encoding: encoding.name().to_string(),
    }
}
