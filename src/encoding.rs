//! Byte-stream decoding for [`Tailor::tailor_bytes`](crate::Tailor::tailor_bytes).
//!
//! A BOM selects its encoding; everything else must be valid UTF-8. Charset
//! detection beyond that (meta prescan, sniffing) is out of scope.

use crate::error::EncodingError;
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Decodes an HTML byte stream into text.
///
/// Decoding is strict: undecodable input is an error, never replaced with
/// U+FFFD, so the engine stays a pure function of the bytes it was given.
pub fn decode_html_bytes(bytes: &[u8]) -> Result<Cow<'_, str>, EncodingError> {
  if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
    return encoding
      .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
      .ok_or(EncodingError::Undecodable {
        encoding: encoding.name(),
      });
  }

  match std::str::from_utf8(bytes) {
    Ok(text) => Ok(Cow::Borrowed(text)),
    Err(err) => Err(EncodingError::InvalidUtf8 {
      valid_up_to: err.valid_up_to(),
    }),
  }
}
