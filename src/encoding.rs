use std::io::Cursor;

use encoding_rs::{Encoding, UTF_8};
use xhtmlchardet::detect;

/// Detect the encoding of XML bytes: byte order mark first, then the XML
/// declaration. Falls back to UTF-8.
pub(crate) fn detect_encoding(data: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(data) {
        return encoding;
    }
    let mut cursor = Cursor::new(data);
    detect(&mut cursor, None)
        .ok()
        .and_then(|charsets| {
            charsets
                .first()
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or(UTF_8)
}
