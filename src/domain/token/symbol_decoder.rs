use tracing::debug;

/// Shortest symbol accepted after cleanup.
const MIN_SYMBOL_LEN: usize = 2;
/// Longest symbol accepted after cleanup (bytes32 capacity).
const MAX_SYMBOL_LEN: usize = 32;

/// Decode a raw on-chain token symbol into printable text.
///
/// Some legacy ERC-20 contracts report `symbol()` as a raw 32-byte blob
/// instead of a string. When the input is exactly 64 hex digits (an
/// optional `0x` prefix is tolerated) it is hex-decoded and read as
/// UTF-8 with embedded NULs dropped; any other input is taken verbatim.
/// Either way only code points 2..=127 survive and surrounding
/// whitespace is trimmed.
///
/// Returns `None` when the cleaned symbol is shorter than 2 or longer
/// than 32 characters - an unusable symbol, not an error. Malformed
/// input never panics or fails; it degrades to `None`.
pub fn decode_symbol(raw: &str) -> Option<String> {
    let hex_body = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    let text = if hex_body.len() == 64 && hex_body.bytes().all(|b| b.is_ascii_hexdigit()) {
        match hex::decode(hex_body) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => raw.to_string(),
        }
    } else {
        raw.to_string()
    };

    let cleaned: String = text
        .chars()
        .filter(|c| (2..=127).contains(&(*c as u32)))
        .collect();
    let trimmed = cleaned.trim();

    if (MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN).contains(&trimmed.len()) {
        Some(trimmed.to_string())
    } else {
        debug!("unusable symbol after cleanup: {:?}", raw);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_padded(symbol: &str) -> String {
        let mut bytes = symbol.as_bytes().to_vec();
        bytes.resize(32, 0);
        hex::encode(bytes)
    }

    #[test]
    fn test_decodes_null_padded_hex_blob() {
        let encoded = hex_padded("USDC");
        assert_eq!(decode_symbol(&encoded), Some("USDC".to_string()));
    }

    #[test]
    fn test_decodes_with_0x_prefix() {
        let encoded = format!("0x{}", hex_padded("WETH"));
        assert_eq!(decode_symbol(&encoded), Some("WETH".to_string()));
    }

    #[test]
    fn test_plain_symbol_passes_through() {
        assert_eq!(decode_symbol("DAI"), Some("DAI".to_string()));
        assert_eq!(decode_symbol("  FRAX  "), Some("FRAX".to_string()));
    }

    #[test]
    fn test_blob_with_too_few_printable_chars_is_unusable() {
        let encoded = hex_padded("X");
        assert_eq!(decode_symbol(&encoded), None);
    }

    #[test]
    fn test_single_char_input_is_unusable() {
        assert_eq!(decode_symbol("X"), None);
        assert_eq!(decode_symbol(""), None);
    }

    #[test]
    fn test_overlong_input_is_unusable() {
        let long = "A".repeat(33);
        assert_eq!(decode_symbol(&long), None);
    }

    #[test]
    fn test_non_printable_chars_are_stripped() {
        assert_eq!(decode_symbol("US\u{0}DC\u{1}"), Some("USDC".to_string()));
        assert_eq!(decode_symbol("WE\u{80}TH"), Some("WETH".to_string()));
    }

    #[test]
    fn test_63_hex_chars_is_not_a_blob() {
        let not_a_blob = "a".repeat(63);
        // Treated as verbatim text, too long after cleanup.
        assert_eq!(decode_symbol(&not_a_blob), None);
    }
}
