use std::{collections::HashSet, str::FromStr};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::logging;

const NUMBER_ESCAPE_CHAR: &[char] = &['元', '%', ',', ' ', '"', '\n'];

/// Converts Big5 encoded bytes to a UTF-8 `String`.
///
/// Malformed sequences are replaced with U+FFFD rather than failing the
/// whole page; a warning is logged when that happens.
pub fn big5_2_utf8(data: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::BIG5.decode_without_bom_handling(data);
    if had_errors {
        logging::warn_file_async(format!(
            "Failed to BIG5.decode {} bytes cleanly, malformed sequences were replaced",
            data.len()
        ));
    }

    text.into_owned()
}

/// Converts bytes to a UTF-8 `String`, replacing invalid sequences.
pub fn utf8_lossy(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// Parses a decimal value from a given string.
///
/// Commas used as thousands separators and the characters in
/// `NUMBER_ESCAPE_CHAR` are removed before parsing.
///
/// # Example
///
/// ```
/// use twstock::util::text::parse_decimal;
///
/// let d = parse_decimal("14,981.69", None).unwrap();
/// assert_eq!(d.to_string(), "14981.69");
/// ```
pub fn parse_decimal(s: &str, escape_chars: Option<Vec<char>>) -> Result<Decimal> {
    let cleaned = clean_escape_chars(s, escape_chars);
    Decimal::from_str(&cleaned)
        .map_err(|why| anyhow!("Failed to parse '{}' as Decimal because {:?}", cleaned, why))
}

/// Parses an `i64` value from a given string.
///
/// # Example
///
/// ```
/// use twstock::util::text::parse_i64;
///
/// assert_eq!(parse_i64("5,028,214,637", None).unwrap(), 5_028_214_637);
/// ```
pub fn parse_i64(s: &str, escape_chars: Option<Vec<char>>) -> Result<i64> {
    let cleaned = clean_escape_chars(s, escape_chars);
    i64::from_str(&cleaned)
        .map_err(|why| anyhow!("Failed to parse '{}' as i64 because: {:?}", cleaned, why))
}

/// Removes a set of escape characters from a given string.
pub(crate) fn clean_escape_chars(s: &str, escape_chars: Option<Vec<char>>) -> String {
    let mut combined: Vec<char> = NUMBER_ESCAPE_CHAR.to_vec();
    if let Some(ec) = escape_chars {
        combined.extend(ec);
    }

    let filters = combined.iter().collect::<HashSet<_>>();
    s.chars().filter(|c| !filters.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    // 注意這個慣用法：在 tests 模組中，從外部範疇匯入所有名字。
    use super::*;

    #[test]
    fn test_big5_2_utf8() {
        let (bytes, _, _) = encoding_rs::BIG5.encode("有價證券代號及名稱");
        assert_eq!(big5_2_utf8(&bytes), "有價證券代號及名稱");
        // 單獨的 lead byte 不會讓整頁失敗
        assert!(big5_2_utf8(&[0xA4]).contains('\u{FFFD}'));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("14,981.69", None).unwrap(), dec!(14981.69));
        assert_eq!(parse_decimal("-18.38", None).unwrap(), dec!(-18.38));
        assert_eq!(parse_decimal("181,641,243,076", None).unwrap(), dec!(181641243076));
        assert_eq!(parse_decimal("506.00", None).unwrap(), dec!(506));
        assert!(parse_decimal("--", None).is_err());
        assert!(parse_decimal("1B", None).is_err());
        assert!(parse_decimal("", None).is_err());
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("1,328", None).unwrap(), 1328);
        assert_eq!(parse_i64("5,028,214,637", None).unwrap(), 5_028_214_637);
        assert!(parse_i64("BADDATA", None).is_err());
        assert!(parse_i64("1.5", None).is_err());
    }

    #[test]
    fn test_clean_escape_chars() {
        let result = clean_escape_chars("台積電% 元 ,", Some(vec!['台']));
        assert_eq!(result, "積電");
    }
}
