//! 內建的有價證券清單
//!
//! 由國際證券辨識號碼一覽表產生，用來檢查證券代號以及判斷要向哪個市場查詢。
//! 清單在第一次使用時建立，之後不再變動。
//!
//! 內建的只是部分快照︰常見的上市股票、ETF 與上櫃股票。不在快照內的代號，
//! [`crate::Client::quotes`] 與 [`crate::Client::realtime`] 會回傳
//! [`crate::Error::InvalidCode`]，此時可以改用 [`crate::Client::twse_quotes`]、
//! [`crate::Client::tpex_quotes`]，或以 [`crate::Client::securities`] 取得完整清單。

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::declare::{Market, Security};

mod generated;

/// 產生器輸出的一筆有價證券
pub(crate) struct Entry {
    pub security_type: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub isin: &'static str,
    pub ipo: NaiveDate,
    pub market: Market,
    pub industry: &'static str,
    pub cfi: &'static str,
    pub remark: &'static str,
}

impl From<&Entry> for Security {
    fn from(entry: &Entry) -> Self {
        Security {
            security_type: entry.security_type.to_string(),
            code: entry.code.to_string(),
            name: entry.name.to_string(),
            isin: entry.isin.to_string(),
            ipo: entry.ipo,
            market: entry.market,
            industry: entry.industry.to_string(),
            cfi: entry.cfi.to_string(),
            remark: entry.remark.to_string(),
        }
    }
}

static SECURITIES: Lazy<HashMap<&'static str, Security>> = Lazy::new(|| {
    generated::SECURITIES
        .iter()
        .map(|entry| (entry.code, Security::from(entry)))
        .collect()
});

/// 以代號取得有價證券
pub fn get(code: &str) -> Option<&'static Security> {
    SECURITIES.get(code)
}

pub fn contains(code: &str) -> bool {
    SECURITIES.contains_key(code)
}

/// 代號所屬的市場，不在清單內回傳 None
pub fn market_of(code: &str) -> Option<Market> {
    get(code).map(|security| security.market)
}

/// 走訪整份清單，順序不固定
pub fn iter() -> impl Iterator<Item = &'static Security> {
    SECURITIES.values()
}

pub fn len() -> usize {
    SECURITIES.len()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_get() {
        let security = get("1101").unwrap();
        assert_eq!(
            security,
            &Security {
                security_type: "股票".to_string(),
                code: "1101".to_string(),
                name: "台泥".to_string(),
                isin: "TW0001101004".to_string(),
                ipo: NaiveDate::from_ymd_opt(1962, 2, 9).unwrap(),
                market: Market::TWSE,
                industry: "水泥工業".to_string(),
                cfi: "ESVUFR".to_string(),
                remark: "".to_string(),
            }
        );
        assert!(get("BAD").is_none());
        assert!(get("").is_none());
    }

    #[test]
    fn test_market_of() {
        assert_eq!(market_of("2330"), Some(Market::TWSE));
        assert_eq!(market_of("0050"), Some(Market::TWSE));
        assert_eq!(market_of("3374"), Some(Market::TPEx));
        assert_eq!(market_of("2603"), Some(Market::TWSE));
        assert_eq!(market_of("2882"), Some(Market::TWSE));
        assert_eq!(market_of("99999"), None);
        assert!(contains("2330"));
        assert!(!contains("tse_2330.tw"));
    }

    #[test]
    fn test_entries_are_consistent() {
        assert_eq!(len(), generated::SECURITIES.len());
        assert_eq!(iter().count(), len());

        let mut isins = HashSet::new();
        for security in iter() {
            assert!(!security.code.is_empty());
            assert!(!security.name.is_empty());
            assert!(security.isin.starts_with("TW"), "{}", security.code);
            assert!(security.isin.contains(&security.code), "{}", security.code);
            assert!(isins.insert(security.isin.clone()), "{}", security.isin);
        }
    }
}
