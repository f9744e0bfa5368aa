use std::fmt;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    declare::{MarketData, Quote},
    error::{Error, ErrorKind},
    util::{datetime, text},
};

/// 暫停交易時開高低收會以此符號表示
const NO_TRADE: &str = "--";

/// 櫃買中心的欄位有時是字串有時是數字，統一轉成字串處理
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::String(s) => f.write_str(s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 證交所 json 回應的共同格式
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TwseResponse {
    #[serde(default)]
    pub stat: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<String>>,
}

/// 櫃買中心 json 回應的共同格式
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TpexResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub tables: Vec<TpexTable>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TpexTable {
    #[serde(default)]
    pub data: Vec<Vec<StringOrNumber>>,
    #[serde(rename = "totalCount", default)]
    pub total_count: usize,
}

impl TpexResponse {
    /// 取出唯一的一張表
    ///
    /// 沒有表格或是 totalCount 為 0 時視為查無資料，筆數與 totalCount 不符則是格式錯誤。
    pub fn single_table(self, what: &str) -> Result<Vec<Vec<String>>> {
        let mut tables = self.tables;
        if tables.len() != 1 || tables[0].total_count == 0 {
            return Err(Error::NoData.into());
        }

        let table = tables.swap_remove(0);
        table.check_count(what)?;

        Ok(table.into_rows())
    }

    /// 與 [`TpexResponse::single_table`] 相同，但先比對筆數再判斷是否查無資料
    ///
    /// 宣告 0 筆卻帶有資料時屬於格式錯誤。
    pub fn counted_table(self, what: &str) -> Result<Vec<Vec<String>>> {
        let mut tables = self.tables;
        if tables.len() != 1 {
            return Err(Error::NoData.into());
        }

        let table = tables.swap_remove(0);
        table.check_count(what)?;
        if table.total_count == 0 {
            return Err(Error::NoData.into());
        }

        Ok(table.into_rows())
    }
}

impl TpexTable {
    fn check_count(&self, what: &str) -> Result<()> {
        if self.total_count != self.data.len() {
            return Err(Error::Shape(format!(
                "{} data length returned {}, want {}",
                what,
                self.total_count,
                self.data.len()
            ))
            .into());
        }

        Ok(())
    }

    fn into_rows(self) -> Vec<Vec<String>> {
        self.data
            .into_iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

/// 查詢月份的第一天，早於站台提供的最早日期時回傳 [`Error::DateOutOfRange`]
pub(crate) fn first_day_since(year: i32, month: u32, minimum: NaiveDate) -> Result<NaiveDate> {
    let date = datetime::first_day_of_month(year, month)?;
    if date < minimum {
        return Err(Error::DateOutOfRange)
            .with_context(|| format!("invalid date: {:04}-{:02}", year, month));
    }

    Ok(date)
}

/// 證交所 stat 不是 OK 時要回傳的錯誤，`out_of_range` 與 `no_data` 列出對應的訊息
pub(crate) fn check_stat(stat: &str, no_data: &[&str], out_of_range: &[&str]) -> Result<()> {
    if stat == "OK" {
        return Ok(());
    }

    if no_data.contains(&stat) {
        return Err(Error::NoData.into());
    }

    if out_of_range.contains(&stat) {
        return Err(Error::DateOutOfRange.into());
    }

    Err(Error::InvalidStat(stat.to_string()).into())
}

/// 欄位名稱必須與預期完全相同
pub(crate) fn check_fields(what: &str, fields: &[String], expected: &[&str]) -> Result<()> {
    if fields.len() == expected.len() && fields.iter().zip(expected).all(|(f, e)| f == e) {
        return Ok(());
    }

    Err(Error::Shape(format!("{} fields: {}", what, fields.join(","))).into())
}

/// 個股日成交資訊的一列︰日期、成交股數、成交金額、開、高、低、收...
///
/// 暫停交易的那一天回傳 [`Error::SuspendedTrading`]，呼叫端應略過該列。
pub(crate) fn parse_quote_row(row: &[String]) -> Result<Quote> {
    if row.len() < 7 {
        return Err(Error::Shape("quote data".to_string()).into());
    }

    if row[3..=6].iter().any(|cell| cell.contains(NO_TRADE)) {
        return Err(Error::SuspendedTrading.into());
    }

    Ok(Quote {
        date: datetime::parse_taiwan_date(&row[0])
            .map_err(|why| Error::field("quote date", why))?,
        open: decimal(&row[3], "quote open")?,
        high: decimal(&row[4], "quote high")?,
        low: decimal(&row[5], "quote low")?,
        close: decimal(&row[6], "quote close")?,
        volume: integer(&row[1], "quote volume")?,
    })
}

/// 每日市場成交資訊的一列︰日期、成交股數、成交金額、成交筆數、指數、漲跌點數
pub(crate) fn parse_market_data_row(row: &[String]) -> Result<MarketData> {
    if row.len() < 6 {
        return Err(Error::Shape("market data fields".to_string()).into());
    }

    Ok(MarketData {
        date: datetime::parse_taiwan_date(&row[0])
            .map_err(|why| Error::field("market data date", why))?,
        trade_volume: integer(&row[1], "market trade volume")?,
        trade_value: decimal(&row[2], "market trade value")?,
        transaction: integer(&row[3], "market transaction")?,
        index: decimal(&row[4], "market index")?,
        change: decimal(&row[5], "market change")?,
    })
}

/// 逐列解析並略過暫停交易的日子
pub(crate) fn collect_quotes<I, F>(rows: I, mut after: F) -> Result<Vec<Quote>>
where
    I: IntoIterator,
    I::Item: AsRef<[String]>,
    F: FnMut(Quote) -> Quote,
{
    let mut quotes = Vec::new();
    for row in rows {
        match parse_quote_row(row.as_ref()) {
            Ok(quote) => quotes.push(after(quote)),
            Err(why) if why.is_suspended_trading() => {}
            Err(why) => return Err(why),
        }
    }

    Ok(quotes)
}

pub(crate) fn decimal(s: &str, field: &'static str) -> Result<Decimal> {
    text::parse_decimal(s.trim(), None).map_err(|why| Error::field(field, why).into())
}

pub(crate) fn integer(s: &str, field: &'static str) -> Result<i64> {
    text::parse_i64(s.trim(), None).map_err(|why| Error::field(field, why).into())
}
