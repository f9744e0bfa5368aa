use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use concat_string::concat_string;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::map::Keyable;

/// 市場別
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Market {
    /// 臺灣證券交易所 tse
    #[serde(rename = "tse")]
    TWSE,
    /// 證券櫃檯買賣中心 otc
    #[serde(rename = "otc")]
    TPEx,
}

impl Market {
    /// 即時報價與證券清單使用的市場代碼
    pub fn label(&self) -> &'static str {
        match self {
            Market::TWSE => "tse",
            Market::TPEx => "otc",
        }
    }

    /// 國際證券辨識號碼一覽表上的市場別
    pub fn from_isin_label(label: &str) -> Option<Market> {
        match label {
            "上市" | "上市臺灣創新板" => Some(Market::TWSE),
            "上櫃" => Some(Market::TPEx),
            _ => None,
        }
    }

    /// 即時報價頻道代碼，例︰tse_2330.tw
    pub fn channel(&self, code: &str) -> String {
        concat_string!(self.label(), "_", code, ".tw")
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 有價證券
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Security {
    /// 有價證卷類別
    pub security_type: String,
    /// 有價證券代號
    pub code: String,
    /// 有價證券名稱
    pub name: String,
    /// 國際證卷辨識號碼
    pub isin: String,
    /// 上市日
    pub ipo: NaiveDate,
    /// 市場別
    pub market: Market,
    /// 產業別
    pub industry: String,
    /// CFICode
    pub cfi: String,
    /// 備註
    pub remark: String,
}

/// 下市的有價證卷
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DelistedSecurity {
    pub code: String,
    pub name: String,
    pub market: Market,
}

/// 每日市場成交資訊
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketData {
    pub date: NaiveDate,
    /// 總成交股數
    pub trade_volume: i64,
    /// 總成交金額
    pub trade_value: Decimal,
    /// 總成交筆數
    pub transaction: i64,
    /// 發行量加權股價指數或櫃買指數
    pub index: Decimal,
    /// 漲跌點數
    pub change: Decimal,
}

/// 個股日成交資訊
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// 成交股數
    pub volume: i64,
}

/// 委買或委賣的一檔
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BidAsk {
    pub price: Decimal,
    pub volume: i64,
}

/// 個股即時交易行情
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RealtimeQuote {
    /// 最新一筆成交時間
    pub at: DateTime<Utc>,
    pub code: String,
    /// 簡稱
    pub name: String,
    /// 全名
    pub full_name: String,
    /// 最新一筆成交價
    pub price: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    /// 總成交量
    pub volume: i64,
    /// 最佳五檔委買
    pub bids: Vec<BidAsk>,
    /// 最佳五檔委賣
    pub asks: Vec<BidAsk>,
}

impl Keyable for RealtimeQuote {
    fn key(&self) -> String {
        self.code.clone()
    }
}
