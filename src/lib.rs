//! 台股資料客戶端
//!
//! 從臺灣證券交易所與證券櫃檯買賣中心下載有價證券清單、下市名單、
//! 每日市場成交資訊、個股日成交資訊以及即時報價。
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! let client = twstock::Client::new()?;
//! let quotes = client.quotes("2330", 2022, 8).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod error;
pub mod logging;
pub mod registry;
pub mod util;

pub use client::Client;
pub use declare::{
    BidAsk, DelistedSecurity, Market, MarketData, Quote, RealtimeQuote, Security,
};
pub use error::{Error, ErrorKind};
