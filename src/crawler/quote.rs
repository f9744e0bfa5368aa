use anyhow::Result;

use crate::{
    client::Client,
    crawler::{tpex, twse},
    declare::{Market, Quote},
    error::Error,
    registry,
};

/// 依證券清單的市場別轉給證交所或櫃買中心，清單內沒有的代號直接回傳錯誤
pub async fn visit(client: &Client, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
    match registry::market_of(code) {
        Some(Market::TWSE) => twse::quote::visit(client, code, year, month).await,
        Some(Market::TPEx) => tpex::quote::visit(client, code, year, month).await,
        None => Err(Error::InvalidCode(code.to_string()).into()),
    }
}
