use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    client::{Client, Site},
    crawler::share::{self, TpexResponse},
    declare::MarketData,
    util::{datetime, http},
};

const PATH: &str = "/web/stock/aftertrading/daily_trading_index/st41_result.php";

/// 櫃買中心每日市場成交資訊最早到民國88年1月
pub const MINIMUM_DATE: NaiveDate = datetime::ymd(1999, 1, 1);

/// 成交股數與金額的單位是仟股、仟元
const THOUSAND: i64 = 1000;

/// 下載上櫃每日市場成交資訊
pub async fn visit(client: &Client, year: i32, month: u32) -> Result<Vec<MarketData>> {
    let date = share::first_day_since(year, month, MINIMUM_DATE)?;
    // 需要將西元年轉為民國年
    let roc = format!(
        "{}/{:02}",
        datetime::gregorian_year_to_roc_year(date.year()),
        date.month()
    );
    let url = client.endpoint(Site::Tpex, PATH, &[("response", "json"), ("d", roc.as_str())])?;
    let res = http::get_json::<TpexResponse>(client.http(), url)
        .await
        .with_context(|| format!("Failed to visit tpex market data {}", roc))?;

    parse(res)
}

fn parse(res: TpexResponse) -> Result<Vec<MarketData>> {
    res.counted_table("market data")?
        .iter()
        .map(|row| {
            share::parse_market_data_row(row).map(|mut data| {
                data.trade_volume *= THOUSAND;
                data.trade_value *= Decimal::from(THOUSAND);
                data
            })
        })
        .collect()
}
