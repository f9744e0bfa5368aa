use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
    client::{Client, Site},
    crawler::share::{self, TwseResponse},
    declare::MarketData,
    util::{datetime, http},
};

const PATH: &str = "/exchangeReport/FMTQIK";

/// 證交所每日市場成交資訊最早到民國79年1月
pub const MINIMUM_DATE: NaiveDate = datetime::ymd(1990, 1, 1);

const FIELDS: [&str; 6] = [
    "日期",
    "成交股數",
    "成交金額",
    "成交筆數",
    "發行量加權股價指數",
    "漲跌點數",
];

const OUT_OF_RANGE: [&str; 2] = [
    "查詢日期大於今日，請重新查詢!",
    "查詢日期小於79年1月4日，請重新查詢!",
];

/// 下載上市每日市場成交資訊
pub async fn visit(client: &Client, year: i32, month: u32) -> Result<Vec<MarketData>> {
    let date = share::first_day_since(year, month, MINIMUM_DATE)?;
    let date = date.format("%Y%m%d").to_string();
    let url = client.endpoint(
        Site::Twse,
        PATH,
        &[("response", "json"), ("date", date.as_str())],
    )?;
    let res = http::get_json::<TwseResponse>(client.http(), url)
        .await
        .with_context(|| format!("Failed to visit twse market data {}", date))?;

    parse(res)
}

fn parse(res: TwseResponse) -> Result<Vec<MarketData>> {
    share::check_stat(&res.stat, &[], &OUT_OF_RANGE)?;
    share::check_fields("market data", &res.fields, &FIELDS)?;

    res.data
        .iter()
        .map(|row| share::parse_market_data_row(row))
        .collect()
}
