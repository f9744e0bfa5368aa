use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
    client::{Client, Site},
    crawler::share::{self, TwseResponse},
    declare::Quote,
    error::Error,
    util::{datetime, http},
};

const PATH: &str = "/rwd/zh/afterTrading/STOCK_DAY";

/// 證交所個股日成交資訊最早到民國99年1月
pub const MINIMUM_DATE: NaiveDate = datetime::ymd(2010, 1, 1);

const FIELDS: [&str; 9] = [
    "日期",
    "成交股數",
    "成交金額",
    "開盤價",
    "最高價",
    "最低價",
    "收盤價",
    "漲跌價差",
    "成交筆數",
];

const NO_DATA: [&str; 1] = ["很抱歉，沒有符合條件的資料!"];

const OUT_OF_RANGE: [&str; 1] = ["查詢日期大於今日，請重新查詢!"];

/// 下載上市個股日成交資訊，暫停交易的日子不會出現在結果內
pub async fn visit(client: &Client, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
    if code.trim().is_empty() {
        return Err(Error::InvalidCode(code.to_string()).into());
    }

    let date = share::first_day_since(year, month, MINIMUM_DATE)?;
    let date = date.format("%Y%m%d").to_string();
    let url = client.endpoint(
        Site::Twse,
        PATH,
        &[("response", "json"), ("date", date.as_str()), ("stockNo", code)],
    )?;
    let res = http::get_json::<TwseResponse>(client.http(), url)
        .await
        .with_context(|| format!("Failed to visit twse quote {} {}", code, date))?;

    parse(res)
}

fn parse(res: TwseResponse) -> Result<Vec<Quote>> {
    share::check_stat(&res.stat, &NO_DATA, &OUT_OF_RANGE)?;
    share::check_fields("quote", &res.fields, &FIELDS)?;
    share::collect_quotes(res.data, |quote| quote)
}
