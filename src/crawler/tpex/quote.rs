use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
    client::{Client, Site},
    crawler::share::{self, TpexResponse},
    declare::Quote,
    error::Error,
    util::{datetime, http},
};

const PATH: &str = "/www/zh-tw/afterTrading/tradingStock";

/// 櫃買中心個股日成交資訊最早到民國83年1月
pub const MINIMUM_DATE: NaiveDate = datetime::ymd(1994, 1, 1);

/// 每一列固定九格
const CELLS: usize = 9;

/// 成交量單位為仟股
const THOUSAND_SHARES: i64 = 1000;

/// 下載上櫃個股日成交資訊，成交量換算成股
pub async fn visit(client: &Client, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
    if code.trim().is_empty() {
        return Err(Error::InvalidCode(code.to_string()).into());
    }

    let date = share::first_day_since(year, month, MINIMUM_DATE)?;
    let date = date.format("%Y/%m/%d").to_string();
    let url = client.endpoint(
        Site::Tpex,
        PATH,
        &[("response", "json"), ("date", date.as_str()), ("code", code)],
    )?;
    let res = http::get_json::<TpexResponse>(client.http(), url)
        .await
        .with_context(|| format!("Failed to visit tpex quote {} {}", code, date))?;

    parse(code, res)
}

fn parse(code: &str, res: TpexResponse) -> Result<Vec<Quote>> {
    if res.code != code {
        return Err(Error::Shape(format!(
            "invalid tpex code returned {}, want {}",
            res.code, code
        ))
        .into());
    }

    let rows = res.single_table("quote")?;
    if rows.iter().any(|row| row.len() != CELLS) {
        return Err(Error::Shape("quote fields".to_string()).into());
    }

    share::collect_quotes(rows, |mut quote| {
        quote.volume *= THOUSAND_SHARES;
        quote
    })
}
