use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    client::{Client, Site},
    crawler::share,
    declare::{BidAsk, RealtimeQuote},
    error::Error,
    registry,
    util::{datetime, http, map},
};

const PATH: &str = "/stock/api/getStockInfo.jsp";

/// 五檔價量以底線串接，例︰`510.0000_509.0000_`
const LADDER_SEPARATOR: char = '_';

#[derive(Debug, Default, Deserialize)]
struct RealtimeResponse {
    #[serde(default)]
    rtmessage: String,
    #[serde(rename = "msgArray", default)]
    msg_array: Vec<RealtimeEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RealtimeEntry {
    /// Unix 毫秒
    tlong: String,
    c: String,
    /// 最新一筆成交價
    z: String,
    /// 委買價
    b: String,
    /// 委買量
    g: String,
    /// 委賣價
    a: String,
    /// 委賣量
    f: String,
    o: String,
    h: String,
    l: String,
    v: String,
    n: String,
    nf: String,
}

/// 取得個股即時交易行情，代號必須在證券清單內
pub async fn visit(client: &Client, codes: &[&str]) -> Result<HashMap<String, RealtimeQuote>> {
    let channels = codes
        .iter()
        .map(|code| {
            registry::market_of(code)
                .map(|market| market.channel(code))
                .ok_or_else(|| Error::InvalidCode(code.to_string()))
        })
        .collect::<Result<Vec<String>, Error>>()?
        .join("|");

    let url = client.endpoint(Site::MisTwse, PATH, &[("ex_ch", channels.as_str())])?;
    let res = http::get_json::<RealtimeResponse>(client.http(), url)
        .await
        .with_context(|| format!("Failed to visit realtime quotes {}", channels))?;

    parse(res)
}

fn parse(res: RealtimeResponse) -> Result<HashMap<String, RealtimeQuote>> {
    if res.rtmessage != "OK" {
        return Err(Error::InvalidStat(res.rtmessage).into());
    }

    let quotes = res
        .msg_array
        .into_iter()
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;

    Ok(map::vec_to_hashmap(quotes))
}

fn parse_entry(entry: RealtimeEntry) -> Result<RealtimeQuote> {
    let at = datetime::from_timestamp_millis_str(&entry.tlong)
        .map_err(|why| Error::field("quote time", why))?;
    let bids = parse_bid_ask(&entry.b, &entry.g).context("failed parsing quote bids")?;
    let asks = parse_bid_ask(&entry.a, &entry.f).context("failed parsing quote asks")?;

    Ok(RealtimeQuote {
        at,
        price: share::decimal(&entry.z, "quote price")?,
        open: share::decimal(&entry.o, "quote open")?,
        high: share::decimal(&entry.h, "quote high")?,
        low: share::decimal(&entry.l, "quote low")?,
        volume: share::integer(&entry.v, "quote volume")?,
        bids,
        asks,
        code: entry.c,
        name: entry.n,
        full_name: entry.nf,
    })
}

/// 將價與量兩個底線分隔字串配對成五檔，前後多餘的底線會先去掉
pub(crate) fn parse_bid_ask(prices: &str, volumes: &str) -> Result<Vec<BidAsk>> {
    let split = |s: &str| -> Vec<String> {
        s.trim_matches(LADDER_SEPARATOR)
            .split(LADDER_SEPARATOR)
            .map(str::to_string)
            .collect()
    };

    let prices = split(prices);
    let volumes = split(volumes);
    if prices.len() != volumes.len() {
        return Err(Error::Shape(format!(
            "bid-ask: {} prices, {} volumes",
            prices.len(),
            volumes.len()
        ))
        .into());
    }

    prices
        .iter()
        .zip(volumes.iter())
        .map(|(price, volume)| -> Result<BidAsk> {
            Ok(BidAsk {
                price: share::decimal(price, "quote price")?,
                volume: share::integer(volume, "quote volume")?,
            })
        })
        .collect()
}
