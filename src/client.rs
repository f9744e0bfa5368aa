use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use reqwest::Url;

use crate::{
    config::{self, App, Endpoints},
    crawler::{isin, mis, quote, tpex, twse},
    declare::{DelistedSecurity, Market, MarketData, Quote, RealtimeQuote, Security},
    util::http::{self, Decoder},
};

/// 資料來源的站台
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Site {
    Twse,
    Tpex,
    MisTwse,
    IsinTwse,
}

/// 台股資料客戶端
///
/// 持有 HTTP 連線池與四個站台的網址，可以 clone 後在多個 task 間共用。
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    twse: Url,
    tpex: Url,
    mis_twse: Url,
    isin_twse: Url,
    twse_decoder: Decoder,
    tpex_decoder: Decoder,
    isin_decoder: Decoder,
}

impl Client {
    /// 使用 [`config::SETTINGS`] 建立
    pub fn new() -> Result<Self> {
        Self::with_settings(&config::SETTINGS)
    }

    pub fn with_settings(settings: &App) -> Result<Self> {
        let parse = |name: &str, url: &str| {
            Url::parse(url).map_err(|why| anyhow!("Failed to parse {} url '{}' because {:?}", name, url, why))
        };
        let Endpoints {
            twse,
            tpex,
            mis_twse,
            isin_twse,
        } = &settings.endpoints;

        Ok(Client {
            http: http::build_client(&settings.http)?,
            twse: parse("twse", twse)?,
            tpex: parse("tpex", tpex)?,
            mis_twse: parse("mis_twse", mis_twse)?,
            isin_twse: parse("isin_twse", isin_twse)?,
            twse_decoder: Decoder::Utf8,
            tpex_decoder: Decoder::Utf8,
            isin_decoder: Decoder::Big5,
        })
    }

    /// 只替換站台網址，其餘設定使用預設值
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        Self::with_settings(&App {
            endpoints,
            ..Default::default()
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn decoder(&self, site: Site) -> Decoder {
        match site {
            Site::Twse | Site::MisTwse => self.twse_decoder,
            Site::Tpex => self.tpex_decoder,
            Site::IsinTwse => self.isin_decoder,
        }
    }

    /// 組出站台底下的網址與查詢參數
    pub(crate) fn endpoint(&self, site: Site, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let base = match site {
            Site::Twse => &self.twse,
            Site::Tpex => &self.tpex,
            Site::MisTwse => &self.mis_twse,
            Site::IsinTwse => &self.isin_twse,
        };
        let mut url = base
            .join(path)
            .map_err(|why| anyhow!("Failed to join '{}' onto {} because {:?}", path, base, why))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }

    /// 下載上市及上櫃的有價證券清單，上市在前
    pub async fn securities(&self) -> Result<Vec<Security>> {
        isin::visit(self).await
    }

    /// 終止上市公司
    pub async fn twse_delisted(&self) -> Result<Vec<DelistedSecurity>> {
        twse::delisted::visit(self).await
    }

    /// 終止上櫃公司，`page` 從 0 開始
    pub async fn tpex_delisted(&self, page: u32) -> Result<Vec<DelistedSecurity>> {
        tpex::delisted::visit(self, page).await
    }

    /// 上市每日市場成交資訊
    pub async fn twse_market_data(&self, year: i32, month: u32) -> Result<Vec<MarketData>> {
        twse::market_data::visit(self, year, month).await
    }

    /// 上櫃每日市場成交資訊
    pub async fn tpex_market_data(&self, year: i32, month: u32) -> Result<Vec<MarketData>> {
        tpex::market_data::visit(self, year, month).await
    }

    /// 每日市場成交資訊可查詢的最早日期
    pub fn market_data_minimum_date(market: Market) -> NaiveDate {
        match market {
            Market::TWSE => twse::market_data::MINIMUM_DATE,
            Market::TPEx => tpex::market_data::MINIMUM_DATE,
        }
    }

    /// 依證券清單判斷市場別後下載個股日成交資訊
    pub async fn quotes(&self, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
        quote::visit(self, code, year, month).await
    }

    /// 上市個股日成交資訊
    pub async fn twse_quotes(&self, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
        twse::quote::visit(self, code, year, month).await
    }

    /// 上櫃個股日成交資訊，成交量已換算成股
    pub async fn tpex_quotes(&self, code: &str, year: i32, month: u32) -> Result<Vec<Quote>> {
        tpex::quote::visit(self, code, year, month).await
    }

    /// 個股日成交資訊可查詢的最早日期
    pub fn quote_minimum_date(market: Market) -> NaiveDate {
        match market {
            Market::TWSE => twse::quote::MINIMUM_DATE,
            Market::TPEx => tpex::quote::MINIMUM_DATE,
        }
    }

    /// 個股即時交易行情，以代號為鍵
    pub async fn realtime(&self, codes: &[&str]) -> Result<HashMap<String, RealtimeQuote>> {
        mis::realtime::visit(self, codes).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use wiremock::MockServer;

    use super::*;

    /// 四個站台都指向 mock server 的客戶端
    pub(crate) fn mock_client(server: &MockServer) -> Client {
        Client::with_endpoints(Endpoints::all(&server.uri())).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let client = Client::with_settings(&App::default()).unwrap();

        let url = client
            .endpoint(Site::Twse, "/exchangeReport/FMTQIK", &[("response", "json"), ("date", "20220801")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.twse.com.tw/exchangeReport/FMTQIK?response=json&date=20220801"
        );

        let url = client
            .endpoint(Site::MisTwse, "/stock/api/getStockInfo.jsp", &[("ex_ch", "tse_2330.tw|otc_3374.tw")])
            .unwrap();
        assert_eq!(url.path(), "/stock/api/getStockInfo.jsp");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("ex_ch".to_string(), "tse_2330.tw|otc_3374.tw".to_string())]);

        let url = client.endpoint(Site::IsinTwse, "/isin/C_public.jsp", &[]).unwrap();
        assert_eq!(url.as_str(), "https://isin.twse.com.tw/isin/C_public.jsp");
    }

    #[test]
    fn test_decoder() {
        let client = Client::with_settings(&App::default()).unwrap();
        assert_eq!(client.decoder(Site::Twse), Decoder::Utf8);
        assert_eq!(client.decoder(Site::Tpex), Decoder::Utf8);
        assert_eq!(client.decoder(Site::IsinTwse), Decoder::Big5);
    }

    #[test]
    fn test_bad_endpoint() {
        let mut endpoints = Endpoints::default();
        endpoints.tpex = "not a url".to_string();
        assert!(Client::with_endpoints(endpoints).is_err());
    }

    #[test]
    fn test_minimum_date() {
        assert_eq!(
            Client::market_data_minimum_date(Market::TWSE),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert_eq!(
            Client::market_data_minimum_date(Market::TPEx),
            NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()
        );
        assert_eq!(
            Client::quote_minimum_date(Market::TWSE),
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
        );
        assert_eq!(
            Client::quote_minimum_date(Market::TPEx),
            NaiveDate::from_ymd_opt(1994, 1, 1).unwrap()
        );
    }
}
