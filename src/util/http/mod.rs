use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{config, error::Error, logging::Logger, util};

pub mod element;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("http"));

/// 回應內容的文字編碼
///
/// 國際證券辨識號碼一覽表仍使用 Big5，其他站台皆為 UTF-8。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Decoder {
    #[default]
    Utf8,
    Big5,
}

impl Decoder {
    pub fn decode(&self, data: &[u8]) -> String {
        match self {
            Decoder::Utf8 => util::text::utf8_lossy(data),
            Decoder::Big5 => util::text::big5_2_utf8(data),
        }
    }
}

/// Reads a response body through a [`Decoder`].
#[async_trait]
pub trait TextDecode {
    async fn text_decode(self, decoder: Decoder) -> Result<String>;
}

#[async_trait]
impl TextDecode for Response {
    async fn text_decode(self, decoder: Decoder) -> Result<String> {
        let bytes = self
            .bytes()
            .await
            .map_err(|why| anyhow!("Error reading response body: {:?}", why))?;

        Ok(decoder.decode(bytes.as_ref()))
    }
}

/// Builds the reqwest client shared by every request of a [`crate::Client`].
pub fn build_client(settings: &config::Http) -> Result<Client> {
    // reqwest 使用 rustls-no-provider，需要先安裝 crypto provider，重複安裝會回傳 Err
    let _ = rustls::crypto::ring::default_provider().install_default();

    Client::builder()
        // ===== 壓縮 =====
        .brotli(true)
        .gzip(true)
        .zstd(true)
        // ===== 超時設置 =====
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .timeout(Duration::from_secs(settings.timeout_secs))
        // ===== TCP 優化 =====
        .tcp_nodelay(true)
        .tcp_keepalive(Duration::from_secs(60))
        // ===== 連接池 =====
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        // ===== Cookie 和重定向 =====
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(5))
        // ===== Headers =====
        .referer(true)
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
}

/// Performs an HTTP GET request and deserializes the JSON response into the specified type.
pub async fn get_json<RES: DeserializeOwned>(client: &Client, url: Url) -> Result<RES> {
    let response = send(client, Method::GET, url.clone(), None::<fn(RequestBuilder) -> RequestBuilder>).await?;
    let body = response
        .text()
        .await
        .map_err(|e| anyhow!("Error reading response body from {}: {:?}", url, e))?;

    serde_json::from_str(&body)
        .map_err(|e| anyhow!("Error parsing response JSON from {}: {:?}", url, e))
}

/// Performs an HTTP GET request and returns the body decoded with `decoder`.
pub async fn get_text(client: &Client, url: Url, decoder: Decoder) -> Result<String> {
    send(client, Method::GET, url, None::<fn(RequestBuilder) -> RequestBuilder>)
        .await?
        .text_decode(decoder)
        .await
}

/// Performs an HTTP POST request with a form-encoded body and returns the
/// body decoded with `decoder`.
pub async fn post_form_text(
    client: &Client,
    url: Url,
    params: &[(&str, &str)],
    decoder: Decoder,
) -> Result<String> {
    send(
        client,
        Method::POST,
        url,
        Some(move |rb: RequestBuilder| rb.form(params)),
    )
    .await?
    .text_decode(decoder)
    .await
}

/// Sends one HTTP request. A status outside 200..=299 becomes
/// [`Error::HttpStatus`]; there is no retry.
async fn send(
    client: &Client,
    method: Method,
    url: Url,
    body: Option<impl FnOnce(RequestBuilder) -> RequestBuilder>,
) -> Result<Response> {
    let visit_log = format!("{}:{}", method, url);
    let mut rb = client.request(method.clone(), url.clone());

    if let Some(body_fn) = body {
        rb = body_fn(rb);
    }

    let start = Instant::now();
    let res = rb.send().await;
    let elapsed = start.elapsed().as_millis();

    let response = match res {
        Ok(response) => response,
        Err(why) => {
            LOGGER.error(format!("{} failed because {:?}. {} ms", visit_log, why, elapsed));
            return Err(anyhow!("Failed to send request to {} because {:?}", url, why));
        }
    };

    let status = response.status();
    LOGGER.info(format!("{} {} {} ms", visit_log, status.as_u16(), elapsed));

    if !status.is_success() {
        return Err(Error::HttpStatus {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    Ok(response)
}
