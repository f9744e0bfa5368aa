use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logging;

const CONFIG_PATH: &str = "app.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub log: Log,
}

const TWSE_BASE_URL: &str = "TWSE_BASE_URL";
const TPEX_BASE_URL: &str = "TPEX_BASE_URL";
const MIS_TWSE_BASE_URL: &str = "MIS_TWSE_BASE_URL";
const ISIN_TWSE_BASE_URL: &str = "ISIN_TWSE_BASE_URL";

/// 各站台的網址
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// 臺灣證券交易所
    #[serde(default = "default_twse")]
    pub twse: String,
    /// 證券櫃檯買賣中心
    #[serde(default = "default_tpex")]
    pub tpex: String,
    /// 基本市況報導網站(即時報價)
    #[serde(default = "default_mis_twse")]
    pub mis_twse: String,
    /// 國際證券辨識號碼
    #[serde(default = "default_isin_twse")]
    pub isin_twse: String,
}

fn default_twse() -> String {
    "https://www.twse.com.tw".to_string()
}

fn default_tpex() -> String {
    "https://www.tpex.org.tw".to_string()
}

fn default_mis_twse() -> String {
    "https://mis.twse.com.tw/".to_string()
}

fn default_isin_twse() -> String {
    "https://isin.twse.com.tw".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            twse: default_twse(),
            tpex: default_tpex(),
            mis_twse: default_mis_twse(),
            isin_twse: default_isin_twse(),
        }
    }
}

impl Endpoints {
    /// 四個站台都指向同一個位址，測試時搭配 mock server 使用
    pub fn all(base: &str) -> Self {
        Endpoints {
            twse: base.to_string(),
            tpex: base.to_string(),
            mis_twse: base.to_string(),
            isin_twse: base.to_string(),
        }
    }
}

const TWSTOCK_HTTP_TIMEOUT_SECS: &str = "TWSTOCK_HTTP_TIMEOUT_SECS";
const TWSTOCK_USER_AGENT: &str = "TWSTOCK_USER_AGENT";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Http {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout_secs() -> u64 {
    8
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("twstock/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for Http {
    fn default() -> Self {
        Http {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

const TWSTOCK_LOG_DIR: &str = "TWSTOCK_LOG_DIR";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Log {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// 單檔最大大小(MB)
    #[serde(default = "default_log_max_size_mb")]
    pub max_size_mb: u64,
    /// 日誌保留天數
    #[serde(default = "default_log_max_age_days")]
    pub max_age_days: i64,
}

fn default_log_dir() -> String {
    "log".to_string()
}

fn default_log_max_size_mb() -> u64 {
    10
}

fn default_log_max_age_days() -> i64 {
    7
}

impl Default for Log {
    fn default() -> Self {
        Log {
            dir: default_log_dir(),
            max_size_mb: default_log_max_size_mb(),
            max_age_days: default_log_max_age_days(),
        }
    }
}

/// 設定檔讀取失敗時退回預設值，不讓程式因此 panic
pub static SETTINGS: Lazy<App> = Lazy::new(|| {
    dotenv::dotenv().ok();
    App::get().unwrap_or_else(|why| {
        // logging 的檔案路徑取決於這份設定，這裡只能寫到 console
        logging::error_console(format!(
            "I can't read the config context because {:?}",
            why
        ));
        App::default().override_with_env()
    })
});

impl App {
    fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            return Self::from_file(config_path);
        }

        Ok(App::default().override_with_env())
    }

    /// 讀取指定的 json 設定檔，再以 env 覆蓋
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let config: App = config_config::builder()
            .add_source(config_file::from(path))
            .build()?
            .try_deserialize()?;

        Ok(config.override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(url) = env::var(TWSE_BASE_URL) {
            self.endpoints.twse = url;
        }

        if let Ok(url) = env::var(TPEX_BASE_URL) {
            self.endpoints.tpex = url;
        }

        if let Ok(url) = env::var(MIS_TWSE_BASE_URL) {
            self.endpoints.mis_twse = url;
        }

        if let Ok(url) = env::var(ISIN_TWSE_BASE_URL) {
            self.endpoints.isin_twse = url;
        }

        if let Ok(secs) = env::var(TWSTOCK_HTTP_TIMEOUT_SECS) {
            self.http.timeout_secs =
                parse_secs(TWSTOCK_HTTP_TIMEOUT_SECS, &secs, self.http.timeout_secs);
        }

        if let Ok(ua) = env::var(TWSTOCK_USER_AGENT) {
            self.http.user_agent = ua;
        }

        if let Ok(dir) = env::var(TWSTOCK_LOG_DIR) {
            self.log.dir = dir;
        }

        self
    }
}

/// 秒數無法解析時沿用原值並寫到 console
fn parse_secs(key: &str, value: &str, fallback: u64) -> u64 {
    match u64::from_str(value.trim()) {
        Ok(secs) => secs,
        Err(why) => {
            logging::error_console(format!(
                "{} = {:?} is not a number of seconds, keep {} because {:?}",
                key, value, fallback, why
            ));
            fallback
        }
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}
