use thiserror::Error as ThisError;

/// 呼叫端需要分辨的錯誤
///
/// 對外的函式一律回傳 `anyhow::Result`，需要判斷錯誤種類時使用
/// [`ErrorKind`] 或 `err.downcast_ref::<Error>()`。
#[derive(Debug, ThisError)]
pub enum Error {
    /// 回應的 HTTP 狀態碼不在 200..=299
    #[error("{method} {url}: {status}")]
    HttpStatus {
        method: String,
        url: String,
        status: u16,
    },
    /// 回應的欄位、筆數或格式與預期不符
    #[error("failed parsing {0}")]
    Shape(String),
    /// 回應的狀態字串不是成功
    #[error("invalid state: {0}")]
    InvalidStat(String),
    /// 證券代號不在證券清單內
    #[error("invalid code: {0}")]
    InvalidCode(String),
    /// 查詢不到資料
    #[error("no data found")]
    NoData,
    /// 查詢日期超出交易所提供的範圍
    #[error("date out of range")]
    DateOutOfRange,
    /// 當日暫停交易，該筆資料直接略過
    #[error("suspended trading")]
    SuspendedTrading,
    /// 欄位轉換失敗
    #[error("failed parsing {field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    pub(crate) fn field(field: &'static str, why: anyhow::Error) -> Self {
        Error::Field {
            field,
            source: why.into(),
        }
    }
}

/// Lets callers inspect an `anyhow::Error` returned by this crate.
pub trait ErrorKind {
    fn kind(&self) -> Option<&Error>;

    fn is_no_data(&self) -> bool {
        matches!(self.kind(), Some(Error::NoData))
    }

    fn is_date_out_of_range(&self) -> bool {
        matches!(self.kind(), Some(Error::DateOutOfRange))
    }

    fn is_suspended_trading(&self) -> bool {
        matches!(self.kind(), Some(Error::SuspendedTrading))
    }

    fn is_invalid_code(&self) -> bool {
        matches!(self.kind(), Some(Error::InvalidCode(_)))
    }

    fn http_status(&self) -> Option<u16> {
        match self.kind() {
            Some(Error::HttpStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl ErrorKind for anyhow::Error {
    fn kind(&self) -> Option<&Error> {
        self.downcast_ref::<Error>()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = Error::HttpStatus {
            method: "GET".to_string(),
            url: "https://www.twse.com.tw/exchangeReport/FMTQIK".to_string(),
            status: 400,
        };

        assert_eq!(
            err.to_string(),
            "GET https://www.twse.com.tw/exchangeReport/FMTQIK: 400"
        );
        assert!(err.to_string().ends_with(": 400"));
    }

    #[test]
    fn test_kind_through_context() {
        let err = anyhow::Error::new(Error::NoData).context("Failed to visit tpex quote");
        assert!(err.is_no_data());
        assert!(!err.is_date_out_of_range());

        let err: anyhow::Error = Error::DateOutOfRange.into();
        assert!(err.is_date_out_of_range());

        let err = anyhow!("plain");
        assert!(err.kind().is_none());

        let err = Err::<(), _>(Error::HttpStatus {
            method: "POST".to_string(),
            url: "http://localhost/".to_string(),
            status: 502,
        })
        .context("wrapped")
        .unwrap_err();
        assert_eq!(err.http_status(), Some(502));
    }

    #[test]
    fn test_field_error_keeps_source() {
        let err = Error::field("quote open", anyhow!("bad decimal"));
        assert_eq!(err.to_string(), "failed parsing quote open: bad decimal");
        assert!(std::error::Error::source(&err).is_some());
    }
}
