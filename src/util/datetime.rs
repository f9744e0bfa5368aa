use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// 民國年與西元年的差距
const ROC_YEAR_OFFSET: i32 = 1911;

/// 櫃買中心的日期在 IPO 那天會帶有＊
const DAY_MARKERS: [char; 2] = ['＊', '*'];

/// Convert ROC year to Gregorian year.
pub fn to_gregorian_year(year: i32) -> i32 {
    year + ROC_YEAR_OFFSET
}

/// Convert Gregorian year to ROC year.
pub fn gregorian_year_to_roc_year(year: i32) -> i32 {
    year - ROC_YEAR_OFFSET
}

/// Parse a date string in the format of ROC calendar (`111/08/01`)
/// and return it as a NaiveDate in the Gregorian calendar.
pub fn parse_taiwan_date(date_str: &str) -> Result<NaiveDate> {
    let split_date: Vec<&str> = date_str.trim().split('/').collect();
    if split_date.len() != 3 {
        return Err(anyhow!("Failed to parse '{}' as a ROC date", date_str));
    }

    let year = split_date[0]
        .trim()
        .parse::<i32>()
        .map_err(|why| anyhow!("Failed to parse year of '{}' because {:?}", date_str, why))?;
    let month = split_date[1]
        .trim()
        .parse::<u32>()
        .map_err(|why| anyhow!("Failed to parse month of '{}' because {:?}", date_str, why))?;
    let day = split_date[2]
        .trim()
        .trim_end_matches(DAY_MARKERS)
        .parse::<u32>()
        .map_err(|why| anyhow!("Failed to parse day of '{}' because {:?}", date_str, why))?;

    NaiveDate::from_ymd_opt(to_gregorian_year(year), month, day)
        .ok_or_else(|| anyhow!("'{}' is not a valid calendar date", date_str))
}

/// Parse a Gregorian date formatted as `YYYY/MM/DD`.
pub fn parse_slash_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y/%m/%d")
        .map_err(|why| anyhow!("Failed to parse '{}' as YYYY/MM/DD because {:?}", date_str, why))
}

/// The first day of the given month.
pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("invalid date: {:04}-{:02}", year, month))
}

/// 編譯期的日期常數，日期不合法時無法通過編譯
pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date"),
    }
}

/// 即時報價的時間是字串型態的 Unix 毫秒
pub fn from_timestamp_millis_str(millis: &str) -> Result<DateTime<Utc>> {
    let ms = millis
        .trim()
        .parse::<i64>()
        .map_err(|why| anyhow!("Failed to parse '{}' as unix millis because {:?}", millis, why))?;

    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| anyhow!("'{}' is out of range for a timestamp", millis))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_taiwan_date() {
        let date = parse_taiwan_date("111/08/01").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2022, 8, 1));

        let date = parse_taiwan_date(" 79/01/04 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 1, 4).unwrap());

        assert_eq!(
            parse_taiwan_date("111/08/01＊").unwrap(),
            NaiveDate::from_ymd_opt(2022, 8, 1).unwrap()
        );
        assert_eq!(
            parse_taiwan_date("111/08/01*").unwrap(),
            NaiveDate::from_ymd_opt(2022, 8, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_taiwan_date_error() {
        assert!(parse_taiwan_date("").is_err());
        assert!(parse_taiwan_date("111/08").is_err());
        assert!(parse_taiwan_date("111-08-01").is_err());
        assert!(parse_taiwan_date("111/08/80").is_err());
        assert!(parse_taiwan_date("2022/50/01").is_err());
        assert!(parse_taiwan_date("1B/08/01").is_err());
        assert!(parse_taiwan_date("111/B/01").is_err());
    }

    #[test]
    fn test_year_conversion() {
        assert_eq!(to_gregorian_year(111), 2022);
        assert_eq!(gregorian_year_to_roc_year(2022), 111);
    }

    #[test]
    fn test_parse_slash_date() {
        assert_eq!(
            parse_slash_date("1962/02/09").unwrap(),
            NaiveDate::from_ymd_opt(1962, 2, 9).unwrap()
        );
        assert!(parse_slash_date("1962/02/30").is_err());
        assert!(parse_slash_date("111/08/01x").is_err());
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(
            first_day_of_month(2022, 8).unwrap(),
            NaiveDate::from_ymd_opt(2022, 8, 1).unwrap()
        );
        assert!(first_day_of_month(2022, 13).is_err());
    }

    #[test]
    fn test_ymd() {
        const DATE: NaiveDate = ymd(1990, 1, 1);
        assert_eq!(DATE, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn test_from_timestamp_millis_str() {
        let at = from_timestamp_millis_str("1661149800000").unwrap();
        assert_eq!(at.date_naive(), NaiveDate::from_ymd_opt(2022, 8, 22).unwrap());
        assert_eq!((at.hour(), at.minute(), at.second()), (6, 30, 0));

        let at = from_timestamp_millis_str("1661149800123").unwrap();
        assert_eq!(at.timestamp_subsec_millis(), 123);

        assert!(from_timestamp_millis_str("BAD").is_err());
    }
}
