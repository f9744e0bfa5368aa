use anyhow::{Context, Result};
use scraper::Html;

use crate::{
    client::{Client, Site},
    declare::{Market, Security},
    error::Error,
    util::{
        datetime,
        http::{self, element},
    },
};

const PATH: &str = "/isin/C_public.jsp";

/// 上市:2 上櫃︰4
const MODES: [&str; 2] = ["2", "4"];

/// 下載上市及上櫃國際證券辨識號碼一覽表，上市在前
pub async fn visit(client: &Client) -> Result<Vec<Security>> {
    let mut securities = Vec::with_capacity(4096);

    for mode in MODES {
        let url = client.endpoint(Site::IsinTwse, PATH, &[("strMode", mode)])?;
        let html = http::get_text(client.http(), url, client.decoder(Site::IsinTwse))
            .await
            .with_context(|| format!("Failed to visit isin strMode={}", mode))?;
        securities.extend(parse(&html)?);
    }

    Ok(securities)
}

/// 解析一覽表
///
/// 第一列是標題；只有一格的列是有價證券類別，之後的資料列都屬於該類別；
/// 七格的列才是資料，其餘略過。
pub fn parse(html: &str) -> Result<Vec<Security>> {
    let document = Html::parse_document(html);
    let tr = element::selector("tr")?;
    let td = element::selector("td")?;
    let mut securities = Vec::new();
    let mut security_type = String::new();

    for node in document.select(&tr).skip(1) {
        let tds = element::cells(&node, &td);
        match tds.len() {
            1 => security_type = element::parse_to_string(&tds[0], "b"),
            7 => {
                let code_and_name = element::text_of(&tds[0]);
                let (code, name) = split_code_and_name(&code_and_name)?;
                let ipo = element::text_of(&tds[2]);
                let ipo = datetime::parse_slash_date(&ipo)
                    .map_err(|why| Error::field("security ipo", why))?;
                let market_label = element::text_of(&tds[3]);
                let market = Market::from_isin_label(&market_label).ok_or_else(|| {
                    Error::Shape(format!("security market: {}", market_label))
                })?;

                securities.push(Security {
                    security_type: security_type.clone(),
                    code,
                    name,
                    isin: element::text_of(&tds[1]),
                    ipo,
                    market,
                    industry: element::text_of(&tds[4]),
                    cfi: element::text_of(&tds[5]),
                    remark: element::text_of(&tds[6]),
                });
            }
            _ => continue,
        }
    }

    Ok(securities)
}

/// 代號與名稱之間以全形空白分隔，名稱可能含有空白
fn split_code_and_name(s: &str) -> Result<(String, String)> {
    let s = s.trim();
    let code = s.split_whitespace().next().unwrap_or_default();
    let name = s[code.len()..].trim();

    if code.is_empty() || name.is_empty() {
        return Err(Error::Shape(format!("security code and name: {}", s)).into());
    }

    Ok((code.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{client::tests::mock_client, error::ErrorKind};

    use super::*;

    const TABLE_HEAD: &str = r#"
        <link rel="stylesheet" href="http://isin.twse.com.tw/isin/style1.css" type="text/css">
        <body>
        <table align=center>
            <h2><strong><font class='h1'>本國上市證券國際證券辨識號碼一覽表</font></strong></h2>
        </table>
        <TABLE class='h4' align=center cellSpacing=3 cellPadding=2 width=750 border=0>
            <tr align=center>
                <td bgcolor=#D5FFD5>有價證券代號及名稱 </td>
                <td bgcolor=#D5FFD5>國際證券辨識號碼(ISIN Code)</td>
                <td bgcolor=#D5FFD5>上市日</td>
                <td bgcolor=#D5FFD5>市場別</td>
                <td bgcolor=#D5FFD5>產業別</td>
                <td bgcolor=#D5FFD5>CFICode</td>
                <td bgcolor=#D5FFD5>備註</td>
            </tr>"#;

    const TABLE_TAIL: &str = r#"
        </table>
        <font color='red'><center>掛牌日以正式公告為準</center></font>"#;

    fn page(rows: &str) -> String {
        format!("{}{}{}", TABLE_HEAD, rows, TABLE_TAIL)
    }

    fn row(code_and_name: &str, isin: &str, ipo: &str, market: &str, industry: &str, cfi: &str) -> String {
        format!(
            r#"<tr>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2>{}</td>
                <td bgcolor=#FAFAD2></td>
            </tr>"#,
            code_and_name, isin, ipo, market, industry, cfi
        )
    }

    fn listed() -> String {
        page(&format!(
            "<tr><td bgcolor=#FAFAD2 colspan=7 ><B> 股票 <B> </td></tr>{}{}",
            row("1101　台泥", "TW0001101004", "1962/02/09", "上市", "水泥工業", "ESVUFR"),
            row("1102　亞泥", "TW0001102002", "1962/06/08", "上市臺灣創新板", "水泥工業", "ESVUFR"),
        ))
    }

    fn otc() -> String {
        page(&format!(
            "<tr><td bgcolor=#FAFAD2 colspan=7 ><B> 上櫃認購(售)權證 <B> </td></tr>{}{}",
            row("70286P　驊訊元富18售01", "TW21Z70286P0", "2021/11/23", "上櫃", "", "RWSCPE"),
            row("70299P　合晶元富18售03", "TW21Z70299P3", "2021/11/26", "上櫃", "", "RWSCPE"),
        ))
    }

    fn big5(s: &str) -> Vec<u8> {
        let (bytes, _, _) = encoding_rs::BIG5.encode(s);
        bytes.into_owned()
    }

    #[allow(clippy::too_many_arguments)]
    fn security(
        security_type: &str,
        code: &str,
        name: &str,
        isin: &str,
        ipo: (i32, u32, u32),
        market: Market,
        industry: &str,
        cfi: &str,
    ) -> Security {
        Security {
            security_type: security_type.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            isin: isin.to_string(),
            ipo: NaiveDate::from_ymd_opt(ipo.0, ipo.1, ipo.2).unwrap(),
            market,
            industry: industry.to_string(),
            cfi: cfi.to_string(),
            remark: String::new(),
        }
    }

    #[test]
    fn test_parse() {
        let securities = parse(&listed()).unwrap();
        assert_eq!(
            securities,
            vec![
                security("股票", "1101", "台泥", "TW0001101004", (1962, 2, 9), Market::TWSE, "水泥工業", "ESVUFR"),
                security("股票", "1102", "亞泥", "TW0001102002", (1962, 6, 8), Market::TWSE, "水泥工業", "ESVUFR"),
            ]
        );
    }

    #[test]
    fn test_parse_ignores_other_rows() {
        let html = page(&format!(
            "<tr><td>a</td><td>b</td></tr>{}",
            row("1101　台泥", "TW0001101004", "1962/02/09", "上市", "水泥工業", "ESVUFR")
        ));
        let securities = parse(&html).unwrap();
        assert_eq!(securities.len(), 1);
        assert_eq!(securities[0].security_type, "");
    }

    #[test]
    fn test_parse_bad_ipo() {
        let html = page(&row("1101　台泥", "TW0001101004", "1962/0209", "上市", "水泥工業", "ESVUFR"));
        let err = parse(&html).unwrap_err();
        assert!(matches!(err.kind(), Some(Error::Field { field: "security ipo", .. })));
    }

    #[test]
    fn test_parse_bad_market() {
        let html = page(&row("1101　台泥", "TW0001101004", "1962/02/09", "興櫃", "水泥工業", "ESVUFR"));
        let err = parse(&html).unwrap_err();
        assert!(matches!(err.kind(), Some(Error::Shape(_))));
    }

    #[test]
    fn test_split_code_and_name() {
        assert_eq!(
            split_code_and_name("1101　台泥").unwrap(),
            ("1101".to_string(), "台泥".to_string())
        );
        assert_eq!(
            split_code_and_name(" 00679B　元大美債20年 ").unwrap(),
            ("00679B".to_string(), "元大美債20年".to_string())
        );
        assert_eq!(
            split_code_and_name("9103　美德醫療 DR").unwrap(),
            ("9103".to_string(), "美德醫療 DR".to_string())
        );
        assert!(split_code_and_name("1101").is_err());
        assert!(split_code_and_name("").is_err());
    }

    #[tokio::test]
    async fn test_visit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH))
            .and(query_param("strMode", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(big5(&listed())))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(PATH))
            .and(query_param("strMode", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(big5(&otc())))
            .expect(1)
            .mount(&server)
            .await;

        let securities = mock_client(&server).securities().await.unwrap();
        assert_eq!(
            securities,
            vec![
                security("股票", "1101", "台泥", "TW0001101004", (1962, 2, 9), Market::TWSE, "水泥工業", "ESVUFR"),
                security("股票", "1102", "亞泥", "TW0001102002", (1962, 6, 8), Market::TWSE, "水泥工業", "ESVUFR"),
                security("上櫃認購(售)權證", "70286P", "驊訊元富18售01", "TW21Z70286P0", (2021, 11, 23), Market::TPEx, "", "RWSCPE"),
                security("上櫃認購(售)權證", "70299P", "合晶元富18售03", "TW21Z70299P3", (2021, 11, 26), Market::TPEx, "", "RWSCPE"),
            ]
        );
    }

    #[tokio::test]
    async fn test_visit_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = mock_client(&server).securities().await.unwrap_err();
        assert_eq!(err.http_status(), Some(400));
        assert!(format!("{:#}", err).contains(": 400"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_visit_live() {
        let client = Client::new().unwrap();
        let securities = client.securities().await.unwrap();
        assert!(securities.iter().any(|s| s.code == "2330" && s.market == Market::TWSE));
    }
}
