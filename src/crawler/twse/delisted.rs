use anyhow::{Context, Result};
use scraper::Html;

use crate::{
    client::{Client, Site},
    declare::{DelistedSecurity, Market},
    error::Error,
    util::http::{self, element},
};

const PATH: &str = "/zh/company/suspendListing";

/// 取得終止上市公司名單，maxLength=-1 表示一次取回全部
pub async fn visit(client: &Client) -> Result<Vec<DelistedSecurity>> {
    let url = client.endpoint(Site::Twse, PATH, &[])?;
    let form = [("maxLength", "-1"), ("selectYear", ""), ("submitBtn", "查詢")];
    let html = http::post_form_text(client.http(), url, &form, client.decoder(Site::Twse))
        .await
        .context("Failed to visit twse suspendListing")?;

    parse(&html)
}

/// 表格每一列為︰終止上市日期、公司名稱、上市編號
pub fn parse(html: &str) -> Result<Vec<DelistedSecurity>> {
    let document = Html::parse_document(html);
    let tr = element::selector("tbody tr")?;
    let td = element::selector("td")?;
    let mut result = Vec::with_capacity(1024);

    for node in document.select(&tr) {
        let tds = element::cells(&node, &td);
        if tds.len() != 3 {
            return Err(Error::Shape(format!("security fields: {} cells", tds.len())).into());
        }

        result.push(DelistedSecurity {
            code: element::text_of(&tds[2]),
            name: element::text_of(&tds[1]),
            market: Market::TWSE,
        });
    }

    Ok(result)
}
