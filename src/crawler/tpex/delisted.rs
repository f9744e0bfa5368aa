use anyhow::{Context, Result};
use scraper::Html;

use crate::{
    client::{Client, Site},
    declare::{DelistedSecurity, Market},
    error::Error,
    util::http::{self, element},
};

const PATH: &str = "/web/regular_emerging/deListed/de-listed_companies.php";

/// 取得終止上櫃公司名單，`page` 從 0 開始
pub async fn visit(client: &Client, page: u32) -> Result<Vec<DelistedSecurity>> {
    let url = client.endpoint(Site::Tpex, PATH, &[])?;
    let to_page = page.saturating_add(1).to_string();
    let form = [
        ("stk_code", ""),
        ("select_year", "ALL"),
        ("topage", to_page.as_str()),
        ("DELIST_REASON", "-1"),
    ];
    let html = http::post_form_text(client.http(), url, &form, client.decoder(Site::Tpex))
        .await
        .with_context(|| format!("Failed to visit tpex de-listed companies page {}", page))?;

    parse(&html)
}

/// 第一個表格︰三格的列是標題，四格的列為︰股票代號、公司名稱、終止上櫃日期、備註
pub fn parse(html: &str) -> Result<Vec<DelistedSecurity>> {
    let document = Html::parse_document(html);
    let table = element::selector("table")?;
    let tr = element::selector("tr")?;
    let td = element::selector("td")?;
    let mut result = Vec::new();

    let Some(table) = document.select(&table).next() else {
        return Ok(result);
    };

    for node in table.select(&tr) {
        let tds = element::cells(&node, &td);
        match tds.len() {
            3 => continue,
            4 => result.push(DelistedSecurity {
                code: element::text_of(&tds[0]),
                name: element::parse_to_string(&tds[1], "a"),
                market: Market::TPEx,
            }),
            n => return Err(Error::Shape(format!("security fields: {} cells", n)).into()),
        }
    }

    Ok(result)
}
