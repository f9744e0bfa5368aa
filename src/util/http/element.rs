use anyhow::{anyhow, Result};
use scraper::{ElementRef, Selector};

/// Parses a CSS selector, turning the selector error into an `anyhow::Error`.
pub fn selector(css_selector: &str) -> Result<Selector> {
    Selector::parse(css_selector)
        .map_err(|why| anyhow!("Failed to Selector::parse('{}') because: {:?}", css_selector, why))
}

/// Extracts the text value of the first element selected by a given CSS selector.
///
/// Returns `None` when the selector is invalid or nothing matches.
///
/// # Examples
///
/// ```
/// use scraper::Html;
/// use twstock::util::http::element::{parse_value, selector};
///
/// let document = Html::parse_fragment(r#"<td><a href="/">精材</a></td>"#);
/// let td = document.select(&selector("td").unwrap()).next().unwrap();
///
/// assert_eq!(parse_value(&td, "a"), Some("精材".to_string()));
/// ```
pub fn parse_value(element: &ElementRef, css_selector: &str) -> Option<String> {
    match Selector::parse(css_selector) {
        Ok(s) => element
            .select(&s)
            .next()
            .map(|v| v.text().collect::<String>()),
        Err(_) => None,
    }
}

/// Same as [`parse_value`] but trimmed, and empty when nothing matches.
pub fn parse_to_string(element: &ElementRef, css_selector: &str) -> String {
    parse_value(element, css_selector)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// 元素內所有文字節點串接後去除頭尾空白
pub fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 列出 `row` 底下符合 `cell` 的元素
pub fn cells<'a>(row: &ElementRef<'a>, cell: &Selector) -> Vec<ElementRef<'a>> {
    row.select(cell).collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    const ROW: &str = r#"<table><tr>
        <td> 1101　台泥 </td><td>TW0001101004</td><td><b>股票</b></td>
    </tr></table>"#;

    #[test]
    fn test_selector() {
        assert!(selector("tbody tr").is_ok());
        assert!(selector("<<").is_err());
    }

    #[test]
    fn test_cells_and_text() {
        let document = Html::parse_document(ROW);
        let tr = document.select(&selector("tr").unwrap()).next().unwrap();
        let tds = cells(&tr, &selector("td").unwrap());

        assert_eq!(tds.len(), 3);
        assert_eq!(text_of(&tds[0]), "1101　台泥");
        assert_eq!(text_of(&tds[1]), "TW0001101004");
        assert_eq!(parse_to_string(&tds[2], "b"), "股票");
        assert_eq!(parse_to_string(&tds[1], "b"), "");
        assert_eq!(parse_value(&tds[2], "<<"), None);
    }
}
