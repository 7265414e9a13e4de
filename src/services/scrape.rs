use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Contents of the upstream `div.result-box` container.
#[derive(Debug)]
pub struct ResultBox {
    /// Paragraph texts joined with newlines, as shown on the page.
    pub raw: String,
    /// `label:value` paragraphs classified into canonical field names.
    pub fields: BTreeMap<String, String>,
}

fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector `{css}`: {e}"))
}

fn element_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

/// Maps an upstream result label to its canonical field name. The page
/// labels are Chinese; order matters, first match wins.
fn canonical_field(label: &str) -> Option<&'static str> {
    if label.contains("IP") || label.contains("ip") {
        Some("ip")
    } else if label.contains("定位") {
        Some("location")
    } else if label.contains("省份") {
        Some("province")
    } else if label.contains("市") && !label.contains("省") {
        Some("city")
    } else if label.contains("区") {
        Some("district")
    } else if label.contains("地址") {
        Some("address")
    } else if label.contains("运营商") {
        Some("isp")
    } else {
        None
    }
}

/// Extracts the first result box from an upstream response page.
/// Returns `None` when the page has no `div.result-box`.
pub fn parse_result_box(html: &str) -> anyhow::Result<Option<ResultBox>> {
    let doc = Html::parse_document(html);
    let box_sel = selector("div.result-box")?;
    let p_sel = selector("p")?;

    let Some(container) = doc.select(&box_sel).next() else {
        return Ok(None);
    };

    let mut lines = Vec::new();
    let mut fields = BTreeMap::new();
    for p in container.select(&p_sel) {
        let text = element_text(p);
        if text.is_empty() {
            continue;
        }
        if let Some((label, value)) = text.split_once(':') {
            let label = label.trim();
            let value = value.trim();
            let key = canonical_field(label)
                .map(str::to_string)
                .unwrap_or_else(|| label.to_string());
            fields.insert(key, value.to_string());
        }
        lines.push(text);
    }

    Ok(Some(ResultBox {
        raw: lines.join("\n"),
        fields,
    }))
}
