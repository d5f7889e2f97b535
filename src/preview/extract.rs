use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;
use scraper::{Html, Selector};

use super::{LinkPreview, PreviewDetails};

const TITLE_META: [&str; 2] = [r#"meta[property="og:title"]"#, r#"meta[name="twitter:title"]"#];
const IMAGE_META: [&str; 2] = [r#"meta[property="og:image"]"#, r#"meta[name="twitter:image"]"#];
const DESCRIPTION_META: [&str; 3] = [
    r#"meta[property="og:description"]"#,
    r#"meta[name="description"]"#,
    r#"meta[name="twitter:description"]"#,
];

/// Common storefront price locations, tried in order.
pub const PRICE_SELECTORS: [&str; 6] = [
    ".price",
    ".product-price",
    "[data-price]",
    ".a-price-whole",
    ".priceblock",
    "#priceblock_ourprice",
];

fn currency_symbol() -> &'static Regex {
    static CURRENCY: OnceLock<Regex> = OnceLock::new();
    CURRENCY.get_or_init(|| Regex::new("[₹$€£]").expect("currency pattern is valid"))
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `content` of the first element matching `selector`, if non-blank.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
}

/// Text of the first element matching `selector`, if non-blank.
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    non_empty(&element.text().collect::<String>())
}

fn find_title(document: &Html) -> Option<String> {
    TITLE_META
        .iter()
        .find_map(|s| meta_content(document, s))
        .or_else(|| first_text(document, "title"))
}

fn find_price(document: &Html) -> Option<String> {
    PRICE_SELECTORS
        .iter()
        .filter_map(|s| first_text(document, s))
        .find(|text| currency_symbol().is_match(text))
}

/// Resolves a possibly relative image reference against the page URL.
fn absolute_url(page_url: &str, reference: String) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(&reference))
        .map(String::from)
        .unwrap_or(reference)
}

/// Extracts a preview from a fetched page.
///
/// Title falls back from Open Graph to Twitter to `<title>`; without one
/// the page is not usable and manual entry is required. The price is the
/// first [`PRICE_SELECTORS`] match whose text carries a currency symbol.
pub fn extract_preview(html: &str, page_url: &str) -> LinkPreview {
    let document = Html::parse_document(html);

    let Some(title) = find_title(&document) else {
        return LinkPreview::ManualRequired;
    };

    let image = IMAGE_META
        .iter()
        .find_map(|s| meta_content(&document, s))
        .map(|image| absolute_url(page_url, image));
    let description = DESCRIPTION_META.iter().find_map(|s| meta_content(&document, s));

    LinkPreview::Found(PreviewDetails {
        title,
        image,
        description,
        price: find_price(&document),
        url: page_url.to_string(),
    })
}
