//! Link previews: fetch a product page and pull out title, image,
//! description and price.
//!
//! Failures never escape this module. Anything that goes wrong degrades to
//! [`LinkPreview::ManualRequired`] so the customer can type the details in.

mod extract;
mod fetcher;

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{info, instrument, warn};

pub use extract::extract_preview;
pub use fetcher::{HttpFetcher, PageFetcher, PreviewError};

/// Details found on a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDetails {
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub url: String,
}

/// Outcome of previewing a link.
///
/// Serializes as `{"success":true,"title":..,"url":..}` (absent optional
/// fields omitted) or `{"success":false,"manual_required":true}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPreview {
    Found(PreviewDetails),
    ManualRequired,
}

impl Serialize for LinkPreview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LinkPreview::ManualRequired => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("manual_required", &true)?;
                map.end()
            }
            LinkPreview::Found(details) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("title", &details.title)?;
                if let Some(image) = &details.image {
                    map.serialize_entry("image", image)?;
                }
                if let Some(description) = &details.description {
                    map.serialize_entry("description", description)?;
                }
                if let Some(price) = &details.price {
                    map.serialize_entry("price", price)?;
                }
                map.serialize_entry("url", &details.url)?;
                map.end()
            }
        }
    }
}

/// Fetches pages through a [`PageFetcher`] and extracts previews from them.
#[derive(Clone)]
pub struct LinkPreviewer {
    fetcher: Arc<dyn PageFetcher>,
}

impl LinkPreviewer {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    #[instrument(skip(self))]
    pub async fn preview(&self, url: &str) -> LinkPreview {
        let html = match self.fetcher.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "Preview fetch failed");
                return LinkPreview::ManualRequired;
            }
        };

        let preview = extract_preview(&html, url);
        match &preview {
            LinkPreview::Found(details) => {
                info!(title = %details.title, has_price = details.price.is_some(), "Preview extracted")
            }
            LinkPreview::ManualRequired => warn!("No title found on page"),
        }
        preview
    }
}
