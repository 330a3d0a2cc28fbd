use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One catalog record from the collection. Identity is the `id` field
/// alone; every other field is a display snapshot that may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn artist_text(&self) -> &str {
        self.artist_display.as_deref().unwrap_or("Unknown Artist")
    }

    pub fn origin_text(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("Unknown Origin")
    }

    pub fn inscriptions_text(&self) -> &str {
        self.inscriptions.as_deref().unwrap_or("No inscriptions")
    }

    pub fn date_text(&self) -> String {
        match (self.date_start, self.date_end) {
            (None, None) => "Unknown".to_string(),
            (Some(start), Some(end)) if start == end => format!("{start}"),
            (Some(start), Some(end)) => format!("{start} - {end}"),
            (Some(start), None) => format!("c. {start}"),
            (None, Some(end)) => format!("- {end}"),
        }
    }
}

/// One fetched page: an ordered slice of the collection plus the
/// server-reported total count. An empty `artworks` means the
/// collection is exhausted at or before the requested page.
#[derive(Debug, Clone)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub total: u64,
}

/// Page-based access to the remote collection. Implementations report
/// failures as a single error with no partial data.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage>;
}

// Wire envelope of the Art Institute of Chicago API.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    pagination: ApiPagination,
    data: Vec<Artwork>,
}

#[derive(Debug, Deserialize)]
struct ApiPagination {
    total: u64,
}

/// The projection requested from the API, matching the columns the
/// table renders. Keeping it narrow keeps page payloads small.
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

pub struct HttpArtworkSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpArtworkSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ArtworkSource for HttpArtworkSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage> {
        let url = format!(
            "{}/artworks?page={page}&limit={limit}&fields={ARTWORK_FIELDS}",
            self.base_url
        );
        log::debug!("Fetching page {page} (limit {limit})");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: status {}", response.status()));
        }

        let envelope: ApiEnvelope = response.json().await?;
        log::debug!(
            "Fetched {} artworks, collection total {}",
            envelope.data.len(),
            envelope.pagination.total
        );

        Ok(ArtworkPage {
            artworks: envelope.data,
            total: envelope.pagination.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_deserializes_api_shape() {
        let body = r#"{
            "pagination": {
                "total": 129372,
                "limit": 2,
                "offset": 0,
                "total_pages": 64686,
                "current_page": 1
            },
            "data": [
                {
                    "id": 20684,
                    "title": "Starry Night and the Astronauts",
                    "place_of_origin": "United States",
                    "artist_display": "Alma Thomas",
                    "inscriptions": null,
                    "date_start": 1972,
                    "date_end": 1972
                },
                {
                    "id": 28560,
                    "title": null,
                    "date_start": null,
                    "date_end": 1890
                }
            ]
        }"#;

        let envelope: ApiEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.pagination.total, 129372);
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].id, 20684);
        assert_eq!(envelope.data[0].date_text(), "1972");
        assert_eq!(envelope.data[1].title_text(), "Untitled");
        assert_eq!(envelope.data[1].date_text(), "- 1890");
    }

    #[test]
    fn date_text_covers_all_shapes() {
        let mut artwork = Artwork {
            id: 1,
            title: None,
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        };
        assert_eq!(artwork.date_text(), "Unknown");

        artwork.date_start = Some(1890);
        assert_eq!(artwork.date_text(), "c. 1890");

        artwork.date_end = Some(1900);
        assert_eq!(artwork.date_text(), "1890 - 1900");
    }
}
