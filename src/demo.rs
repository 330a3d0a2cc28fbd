use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::client::{Artwork, ArtworkPage, ArtworkSource};

const TITLES: [&str; 6] = [
    "Water Lilies",
    "The Bedroom",
    "Nighthawks",
    "American Gothic",
    "Paris Street; Rainy Day",
    "Self-Portrait",
];

const ARTISTS: [&str; 5] = [
    "Claude Monet\nFrench, 1840-1926",
    "Vincent van Gogh\nDutch, 1853-1890",
    "Edward Hopper\nAmerican, 1882-1967",
    "Grant Wood\nAmerican, 1891-1942",
    "Gustave Caillebotte\nFrench, 1848-1894",
];

const ORIGINS: [&str; 4] = ["France", "Netherlands", "United States", "Japan"];

/// In-process stand-in for the remote collection, used by `--demo` and
/// handy when the API is unreachable. A short artificial latency keeps
/// the busy states visible.
pub struct DemoArtworkSource {
    artworks: Vec<Artwork>,
    latency: Duration,
}

impl DemoArtworkSource {
    pub fn new(record_count: i64) -> Self {
        let artworks = (1..=record_count)
            .map(|id| {
                let i = (id - 1) as usize;
                let start = 1840 + ((id * 7) % 120) as i32;
                Artwork {
                    id,
                    title: Some(format!("{} No. {id}", TITLES[i % TITLES.len()])),
                    artist_display: Some(ARTISTS[i % ARTISTS.len()].to_string()),
                    place_of_origin: Some(ORIGINS[i % ORIGINS.len()].to_string()),
                    inscriptions: if id % 3 == 0 {
                        Some(format!("Signed lower right, no. {id}"))
                    } else {
                        None
                    },
                    date_start: Some(start),
                    date_end: Some(start + (id % 5) as i32),
                }
            })
            .collect();

        Self {
            artworks,
            latency: Duration::from_millis(150),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ArtworkSource for DemoArtworkSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage> {
        tokio::time::sleep(self.latency).await;

        let start = ((page.max(1) - 1) * limit) as usize;
        let end = (start + limit as usize).min(self.artworks.len());
        let artworks = if start < self.artworks.len() {
            self.artworks[start..end].to_vec()
        } else {
            Vec::new()
        };

        log::debug!("Demo source served page {page} with {} records", artworks.len());
        Ok(ArtworkPage {
            artworks,
            total: self.artworks.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pages_slice_the_collection_in_order() {
        let source = DemoArtworkSource::new(30).with_latency(Duration::ZERO);

        let first = source.fetch_page(1, 12).await.unwrap();
        assert_eq!(first.total, 30);
        assert_eq!(first.artworks.len(), 12);
        assert_eq!(first.artworks[0].id, 1);

        let last = source.fetch_page(3, 12).await.unwrap();
        assert_eq!(last.artworks.len(), 6);
        assert_eq!(last.artworks[0].id, 25);
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty_not_an_error() {
        let source = DemoArtworkSource::new(30).with_latency(Duration::ZERO);
        let beyond = source.fetch_page(4, 12).await.unwrap();
        assert!(beyond.artworks.is_empty());
        assert_eq!(beyond.total, 30);
    }
}
