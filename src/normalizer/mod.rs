use chrono::Utc;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, TribuneError};
use crate::domain::FeedItem;

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a fetched document into its item list.
    ///
    /// Identifiers pass through exactly as the parser surfaces them, in
    /// document order; duplicates are kept. An entry with an empty
    /// identifier falls back to its link.
    pub fn normalize(&self, body: &[u8]) -> Result<Vec<FeedItem>> {
        let feed = parser::parse(body).map_err(|e| TribuneError::FeedParse(e.to_string()))?;

        let items: Vec<FeedItem> = feed
            .entries
            .into_iter()
            .map(|entry| {
                let link = entry.links.first().map(|l| l.href.clone());
                let id = if entry.id.is_empty() {
                    link.clone().unwrap_or_default()
                } else {
                    entry.id
                };

                FeedItem {
                    id,
                    title: entry
                        .title
                        .map(|t| decode_html_entities(&t.content).to_string()),
                    link,
                    summary: entry
                        .summary
                        .map(|s| decode_html_entities(&s.content).to_string()),
                    author: entry.authors.first().map(|a| a.name.clone()),
                    published_at: entry
                        .published
                        .or(entry.updated)
                        .map(|dt| dt.with_timezone(&Utc)),
                }
            })
            .collect();

        Ok(items)
    }
}
