use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a fetched feed.
///
/// The list UI reads only `id` (the list key) and `title`; the remaining
/// fields are whatever the parser surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl FeedItem {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> FeedItem {
        FeedItem {
            id: "entry-1".into(),
            title: None,
            link: None,
            summary: None,
            author: None,
            published_at: None,
        }
    }

    #[test]
    fn test_display_title_with_title() {
        let mut item = item();
        item.title = Some("Match report".into());
        assert_eq!(item.display_title(), "Match report");
    }

    #[test]
    fn test_display_title_without_title() {
        assert_eq!(item().display_title(), "(Untitled)");
    }
}
