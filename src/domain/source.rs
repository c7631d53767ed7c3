use serde::{Deserialize, Serialize};

/// The two feeds the application knows about. Their URLs are fixed; there
/// is no feed management surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedSource {
    News,
    Articles,
}

impl FeedSource {
    /// Every source, in tab order.
    pub const ALL: [FeedSource; 2] = [FeedSource::News, FeedSource::Articles];

    /// Resolve a feed identifier. Only `"articles"` selects the articles
    /// feed; any other identifier means news.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier == "articles" {
            FeedSource::Articles
        } else {
            FeedSource::News
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            FeedSource::News => "http://www.girondins4ever.com/breves/feed",
            FeedSource::Articles => "http://www.girondins4ever.com/feed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FeedSource::News => "News",
            FeedSource::Articles => "Articles",
        }
    }
}
