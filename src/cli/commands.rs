use crate::app::{AppContext, Result};
use crate::domain::FeedSource;

/// Print one feed's current titles to stdout.
pub async fn list_feed(ctx: &AppContext, identifier: &str) -> Result<()> {
    let source = FeedSource::from_identifier(identifier);
    let items = ctx.load(source).await?;

    if items.is_empty() {
        println!("No items in {}", source.title());
        return Ok(());
    }

    for item in items {
        let date = item
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());

        println!("{} {}", date, item.display_title());
    }

    Ok(())
}
