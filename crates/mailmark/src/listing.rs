//! Plain-text listing of query items.

use chrono::{DateTime, Local, Utc};
use mailmark_core::{Category, QueryItem};

/// Width of the name column.
const NAME_WIDTH: usize = 28;

/// Header line naming the baseline time.
pub fn header(baseline: Option<DateTime<Utc>>) -> String {
    baseline.map_or_else(
        || "Query counts (no baseline yet)".to_string(),
        |taken_at| {
            format!(
                "Query counts, changes since {}",
                taken_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            )
        },
    )
}

/// Section title for a category.
pub const fn title(category: Category) -> &'static str {
    match category {
        Category::Bookmark => "Bookmarks",
        Category::Maildir => "Maildirs",
    }
}

/// One line per visible item: favorite marker, key, name and counts.
pub fn lines(items: &[QueryItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.hide)
        .map(|item| {
            let marker = if item.favorite { '*' } else { ' ' };
            let key = item.key.unwrap_or(' ');
            let name = item.name.as_deref().unwrap_or(&item.query);
            format!("{marker} [{key}] {name:<NAME_WIDTH$} {}", item.display_counts())
                .trim_end()
                .to_string()
        })
        .collect()
}
