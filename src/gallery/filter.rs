use super::ImageItem;

/// Case-insensitive substring match on the display name. An empty query
/// matches everything.
pub fn matches(item: &ImageItem, query: &str) -> bool {
    query.is_empty()
        || item
            .display_name
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// Items matching `query`, in their original order.
pub fn filter_items<'a>(items: &'a [ImageItem], query: &str) -> Vec<&'a ImageItem> {
    items.iter().filter(|item| matches(item, query)).collect()
}
