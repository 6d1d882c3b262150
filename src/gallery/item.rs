use serde::{Deserialize, Serialize};

/// Characters of the display name shown only in the full title. Names in the
/// catalog carry a fixed-width episode prefix such as `MyGO01`.
const CAPTION_PREFIX_CHARS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageItem {
    #[serde(rename = "編號")]
    pub id: String,
    #[serde(rename = "圖片名稱")]
    pub display_name: String,
    #[serde(rename = "圖片連結")]
    pub image_url: String,
}

impl ImageItem {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            image_url: image_url.into(),
        }
    }

    /// Display name without its prefix, as used on grid cards.
    pub fn caption(&self) -> &str {
        match self.display_name.char_indices().nth(CAPTION_PREFIX_CHARS) {
            Some((idx, _)) => &self.display_name[idx..],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bundled_field_names() {
        let json = r#"{"編號":"42","圖片名稱":"MyGO01 為什麼","圖片連結":"https://example.com/42.jpg"}"#;
        let item: ImageItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            ImageItem::new("42", "MyGO01 為什麼", "https://example.com/42.jpg")
        );
    }

    #[test]
    fn caption_drops_prefix_by_characters() {
        let item = ImageItem::new("1", "MyGO03 我也一樣", "u");
        assert_eq!(item.caption(), " 我也一樣");

        let item = ImageItem::new("2", "春日影春日影春日影", "u");
        assert_eq!(item.caption(), "春日影");

        let item = ImageItem::new("3", "short", "u");
        assert_eq!(item.caption(), "");
    }
}
