use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOptions {
    pub field: String,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliceOptions {
    pub limit: u32,
}

/// `PageQueryOptions` input object of the `posts` query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice: Option<SliceOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOptions>,
}

impl PageQueryOptions {
    /// Newest posts first, `limit` of them.
    pub fn latest(limit: u32) -> Self {
        Self {
            slice: Some(SliceOptions { limit }),
            sort: Some(SortOptions {
                field: "id".to_string(),
                order: SortOrder::Desc,
            }),
        }
    }
}

impl Default for PageQueryOptions {
    fn default() -> Self {
        Self::latest(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_options_wire_shape() {
        let json = serde_json::to_value(PageQueryOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slice": {"limit": 10},
                "sort": {"field": "id", "order": "DESC"}
            })
        );
    }
}
