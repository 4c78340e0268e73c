use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

// Query strings arrive as strings when PaginationParams is flattened into
// a filter struct, so the numeric fields deserialize via string parsing.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Pagination metadata returned alongside list data.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(total: i64, limit: i64, offset: i64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset + limit < total,
        }
    }
}

/// Limit/offset/page query parameters with clamping.
///
/// `page` takes precedence over `offset` when both are given.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        match self.page {
            Some(page) => (page.max(1) - 1) * self.limit(),
            None => self.offset.unwrap_or(0).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_limit_clamping() {
        let params = PaginationParams {
            limit: Some(500),
            offset: None,
            page: None,
        };
        assert_eq!(params.limit(), 100);

        let params = PaginationParams {
            limit: Some(0),
            offset: None,
            page: None,
        };
        assert_eq!(params.limit(), 1);

        let params = PaginationParams {
            limit: Some(-3),
            offset: None,
            page: None,
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_page_takes_precedence_over_offset() {
        let params = PaginationParams {
            limit: Some(20),
            offset: Some(5),
            page: Some(3),
        };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let params = PaginationParams {
            limit: None,
            offset: Some(-10),
            page: None,
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_below_one_clamped() {
        let params = PaginationParams {
            limit: Some(10),
            offset: None,
            page: Some(0),
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_from_query_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"25","offset":"50"}"#).unwrap();
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_deserialize_empty_strings_fall_back() {
        let params: PaginationParams = serde_json::from_str(r#"{"limit":"","offset":""}"#).unwrap();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_meta_has_more() {
        let meta = PaginationMeta::new(25, 10, 10);
        assert!(meta.has_more);

        let meta = PaginationMeta::new(25, 10, 20);
        assert!(!meta.has_more);

        let meta = PaginationMeta::new(0, 10, 0);
        assert!(!meta.has_more);
    }
}
