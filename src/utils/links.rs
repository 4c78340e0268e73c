use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-row edit/delete links rendered on admin list rows.
///
/// Presentation-only: both point at the record's own REST endpoint, where
/// `PUT` edits and `DELETE` removes.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordLinks {
    pub edit_url: String,
    pub delete_url: String,
}

impl RecordLinks {
    pub fn new(resource: &str, id: Uuid) -> Self {
        let url = format!("/api/{}/{}", resource, id);
        Self {
            edit_url: url.clone(),
            delete_url: url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_point_at_record_endpoint() {
        let id = Uuid::new_v4();
        let links = RecordLinks::new("teachers", id);
        assert_eq!(links.edit_url, format!("/api/teachers/{}", id));
        assert_eq!(links.delete_url, links.edit_url);
    }
}
