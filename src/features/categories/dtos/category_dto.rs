use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_type: c.category_type,
        }
    }
}

/// All categories keyed by id, e.g. `{"1": "Science", "2": "Art"}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesDto {
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailDto {
    pub category: CategoryResponseDto,
}

/// Build the id -> type lookup table the client renders its sidebar from
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_map_serializes_as_object() {
        let map = category_map(vec![
            Category {
                id: 2,
                category_type: "Art".to_string(),
            },
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
        ]);

        let value = serde_json::to_value(CategoriesDto { categories: map }).unwrap();
        assert_eq!(
            value,
            json!({ "categories": { "1": "Science", "2": "Art" } })
        );
    }
}
