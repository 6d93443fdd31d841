//! Fixed-size page slicing for question listings.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::{AppError, Result};
use crate::shared::constants::QUESTIONS_PER_PAGE;

/// `?page=N` query parameter.
///
/// Kept as a raw string so that a missing or non-numeric value falls back
/// to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Resolve the requested page. Numeric pages below 1 are rejected.
    pub fn page(&self) -> Result<i64> {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);

        if page < 1 {
            return Err(AppError::BadRequest(format!(
                "Page must be 1 or greater, got {}",
                page
            )));
        }
        Ok(page)
    }
}

/// Slice `items[(page - 1) * 10 .. page * 10]`, clipped to the collection.
///
/// Pages past the end, and pages below 1, yield an empty vector.
pub fn paginate<T: Clone>(page: i64, items: &[T]) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());

    items[start..end].to_vec()
}
