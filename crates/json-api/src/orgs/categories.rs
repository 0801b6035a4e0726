//! Organization Categories Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Sorted unique category labels
    pub categories: Vec<String>,

    /// Number of categories returned
    pub total: usize,
}

/// Organization Categories Handler
///
/// Returns the sorted unique category labels across all organizations.
#[endpoint(tags("orgs"), summary = "List Organization Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .orgs
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        total: categories.len(),
        categories,
    }))
}
