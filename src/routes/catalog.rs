use axum::extract::{Path, Query};
use serde::Deserialize;

use crate::api::DataResponse;
use crate::catalog;
use crate::domain::{Choice, Service, ServiceCategory};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// List active services, optionally restricted to one category
pub async fn list_services(
    Query(query): Query<CatalogQuery>,
) -> ApiResult<DataResponse<Vec<&'static Service>>> {
    let services: Vec<&'static Service> = match query.category.as_deref() {
        Some(raw) => {
            let category = ServiceCategory::parse(raw).ok_or_else(|| {
                ApiError::bad_request(format!("Unknown service category '{}'", raw))
            })?;
            catalog::by_category(category)
                .filter(|service| service.is_active)
                .collect()
        }
        None => catalog::active().collect(),
    };

    tracing::debug!(category = ?query.category, count = services.len(), "Listing services");

    Ok(DataResponse::new(services))
}

/// Get a single catalog service by id
pub async fn get_service(
    Path(service_id): Path<String>,
) -> ApiResult<DataResponse<&'static Service>> {
    catalog::get_by_id(&service_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::not_found(format!("Service '{}' not found", service_id)))
}
