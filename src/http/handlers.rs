//! Product CRUD handlers.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | /products | 200, all products by id |
//! | GET | /products/{id} | 200, the product |
//! | POST | /products | 201, the created product |
//! | PUT | /products/{id} | 200, the updated product |
//! | DELETE | /products/{id} | 204, empty |

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_sdk::ProductId;
use serde::{Deserialize, Deserializer};
use std::time::Instant;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::{NewProduct, ProductChanges, ProductStore};

/// Body accepted by create and update. Every field is optional on the wire;
/// create enforces `name` and `price` itself.
#[derive(Debug, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    /// Absent: untouched. `null`: cleared.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub async fn list_products(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    respond("list", start, Ok(Json(state.store.list()).into_response()))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let start = Instant::now();
    let result = product_id(id)
        .and_then(|id| state.store.get(id).ok_or(ApiError::NotFound))
        .map(|product| Json(product).into_response());
    respond("get", start, result)
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let start = Instant::now();
    let result = create(&state.store, payload);
    if result.is_ok() {
        persist(&state.store).await;
    }
    respond("create", start, result)
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let start = Instant::now();
    let result = product_id(id).and_then(|id| update(&state.store, id, payload));
    if result.is_ok() {
        persist(&state.store).await;
    }
    respond("update", start, result)
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let start = Instant::now();
    let result = product_id(id).and_then(|id| {
        let removed = state.store.remove(id).ok_or(ApiError::NotFound)?;
        tracing::info!(id = %removed.id, name = %removed.name, "Product deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    });
    if result.is_ok() {
        persist(&state.store).await;
    }
    respond("delete", start, result)
}

fn create(
    store: &ProductStore,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (Some(name), Some(price)) = (input.name, input.price) else {
        return Err(ApiError::MissingFields);
    };

    let product = store.insert(NewProduct {
        name,
        price,
        description: input.description.flatten(),
    });
    tracing::info!(id = %product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)).into_response())
}

fn update(
    store: &ProductStore,
    id: ProductId,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    if store.get(id).is_none() {
        return Err(ApiError::NotFound);
    }
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let changes = ProductChanges {
        name: input.name,
        price: input.price,
        description: input.description,
    };
    let product = store.update(id, changes).ok_or(ApiError::NotFound)?;
    tracing::info!(id = %product.id, name = %product.name, "Product updated");

    Ok(Json(product).into_response())
}

/// Non-numeric ids cannot name a product.
fn product_id(id: Result<Path<u64>, PathRejection>) -> Result<ProductId, ApiError> {
    id.map(|Path(id)| ProductId(id)).map_err(|_| ApiError::NotFound)
}

/// Save after a mutation. The in-memory store stays authoritative if the
/// write fails.
async fn persist(store: &ProductStore) {
    if let Err(e) = store.save_async().await {
        tracing::error!(error = %e, "Failed to persist products");
    }
}

fn respond(
    operation: &'static str,
    start: Instant,
    result: Result<Response, ApiError>,
) -> Response {
    let response = result.unwrap_or_else(|e| {
        tracing::warn!(operation, error = %e, "Request rejected");
        e.into_response()
    });
    metrics::record_request(operation, response.status().as_u16(), start);
    response
}
