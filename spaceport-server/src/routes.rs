//! HTTP handlers for the Spaceport server.

use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use spaceport_core::{
    PageRequest, Ship, ShipCatalog, ShipDraft, ShipError, ShipFilter, ShipOrder, ShipType,
};

use crate::openapi::ApiDoc;

#[derive(Clone)]
/// Shared application state for handlers.
pub struct AppState {
    /// Ship catalog service.
    pub catalog: ShipCatalog,
}

/// Error response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub message: String,
}

/// Query parameters accepted by the listing and counting endpoints.
///
/// Every parameter is optional; absent filter parameters match everything
/// and absent paging parameters fall back to the listing defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipQuery {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact ship category.
    pub ship_type: Option<ShipType>,
    /// Inclusive lower bound on the production instant, epoch milliseconds.
    pub after: Option<i64>,
    /// Inclusive upper bound on the production instant, epoch milliseconds.
    pub before: Option<i64>,
    /// Exact usage flag.
    pub is_used: Option<bool>,
    /// Inclusive lower bound on speed.
    pub min_speed: Option<f64>,
    /// Inclusive upper bound on speed.
    pub max_speed: Option<f64>,
    /// Inclusive lower bound on crew size.
    pub min_crew_size: Option<i32>,
    /// Inclusive upper bound on crew size.
    pub max_crew_size: Option<i32>,
    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
    /// Inclusive upper bound on rating.
    pub max_rating: Option<f64>,
    /// Sort key applied before paging.
    pub order: Option<ShipOrder>,
    /// Zero-based page index.
    pub page_number: Option<u32>,
    /// Page length.
    pub page_size: Option<u32>,
}

impl ShipQuery {
    fn filter(&self) -> ShipFilter {
        ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }

    fn page(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            number: self.page_number.unwrap_or(defaults.number),
            size: self.page_size.unwrap_or(defaults.size),
            order: self.order.unwrap_or(defaults.order),
        }
    }
}

fn error_response(err: ShipError) -> HttpResponse {
    match err {
        ShipError::BadRequest => HttpResponse::BadRequest().finish(),
        ShipError::NotFound => HttpResponse::NotFound().finish(),
        ShipError::Store(message) => {
            HttpResponse::InternalServerError().json(ErrorResponse { message })
        }
    }
}

fn blocking_error(err: actix_web::error::BlockingError) -> ShipError {
    ShipError::Store(format!("catalog task failed: {err}"))
}

#[utoipa::path(
    get,
    path = "/ships",
    params(ShipQuery),
    responses(
        (status = 200, description = "Matching page of ships", body = [Ship]),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships")]
/// List one page of ships matching the query filters.
pub async fn list_ships(
    state: web::Data<AppState>,
    query: web::Query<ShipQuery>,
) -> impl Responder {
    let catalog = state.catalog.clone();
    let query = query.into_inner();
    let result = web::block(move || catalog.list(&query.filter(), &query.page()))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(ships) => HttpResponse::Ok().json(ships),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/ships/count",
    params(ShipQuery),
    responses(
        (status = 200, description = "Number of matching ships", body = usize),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships/count")]
/// Count the ships matching the query filters, ignoring paging.
pub async fn count_ships(
    state: web::Data<AppState>,
    query: web::Query<ShipQuery>,
) -> impl Responder {
    let catalog = state.catalog.clone();
    let query = query.into_inner();
    let result = web::block(move || catalog.count(&query.filter()))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(count) => HttpResponse::Ok().json(count),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/ships",
    request_body = ShipDraft,
    responses(
        (status = 200, description = "The stored ship", body = Ship),
        (status = 400, description = "Missing or out-of-range fields"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[post("/rest/ships")]
/// Validate a draft, derive its rating, and store it.
pub async fn create_ship(
    state: web::Data<AppState>,
    payload: web::Json<ShipDraft>,
) -> impl Responder {
    let catalog = state.catalog.clone();
    let draft = payload.into_inner();
    let result = web::block(move || catalog.create(draft))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(ship) => HttpResponse::Ok().json(ship),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/ships/{id}",
    params(("id" = String, Path, description = "Ship identifier, a positive integer")),
    responses(
        (status = 200, description = "The ship", body = Ship),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No ship under the identifier"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[get("/rest/ships/{id}")]
/// Fetch one ship by identifier.
pub async fn get_ship(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let catalog = state.catalog.clone();
    let raw_id = path.into_inner();
    let result = web::block(move || catalog.fetch(&raw_id))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(ship) => HttpResponse::Ok().json(ship),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    post,
    path = "/ships/{id}",
    request_body = ShipDraft,
    params(("id" = String, Path, description = "Ship identifier, a positive integer")),
    responses(
        (status = 200, description = "The updated ship", body = Ship),
        (status = 400, description = "Malformed identifier or out-of-range fields"),
        (status = 404, description = "No ship under the identifier"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[post("/rest/ships/{id}")]
/// Merge the draft's present fields into a stored ship and re-derive its rating.
pub async fn update_ship(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ShipDraft>,
) -> impl Responder {
    let catalog = state.catalog.clone();
    let raw_id = path.into_inner();
    let draft = payload.into_inner();
    let result = web::block(move || catalog.update(&raw_id, draft))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(ship) => HttpResponse::Ok().json(ship),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    delete,
    path = "/ships/{id}",
    params(("id" = String, Path, description = "Ship identifier, a positive integer")),
    responses(
        (status = 200, description = "Ship deleted"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No ship under the identifier"),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    ),
    tag = "ships"
)]
#[delete("/rest/ships/{id}")]
/// Delete one ship by identifier.
pub async fn delete_ship(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let catalog = state.catalog.clone();
    let raw_id = path.into_inner();
    let result = web::block(move || catalog.remove(&raw_id))
        .await
        .unwrap_or_else(|err| Err(blocking_error(err)));

    match result {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[utoipa::path(
    get,
    path = "/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document", body = serde_json::Value)
    ),
    tag = "system"
)]
#[get("/rest/openapi.json")]
/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
