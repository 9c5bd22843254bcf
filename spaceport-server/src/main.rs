#![deny(missing_docs)]
//! Spaceport server executable.
//!
//! Hosts the ship catalog HTTP endpoints.

mod db;
mod models;
mod openapi;
mod routes;
mod schema;
mod store;

#[cfg(not(test))]
use actix_cors::Cors;
#[cfg(not(test))]
use actix_web::{App, HttpServer, http::header, web};
#[cfg(not(test))]
use dotenvy::dotenv;

#[allow(unused_imports)]
use std::str::FromStr;
#[cfg(not(test))]
use std::sync::Arc;

#[cfg(not(test))]
use spaceport_core::ShipCatalog;

#[cfg(not(test))]
use crate::db::init_pool;
#[cfg(not(test))]
use crate::routes::{
    AppState, count_ships, create_ship, delete_ship, get_ship, list_ships, openapi_json,
    update_ship,
};
#[cfg(not(test))]
use crate::store::PgShipStore;

#[cfg(not(test))]
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let catalog = catalog_from_env();

    let state = web::Data::new(AppState { catalog });

    let origins = std::env::var("SPACEPORT_UI_ORIGINS")
        .unwrap_or_else(|_| "http://127.0.0.1:4200,http://localhost:4200".to_string());
    let allowed_origins: Vec<String> = origins
        .split(',')
        .map(|value| value.trim())
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();

    let listen_addr = std::env::var("SPACEPORT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listen_port =
        u16::from_str(&std::env::var("SPACEPORT_PORT").unwrap_or_else(|_| "8080".to_string()))
            .expect("SPACEPORT_PORT must be a u16 number");
    let err_msg = format!("Can't bind {}:{}", &listen_addr, listen_port);

    // Manually start the Actix system
    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
                .max_age(3600);
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            App::new()
                .wrap(actix_web::middleware::Logger::default())
                .wrap(cors)
                .app_data(state.clone())
                .service(list_ships)
                .service(count_ships)
                .service(create_ship)
                .service(get_ship)
                .service(update_ship)
                .service(delete_ship)
                .service(openapi_json)
        })
        .bind((listen_addr, listen_port))
        .expect(&err_msg)
        .run()
        .await
    })
}

/// Pick the catalog backend from `SPACEPORT_STORE`.
#[cfg(not(test))]
fn catalog_from_env() -> ShipCatalog {
    let store = std::env::var("SPACEPORT_STORE").unwrap_or_else(|_| "postgres".to_string());
    if store.eq_ignore_ascii_case("memory") {
        log::info!("ship catalog backed by the in-memory store");
        return ShipCatalog::in_memory();
    }
    log::info!("ship catalog backed by PostgreSQL");
    ShipCatalog::new(Arc::new(PgShipStore::new(init_pool())))
}

#[cfg(test)]
fn main() {}
