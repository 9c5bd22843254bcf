#![deny(missing_docs)]
//! Spaceport core library.
//!
//! This crate contains the ship domain types, validation and rating rules,
//! and the storage abstraction the HTTP surface is built on.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod filter;
pub mod rating;
pub mod repository;
pub mod validate;

pub use catalog::ShipCatalog;
pub use domain::{Ship, ShipDraft, ShipType};
pub use error::{Result, ShipError};
pub use filter::{PageRequest, ShipFilter, ShipOrder};
pub use rating::{CURRENT_YEAR, compute_rating};
pub use repository::{InMemoryShipRepository, ShipRepository};
pub use validate::{
    CREW_SIZE_MAX, CREW_SIZE_MIN, MAX_TEXT_LEN, NewShip, PROD_DATE_MAX_MS, PROD_DATE_MIN_MS,
    SPEED_MAX, SPEED_MIN, parse_ship_id,
};
