//! OpenAPI specification for the Spaceport server.

use utoipa::OpenApi;

use spaceport_core::{Ship, ShipDraft, ShipOrder, ShipType};

use crate::routes::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::list_ships,
        crate::routes::count_ships,
        crate::routes::create_ship,
        crate::routes::get_ship,
        crate::routes::update_ship,
        crate::routes::delete_ship,
        crate::routes::openapi_json
    ),
    components(
        schemas(
            Ship,
            ShipDraft,
            ShipType,
            ShipOrder,
            ErrorResponse
        )
    ),
    tags(
        (name = "ships", description = "Ship catalog"),
        (name = "system", description = "System endpoints")
    )
)]
/// OpenAPI specification for the Spaceport server.
pub struct ApiDoc;
