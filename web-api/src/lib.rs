#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Read-only HTTP surface over the shared fleet state.

pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::v1::fleet::fleet),
    components(schemas(
        routes::v1::fleet::Vessel,
        routes::v1::fleet::VesselPosition,
        fleetwatch_core::Freshness,
    ))
)]
pub struct ApiDoc;
