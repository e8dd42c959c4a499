//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::api_scope;
use super::state::HttpState;
use crate::middleware::Trace;

/// App with the full `/api/v1` scope wired to fixture ports.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::fixtures()))
        .wrap(Trace)
        .service(api_scope())
}
