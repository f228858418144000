//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{build_http_state, seed_demo_user};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use agenda_backend::Trace;
use agenda_backend::doc::ApiDoc;
use agenda_backend::inbound::http::state::HttpState;
use agenda_backend::inbound::http::{configure, route_not_found};

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(
            SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// Seeds the demo user first when enabled, so it can log in as soon as the
/// listener accepts connections.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding fails or binding the socket
/// fails.
pub async fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    if config.seed_demo_user {
        seed_demo_user(http_state.registration.as_ref())
            .await
            .map_err(|err| std::io::Error::other(format!("demo user seeding failed: {err}")))?;
    }
    let bind_addr = config.bind_addr();
    drop(config);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    Ok(server)
}
