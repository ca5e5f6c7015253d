// --- File: crates/services/salonify_backend/src/router.rs ---
use crate::app_state::AppState;
use axum::{routing::get, Router};
use http::{header, Method};
use salonify_booking::routes as booking_routes;
#[cfg(feature = "gcal")]
use salonify_gcal::routes as gcal_routes;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use std::path::Path;
use tracing::info;

pub const WELCOME_MESSAGE: &str = "Welcome to Salonify API!";

/// Browsers may call the API from any origin with JSON bodies.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// The full application: `/api` routes, `/auth` sign-in routes, optional
/// Swagger UI and the static site fallback.
pub fn build_router(state: &AppState) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(booking_routes::routes(state.booking.clone()));

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = Router::new();

    let api_router = {
        #[allow(unused_mut)]
        let mut router = api_router;
        #[cfg(feature = "gcal")]
        {
            if let Some(gcal_state) = &state.gcal {
                router = router.merge(gcal_routes::api_routes(gcal_state.clone()));
                app = app.nest("/auth", gcal_routes::auth_routes(gcal_state.clone()));
            }
        }
        router
    };

    let mut app = app.nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use salonify_booking::doc::BookingApiDoc;
        #[cfg(feature = "gcal")]
        use salonify_gcal::doc::GcalApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Salonify API",
                version = "0.1.0",
                description = "Salon booking API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        #[cfg(feature = "gcal")]
        openapi_doc.merge(GcalApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // the built client site, for anything the API does not match;
    // client-side routes such as /login get the site's index.html
    if let Some(static_dir) = &state.config.server.static_dir {
        info!("Serving static files from {}", static_dir);
        let index = ServeFile::new(Path::new(static_dir).join("index.html"));
        app = app.fallback_service(ServeDir::new(static_dir).fallback(index));
    }

    app.layer(cors_layer()).layer(TraceLayer::new_for_http())
}
