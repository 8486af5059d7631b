use axum::routing::{get, get_service};
use axum::Router;
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use eventboard::database::schema;
use eventboard::web::routes::{api, event, events, new_event, pages};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://events.db".to_string());
    let options = SqliteConnectOptions::from_str(&db_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Could not connect to the database");

    // The process cannot serve without the store, so both are fatal here.
    schema::ensure_schema(&pool)
        .await
        .expect("Schema initialization failed");
    schema::seed_if_empty(&pool)
        .await
        .expect("Seeding default events failed");

    let app = Router::new()
        .route("/", get(events::index_handler))
        .route("/about", get(pages::about_handler))
        .route(
            "/events/new",
            get(new_event::new_event_page).post(new_event::create_event_handler),
        )
        .route(
            "/events/:id",
            get(event::event_detail_handler).post(event::rsvp_handler),
        )
        .route("/events/:id/donate", get(event::donate_handler))
        .route("/api/events", get(api::list_events_api))
        .route("/api/events/:id", get(api::event_api))
        .nest_service(
            "/assets",
            get_service(ServeDir::new("assets")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(pool);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            info!("Could not bind {}: {}. Trying {}:{}", addr, e, host, port + 1);
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    info!("Server running at http://{}", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
