use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use models::villa::Villa;
use service::{storage::memory::MemoryVillaStore, villa::VillaService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Demo records matching the behavior of serving a pre-populated store.
fn seed_villas() -> Vec<Villa> {
    vec![
        Villa { id: 1, name: "Pool Villa".into() },
        Villa { id: 2, name: "Beach Villa".into() },
    ]
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let store = MemoryVillaStore::with_villas(seed_villas());
    let state = ServerState { villas: Arc::new(VillaService::new(store)) };

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting villa api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
