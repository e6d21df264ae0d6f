use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use nephrite_auth::client::AuthClient;
use nephrite_server::state::AppState;
use nephrite_store::memory::MemoryStore;
use nephrite_store::postgres::PostgresStore;
use nephrite_store::store::RecordStore;
use nephrite_watson::client::WatsonPredictor;
use nephrite_watson::config::WatsonConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Scoring service credentials: config file if named, else environment.
    let watson_config = match env::var("NEPHRITE_CONFIG") {
        Ok(path) => WatsonConfig::from_file(&path)?,
        Err(_) => WatsonConfig::from_env()?,
    };
    let predictor = WatsonPredictor::new(watson_config);
    let (predictor, connected) = tokio::task::spawn_blocking(move || {
        let connected = predictor.test_connection();
        (predictor, connected)
    })
    .await?;
    if !connected {
        tracing::warn!("could not reach the scoring service; predictions will fail until it recovers");
    }

    let store: Arc<dyn RecordStore> = match env::var("DATABASE_URL") {
        Ok(url) => Arc::new(PostgresStore::connect(&url).await?),
        Err(_) => {
            tracing::info!("DATABASE_URL not set, using the in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let auth_url =
        env::var("SUPABASE_URL").unwrap_or_else(|_| "http://localhost:9999".to_string());
    let anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();
    let jwt_secret = env::var("SUPABASE_JWT_SECRET").unwrap_or_default();

    let state = AppState {
        store,
        predictor: Arc::new(predictor),
        auth: Arc::new(AuthClient::new(auth_url, anon_key)),
        jwt_secret,
    };

    let port: u16 = env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port = port, "listening");

    axum::serve(listener, nephrite_server::app(state)).await?;
    Ok(())
}
