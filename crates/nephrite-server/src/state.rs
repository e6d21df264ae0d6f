use std::sync::Arc;

use nephrite_auth::client::AuthClient;
use nephrite_store::store::RecordStore;
use nephrite_watson::client::Predictor;

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub predictor: Arc<dyn Predictor>,
    pub auth: Arc<AuthClient>,
    pub jwt_secret: String,
}
