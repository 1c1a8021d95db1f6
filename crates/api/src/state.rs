use std::sync::Arc;

use infra::EntityStore;

use crate::auth::PasswordService;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    config: Arc<AppConfig>,
    password_service: PasswordService,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, config: AppConfig) -> Self {
        let password_service = PasswordService::new(config.bcrypt_cost);

        Self {
            store,
            config: Arc::new(config),
            password_service,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}
