use business::domain::shared::value_objects::AdminPolicy;
use poem::middleware::Cors;

use super::{admin_config, cors_config, server_config::ServerConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub admin: AdminPolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            admin: admin_config::admin_policy_from_env(),
        }
    }
}
