use core_config::{env_or_default, server::ServerConfig, ConfigError, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Which persistence backend the deployment uses
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskStore {
    /// In-process store; state resets on restart
    Memory,
    /// PostgreSQL table; requires DATABASE_URL
    Postgres,
}

impl TaskStore {
    /// Reads TASKS_STORE, defaulting to the in-memory store
    pub fn from_env() -> Result<Self, ConfigError> {
        let store = env_or_default("TASKS_STORE", "memory");
        match store.to_ascii_lowercase().as_str() {
            "memory" => Ok(TaskStore::Memory),
            "postgres" => Ok(TaskStore::Postgres),
            other => Err(ConfigError::ParseError {
                key: "TASKS_STORE".to_string(),
                details: format!("unknown store '{}', expected 'memory' or 'postgres'", other),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub store: TaskStore,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8000
        let store = TaskStore::from_env()?;

        Ok(Self {
            server,
            store,
            environment,
        })
    }
}
