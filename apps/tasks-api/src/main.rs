use axum::Router;
use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use database::postgres::PostgresConfig;
use domain_tasks::{
    handlers, InMemoryTaskRepository, PgTaskRepository, TaskService, TasksApiDoc,
};
use tracing::info;

mod config;

use config::{Config, TaskStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let tasks_router = match config.store {
        TaskStore::Memory => {
            info!("Using in-memory task store (state resets on restart)");
            handlers::router(TaskService::new(InMemoryTaskRepository::new()))
        }
        TaskStore::Postgres => {
            let db_config = PostgresConfig::from_env()?;
            let db = database::postgres::connect_from_config(db_config).await?;
            database::postgres::run_migrations::<migration::Migrator>(&db).await?;

            info!("Using PostgreSQL task store");
            handlers::router(TaskService::new(PgTaskRepository::new(db)))
        }
    };

    let router = create_router::<TasksApiDoc>(Router::new().nest("/tasks", tasks_router));

    create_app(router, &config.server).await?;

    Ok(())
}
