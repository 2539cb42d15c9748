use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use craft_projects::modules::projects::adapters::outbound::{
    record_store::RecordStore, record_store_in_memory::InMemoryRecordStore,
    record_store_json_file::JsonFileRecordStore,
};
use craft_projects::shell::config::{Config, load_dotenv_from};
use craft_projects::shell::graphql::{self, AppSchema};
use craft_projects::shell::http::router;
use craft_projects::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the subscriber so RUST_LOG can come from .env.
    let dotenv = load_dotenv_from(Path::new(".env"));
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    if let Err(e) = dotenv {
        tracing::warn!(error = %e, "could not load .env");
    }

    let config = Config::from_env()?;

    let store: Arc<dyn RecordStore> = match &config.data_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "persisting records to JSON file");
            Arc::new(JsonFileRecordStore::open(path.clone()))
        }
        None => {
            tracing::info!("keeping records in memory only");
            Arc::new(InMemoryRecordStore::new())
        }
    };

    let state = AppState::new(store, config.confirmation_ttl);
    let schema = graphql::schema(state.clone());

    let app = router(state).route(
        "/gql",
        get(graphiql).post(graphql_handler).layer(Extension(schema)),
    );

    tracing::info!("HTTP API: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
