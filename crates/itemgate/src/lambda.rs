//! AWS Lambda entry point for API Gateway proxy integrations.
//!
//! One binary serves all four operations. Set `GATEWAY_OPERATION` to pin a
//! deployment to one operation; otherwise the event's `httpMethod` decides.

use lambda_runtime::{service_fn, Error, LambdaEvent};

use itemgate::{config::Config, lambda_handler::handle, state::AppState};
use itemgate_core::gateway::Operation;
use itemgate_core::proxy::{ProxyRequest, ProxyResponse};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemgate=info,itemgate_core=info".into()),
        )
        .with_current_span(false)
        .without_time()
        .init();

    let operation = std::env::var("GATEWAY_OPERATION")
        .ok()
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<Operation>())
        .transpose()?;

    let config = Config::from_env();
    let state = AppState::new(&config).await?;

    tracing::info!(
        backend = state.backend(),
        table = config.table_display(),
        operation = operation.map(|op| op.as_str()).unwrap_or("by-method"),
        "Lambda handler ready"
    );

    let state = &state;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        Ok::<ProxyResponse, Error>(handle(state, operation, event.payload).await)
    }))
    .await
}
