use formrelay_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    info!("Starting formrelay Lambda function");

    // Configuration is resolved once per cold start
    let ctx = ApiContext::from_env();

    // Run the Lambda runtime with our handler
    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { formrelay_api::handler(ctx, event).await }
    }))
    .await
}
