use std::error::Error;

/// Installs the JSON subscriber used by every function in the workspace and
/// announces `service` once, so cold starts are easy to find in CloudWatch.
///
/// CloudWatch stamps each line itself, so timestamps and targets are left out.
/// Fields of the current span (the invocation's request id) are kept.
pub fn init(service: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_line_number(true)
        .try_init()?;

    tracing::info!(service, "Logging initialised");
    Ok(())
}
