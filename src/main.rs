use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use issue_reactions::inputs::EnvSnapshot;
use issue_reactions::run::run;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issue_reactions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = EnvSnapshot::capture();
    match run(&env).await {
        Ok(report) => {
            // Partial failure is reported in the log lines, not the exit code.
            if !report.all_succeeded() {
                tracing::warn!(
                    failed = report.outcomes.iter().filter(|o| !o.succeeded()).count(),
                    total = report.outcomes.len(),
                    "some reactions were not added"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            tracing::error!("{}", e);
            if e.is_resource_not_accessible() {
                tracing::error!("See this action's readme for details about this error");
            }
            ExitCode::FAILURE
        }
    }
}
