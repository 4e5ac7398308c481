use chrono::Local;

use crate::core::date_window::DateWindow;
use crate::core::renderer::compose_message;
use crate::domain::ports::{ErrorSink, MenuScan, Publisher};
use crate::utils::error::{AlertError, Result};

/// Drives one full check: scan the menus, compose the post, publish it.
/// Failures are appended to the error sink before they surface.
pub struct Checker<S: MenuScan, P: Publisher, E: ErrorSink> {
    scan: S,
    publisher: P,
    errors: E,
}

impl<S: MenuScan, P: Publisher, E: ErrorSink> Checker<S, P, E> {
    pub fn new(scan: S, publisher: P, errors: E) -> Self {
        Self {
            scan,
            publisher,
            errors,
        }
    }

    pub async fn run(&self, window: &DateWindow) -> Result<String> {
        tracing::info!("Scanning menus for {}", window.the_date());
        let matches = match self.scan.scan(window).await {
            Ok(matches) => matches,
            Err(e) => return Err(self.report(e).await),
        };
        tracing::info!("Found {} matching meal slot(s)", matches.len());

        let message = compose_message(&matches, window);
        tracing::debug!("Composed message:\n{}", message);

        if let Err(e) = self.publisher.publish(&message).await {
            return Err(self.report(e).await);
        }
        tracing::info!("Published update for {}", window.the_date());
        Ok(message)
    }

    async fn report(&self, error: AlertError) -> AlertError {
        if let Err(sink_error) = self.errors.record(&error.to_string(), Local::now()).await {
            tracing::warn!("Error sink unavailable: {}", sink_error);
        }
        error
    }
}
