use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::AppConfig;
use crate::domain::ports::Publisher;
use crate::utils::error::{AlertError, Result};

/// Posts the composed message to the status feed. The API answers a
/// successful create with 201; anything else is a rejected post, with the
/// response body kept for the error log.
#[derive(Debug, Clone)]
pub struct StatusPublisher {
    client: Client,
    publish_url: String,
    access_token: String,
}

impl StatusPublisher {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            publish_url: config.publish_url.clone(),
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl Publisher for StatusPublisher {
    async fn publish(&self, text: &str) -> Result<()> {
        tracing::debug!("Posting status update to: {}", self.publish_url);
        let response = self
            .client
            .post(&self.publish_url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await?;
            return Err(AlertError::PublishError {
                status: status.as_u16(),
                text: text.to_string(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn publisher_for(server: &MockServer) -> StatusPublisher {
        let config = AppConfig {
            base_url: "https://dining.columbia.edu".to_string(),
            publish_url: server.url("/2/tweets"),
            access_token: "test-token".to_string(),
            menu_source: crate::config::MenuSourceKind::Rest,
            error_log: "errors.log".to_string(),
            target_date: None,
        };
        StatusPublisher::new(&config)
    }

    #[tokio::test]
    async fn publish_sends_bearer_token_and_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/2/tweets")
                .header("authorization", "Bearer test-token")
                .json_body(serde_json::json!({"text": "✅ No jerk chicken today (2/6/2023)"}));
            then.status(201)
                .json_body(serde_json::json!({"data": {"id": "1"}}));
        });

        publisher_for(&server)
            .publish("✅ No jerk chicken today (2/6/2023)")
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn non_created_status_is_a_publish_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/2/tweets");
            then.status(200).body("duplicate");
        });

        let err = publisher_for(&server).publish("hello").await.unwrap_err();
        match err {
            AlertError::PublishError { status, text, body } => {
                assert_eq!(status, 200);
                assert_eq!(text, "hello");
                assert_eq!(body, "duplicate");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
