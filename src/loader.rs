//! Single startup fetch of the topics document.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::types::{StudyData, Topic};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("failed to parse topics document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the topics document once.
#[async_trait]
pub trait TopicSource: Send + Sync {
    async fn fetch(&self) -> Result<StudyData, LoadError>;
}

/// `GET <endpoint>` with no timeout and no retry.
pub struct HttpTopicSource {
    client: Client,
    endpoint: String,
}

impl HttpTopicSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into() }
    }

    #[cfg(test)]
    fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TopicSource for HttpTopicSource {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<StudyData, LoadError> {
        let start = std::time::Instant::now();
        tracing::debug!("Fetching topics");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Topics fetch returned an error status");
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await?;
        let data: StudyData = serde_json::from_slice(&body)?;

        tracing::debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Topics document received"
        );
        Ok(data)
    }
}

/// Runs the one load attempt. Never fails: any error is logged and yields an
/// empty list. Topics with no questions are dropped.
pub async fn load_topics(source: &dyn TopicSource) -> Vec<Topic> {
    match source.fetch().await {
        Ok(data) => {
            let topics = usable_topics(data.topics);
            tracing::info!(topics = topics.len(), "Topics loaded");
            topics
        }
        Err(e) => {
            tracing::error!(error = %e, "Loading topics failed; continuing with none");
            Vec::new()
        }
    }
}

fn usable_topics(topics: Vec<Topic>) -> Vec<Topic> {
    topics
        .into_iter()
        .filter(|t| {
            for (i, q) in t.questions.iter().enumerate() {
                if !q.is_well_formed() {
                    tracing::warn!(topic = %t.title, question = i, "Question needs two or more choices including its answer");
                }
            }
            if t.questions.is_empty() {
                tracing::warn!(topic = %t.title, "Dropping topic without questions");
                false
            } else {
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::basics_topic;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response on a local port and returns the URL.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = sock.read(&mut buf).await;
            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });
        format!("http://{addr}/topics")
    }

    /// Local-only client; ignores any proxy configured in the environment.
    fn local(url: String) -> HttpTopicSource {
        HttpTopicSource::with_client(Client::builder().no_proxy().build().unwrap(), url)
    }

    struct Fixed(Vec<Topic>);

    #[async_trait]
    impl TopicSource for Fixed {
        async fn fetch(&self) -> Result<StudyData, LoadError> {
            Ok(StudyData { topics: self.0.clone() })
        }
    }

    struct Failing;

    #[async_trait]
    impl TopicSource for Failing {
        async fn fetch(&self) -> Result<StudyData, LoadError> {
            Err(LoadError::Status(StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    #[tokio::test]
    async fn loads_topics_over_http() {
        let body = serde_json::to_string(&StudyData { topics: vec![basics_topic()] }).unwrap();
        let url = serve_once("200 OK", body).await;
        let topics = load_topics(&local(url)).await;
        assert_eq!(topics, vec![basics_topic()]);
    }

    #[tokio::test]
    async fn empty_document_gives_no_topics() {
        let url = serve_once("200 OK", r#"{ "topics": [] }"#.to_string()).await;
        assert!(load_topics(&local(url)).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let url = serve_once("200 OK", "<html>nope</html>".to_string()).await;
        let err = local(url).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let url = serve_once("500 Internal Server Error", "{}".to_string()).await;
        let err = local(url).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn unreachable_endpoint_resolves_to_empty() {
        // Bind then drop to get a port nobody is listening on.
        let port = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().port()
        };
        let source = local(format!("http://127.0.0.1:{port}/topics"));
        assert!(matches!(source.fetch().await, Err(LoadError::Network(_))));
        assert!(load_topics(&source).await.is_empty());
    }

    #[tokio::test]
    async fn failing_source_resolves_to_empty() {
        assert!(load_topics(&Failing).await.is_empty());
    }

    #[tokio::test]
    async fn topics_without_questions_are_dropped() {
        let mut empty = basics_topic();
        empty.title = "Empty".into();
        empty.questions.clear();
        let topics = load_topics(&Fixed(vec![empty, basics_topic()])).await;
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "Basics");
    }
}
