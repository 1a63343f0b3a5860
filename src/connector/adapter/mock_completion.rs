use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::CompletionService;
use crate::domain::{sample_result, CompletionRequest, DomainError, ErrorKind};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(ErrorKind),
}

impl Reply {
    fn into_result(self) -> Result<String, DomainError> {
        match self {
            Reply::Text(text) => Ok(text),
            Reply::Fail(kind) => Err(failure(kind)),
        }
    }
}

fn failure(kind: ErrorKind) -> DomainError {
    let msg = "mock completion failure";
    match kind {
        ErrorKind::Validation => DomainError::validation(msg),
        ErrorKind::Conflict => DomainError::conflict(msg),
        ErrorKind::Configuration => DomainError::configuration(msg),
        ErrorKind::Upstream => DomainError::upstream(msg),
        ErrorKind::EmptyCompletion => DomainError::empty_completion(msg),
        ErrorKind::MalformedResponse => DomainError::malformed_response(msg),
        ErrorKind::SchemaMismatch => DomainError::schema_mismatch(msg),
        ErrorKind::Io => DomainError::IoError(std::io::Error::other(msg)),
    }
}

/// Scripted completion service for offline runs and tests.
///
/// Replies are served in order; once the script runs out the last reply is
/// repeated. An unscripted mock answers with the sample result for the
/// requested mode.
pub struct MockCompletion {
    script: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_responses<I, S>(mut self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script
            .get_mut()
            .extend(responses.into_iter().map(|r| Reply::Text(r.into())));
        self
    }

    pub fn with_failure(mut self, kind: ErrorKind) -> Self {
        self.script.get_mut().push_back(Reply::Fail(kind));
        self
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.requests.lock().await.push(request.clone());

        let next = self.script.lock().await.pop_front();
        let mut last = self.last.lock().await;
        let reply = match next {
            Some(reply) => {
                *last = Some(reply.clone());
                reply
            }
            None => match last.as_ref() {
                Some(reply) => reply.clone(),
                None => {
                    let sample = serde_json::to_string(&sample_result(request.mode()))
                        .map_err(|e| DomainError::malformed_response(e.to_string()))?;
                    Reply::Text(sample)
                }
            },
        };

        debug!("MockCompletion replying to {} mode request", request.mode());
        reply.into_result()
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}
