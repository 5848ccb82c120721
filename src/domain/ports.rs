use crate::domain::story::StoryDocument;
use crate::utils::error::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of the external text generation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Network failure or non-2xx status.
    #[error("API Error: {0}")]
    Transport(String),

    /// The payload did not carry the expected fields.
    #[error("Error parsing API response: {0}")]
    ResponseShape(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait DocumentExporter: Send + Sync {
    fn export(&self, document: &StoryDocument) -> Result<Vec<u8>>;
}
