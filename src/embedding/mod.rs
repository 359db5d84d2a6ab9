//! Text embedding for the dense similarity provider.
//!
//! [`TextEmbedder`] wraps either a real BERT encoder loaded from a local
//! model directory or a deterministic stub for tests. Selection happens
//! once at load time; callers never branch on the backend.

pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;


pub use config::EmbedderConfig;
pub use error::EmbeddingError;

use tracing::{debug, info, warn};

use bert::BertEncoder;
use device::select_device;

enum EncoderBackend {
    Model(BertEncoder),
    Stub,
}

/// Sentence embedder with a stub mode for model-free environments.
pub struct TextEmbedder {
    backend: EncoderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for TextEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model(encoder) => format!("Model({})", encoder.hidden_size()),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl TextEmbedder {
    /// Loads the embedder described by `config` (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Text embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let device = select_device()?;
        let encoder = BertEncoder::load(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size = encoder.hidden_size(),
            max_seq_len = config.max_seq_len,
            "Embedding model loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model(encoder),
            config,
        })
    }

    /// Generates an L2-normalized embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let raw = match &self.backend {
            EncoderBackend::Model(encoder) => encoder.encode(text, self.config.max_seq_len)?,
            EncoderBackend::Stub => self.embed_stub(text),
        };

        Ok(normalize(raw))
    }

    /// Generates embeddings for a batch of strings.
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Deterministic hash-seeded vector: same text, same vector, any run.
    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        embedding
    }

    /// The dimension of vectors this embedder produces.
    pub fn dim(&self) -> usize {
        match &self.backend {
            EncoderBackend::Model(encoder) => encoder.hidden_size(),
            EncoderBackend::Stub => self.config.embedding_dim,
        }
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// The embedder configuration.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
