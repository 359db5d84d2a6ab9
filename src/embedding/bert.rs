use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use tokenizers::Tokenizer;

use super::config::EmbedderConfig;
use super::error::EmbeddingError;

/// BERT sentence encoder: tokenize, forward pass, mean-pool token states.
///
/// Checkpoints exported from MiniLM-class sentence encoders keep their
/// weights either at the root or under a `bert.` prefix; both are probed
/// at load time.
pub struct BertEncoder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
}

impl BertEncoder {
    /// Loads the encoder from the configured model directory.
    pub fn load(config: &EmbedderConfig, device: &Device) -> Result<Self, EmbeddingError> {
        let config_content = std::fs::read_to_string(config.config_path())?;
        let model_config: Config =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("failed to parse model config.json: {e}"),
            })?;

        let tokenizer = Tokenizer::from_file(config.tokenizer_path()).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("failed to load tokenizer.json: {e}"),
            }
        })?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[config.weights_path()], DType::F32, device)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("failed to map model.safetensors: {e}"),
                })?
        };

        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &model_config)
        } else {
            BertModel::load(vb, &model_config)
        }
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("failed to load BERT weights: {e}"),
        })?;

        Ok(Self {
            model,
            tokenizer,
            device: device.clone(),
            hidden_size: model_config.hidden_size,
        })
    }

    /// The encoder's output dimension (model hidden size).
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Encodes one text into an unnormalized mean-pooled vector.
    pub fn encode(&self, text: &str, max_seq_len: usize) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let mut tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.hidden_size]);
        }
        tokens.truncate(max_seq_len);

        let input_ids = Tensor::new(&tokens[..], &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // Single unpadded sequence, so plain mean pooling over the sequence
        // axis equals mask-weighted pooling.
        let hidden_states = self.model.forward(&input_ids, &token_type_ids, None)?;
        let pooled = hidden_states.mean(1)?.squeeze(0)?;

        Ok(pooled.to_vec1::<f32>()?)
    }
}

impl std::fmt::Debug for BertEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertEncoder")
            .field("hidden_size", &self.hidden_size)
            .field("device", &self.device)
            .finish()
    }
}
