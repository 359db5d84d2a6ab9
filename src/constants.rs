//! Cross-cutting, shared constants.
//!
//! The scoring weights are contract values: changing any of them changes
//! ranking semantics for every caller. Prefer deriving secondary values from
//! these rather than repeating literals.

/// Flat boost added when the candidate's sector interest appears in the
/// listing's sector/description text.
pub const SECTOR_BOOST: f32 = 0.1;

/// Flat boost added when the candidate's location appears in the listing's
/// location field.
pub const LOCATION_BOOST: f32 = 0.1;

/// Weight of the semantic similarity signal in the raw score. Semantic
/// similarity is a tiebreak among skill-qualified listings, never the
/// primary signal.
pub const SEMANTIC_WEIGHT: f32 = 0.05;

/// Default number of recommendations returned when the request does not
/// specify `top_n`.
pub const DEFAULT_TOP_N: usize = 5;

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default maximum token count fed to the dense encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Minimum term length indexed by the TF-IDF vectorizer. Single-character
/// fragments carry no signal at catalog scale.
pub const MIN_TERM_LEN: usize = 2;
