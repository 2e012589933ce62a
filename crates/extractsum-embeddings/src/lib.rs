//! # extractsum-embeddings
//!
//! Loads a GloVe-style word-vector file once, shares it read-only, and
//! provides the averaging and cosine helpers the topic model and content
//! scorer are built on.

pub mod similarity;
pub mod store;
pub mod table;
pub mod traits;

pub use similarity::cosine_similarity;
pub use store::EmbeddingStore;
pub use table::EmbeddingTable;
pub use traits::WordEmbeddings;
