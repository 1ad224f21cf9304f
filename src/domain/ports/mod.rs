//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ModelClient`: remote model invocation
//!
//! Infrastructure adapters implement these so the orchestration services never
//! depend on a concrete transport.

pub mod model_client;

pub use model_client::{
    GroundingChunk, GroundingMetadata, ModelCall, ModelCallError, ModelClient, ModelReply,
    ResponseFormat, WebSource,
};
