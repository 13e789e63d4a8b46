//! Provider Diagnostic Message Builder
//!
//! Produces consistent, human-readable error messages for infrastructure provider
//! plugins, e.g. `error creating TFProvider VM (id-123): timeout`.
//!
//! A [`MessageBuilder`] keeps a durable template and a one-shot override tier;
//! each production merges them (optionally with an explicit argument descriptor),
//! renders the result and clears the override tier.

pub mod config;
pub mod error;
pub mod message;

// Re-exports
pub use config::Config;
pub use error::{DiagnosticResultExt, Error, ProviderError, Result};
pub use message::{
    BuilderSnapshot, Descriptor, LifecycleState, MessageBuilder, format, layered_merge,
};
