//! # Soapbox Core
//!
//! Domain types, traits, and error definitions for the Soapbox claim
//! extraction pipeline. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The model gateway is defined as a trait here; implementations live in
//! their own crates. This enables:
//! - Swapping the inference backend via configuration
//! - Easy testing with scripted mock gateways
//! - Clean dependency graph (all crates depend inward on core)

pub mod claim;
pub mod error;
pub mod gateway;
pub mod record;
pub mod statement;

// Re-export key types at crate root for ergonomics
pub use claim::{AcceptedClaim, Checkability, ClaimType, RawClaim, SENTINEL_CLAIM_TEXT};
pub use error::{Error, FactCheckError, GatewayError, LoaderError, Result};
pub use gateway::{GenerationOptions, GenerationRequest, GenerationResponse, ModelGateway};
pub use record::{AttemptLog, ExtractionRecord, RecordMeta};
pub use statement::Statement;
