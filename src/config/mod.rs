//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! host inputs / request file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SourceConfig (validated, immutable)
//!     → handed to DataSource for one read
//! ```
//!
//! # Design Decisions
//! - Inputs are strongly typed at the boundary; nothing downstream
//!   inspects dynamic values
//! - Empty optional strings mean "not set"
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ClientConfig;
pub use schema::RequestSpec;
pub use schema::SourceConfig;
pub use schema::TlsMaterial;
pub use validation::ValidationError;
