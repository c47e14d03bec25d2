//! # Gisty
//!
//! A command-line client for the GitHub Gist API with:
//! - Create, show, edit, and list operations over HTTPS+JSON
//! - Anonymous or token-authenticated gist creation
//! - An edit workflow that round-trips gist content through your editor
//! - A reusable HTTP transport with a typed error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gisty::{Gist, GistClient, GistConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token and editor are read from GITHUB_TOKEN / EDITOR
//!     let config = GistConfig::from_env();
//!     let client = GistClient::new(config)?;
//!
//!     let gist = Gist::new("notes", false, "file1.txt", "hello");
//!     let created = client.gists().create(&gist).await?;
//!     println!("{}", created.html_url);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// HTTP client and transport
pub mod client;

// Gist repository
pub mod gists;

// Editor workflow
pub mod editor;

// Terminal presentation
pub mod output;

// CLI driver
pub mod cli;

// Re-exports for convenience
pub use client::GistClient;
pub use config::{GistConfig, GistConfigBuilder};
pub use editor::{EditWorkflow, EditorLauncher, SystemEditor};
pub use errors::{GistError, GistErrorKind, GistResult};
pub use gists::GistsService;
pub use types::{Gist, GistFile};
