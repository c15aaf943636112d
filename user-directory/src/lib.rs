//! # User Directory
//!
//! A small client for the remote user-record store used during onboarding.
//!
//! The store is a single `users` table. Three operations are exposed:
//! - save or update a user's username (and optional display name)
//! - fetch a user record by id
//! - check whether a username is already taken
//!
//! Every operation returns a `Result` whose error renders as a human-readable
//! message, suitable for showing to the user directly.
//!
//! ## Backends
//!
//! - [`RestUserDirectory`]: PostgREST-style HTTP backend (e.g. Supabase)
//! - [`InMemoryUserDirectory`]: process-local backend for offline use and tests
//!
//! The application crate may provide further backends by implementing
//! [`UserDirectory`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use user_directory::{RestConfig, RestUserDirectory, UserDirectory};
//!
//! let directory = RestUserDirectory::new(RestConfig {
//!     base_url: "https://project.supabase.co".to_string(),
//!     api_key: "anon-key".to_string(),
//! })?;
//!
//! if directory.check_username_availability("jacqfly").await? {
//!     directory.save_username(&user_id, "jacqfly", None).await?;
//! }
//! ```

pub mod memory;
pub mod models;
pub mod service;

pub use memory::InMemoryUserDirectory;
pub use models::{User, UserInsert, UserUpdate};
pub use service::{DirectoryError, RestConfig, RestUserDirectory, UserDirectory};
