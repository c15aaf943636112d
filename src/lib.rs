//! # OOTD
//!
//! Core of the outfit-of-the-day app: the session's OOTD collections with
//! streak and style statistics, the outfit recommendation filter, the social
//! feed and username onboarding.

pub mod config;
pub mod database;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use error::AppError;
pub use session::Session;
