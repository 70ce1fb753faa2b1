//! Sharelink - compact, stateless share links
//!
//! Compresses verbose share identifiers
//! (`<entity>_<uuid>_<YYYYMMDD>_<HHMMSS>_<uuid>`) into short URL-safe codes
//! and back, with no lookup table.
//!
//! # Features
//! - **server**: HTTP resolver mode (default)
//! - **cli**: Command-line interface
//! - **full**: All features enabled
//!
//! # Architecture
//! - `codec`: ShareId <-> ShareCode, slug generation
//! - `links`: share URL building and path resolution
//! - `api`: HTTP services
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod api;
pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod links;
pub mod runtime;
pub mod system;
