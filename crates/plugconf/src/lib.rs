//! plugconf resolves named configuration values scoped by a plugin and an
//! optional user, transparently caches resolved values, and lazily creates
//! per-user overrides seeded from a global template entry.
//!
//! # Features
//!
//! - Hierarchical resolution: per-user value first, one-level fallback to
//!   the user-independent (global) value
//! - Cache-aside protocol over a pluggable cache backend
//! - Lazy override creation: the first per-user write clones the template
//!   entry's metadata
//! - Total value coercion: decoding to the caller's requested type never
//!   fails, it falls back to the type's declared zero value
//! - Tenant connection registry sharing the same store

// Re-export shared types and adapter traits from plugconf-types
pub use plugconf_types::config_adapter;
pub use plugconf_types::config_cache;
pub use plugconf_types::error;
pub use plugconf_types::prelude;

pub mod cache;
pub mod coerce;
pub mod registry;
pub mod resolver;

pub use cache::LruConfigCache;
pub use coerce::{ConfigDecode, ConfigEncode};
pub use registry::ConnectionRegistry;
pub use resolver::{ConfigResolver, ResolvedConfig};

// vim: ts=4
