pub use crate::config_adapter::{ConfigAdapter, ConnectionEntry, ContentType};
pub use crate::config_cache::{CachedConfig, ConfigCache, cache_key_name};
pub use crate::error::{Error, PcResult};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
