//! The Singleton pattern: restrict a type to one shared instance.
//!
//! Instead of a hidden global, the single instance lives inside an explicit
//! [`CacheClientRegistry`] value that is constructed once and passed by
//! reference to whoever needs it. The registry initializes lazily on the
//! first `get_or_init` call; every later call returns the same instance and
//! ignores its arguments, which is the classic (and slightly surprising)
//! singleton behaviour the demo binary prints.

use once_cell::sync::OnceCell;

/// The one shared configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheClient {
    pub server: String,
    pub port: u16,
}

/// Holds at most one [`CacheClient`], created on first access.
///
/// Safe under concurrent first access: the initializing closure runs exactly
/// once and every caller observes the instance it produced.
#[derive(Debug, Default)]
pub struct CacheClientRegistry {
    instance: OnceCell<CacheClient>,
}

impl CacheClientRegistry {
    pub const fn new() -> Self {
        CacheClientRegistry {
            instance: OnceCell::new(),
        }
    }

    /// Returns the shared client, constructing it from `server` and `port`
    /// on the first call. Arguments of later calls are ignored.
    pub fn get_or_init(&self, server: &str, port: u16) -> &CacheClient {
        self.instance.get_or_init(|| {
            log::info!("constructing cache client for {server}:{port}");
            CacheClient {
                server: server.to_owned(),
                port,
            }
        })
    }

    /// The shared client, if one has been constructed yet.
    pub fn get(&self) -> Option<&CacheClient> {
        self.instance.get()
    }
}

/// Process-wide registry for code that wants the classic global singleton.
pub fn shared() -> &'static CacheClientRegistry {
    static SHARED: CacheClientRegistry = CacheClientRegistry::new();
    &SHARED
}
