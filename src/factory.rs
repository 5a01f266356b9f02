//! The Factory pattern: create one of several interchangeable
//! implementations behind a common contract.
//!
//! [`CacheFactory`] maps a closed set of type tags ([`CacheKind`]) to
//! concrete [`Cache`] implementations. Callers work against the trait and
//! never name a concrete store.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unsupported cache type: {0:?}")]
    UnsupportedType(String),
}

/// The contract every store produced by the factory satisfies.
pub trait Cache: std::fmt::Debug {
    fn set(&mut self, key: &str, value: &str);
    fn get(&self, key: &str) -> Option<&str>;
}

/// Single in-process map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    storage: HashMap<String, String>,
}

impl Cache for MemoryCache {
    fn set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_owned(), value.to_owned());
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }
}

const SHARD_COUNT: usize = 4;

/// Toy model of a distributed store: keys are routed to a fixed shard by
/// hash, so the same key always lands on the same shard.
#[derive(Debug)]
pub struct DistributedCache {
    shards: [HashMap<String, String>; SHARD_COUNT],
}

impl Default for DistributedCache {
    fn default() -> Self {
        DistributedCache {
            shards: std::array::from_fn(|_| HashMap::new()),
        }
    }
}

impl DistributedCache {
    fn shard_for(key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish() as usize % SHARD_COUNT
    }
}

impl Cache for DistributedCache {
    fn set(&mut self, key: &str, value: &str) {
        self.shards[Self::shard_for(key)].insert(key.to_owned(), value.to_owned());
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.shards[Self::shard_for(key)]
            .get(key)
            .map(String::as_str)
    }
}

/// Closed enumeration of the store types the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Memory,
    Distributed,
}

impl FromStr for CacheKind {
    type Err = FactoryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "memory" => Ok(CacheKind::Memory),
            "distributed" => Ok(CacheKind::Distributed),
            other => Err(FactoryError::UnsupportedType(other.to_owned())),
        }
    }
}

pub struct CacheFactory;

impl CacheFactory {
    pub fn create(&self, kind: CacheKind) -> Box<dyn Cache> {
        match kind {
            CacheKind::Memory => Box::new(MemoryCache::default()),
            CacheKind::Distributed => Box::new(DistributedCache::default()),
        }
    }

    /// Creates a store from a textual tag, failing on unknown tags.
    pub fn create_from_tag(&self, tag: &str) -> Result<Box<dyn Cache>, FactoryError> {
        Ok(self.create(tag.parse()?))
    }
}
