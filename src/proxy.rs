//! The Proxy pattern: a surrogate that controls access to another object.
//!
//! [`CachingProductClient`] wraps an upstream [`ProductService`] with a
//! read-through cache so that each product id is fetched from the upstream
//! at most once per client instance.
//!
//! The whole check-then-fetch-then-store sequence runs inside one
//! client-wide critical section, not one per key. Concurrent lookups for
//! different ids therefore serialize against each other, and a slow
//! upstream call blocks every other lookup on the same client. That is a
//! deliberate trade of throughput for an invariant that is trivial to see:
//! while the lock is held, no other caller can observe a miss for the same
//! id and start a second fetch. A higher-throughput variant would keep one
//! lock per id or a table of in-flight fetches that late arrivals wait on;
//! either preserves the at-most-one-fetch guarantee at the cost of a much
//! less obvious proof.
//!
//! There is no eviction, no TTL and no size bound. The cache grows for the
//! lifetime of the client. This is teaching code, not a production cache.

use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

/// Failure reported by the upstream fetch capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("upstream fetch failed for product {id}: {reason}")]
pub struct UpstreamError {
    pub id: u32,
    pub reason: String,
}

/// The record cached by the proxy. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
}

/// The upstream fetch capability the proxy stands in front of.
pub trait ProductService {
    fn product(&self, id: u32) -> Result<Product, UpstreamError>;
}

/// Stand-in for a remote catalogue API. Always succeeds, slowly in spirit.
pub struct ProductApi;

impl ProductService for ProductApi {
    fn product(&self, id: u32) -> Result<Product, UpstreamError> {
        log::info!("fetching product {id} from the API");
        Ok(Product {
            id,
            name: format!("Best product #{id}"),
        })
    }
}

/// Read-through caching proxy in front of a [`ProductService`].
///
/// The client owns its cache exclusively and holds the upstream service by
/// value; share the whole client behind an `Arc` to call it from several
/// threads.
pub struct CachingProductClient<S> {
    service: S,
    cache: Mutex<HashMap<u32, Product>>,
}

impl<S: ProductService> CachingProductClient<S> {
    /// Creates a client with an empty cache in front of `service`.
    pub fn new(service: S) -> Self {
        CachingProductClient {
            service,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the product for `id`, fetching it from the upstream service
    /// on the first lookup and from the cache afterwards.
    ///
    /// On upstream failure the cache is left untouched and the error is
    /// returned to the caller; a later lookup for the same id will retry.
    pub fn get(&self, id: u32) -> Result<Product, UpstreamError> {
        let mut cache = self.cache.lock();

        if let Some(product) = cache.get(&id) {
            log::debug!("cache hit for product {id}");
            return Ok(product.clone());
        }

        // Miss. The lock stays held across the upstream call so no other
        // caller can observe the same miss and fetch the id a second time.
        let product = self.service.product(id)?;
        cache.insert(id, product.clone());
        Ok(product)
    }

    /// Number of products cached so far.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// The wrapped upstream service.
    pub fn service(&self) -> &S {
        &self.service
    }
}

// The proxy satisfies the same contract as the service it wraps, so callers
// written against `ProductService` cannot tell the two apart.
impl<S: ProductService> ProductService for CachingProductClient<S> {
    fn product(&self, id: u32) -> Result<Product, UpstreamError> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    /// Upstream fake that counts how many times it is actually called.
    struct CountingApi {
        calls: AtomicUsize,
    }

    impl CountingApi {
        fn new() -> Self {
            CountingApi {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ProductService for CountingApi {
        fn product(&self, id: u32) -> Result<Product, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Product {
                id,
                name: format!("product-{id}"),
            })
        }
    }

    /// Upstream fake that always fails, still counting calls.
    struct FailingApi {
        calls: AtomicUsize,
    }

    impl ProductService for FailingApi {
        fn product(&self, id: u32) -> Result<Product, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(UpstreamError {
                id,
                reason: "service unavailable".into(),
            })
        }
    }

    #[test]
    fn second_lookup_is_served_from_the_cache() {
        let client = CachingProductClient::new(CountingApi::new());

        let first = client.get(1).unwrap();
        let second = client.get(1).unwrap();

        assert_eq!(first, second);
        assert_eq!(client.service().calls(), 1);
        assert_eq!(client.len(), 1);
    }

    #[test]
    fn distinct_ids_are_fetched_separately() {
        let client = CachingProductClient::new(CountingApi::new());

        let a = client.get(1).unwrap();
        let b = client.get(2).unwrap();

        assert_ne!(a, b);
        assert_eq!(client.service().calls(), 2);
        assert_eq!(client.len(), 2);
    }

    #[test]
    fn upstream_failure_leaves_the_cache_unchanged() {
        let client = CachingProductClient::new(FailingApi {
            calls: AtomicUsize::new(0),
        });

        assert!(client.get(7).is_err());
        assert!(client.is_empty());

        // Nothing was cached, so the next lookup retries the upstream.
        assert!(client.get(7).is_err());
        assert_eq!(client.service().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn racing_lookups_fetch_each_id_at_most_once() {
        let client = Arc::new(CachingProductClient::new(CountingApi::new()));

        thread::scope(|s| {
            for _ in 0..8 {
                let client = Arc::clone(&client);
                s.spawn(move || client.get(42).unwrap());
            }
        });

        assert_eq!(client.service().calls(), 1);
        assert_eq!(client.len(), 1);
    }

    #[test]
    fn proxy_satisfies_the_service_contract() {
        fn lookup(service: &impl ProductService) -> Product {
            service.product(3).unwrap()
        }

        let client = CachingProductClient::new(CountingApi::new());
        let direct = lookup(&client);
        let cached = lookup(&client);

        assert_eq!(direct, cached);
        assert_eq!(client.service().calls(), 1);
    }
}
