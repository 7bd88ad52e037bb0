//! User DataLoader for batched fetching
//!
//! This loader batches multiple user ID lookups into a single database
//! query and memoizes results for the lifetime of one request, so the
//! `createdBy` fields of many sibling threads, replies and likes resolve
//! each distinct user at most once per request.
//!
//! The loader is constructed per request by the GraphQL handler and
//! attached as request data; the cache therefore lives exactly as long
//! as one request/response cycle and is never shared across requests.

use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::User;
use crate::repositories::utils::USER_COLUMNS;

/// The request-scoped user loader with its memoizing cache
pub type UserDataLoader = DataLoader<UserLoader, HashMapCache>;

/// Build a user loader for a single request
pub fn user_loader(pool: PgPool) -> UserDataLoader {
    DataLoader::with_cache(UserLoader::new(pool), tokio::spawn, HashMapCache::default())
}

/// DataLoader for batching user queries
#[derive(Clone)]
pub struct UserLoader {
    pool: PgPool,
}

impl UserLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for UserLoader {
    type Value = User;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = ANY($1)", USER_COLUMNS);
        let users: Vec<User> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(Arc::new)?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
    }

    impl Loader<Uuid> for CountingLoader {
        type Value = ();
        type Error = Arc<sqlx::Error>;

        async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, ()>, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(keys.iter().map(|k| (*k, ())).collect())
        }
    }

    // The user loader relies on this construction (with_cache plus
    // HashMapCache) for its one-lookup-per-user guarantee; a plain
    // DataLoader::new batches but re-queries sequential repeats.
    #[tokio::test]
    async fn test_cached_loader_memoizes_repeat_lookups() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = DataLoader::with_cache(
            CountingLoader {
                calls: calls.clone(),
            },
            tokio::spawn,
            HashMapCache::default(),
        );

        let id = Uuid::new_v4();
        assert!(loader.load_one(id).await.unwrap().is_some());
        assert!(loader.load_one(id).await.unwrap().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
