#[cfg(test)]
mod tests {
    use crate::session::{SessionData, SessionStore};
    use chrono::Duration;
    use salonify_common::services::TokenPair;
    use std::sync::Arc;

    fn signed_in(user_id: u64) -> SessionData {
        SessionData {
            tokens: Some(TokenPair {
                access_token: "access".into(),
                refresh_token: Some("refresh".into()),
            }),
            user_id: Some(user_id),
            csrf_state: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SessionStore::new(Duration::hours(24));
        let id = store.create(signed_in(7)).await;

        assert_eq!(store.get(&id).await, Some(signed_in(7)));
        assert_eq!(store.get("unknown").await, None);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = SessionStore::new(Duration::hours(24));
        let a = store.create(SessionData::default()).await;
        let b = store.create(SessionData::default()).await;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_save_updates_live_session() {
        let store = SessionStore::new(Duration::hours(24));
        let id = store.create(SessionData::default()).await;

        let saved = store.save(Some(&id), signed_in(3)).await;
        assert_eq!(saved, id);
        assert_eq!(store.get(&id).await.and_then(|s| s.user_id), Some(3));

        // unknown id gets a new session
        let other = store.save(Some("gone"), signed_in(4)).await;
        assert_ne!(other, "gone");
        assert_eq!(store.get(&other).await.and_then(|s| s.user_id), Some(4));
    }

    #[tokio::test]
    async fn test_expired_sessions_are_ignored_and_pruned() {
        let store = SessionStore::new(Duration::zero());
        let id = store.create(signed_in(1)).await;

        assert_eq!(store.get(&id).await, None);
        // saving into an expired session starts a new one
        let fresh = store.save(Some(&id), signed_in(1)).await;
        assert_ne!(fresh, id);

        assert_eq!(store.prune_expired().await, 2);
        assert_eq!(store.prune_expired().await, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new(Duration::hours(1));
        let id = store.create(signed_in(1)).await;
        store.remove(&id).await;
        assert_eq!(store.get(&id).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pruner_runs_periodically() {
        let store = Arc::new(SessionStore::new(Duration::zero()));
        store.create(SessionData::default()).await;

        let handle = store.spawn_pruner(std::time::Duration::from_secs(60));
        tokio::time::sleep(std::time::Duration::from_secs(61)).await;
        // let the pruner finish its tick
        tokio::task::yield_now().await;

        assert_eq!(store.prune_expired().await, 0);
        handle.abort();
    }
}
