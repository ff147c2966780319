//! Effect handlers for the TUI runtime.
//!
//! Pure async functions returning a `UiEvent`. The runtime spawns them and
//! forwards the result to the inbox. Store I/O runs on the blocking pool.

use chatlist_core::store::ThreadStore;

use crate::events::UiEvent;

pub async fn threads_load(store: ThreadStore, generation: u64) -> UiEvent {
    tokio::task::spawn_blocking(move || UiEvent::ThreadsLoaded {
        generation,
        result: store
            .load()
            .map_err(|e| format!("Failed to load threads: {e:#}")),
    })
    .await
    .unwrap_or_else(|e| UiEvent::ThreadsLoaded {
        generation,
        result: Err(format!("Task failed: {e}")),
    })
}

pub async fn thread_create(store: ThreadStore, resource_id: String) -> UiEvent {
    tokio::task::spawn_blocking(move || {
        UiEvent::ThreadCreated(
            store
                .create(None, &resource_id)
                .map_err(|e| format!("Failed to create thread: {e:#}")),
        )
    })
    .await
    .unwrap_or_else(|e| UiEvent::ThreadCreated(Err(format!("Task failed: {e}"))))
}

pub async fn thread_delete(store: ThreadStore, thread_id: String) -> UiEvent {
    let id = thread_id.clone();
    tokio::task::spawn_blocking(move || {
        let result = store
            .delete(&id)
            .map_err(|e| format!("Failed to delete thread: {e:#}"));
        UiEvent::ThreadDeleted {
            thread_id: id,
            result,
        }
    })
    .await
    .unwrap_or_else(|e| UiEvent::ThreadDeleted {
        thread_id,
        result: Err(format!("Task failed: {e}")),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_create_then_load_then_delete() {
        let dir = TempDir::new().unwrap();
        let store = ThreadStore::new(dir.path().join("threads.json"));

        let UiEvent::ThreadCreated(Ok(thread)) =
            thread_create(store.clone(), "res-1".to_string()).await
        else {
            panic!("expected ThreadCreated(Ok)");
        };
        assert_eq!(thread.resource_id, "res-1");

        let UiEvent::ThreadsLoaded {
            generation,
            result: Ok(threads),
        } = threads_load(store.clone(), 7).await
        else {
            panic!("expected ThreadsLoaded(Ok)");
        };
        assert_eq!(generation, 7);
        assert_eq!(threads.len(), 1);

        match thread_delete(store.clone(), thread.id.clone()).await {
            UiEvent::ThreadDeleted { thread_id, result } => {
                assert_eq!(thread_id, thread.id);
                assert_eq!(result, Ok(true));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_reports_malformed_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("threads.json");
        std::fs::write(&path, "{ not json").unwrap();

        let UiEvent::ThreadsLoaded {
            result: Err(error), ..
        } = threads_load(ThreadStore::new(path), 1).await
        else {
            panic!("expected ThreadsLoaded(Err)");
        };
        assert!(error.starts_with("Failed to load threads"));
    }
}
