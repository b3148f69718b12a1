use std::collections::HashMap;
use tokio::task::JoinHandle;

/// In-flight background tasks, keyed by name.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Tracks `task`, aborting any earlier task registered under `key`.
    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    /// Stops tracking a task that reported back on its own.
    pub fn finish(&mut self, key: &str) {
        self.tasks.remove(key);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    /// A task that never finishes; `rx` resolves once it is dropped.
    fn pending() -> (JoinHandle<()>, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _tx = tx;
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });
        (handle, rx)
    }

    #[tokio::test]
    async fn finish_forgets_without_aborting() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = oneshot::channel();
        tasks.spawn(
            "a",
            tokio::spawn(async move {
                let _ = tx.send(());
            }),
        );
        tasks.finish("a");
        assert!(tasks.is_empty());
        assert!(rx.await.is_ok());
    }

    #[tokio::test]
    async fn reusing_a_key_aborts_the_previous_task() {
        let mut tasks = TaskManager::new();
        let (first, first_rx) = pending();
        let (second, _second_rx) = pending();
        tasks.spawn("fetch", first);
        tasks.spawn("fetch", second);
        assert_eq!(tasks.len(), 1);
        assert!(first_rx.await.is_err());
    }

    #[tokio::test]
    async fn abort_all_cancels_everything() {
        let mut tasks = TaskManager::new();
        let (one, one_rx) = pending();
        let (two, two_rx) = pending();
        tasks.spawn("one", one);
        tasks.spawn("two", two);
        tasks.abort_all();
        assert!(tasks.is_empty());
        assert!(one_rx.await.is_err());
        assert!(two_rx.await.is_err());
    }
}
