use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Background jobs keyed by name. Spawning under a key that is still running
/// aborts the previous job.
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

    pub fn spawn(&mut self, key: impl Into<String>, task: JoinHandle<()>) {
        self.reap();
        if let Some(handle) = self.tasks.insert(key.into(), task) {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn running(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }

    fn reap(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}
