//! Task list use-cases.

use crate::clock::Clock;
use crate::model::record::RecordId;
use crate::model::task::Task;
use crate::repo::list_repo::ListRepository;
use crate::service::{non_blank, ServiceResult};
use crate::store::kv_store::KvStore;
use log::info;

pub struct TaskService<S: KvStore, C: Clock> {
    repo: ListRepository<S, Task>,
    clock: C,
}

impl<S: KvStore, C: Clock> TaskService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            repo: ListRepository::new(store),
            clock,
        }
    }

    /// Adds an open task; blank text is rejected.
    pub fn add_task(&self, text: &str) -> ServiceResult<Vec<Task>> {
        let text = non_blank("task text", text)?;
        let now_ms = self.clock.now_ms();
        let tasks = self
            .repo
            .prepend_new(now_ms, |id| Task::new(id, text, now_ms))?;
        info!(
            "event=task_add module=service status=ok id={} count={}",
            tasks.first().map_or(0, |task| task.id),
            tasks.len()
        );
        Ok(tasks)
    }

    pub fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repo.load()?)
    }

    /// Flips completion of the task with `id`.
    pub fn toggle_task(&self, id: RecordId) -> ServiceResult<Vec<Task>> {
        let now_ms = self.clock.now_ms();
        let tasks = self.repo.update(id, |task| task.toggle(now_ms))?;
        let completed = tasks
            .iter()
            .find(|task| task.id == id)
            .is_some_and(|task| task.completed);
        info!(
            "event=task_toggle module=service status=ok id={} completed={}",
            id, completed
        );
        Ok(tasks)
    }

    pub fn delete_task(&self, id: RecordId) -> ServiceResult<Vec<Task>> {
        let tasks = self.repo.remove(id)?;
        info!(
            "event=task_delete module=service status=ok id={} count={}",
            id,
            tasks.len()
        );
        Ok(tasks)
    }
}
