//! Async task bookkeeping.
//!
//! Each suspending operation gets a fresh [`TaskId`] when the reducer emits
//! its effect. Completion events carry the id back; a completion that no
//! longer matches the active task is stale (the user navigated on or retried)
//! and is discarded, which is how abandoned async work stays harmless.

/// Identifier of one spawned async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Task id generator.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lifecycle state of one task slot (stored in `AppState`, mutated only by
/// the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Clears the slot if `id` is the active task and returns whether it was.
    /// A stale completion returns false and must be discarded.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    /// Abandons the active task; its eventual completion will be stale.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// One slot per suspending operation.
#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub feed_fetch: TaskState,
}

impl Tasks {
    pub fn is_any_running(&self) -> bool {
        self.login.is_running() || self.feed_fetch.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut seq = TaskSeq::default();
        let mut slot = TaskState::default();

        let first = seq.next_id();
        slot.start(first);
        let second = seq.next_id();
        slot.start(second);

        // The superseded task's completion must not clear the active one.
        assert!(!slot.finish_if_active(first));
        assert!(slot.is_running());
        assert!(slot.finish_if_active(second));
        assert!(!slot.is_running());
    }
}
