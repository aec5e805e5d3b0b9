use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tokio::time::Instant;

/// Deferred work of a page. Everything the original page did with
/// `setTimeout` becomes one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    /// Reveal item `index` of `container` if it still shows render `generation`.
    Reveal {
        container: String,
        generation: u64,
        index: usize,
    },
    /// Fires a search unless a newer keystroke re-armed the debounce.
    SearchDebounce { generation: u64 },
    ToastFade { toast: u64 },
    ToastRemove { toast: u64 },
    Welcome,
}

#[derive(Debug)]
struct Entry {
    due: Instant,
    seq: u64,
    task: TimerTask,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap of pending timers. Equal deadlines fire in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, task: TimerTask) {
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            due,
            seq: self.seq,
            task,
        }));
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pops the earliest task due at or before `now`, with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerTask)> {
        if self.next_deadline()? > now {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.due, entry.task))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pops_in_deadline_then_schedule_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0 + Duration::from_millis(100), TimerTask::Welcome);
        timers.schedule(t0, TimerTask::ToastFade { toast: 1 });
        timers.schedule(t0, TimerTask::ToastFade { toast: 2 });

        assert_eq!(timers.next_deadline(), Some(t0));
        assert_eq!(
            timers.pop_due(t0).map(|(_, task)| task),
            Some(TimerTask::ToastFade { toast: 1 })
        );
        assert_eq!(
            timers.pop_due(t0).map(|(_, task)| task),
            Some(TimerTask::ToastFade { toast: 2 })
        );
        assert_eq!(timers.pop_due(t0), None);
        assert_eq!(timers.len(), 1);

        let (due, task) = timers
            .pop_due(t0 + Duration::from_millis(150))
            .expect("welcome is due");
        assert_eq!(due, t0 + Duration::from_millis(100));
        assert_eq!(task, TimerTask::Welcome);
        assert!(timers.is_empty());
    }
}
