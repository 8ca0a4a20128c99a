//! Cooperative timers.
//!
//! Nothing here sleeps or spawns. The owner calls [`Scheduler::advance`] with
//! the current time (typically once per animation frame) and receives the
//! tasks that came due, oldest deadline first. Dropping or clearing the
//! scheduler is the only cleanup needed.

use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Timer<T> {
    due_ms: f64,
    period_ms: Option<f64>,
    seq: u64,
    task: T,
}

pub type DueTasks<T> = SmallVec<[T; 4]>;

#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    timers: FnvHashMap<TimerId, Timer<T>>,
    next_id: u64,
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: FnvHashMap::default(),
            next_id: 0,
        }
    }

    fn insert(&mut self, due_ms: f64, period_ms: Option<f64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.timers.insert(
            id,
            Timer {
                due_ms,
                period_ms,
                seq: self.next_id,
                task,
            },
        );
        self.next_id += 1;
        id
    }

    /// Fire `task` once, `delay_ms` after `now_ms`.
    pub fn schedule_once(&mut self, delay_ms: f64, task: T, now_ms: f64) -> TimerId {
        self.insert(now_ms + delay_ms.max(0.0), None, task)
    }

    /// Fire `task` every `period_ms`, first at `now_ms + period_ms`.
    /// Non-positive periods are raised to one millisecond.
    pub fn schedule_every(&mut self, period_ms: f64, task: T, now_ms: f64) -> TimerId {
        let period = if period_ms.is_finite() && period_ms > 0.0 {
            period_ms
        } else {
            1.0
        };
        self.insert(now_ms + period, Some(period), task)
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Collect every task due at or before `now_ms`.
    ///
    /// One-shot timers are removed. Periodic timers fire at most once per
    /// call and are re-armed one period after their previous deadline, or one
    /// period after `now_ms` if they fell more than a period behind.
    pub fn advance(&mut self, now_ms: f64) -> DueTasks<T> {
        let mut due: SmallVec<[(f64, u64, TimerId); 8]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .map(|(id, t)| (t.due_ms, t.seq, *id))
            .collect();
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut out = DueTasks::new();
        for (_, _, id) in due {
            let rearm = match self.timers.get_mut(&id) {
                Some(timer) => {
                    out.push(timer.task.clone());
                    match timer.period_ms {
                        Some(period) => {
                            let next = timer.due_ms + period;
                            timer.due_ms = if next <= now_ms { now_ms + period } else { next };
                            true
                        }
                        None => false,
                    }
                }
                None => continue,
            };
            if !rearm {
                self.timers.remove(&id);
            }
        }
        out
    }
}
