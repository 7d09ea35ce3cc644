use gloo_timers::callback::{Interval, Timeout};

/// Source of one-shot and repeating timers. Dropping a returned handle
/// cancels the timer.
pub trait Clock {
    type Once;
    type Repeat;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Once;
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Repeat;
}

/// `setTimeout`/`setInterval` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Once = Timeout;
    type Repeat = Interval;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Clock;

    enum Job {
        Once(Box<dyn FnOnce()>),
        Repeat(u32, Box<dyn FnMut()>),
    }

    struct Task {
        due: u64,
        job: Job,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct State {
        now: u64,
        tasks: Vec<Task>,
    }

    /// Virtual time: timers only fire inside `advance`.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<State>>,
    }

    pub struct Handle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualClock {
        fn push(&self, delay_ms: u32, job: Job) -> Handle {
            let cancelled = Rc::new(Cell::new(false));
            let mut state = self.state.borrow_mut();
            let due = state.now + u64::from(delay_ms);
            state.tasks.push(Task {
                due,
                job,
                cancelled: cancelled.clone(),
            });
            Handle { cancelled }
        }

        /// Timers still scheduled and not cancelled.
        pub fn pending(&self) -> usize {
            self.state
                .borrow()
                .tasks
                .iter()
                .filter(|task| !task.cancelled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.state.borrow().now + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    state.tasks.retain(|task| !task.cancelled.get());
                    let index = state
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| task.due)
                        .map(|(index, _)| index);
                    index.map(|index| {
                        let task = state.tasks.remove(index);
                        state.now = task.due;
                        task
                    })
                };
                let Some(Task { due, job, cancelled }) = next else {
                    break;
                };
                // Callbacks run with no borrow held so they may schedule or cancel.
                match job {
                    Job::Once(callback) => callback(),
                    Job::Repeat(period, mut callback) => {
                        callback();
                        self.state.borrow_mut().tasks.push(Task {
                            due: due + u64::from(period.max(1)),
                            job: Job::Repeat(period, callback),
                            cancelled,
                        });
                    }
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl Clock for ManualClock {
        type Once = Handle;
        type Repeat = Handle;

        fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Handle {
            self.push(delay_ms, Job::Once(callback))
        }

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Handle {
            self.push(period_ms, Job::Repeat(period_ms, callback))
        }
    }

    #[test]
    fn fires_in_due_order_and_forgets_finished_timers() {
        let clock = ManualClock::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let _late = clock.after(20, Box::new(move || a.borrow_mut().push("late")));
        let _early = clock.after(10, Box::new(move || b.borrow_mut().push("early")));

        assert_eq!(clock.pending(), 2);
        clock.advance(25);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropped_handle_cancels() {
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let handle = clock.every(5, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(12);
        assert_eq!(fired.get(), 2);
        drop(handle);
        clock.advance(100);
        assert_eq!(fired.get(), 2);
        assert_eq!(clock.pending(), 0);
    }
}
