use std::rc::Rc;
use yew::prelude::*;

use crate::config::{ELLIPSIS_MAX_DOTS, ELLIPSIS_TICK_MS};
use crate::timer::Clock;

/// The animated dots on the loading screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ellipsis {
    dots: String,
}

pub enum EllipsisAction {
    Tick,
}

impl Ellipsis {
    pub fn as_str(&self) -> &str {
        &self.dots
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn advance(&mut self) {
        if self.dot_count() >= ELLIPSIS_MAX_DOTS {
            self.dots.clear();
        } else {
            self.dots.push('.');
        }
    }
}

impl Reducible for Ellipsis {
    type Action = EllipsisAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EllipsisAction::Tick => {
                let mut next = (*self).clone();
                next.advance();
                Rc::new(next)
            }
        }
    }
}

/// Starts the dot animation. It runs until the returned handle is dropped.
pub fn animate<C: Clock>(clock: &C, on_tick: impl FnMut() + 'static) -> C::Repeat {
    clock.every(ELLIPSIS_TICK_MS, Box::new(on_tick))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::timer::manual::ManualClock;

    #[test]
    fn cycles_through_zero_to_six() {
        let mut ellipsis = Ellipsis::default();
        let mut seen = vec![ellipsis.dot_count()];
        for _ in 0..9 {
            ellipsis.advance();
            seen.push(ellipsis.dot_count());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 0, 1, 2]);
    }

    #[test]
    fn never_exceeds_six_dots() {
        let mut ellipsis = Rc::new(Ellipsis::default());
        for _ in 0..100 {
            ellipsis = ellipsis.reduce(EllipsisAction::Tick);
            assert!(ellipsis.dot_count() <= ELLIPSIS_MAX_DOTS);
            assert!(ellipsis.as_str().chars().all(|c| c == '.'));
        }
    }

    #[test]
    fn resets_to_empty_after_full() {
        let mut ellipsis = Ellipsis::default();
        for _ in 0..ELLIPSIS_MAX_DOTS {
            ellipsis.advance();
        }
        assert_eq!(ellipsis.as_str(), "......");
        ellipsis.advance();
        assert_eq!(ellipsis.as_str(), "");
    }

    #[test]
    fn ticks_at_fixed_rate_until_dropped() {
        let clock = ManualClock::default();
        let dots = Rc::new(RefCell::new(Ellipsis::default()));
        let ticker = {
            let dots = dots.clone();
            animate(&clock, move || dots.borrow_mut().advance())
        };

        let mut seen = Vec::new();
        for _ in 0..8 {
            clock.advance(u64::from(ELLIPSIS_TICK_MS));
            seen.push(dots.borrow().dot_count());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 0, 1]);

        clock.advance(u64::from(ELLIPSIS_TICK_MS) - 1);
        assert_eq!(dots.borrow().dot_count(), 1);

        drop(ticker);
        assert_eq!(clock.pending(), 0);
        clock.advance(10_000);
        assert_eq!(dots.borrow().dot_count(), 1);
    }
}
