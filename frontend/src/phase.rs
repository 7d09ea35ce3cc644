use std::rc::Rc;
use log::info;
use yew::prelude::*;

use crate::timer::Clock;

/// Which view the orchestrator shows. Starts at `Loading` and moves to
/// `Ready` exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    #[default]
    Loading,
    Ready,
}

pub enum PhaseAction {
    Open,
}

impl ViewPhase {
    pub fn is_loading(self) -> bool {
        self == ViewPhase::Loading
    }
}

impl Reducible for ViewPhase {
    type Action = PhaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self, action) {
            (ViewPhase::Loading, PhaseAction::Open) => Rc::new(ViewPhase::Ready),
            // Already open; with `use_reducer_eq` an unchanged value does not re-render.
            (ViewPhase::Ready, PhaseAction::Open) => self,
        }
    }
}

/// The one-shot timer that ends the loading screen. Dropping the gate before
/// it opens cancels it, so `on_open` never runs against a torn-down view.
pub struct LoadingGate<C: Clock> {
    _timer: C::Once,
}

impl<C: Clock> LoadingGate<C> {
    pub fn start(clock: &C, delay_ms: u32, on_open: impl FnOnce() + 'static) -> Self {
        let timer = clock.after(
            delay_ms,
            Box::new(move || {
                info!("Loading finished, showing main content");
                on_open();
            }),
        );
        LoadingGate { _timer: timer }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::config::LOADING_DELAY_MS;
    use crate::timer::manual::ManualClock;

    #[test]
    fn starts_loading() {
        assert!(ViewPhase::default().is_loading());
    }

    struct Mounted {
        phase: Rc<RefCell<Rc<ViewPhase>>>,
        opened: Rc<Cell<u32>>,
        gate: LoadingGate<ManualClock>,
    }

    fn mount(clock: &ManualClock) -> Mounted {
        let phase = Rc::new(RefCell::new(Rc::new(ViewPhase::default())));
        let opened = Rc::new(Cell::new(0));
        let gate = {
            let phase = phase.clone();
            let opened = opened.clone();
            LoadingGate::start(clock, LOADING_DELAY_MS, move || {
                opened.set(opened.get() + 1);
                let next = phase.borrow().clone().reduce(PhaseAction::Open);
                *phase.borrow_mut() = next;
            })
        };
        Mounted { phase, opened, gate }
    }

    #[test]
    fn gate_holds_until_delay_then_opens_once() {
        let clock = ManualClock::default();
        let mounted = mount(&clock);

        clock.advance(2400);
        assert!(mounted.phase.borrow().is_loading());
        assert_eq!(mounted.opened.get(), 0);

        clock.advance(200);
        assert_eq!(**mounted.phase.borrow(), ViewPhase::Ready);
        assert_eq!(mounted.opened.get(), 1);
        assert_eq!(clock.pending(), 0);

        clock.advance(60_000);
        assert_eq!(mounted.opened.get(), 1);
        drop(mounted.gate);
    }

    #[test]
    fn gate_opens_exactly_at_delay() {
        let clock = ManualClock::default();
        let mounted = mount(&clock);

        clock.advance(u64::from(LOADING_DELAY_MS) - 1);
        assert_eq!(mounted.opened.get(), 0);
        clock.advance(1);
        assert_eq!(mounted.opened.get(), 1);
    }

    #[test]
    fn teardown_before_delay_cancels_the_gate() {
        let clock = ManualClock::default();
        let Mounted { phase, opened, gate } = mount(&clock);

        clock.advance(1000);
        drop(gate);
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(opened.get(), 0);
        assert!(phase.borrow().is_loading());
    }

    #[test]
    fn open_transitions_exactly_once() {
        let mut phase = Rc::new(ViewPhase::default());
        let mut transitions = 0;
        for _ in 0..3 {
            let next = phase.clone().reduce(PhaseAction::Open);
            if !Rc::ptr_eq(&phase, &next) {
                transitions += 1;
            }
            phase = next;
        }
        assert_eq!(transitions, 1);
        assert_eq!(*phase, ViewPhase::Ready);
    }

    #[test]
    fn ready_never_returns_to_loading() {
        let phase = Rc::new(ViewPhase::Ready).reduce(PhaseAction::Open);
        assert!(!phase.is_loading());
    }
}
