// Periodic refresh timer. One controller owns at most one live interval.
use super::scheduler::{Scheduler, secs_to_ms};
use crate::error::PageError;
use crate::util::clog;
use std::rc::Rc;

pub const DEFAULT_REFRESH_SECS: f64 = 60.0;
pub const TICK_MESSAGE: &str = "🔄 Auto-refresh...";

pub struct AutoRefresh<S: Scheduler> {
    scheduler: Rc<S>,
    on_tick: Rc<dyn Fn()>,
    handle: Option<S::Handle>,
    interval_ms: Option<i32>,
}

impl<S: Scheduler> AutoRefresh<S> {
    pub fn new(scheduler: Rc<S>, on_tick: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            on_tick: Rc::new(on_tick),
            handle: None,
            interval_ms: None,
        }
    }

    /// Starts ticking every `interval_secs`, replacing any running timer.
    /// Zero or negative intervals go to the timer unchanged.
    pub fn enable(&mut self, interval_secs: f64) -> Result<(), PageError> {
        self.cancel();
        let period_ms = secs_to_ms(interval_secs);
        let on_tick = self.on_tick.clone();
        let handle = self.scheduler.set_interval(
            period_ms,
            Box::new(move || {
                clog(TICK_MESSAGE);
                on_tick();
            }),
        )?;
        self.handle = Some(handle);
        self.interval_ms = Some(period_ms);
        Ok(())
    }

    pub fn enable_default(&mut self) -> Result<(), PageError> {
        self.enable(DEFAULT_REFRESH_SECS)
    }

    /// Stops the running timer. Returns false when nothing was running.
    pub fn cancel(&mut self) -> bool {
        self.interval_ms = None;
        match self.handle.take() {
            Some(handle) => {
                self.scheduler.clear_interval(handle);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn interval_ms(&self) -> Option<i32> {
        self.interval_ms
    }
}

impl<S: Scheduler> Drop for AutoRefresh<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scheduler::testing::{ManualScheduler, TimerEvent};
    use crate::util::testing::capture_logs;
    use std::cell::Cell;

    fn controller() -> (Rc<ManualScheduler>, AutoRefresh<ManualScheduler>) {
        let scheduler = Rc::new(ManualScheduler::default());
        let refresh = AutoRefresh::new(scheduler.clone(), || {});
        (scheduler, refresh)
    }

    #[test]
    fn default_interval_is_sixty_seconds() {
        let (scheduler, mut refresh) = controller();
        refresh.enable_default().unwrap();
        assert_eq!(refresh.interval_ms(), Some(60_000));
        assert_eq!(
            scheduler.events.borrow().as_slice(),
            &[TimerEvent::IntervalStarted { handle: 1, period_ms: 60_000 }]
        );
    }

    #[test]
    fn enabling_twice_keeps_one_timer() {
        let (scheduler, mut refresh) = controller();
        refresh.enable(30.0).unwrap();
        refresh.enable(30.0).unwrap();
        assert_eq!(scheduler.active_intervals(), 1);
        assert_eq!(
            scheduler.events.borrow().as_slice(),
            &[
                TimerEvent::IntervalStarted { handle: 1, period_ms: 30_000 },
                TimerEvent::IntervalCleared { handle: 1 },
                TimerEvent::IntervalStarted { handle: 2, period_ms: 30_000 },
            ]
        );
    }

    #[test]
    fn non_positive_intervals_pass_through() {
        let (scheduler, mut refresh) = controller();
        refresh.enable(0.0).unwrap();
        refresh.enable(-5.0).unwrap();
        assert_eq!(refresh.interval_ms(), Some(-5000));
        assert_eq!(scheduler.active_intervals(), 1);
    }

    #[test]
    fn tick_runs_injected_callback() {
        let scheduler = Rc::new(ManualScheduler::default());
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let mut refresh = AutoRefresh::new(scheduler.clone(), move || counter.set(counter.get() + 1));
        refresh.enable(1.0).unwrap();
        scheduler.fire_interval(1);
        scheduler.fire_interval(1);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn every_tick_logs_the_refresh_line() {
        let (scheduler, mut refresh) = controller();
        refresh.enable(1.0).unwrap();
        let logs = capture_logs(|| {
            scheduler.fire_interval(1);
            scheduler.fire_interval(1);
            scheduler.fire_interval(1);
        });
        assert_eq!(logs.matches(TICK_MESSAGE).count(), 3);
    }

    #[test]
    fn enabling_alone_logs_nothing() {
        let (_scheduler, mut refresh) = controller();
        let logs = capture_logs(|| refresh.enable(1.0).unwrap());
        assert!(!logs.contains(TICK_MESSAGE));
    }

    #[test]
    fn cancel_stops_the_timer() {
        let (scheduler, mut refresh) = controller();
        assert!(!refresh.cancel());
        refresh.enable(10.0).unwrap();
        assert!(refresh.is_active());
        assert!(refresh.cancel());
        assert!(!refresh.is_active());
        assert_eq!(refresh.interval_ms(), None);
        assert_eq!(scheduler.active_intervals(), 0);
    }

    #[test]
    fn dropping_the_controller_clears_its_timer() {
        let (scheduler, mut refresh) = controller();
        refresh.enable(5.0).unwrap();
        drop(refresh);
        assert_eq!(scheduler.active_intervals(), 0);
    }
}
