// Timer primitives behind a trait so the refresh and reveal logic can run
// against a fake clock in tests.
use crate::error::PageError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

pub trait Scheduler {
    type Handle: Copy + Debug + PartialEq;

    /// Starts a repeating timer.
    fn set_interval(
        &self,
        period_ms: i32,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Handle, PageError>;
    fn clear_interval(&self, handle: Self::Handle);
    /// Runs `task` once after `delay_ms`. One-shots cannot be cancelled.
    fn set_timeout(&self, delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<(), PageError>;
}

/// Browser timers. Interval closures live here until their timer is cleared.
pub struct WindowScheduler {
    window: Window,
    intervals: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
}

impl WindowScheduler {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        Ok(Self {
            window,
            intervals: RefCell::new(HashMap::new()),
        })
    }
}

impl Scheduler for WindowScheduler {
    type Handle = i32;

    fn set_interval(&self, period_ms: i32, tick: Box<dyn FnMut()>) -> Result<i32, PageError> {
        let closure = Closure::wrap(tick);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )?;
        self.intervals.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn clear_interval(&self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
        self.intervals.borrow_mut().remove(&handle);
    }

    fn set_timeout(&self, delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<(), PageError> {
        // once_into_js frees itself after the call
        let callback = Closure::once_into_js(move || task());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms,
            )?;
        Ok(())
    }
}

impl Drop for WindowScheduler {
    fn drop(&mut self) {
        for (id, _) in self.intervals.get_mut().drain() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

/// Converts seconds to the millisecond delay the timers take.
pub fn secs_to_ms(secs: f64) -> i32 {
    wrap_ms(secs * 1000.0)
}

// Same conversion browsers apply to a timer delay: truncate, then wrap
// modulo 2^32 into an i32. NaN and infinities become 0.
fn wrap_ms(ms: f64) -> i32 {
    if !ms.is_finite() {
        return 0;
    }
    let wrapped = ms.trunc() % 4_294_967_296.0;
    wrapped as i64 as u32 as i32
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum TimerEvent {
        IntervalStarted { handle: u32, period_ms: i32 },
        IntervalCleared { handle: u32 },
        TimeoutScheduled { delay_ms: i32 },
    }

    /// Records every timer call; nothing fires until the test asks.
    #[derive(Default)]
    pub struct ManualScheduler {
        next_handle: RefCell<u32>,
        intervals: RefCell<HashMap<u32, Box<dyn FnMut()>>>,
        timeouts: RefCell<Vec<(i32, Box<dyn FnOnce()>)>>,
        pub events: RefCell<Vec<TimerEvent>>,
    }

    impl ManualScheduler {
        pub fn active_intervals(&self) -> usize {
            self.intervals.borrow().len()
        }

        pub fn fire_interval(&self, handle: u32) {
            // taken out while running so the tick may call back into us
            let tick = self.intervals.borrow_mut().remove(&handle);
            if let Some(mut tick) = tick {
                tick();
                self.intervals.borrow_mut().insert(handle, tick);
            }
        }

        pub fn timeout_delays(&self) -> Vec<i32> {
            self.timeouts.borrow().iter().map(|(d, _)| *d).collect()
        }

        /// Runs pending one-shots in delay order; equal delays keep queue order.
        pub fn run_timeouts(&self) {
            let mut pending = std::mem::take(&mut *self.timeouts.borrow_mut());
            pending.sort_by_key(|(d, _)| *d);
            for (_, task) in pending {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u32;

        fn set_interval(&self, period_ms: i32, tick: Box<dyn FnMut()>) -> Result<u32, PageError> {
            let mut next = self.next_handle.borrow_mut();
            *next += 1;
            let handle = *next;
            self.intervals.borrow_mut().insert(handle, tick);
            self.events
                .borrow_mut()
                .push(TimerEvent::IntervalStarted { handle, period_ms });
            Ok(handle)
        }

        fn clear_interval(&self, handle: u32) {
            self.intervals.borrow_mut().remove(&handle);
            self.events
                .borrow_mut()
                .push(TimerEvent::IntervalCleared { handle });
        }

        fn set_timeout(&self, delay_ms: i32, task: Box<dyn FnOnce()>) -> Result<(), PageError> {
            self.timeouts.borrow_mut().push((delay_ms, task));
            self.events
                .borrow_mut()
                .push(TimerEvent::TimeoutScheduled { delay_ms });
            Ok(())
        }
    }
}
