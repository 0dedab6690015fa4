use crate::config::AnimationTimings;

/// A timer-driven state machine. The owning component schedules a browser
/// timer for `delay_ms` and calls `tick` when it fires.
pub trait Ticking {
    /// Delay until the next tick, given the machine's current state.
    fn delay_ms(&self, timings: &AnimationTimings) -> u32;

    fn tick(&mut self);
}

/// Holds the pending browser timer of one machine. Dropping a `gloo-timers`
/// handle clears the timer, so arming replaces and `cancel` tears down.
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> TimerSlot<H> {
    pub fn empty() -> Self {
        Self { handle: None }
    }

    pub fn armed(handle: H) -> Self {
        Self { handle: Some(handle) }
    }

    pub fn arm(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns whether a timer was pending.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

#[cfg(test)]
pub mod sim {
    use super::Ticking;
    use crate::config::AnimationTimings;

    /// Replays the tick schedule a browser timer would deliver, without a
    /// browser. Ticks fire strictly in time order.
    pub struct SimulatedClock<M: Ticking> {
        pub machine: M,
        timings: AnimationTimings,
        now_ms: u64,
        next_due_ms: Option<u64>,
    }

    impl<M: Ticking> SimulatedClock<M> {
        pub fn mount(machine: M, timings: AnimationTimings) -> Self {
            let first = machine.delay_ms(&timings).max(1) as u64;
            Self {
                machine,
                timings,
                now_ms: 0,
                next_due_ms: Some(first),
            }
        }

        pub fn now_ms(&self) -> u64 {
            self.now_ms
        }

        pub fn advance(&mut self, ms: u64) {
            let target = self.now_ms + ms;
            while let Some(due) = self.next_due_ms {
                if due > target {
                    break;
                }
                self.now_ms = due;
                self.machine.tick();
                self.next_due_ms = Some(due + self.machine.delay_ms(&self.timings).max(1) as u64);
            }
            self.now_ms = target;
        }

        /// Drops the pending timer. Later `advance` calls only move time.
        pub fn teardown(&mut self) {
            self.next_due_ms = None;
        }
    }

    mod tests {
        use super::*;

        struct Counter(u32);

        impl Ticking for Counter {
            fn delay_ms(&self, _: &AnimationTimings) -> u32 {
                100
            }

            fn tick(&mut self) {
                self.0 += 1;
            }
        }

        #[test]
        fn test_ticks_fire_on_schedule() {
            let mut clock = SimulatedClock::mount(Counter(0), AnimationTimings::DEFAULT);
            clock.advance(99);
            assert_eq!(clock.machine.0, 0);
            clock.advance(1);
            assert_eq!(clock.machine.0, 1);
            clock.advance(250);
            assert_eq!(clock.machine.0, 3);
            assert_eq!(clock.now_ms(), 350);
        }

        #[test]
        fn test_teardown_stops_ticks() {
            let mut clock = SimulatedClock::mount(Counter(0), AnimationTimings::DEFAULT);
            clock.advance(200);
            clock.teardown();
            clock.advance(10_000);
            assert_eq!(clock.machine.0, 2);
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a timer handle; counts how often one was dropped.
    pub struct FakeHandle(pub Rc<Cell<u32>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_cancel_drops_pending_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::armed(FakeHandle(dropped.clone()));
        assert_eq!(dropped.get(), 0);
        assert!(slot.is_armed());
        assert!(slot.cancel());
        assert_eq!(dropped.get(), 1);
        assert!(!slot.is_armed());
        assert!(!slot.cancel());
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_arm_replaces_previous_handle() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::empty();
        slot.arm(FakeHandle(first.clone()));
        slot.arm(FakeHandle(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        drop(slot);
        assert_eq!(second.get(), 1);
    }
}
