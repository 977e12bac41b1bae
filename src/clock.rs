// Refresh-rate clock: the real `Scheduler` used by the main loop.
// Visual: paces the dots to the target refresh rate; a slow cycle just makes
// the next one late (frames are dropped, never queued).

use crate::driver::{Scheduler, TickHandle};
use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    interval: Duration,
    last: Instant,
    next_id: u64,
    pending: Option<TickHandle>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let interval = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self { interval, last: Instant::now(), next_id: 0, pending: None }
    }

    /// Sleep until the next refresh boundary, then hand out the pending tick
    /// (if one was requested). Called once per main-loop iteration.
    pub fn wait_for_refresh(&mut self) -> Option<TickHandle> {
        let due = self.last + self.interval;
        let now = Instant::now();
        if now < due {
            thread::sleep(due - now);
        }
        self.last = Instant::now();
        self.pending.take()
    }
}

impl Scheduler for FrameClock {
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
