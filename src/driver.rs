// Render loop driver: decides when a sample+render cycle runs.
//
// Idle    -- video ready ----------------> Running (first tick requested)
// Running -- tick fires -----------------> Running (cycle, next tick requested)
// Running -- scheme replaced ------------> Idle -> Running (old tick cancelled)
// Running -- teardown -------------------> Idle (pending tick cancelled)
//
// Exactly one tick is outstanding while Running and none while Idle.

use crate::color::ColorScheme;
use crate::draw::Canvas;
use crate::halftone;
use crate::sampler;
use crate::source::VideoSource;
use crate::types::GridParams;
use log::{debug, info};

/// Identifies one requested tick. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Hands out refresh-aligned ticks.
pub trait Scheduler {
    /// Ask for one tick at the next refresh.
    fn request_tick(&mut self) -> TickHandle;

    /// Withdraw a tick that has not fired yet. Unknown handles are ignored.
    fn cancel_tick(&mut self, handle: TickHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running { pending: TickHandle },
}

/// What a delivered tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was sampled and `dots` grid points were drawn.
    Rendered { dots: usize },
    /// Nothing to sample yet; the next tick is requested anyway.
    Skipped,
    /// The handle was cancelled or superseded; nothing ran.
    Stale,
}

pub struct RenderLoop {
    state: LoopState,
    scheme: ColorScheme,
    grid: GridParams,
    video_ready: bool,
    cycles: u64,
}

impl RenderLoop {
    pub fn new(scheme: ColorScheme, grid: GridParams) -> Self {
        Self { state: LoopState::Idle, scheme, grid, video_ready: false, cycles: 0 }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Completed render cycles so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Check the source's readiness each loop. The first time it has
    /// enough data the loop starts; later calls are no-ops.
    pub fn observe_readiness<S, V>(&mut self, source: &V, sched: &mut S)
    where
        S: Scheduler + ?Sized,
        V: VideoSource + ?Sized,
    {
        if source.has_enough_data() && !self.video_ready {
            self.video_ready = true;
            let (w, h) = source.intrinsic_size();
            info!("video ready ({w}x{h}), starting halftone loop");
            self.start(sched);
        }
    }

    /// Swap in a new color scheme: the current tick chain is cancelled and,
    /// if video is ready, a fresh one starts with the new scheme.
    pub fn set_scheme<S: Scheduler + ?Sized>(&mut self, scheme: ColorScheme, sched: &mut S) {
        self.stop(sched);
        self.scheme = scheme;
        info!("color scheme set to {scheme}");
        if self.video_ready {
            self.start(sched);
        }
    }

    /// Cancel the pending tick and go idle for good.
    pub fn teardown<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if self.state != LoopState::Idle {
            info!("halftone loop stopped after {} cycles", self.cycles);
        }
        self.stop(sched);
        self.video_ready = false;
    }

    /// Deliver a fired tick. Runs one cycle if `handle` is the pending
    /// tick, then requests the next one.
    pub fn tick<S, V, C>(&mut self, handle: TickHandle, source: &V, canvas: &mut C, sched: &mut S) -> TickOutcome
    where
        S: Scheduler + ?Sized,
        V: VideoSource + ?Sized,
        C: Canvas + ?Sized,
    {
        match self.state {
            LoopState::Running { pending } if pending == handle => {}
            _ => {
                debug!("ignoring stale tick {handle:?}");
                return TickOutcome::Stale;
            }
        }

        let (w, h) = canvas.size();
        let outcome = match sampler::sample(source, w as u32, h as u32) {
            Some(buffer) => {
                let dots = halftone::render(&buffer, canvas, &self.scheme, &self.grid);
                self.cycles += 1;
                TickOutcome::Rendered { dots }
            }
            None => TickOutcome::Skipped,
        };

        self.state = LoopState::Running { pending: sched.request_tick() };
        outcome
    }

    fn start<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running { pending: sched.request_tick() };
        }
    }

    fn stop<S: Scheduler + ?Sized>(&mut self, sched: &mut S) {
        if let LoopState::Running { pending } = self.state {
            sched.cancel_tick(pending);
        }
        self.state = LoopState::Idle;
    }
}
