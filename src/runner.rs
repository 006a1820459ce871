//! Headless host loop.
//!
//! Drives a [`Stage`] from a `calloop` timer at a fixed frame interval until
//! every ticker has finished (or a safety cap runs out). Before each frame the
//! caller's scene callback gets a chance to report scroll positions or
//! visibility, the way a browser would between animation frames.

use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};
use thiserror::Error;

use crate::stage::{Stage, TextUpdate};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] calloop::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Time between frames
    pub frame_interval: Duration,
    /// Give up after this long even if tickers are still pending
    pub max_duration: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            max_duration: Duration::from_secs(30),
        }
    }
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub updates: usize,
    pub elapsed: Duration,
    /// Every ticker finished before the cap
    pub finished: bool,
}

struct LoopData<'a, S, U> {
    stage: &'a mut Stage,
    scene: S,
    on_update: U,
    epoch: Instant,
    max_duration: Duration,
    signal: LoopSignal,
    summary: RunSummary,
}

impl<S, U> LoopData<'_, S, U>
where
    S: FnMut(&mut Stage, Duration),
    U: FnMut(&TextUpdate),
{
    fn on_frame(&mut self) {
        let now = self.epoch.elapsed();
        (self.scene)(self.stage, now);

        let report = self.stage.frame(now);
        for update in &report.updates {
            (self.on_update)(update);
        }

        self.summary.frames += 1;
        self.summary.updates += report.updates.len();
        self.summary.elapsed = now;

        if self.stage.is_finished() {
            self.summary.finished = true;
            log::debug!("all tickers finished after {} frame(s)", self.summary.frames);
            self.signal.stop();
        } else if now >= self.max_duration {
            log::warn!("runner gave up after {:?}", now);
            self.signal.stop();
        }
    }
}

pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self
    }

    pub fn max_duration(mut self, max: Duration) -> Self {
        self.config.max_duration = max;
        self
    }

    /// Run `stage` until all tickers have finished.
    ///
    /// `scene` is called before every frame with the time since the run
    /// started; `on_update` receives every text change.
    pub fn run<S, U>(&self, stage: &mut Stage, scene: S, on_update: U) -> Result<RunSummary, RunnerError>
    where
        S: FnMut(&mut Stage, Duration),
        U: FnMut(&TextUpdate),
    {
        let mut event_loop: EventLoop<'_, LoopData<'_, S, U>> = EventLoop::try_new()?;
        let interval = self.config.frame_interval.max(Duration::from_millis(1));

        event_loop
            .handle()
            .insert_source(Timer::from_duration(interval), move |_, _, data| {
                data.on_frame();
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|err| err.error)?;

        let mut data = LoopData {
            stage,
            scene,
            on_update,
            epoch: Instant::now(),
            max_duration: self.config.max_duration,
            signal: event_loop.get_signal(),
            summary: RunSummary {
                frames: 0,
                updates: 0,
                elapsed: Duration::ZERO,
                finished: false,
            },
        };

        log::info!(
            "running stage at {:?} per frame, cap {:?}",
            interval,
            self.config.max_duration
        );
        event_loop.run(None, &mut data, |_| {})?;
        Ok(data.summary)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
