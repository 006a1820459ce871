//! Host for many tickers on one page.
//!
//! The stage owns an arena of tickers and a [`JobQueue`]. Each ticker is
//! independent; the stage only routes visibility signals to them and turns
//! frame ticks into one-shot step jobs. A step job re-queues itself until its
//! ticker settles, and unmounting a ticker cancels whatever it had queued.

use std::time::Duration;

use bitflags::bitflags;

use crate::animation::{AnimationDriver, SpringConfig, SpringDriver};
use crate::jobs::{JobQueue, JobType, TickerId};
use crate::ticker::{NumberTicker, TickerSpec};
use crate::visibility::{Rect, RootMargin};

bitflags! {
    /// What a frame changed, and whether the host has to keep ticking
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// At least one ticker has new text to display
        const TEXT_CHANGED = 0b01;
        /// Starts or steps are still pending; request another frame
        const NEEDS_FRAME  = 0b10;
    }
}

/// New text for one ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUpdate {
    pub id: TickerId,
    pub text: String,
}

/// Outcome of [`Stage::frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub flags: ChangeFlags,
    /// Text updates in mount order
    pub updates: Vec<TextUpdate>,
}

impl FrameReport {
    pub fn needs_frame(&self) -> bool {
        self.flags.contains(ChangeFlags::NEEDS_FRAME)
    }
}

/// Defaults applied to tickers mounted with [`Stage::mount`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    pub root_margin: RootMargin,
    pub spring: SpringConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::TICKER,
            spring: SpringConfig::TICKER,
        }
    }
}

type BoxedTicker = NumberTicker<Box<dyn AnimationDriver>>;

/// Arena of mounted tickers plus their pending frame work.
///
/// A stage lives for one page. Slots freed by [`Stage::unmount`] are never
/// reused, so a stale [`TickerId`] can't reach a ticker mounted later.
#[derive(Default)]
pub struct Stage {
    config: StageConfig,
    tickers: Vec<Option<BoxedTicker>>,
    jobs: JobQueue,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Mount a ticker driven by the stage's spring.
    pub fn mount(&mut self, spec: TickerSpec) -> TickerId {
        let driver = SpringDriver::new(self.config.spring);
        self.mount_with(spec, driver)
    }

    /// Mount a ticker with its own driver.
    pub fn mount_with(
        &mut self,
        spec: TickerSpec,
        driver: impl AnimationDriver + 'static,
    ) -> TickerId {
        let driver: Box<dyn AnimationDriver> = Box::new(driver);
        let ticker = NumberTicker::with_driver(spec, driver).with_margin(self.config.root_margin);
        let id = TickerId(self.tickers.len());
        log::debug!("mounted {:?} as {:?}", ticker.spec().display_value, id);
        self.tickers.push(Some(ticker));
        id
    }

    /// Tear a ticker down, cancelling its pending start and steps. Returns
    /// false if it was already gone.
    pub fn unmount(&mut self, id: TickerId) -> bool {
        let Some(mut ticker) = self.tickers.get_mut(id.0).and_then(Option::take) else {
            return false;
        };
        ticker.dispose();
        let cancelled = self.jobs.cancel(id);
        log::debug!("unmounted {:?}, cancelled {} job(s)", id, cancelled);
        true
    }

    pub fn get(&self, id: TickerId) -> Option<&BoxedTicker> {
        self.tickers.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: TickerId) -> Option<&mut BoxedTicker> {
        self.tickers.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Current text of a mounted ticker.
    pub fn text(&self, id: TickerId) -> Option<&str> {
        self.get(id).map(|ticker| ticker.text())
    }

    /// Ids of every mounted ticker, in mount order.
    pub fn ids(&self) -> impl Iterator<Item = TickerId> + '_ {
        self.tickers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_some())
            .map(|(i, _)| TickerId(i))
    }

    /// Feed element and viewport bounds for one ticker. Returns true if this
    /// armed it.
    pub fn observe(&mut self, id: TickerId, element: &Rect, viewport: &Rect, now: Duration) -> bool {
        let Some(ticker) = self.get_mut(id) else {
            log::trace!("visibility for unmounted {:?} ignored", id);
            return false;
        };
        let armed = ticker.observe(element, viewport, now);
        self.schedule_start(id, armed);
        armed
    }

    /// Feed a visible/hidden flag for one ticker. Returns true if this armed
    /// it.
    pub fn set_visible(&mut self, id: TickerId, visible: bool, now: Duration) -> bool {
        let Some(ticker) = self.get_mut(id) else {
            log::trace!("visibility for unmounted {:?} ignored", id);
            return false;
        };
        let armed = ticker.signal_visible(visible, now);
        self.schedule_start(id, armed);
        armed
    }

    fn schedule_start(&mut self, id: TickerId, armed: bool) {
        if !armed {
            return;
        }
        if let Some(start_at) = self.get(id).and_then(|t| t.start_at()) {
            self.jobs.defer(id, start_at);
        }
    }

    /// Run one frame at `now`.
    ///
    /// Due starts turn into step jobs, then every queued step runs once.
    /// Tickers still counting re-queue themselves for the next frame.
    pub fn frame(&mut self, now: Duration) -> FrameReport {
        for deferred in self.jobs.take_due(now) {
            if self.get(deferred.ticker).is_some() {
                self.jobs.push(deferred.ticker, JobType::Step);
            } else {
                log::trace!("start for unmounted {:?} discarded", deferred.ticker);
            }
        }

        let mut report = FrameReport::default();
        for job in self.jobs.drain() {
            let Some(ticker) = self.get_mut(job.ticker) else {
                log::trace!("{:?} for unmounted {:?} discarded", job.job_type, job.ticker);
                continue;
            };
            match job.job_type {
                JobType::Step => {
                    if let Some(text) = ticker.advance(now).changed() {
                        report.updates.push(TextUpdate {
                            id: job.ticker,
                            text,
                        });
                    }
                    if ticker.wants_frame() {
                        self.jobs.push(job.ticker, JobType::Step);
                    }
                }
            }
        }

        if !report.updates.is_empty() {
            report.flags |= ChangeFlags::TEXT_CHANGED;
        }
        if self.jobs.has_pending() {
            report.flags |= ChangeFlags::NEEDS_FRAME;
        }
        report
    }

    /// No starts or steps are pending.
    pub fn is_idle(&self) -> bool {
        !self.jobs.has_pending()
    }

    /// Every mounted ticker has settled or is static text.
    pub fn is_finished(&self) -> bool {
        self.tickers.iter().flatten().all(|t| t.is_finished())
    }

    /// Earliest pending start, so a host can sleep until then.
    pub fn next_start(&self) -> Option<Duration> {
        self.jobs.next_due()
    }
}
