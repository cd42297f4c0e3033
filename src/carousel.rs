//! The carousel component: slide tracker + rotation controller + an optional
//! mounted render surface.

use std::time::Duration;

use tokio::sync::mpsc::WeakSender;
use tracing::{debug, trace, warn};

use crate::error::CarouselError;
use crate::events::CarouselEvent;
use crate::render::{CarouselView, RenderSurface, SlideView};
use crate::rotation::{RotationController, RotationState};
use crate::slide::{self, Slide, demo_slides};
use crate::tracker::SlideTracker;

pub const DEFAULT_LABEL: &str = "Cats are Social";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5_000);

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    pub slides: Vec<Slide>,
    /// Start rotating as soon as the carousel is connected.
    pub auto_rotation: bool,
    pub interval: Duration,
    pub label: String,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides: demo_slides(),
            auto_rotation: false,
            interval: DEFAULT_INTERVAL,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

pub struct Carousel<S> {
    label: String,
    auto_rotation: bool,
    tracker: SlideTracker,
    rotation: RotationController,
    surface: Option<S>,
}

impl<S: RenderSurface> Carousel<S> {
    /// Build a carousel whose rotation ticks are posted to `ticks`.
    ///
    /// Nothing is rendered and no timer runs until [`Carousel::connect`].
    ///
    /// # Errors
    /// Returns [`CarouselError::ZeroInterval`] for a zero interval.
    pub fn new(
        options: CarouselOptions,
        ticks: WeakSender<CarouselEvent>,
    ) -> Result<Self, CarouselError> {
        let CarouselOptions {
            slides,
            auto_rotation,
            interval,
            label,
        } = options;
        Ok(Self {
            label,
            auto_rotation,
            tracker: SlideTracker::new(slide::label_blank_alts(slides)),
            rotation: RotationController::new(interval, ticks)?,
            surface: None,
        })
    }

    /// Honour `auto_rotation`, then mount `surface` and draw the first frame.
    pub fn connect(&mut self, surface: S) {
        if self.auto_rotation && !self.rotation.is_running() {
            self.rotation.start();
        }
        self.mount(surface);
    }

    /// Attach a render surface and draw the current state on it.
    pub fn mount(&mut self, surface: S) {
        self.surface = Some(surface);
        self.refresh();
    }

    /// Detach the render surface; later refreshes are skipped.
    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.tracker.current_index()
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.tracker.current()
    }

    pub fn slides(&self) -> &[Slide] {
        self.tracker.as_slice()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }

    pub fn interval(&self) -> Duration {
        self.rotation.interval()
    }

    pub fn next(&mut self) {
        self.tracker.next();
        debug!(index = ?self.tracker.current_index(), "next slide");
        self.refresh();
    }

    pub fn previous(&mut self) {
        self.tracker.previous();
        debug!(index = ?self.tracker.current_index(), "previous slide");
        self.refresh();
    }

    /// Start or stop auto-rotation. Must run inside a tokio runtime.
    pub fn toggle_rotation(&mut self) -> RotationState {
        let state = self.rotation.toggle();
        self.refresh();
        state
    }

    pub fn start_rotation(&mut self) {
        self.rotation.start();
        self.refresh();
    }

    pub fn stop_rotation(&mut self) {
        if self.rotation.is_running() {
            self.rotation.stop();
            self.refresh();
        }
    }

    /// Replace the slide list, keeping the active index when still valid.
    ///
    /// Slides with blank alt text get a positional label.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.tracker.replace(slide::label_blank_alts(slides));
        debug!(
            count = self.tracker.len(),
            index = ?self.tracker.current_index(),
            "slides replaced"
        );
        self.refresh();
    }

    /// # Errors
    /// Returns [`CarouselError::ZeroInterval`] for a zero interval.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), CarouselError> {
        self.rotation.set_interval(interval)
    }

    /// Apply one event.
    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Previous => self.previous(),
            CarouselEvent::Next => self.next(),
            CarouselEvent::ToggleRotation => {
                self.toggle_rotation();
            }
            CarouselEvent::RotationTick { generation } => {
                if self.rotation.accepts(generation) {
                    self.next();
                } else {
                    trace!(generation, "dropping stale rotation tick");
                }
            }
            CarouselEvent::SetSlides(slides) => self.set_slides(slides),
            CarouselEvent::SetInterval(interval) => {
                if let Err(err) = self.set_interval(interval) {
                    warn!("ignoring interval change: {err}");
                }
            }
        }
    }

    /// Snapshot of the current state for a render surface.
    pub fn view(&self) -> CarouselView {
        let active = self.tracker.current_index();
        CarouselView {
            label: self.label.clone(),
            slides: self
                .tracker
                .as_slice()
                .iter()
                .enumerate()
                .map(|(idx, slide)| SlideView {
                    url: slide.url().to_string(),
                    alt: slide.alt().to_string(),
                    active: active == Some(idx),
                })
                .collect(),
            active,
            rotating: self.rotation.is_running(),
        }
    }

    /// Stop rotation and release the surface.
    pub fn teardown(&mut self) -> Option<S> {
        self.rotation.stop();
        self.surface.take()
    }

    fn refresh(&mut self) {
        let view = self.view();
        let Some(surface) = self.surface.as_mut() else {
            trace!("no surface mounted; skipping render");
            return;
        };
        if let Err(err) = surface.render(&view) {
            warn!("render failed: {err:#}");
        }
    }
}
