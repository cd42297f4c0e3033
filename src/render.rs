//! Render-surface contract and a plain-text implementation.

use std::io::Write;

use anyhow::Result;

pub const ROLE_DESCRIPTION: &str = "carousel";
pub const PREVIOUS_LABEL: &str = "Previous Slide";
pub const NEXT_LABEL: &str = "Next Slide";
pub const ROTATION_LABEL: &str = "Toggle Slide Rotation";

/// How assistive technology should announce slide changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivePoliteness {
    /// Rotating: changes are not announced.
    Off,
    /// Stopped: changes made by the user are announced.
    Polite,
}

impl LivePoliteness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub url: String,
    pub alt: String,
    pub active: bool,
}

/// Snapshot of everything a surface needs to draw the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub label: String,
    pub slides: Vec<SlideView>,
    pub active: Option<usize>,
    pub rotating: bool,
}

impl CarouselView {
    /// Label of the rotation control: what pressing it will do.
    pub fn toggle_label(&self) -> &'static str {
        if self.rotating { "Pause" } else { "Play" }
    }

    pub fn live(&self) -> LivePoliteness {
        if self.rotating {
            LivePoliteness::Off
        } else {
            LivePoliteness::Polite
        }
    }

    pub fn active_slide(&self) -> Option<&SlideView> {
        self.active.and_then(|idx| self.slides.get(idx))
    }
}

/// Something that can display a [`CarouselView`].
pub trait RenderSurface {
    fn render(&mut self, view: &CarouselView) -> Result<()>;
}

/// Writes each frame as a short block of text.
#[derive(Debug)]
pub struct TextSurface<W> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn render(&mut self, view: &CarouselView) -> Result<()> {
        writeln!(
            self.out,
            "[{ROLE_DESCRIPTION}] {} (aria-live={})",
            view.label,
            view.live().as_str()
        )?;
        if view.slides.is_empty() {
            writeln!(self.out, "  (no slides)")?;
        }
        let total = view.slides.len();
        for (idx, slide) in view.slides.iter().enumerate() {
            let marker = if slide.active { '*' } else { ' ' };
            writeln!(
                self.out,
                "  {marker} {}/{total} {} <{}>",
                idx + 1,
                slide.alt,
                slide.url
            )?;
        }
        writeln!(
            self.out,
            "  [<< {PREVIOUS_LABEL}] [{} | {ROTATION_LABEL}] [{NEXT_LABEL} >>]",
            view.toggle_label()
        )?;
        self.out.flush()?;
        Ok(())
    }
}
