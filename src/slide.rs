//! Slide items and the normalisation applied to caller-supplied lists.

use serde::Deserialize;

use crate::error::CarouselError;

/// One carousel entry: an image and the text announced in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    url: String,
    alt: String,
}

impl Slide {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }
}

/// A slide as written in configuration; `alt` may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SlideSpec {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl From<&Slide> for SlideSpec {
    fn from(slide: &Slide) -> Self {
        Self {
            url: slide.url.clone(),
            alt: Some(slide.alt.clone()),
        }
    }
}

const DEMO_SLIDES: &[(&str, &str)] = &[
    ("../demo/resources/slide-1.jpeg", "Cats Crossing Road"),
    ("../demo/resources/slide-2.jpeg", "Cats In Fish Market"),
    ("../demo/resources/slide-3.jpeg", "Cats On Caribbean"),
];

/// Built-in slide set used when nothing is configured.
pub fn demo_slides() -> Vec<Slide> {
    DEMO_SLIDES
        .iter()
        .map(|(url, alt)| Slide::new(*url, *alt))
        .collect()
}

fn positional_alt(index: usize, total: usize) -> String {
    format!("Slide {} of {}", index + 1, total)
}

/// Give every slide with blank alt text a positional label.
pub fn label_blank_alts(slides: Vec<Slide>) -> Vec<Slide> {
    let total = slides.len();
    slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            if slide.alt.trim().is_empty() {
                Slide {
                    alt: positional_alt(index, total),
                    ..slide
                }
            } else {
                slide
            }
        })
        .collect()
}

/// Turn configured slides into display-ready ones.
///
/// Blank or missing `alt` text is replaced with a positional label such as
/// `"Slide 2 of 5"` so every slide is announced.
///
/// # Errors
/// Returns [`CarouselError::MissingUrl`] for the first slide whose url is blank.
pub fn normalize(specs: Vec<SlideSpec>) -> Result<Vec<Slide>, CarouselError> {
    let total = specs.len();
    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let url = spec.url.trim();
            if url.is_empty() {
                return Err(CarouselError::MissingUrl { index });
            }
            let alt = match spec.alt.as_deref().map(str::trim) {
                Some(alt) if !alt.is_empty() => alt.to_string(),
                _ => positional_alt(index, total),
            };
            Ok(Slide::new(url, alt))
        })
        .collect()
}
