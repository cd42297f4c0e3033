use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::carousel::Carousel;
use crate::events::CarouselEvent;
use crate::render::RenderSurface;

/// Owns the carousel for its whole life and applies events one at a time.
///
/// Rules:
/// - Mount `surface` and start rotation if auto-rotation was requested.
/// - Apply clicks and timer ticks in arrival order.
/// - On cancellation, or once every event sender is gone, tear down
///   (stopping the rotation timer) and return.
#[instrument(
    skip_all,
    fields(slides = carousel.slides().len(), interval = %humantime::format_duration(carousel.interval()))
)]
pub async fn run<S: RenderSurface>(
    mut carousel: Carousel<S>,
    surface: S,
    mut events: Receiver<CarouselEvent>,
    cancel: CancellationToken,
) -> Result<()> {
    carousel.connect(surface);
    info!(rotating = carousel.is_rotating(), "carousel connected");

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; tearing down carousel");
                break;
            }
            maybe_ev = events.recv() => match maybe_ev {
                Some(ev) => carousel.handle(ev),
                None => {
                    info!("event sources closed; tearing down carousel");
                    break;
                }
            }
        }
    }

    carousel.teardown();
    Ok(())
}
