use std::io::BufRead;
use std::thread;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::CarouselEvent;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(CarouselEvent),
    Quit,
}

/// Map a typed command to the control it stands for.
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_command(line: &str) -> Option<Command> {
    let cmd = match line.trim().to_ascii_lowercase().as_str() {
        "p" | "prev" | "previous" => Command::Event(CarouselEvent::Previous),
        "n" | "next" => Command::Event(CarouselEvent::Next),
        "t" | "toggle" | "play" | "pause" => Command::Event(CarouselEvent::ToggleRotation),
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Read `reader` line by line on a detached OS thread.
///
/// A blocking read cannot be interrupted, so the thread is never joined: it
/// ends at end of input, on a read error, or once `lines` has no receiver.
/// Dropping `lines` marks end of input for [`run`].
pub fn spawn_line_reader<R>(reader: R, lines: Sender<String>) -> Result<()>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("carousel-input".into())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("input read failed: {err}");
                        break;
                    }
                };
                if lines.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

/// Turn input lines into carousel events.
///
/// End of input or `quit` cancels `cancel`; cancellation ends the task
/// without waiting for more input.
pub async fn run(
    mut lines: Receiver<String>,
    to_carousel: Sender<CarouselEvent>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("input closed; initiating shutdown");
                    cancel.cancel();
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Event(ev)) => {
                        debug!(?ev, "input");
                        if to_carousel.send(ev).await.is_err() {
                            warn!("carousel channel closed");
                            break;
                        }
                    }
                    Some(Command::Quit) => {
                        info!("quit requested");
                        cancel.cancel();
                        break;
                    }
                    None if line.trim().is_empty() => {}
                    None => warn!(input = %line.trim(), "unknown command (use p, n, t or q)"),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[test]
    fn parses_control_aliases() {
        assert_eq!(
            parse_command(" N "),
            Some(Command::Event(CarouselEvent::Next))
        );
        assert_eq!(
            parse_command("prev"),
            Some(Command::Event(CarouselEvent::Previous))
        );
        assert_eq!(
            parse_command("pause"),
            Some(Command::Event(CarouselEvent::ToggleRotation))
        );
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn forwards_events_and_cancels_at_eof() {
        let (line_tx, line_rx) = mpsc::channel(8);
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        spawn_line_reader(Cursor::new(b"n\n\nbogus\nt\np\n".to_vec()), line_tx).unwrap();
        run(line_rx, tx, cancel.clone()).await.unwrap();

        assert_eq!(rx.recv().await, Some(CarouselEvent::Next));
        assert_eq!(rx.recv().await, Some(CarouselEvent::ToggleRotation));
        assert_eq!(rx.recv().await, Some(CarouselEvent::Previous));
        assert_eq!(rx.recv().await, None);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let (line_tx, line_rx) = mpsc::channel(8);
        let (tx, mut rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        spawn_line_reader(Cursor::new(b"q\nn\n".to_vec()), line_tx).unwrap();
        run(line_rx, tx, cancel.clone()).await.unwrap();
        assert!(cancel.is_cancelled());
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn cancel_ends_task_while_input_stays_open() {
        // Sender kept alive: no line and no end of input will ever arrive.
        let (_line_tx, line_rx) = mpsc::channel::<String>(8);
        let (tx, _rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(line_rx, tx, cancel.clone()));

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("input task must stop on cancel")
            .unwrap()
            .unwrap();
    }

    #[test]
    fn runtime_shutdown_does_not_wait_for_blocked_reader() {
        // A reader that never yields a line, like a terminal nobody types into.
        struct Stalled;
        impl std::io::Read for Stalled {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                thread::sleep(Duration::from_secs(3600));
                Ok(0)
            }
        }

        let (done_tx, done_rx) = std::sync::mpsc::channel();
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let (line_tx, line_rx) = mpsc::channel(8);
                spawn_line_reader(std::io::BufReader::new(Stalled), line_tx).unwrap();
                let (tx, _rx) = mpsc::channel(8);
                let cancel = CancellationToken::new();
                cancel.cancel();
                run(line_rx, tx, cancel).await.unwrap();
            });
            drop(rt);
            done_tx.send(()).unwrap();
        });

        done_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("runtime shutdown must not block on the input thread");
    }
}
