use log::{debug, warn};
use parking_lot::Mutex;
use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

mod render;

use render::RenderTask;

pub use render::FRAMES;

/// Time between two frames when none is configured.
pub const DEFAULT_RATE: Duration = Duration::from_millis(250);

/// Where frames go. Shared so that every render task of a spinner (one per
/// `start`) writes to the same destination.
pub(crate) type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Construction options for a [`Spinner`]. Unset fields fall back to the
/// defaults: stderr as the sink and [`DEFAULT_RATE`] between frames.
#[derive(Default)]
pub struct Config {
    /// Receives the glyph and backspace bytes. Write errors are ignored.
    pub sink: Option<Box<dyn Write + Send>>,
    /// A zero rate is treated as unset.
    pub rate: Option<Duration>,
}

impl Config {
    /// Draws into `sink` instead of stderr.
    pub fn with_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sets the time between two frames.
    pub fn with_rate(mut self, rate: Duration) -> Self {
        self.rate = Some(rate);
        self
    }
}

/// The signals held while a render task is alive.
struct Running {
    cancel: tokio::sync::oneshot::Sender<()>,
    done: oneshot::Receiver<()>,
}

impl Running {
    /// Asks the render task to exit and blocks until it has erased its last
    /// frame.
    fn halt(self) {
        // The task may already be gone, in which case there is nobody to tell.
        self.cancel.send(()).ok();
        if self.done.recv().is_err() {
            debug!("Spinner render task exited without acknowledging the stop");
        }
    }
}

/// A rotating `- \ | /` indicator, drawn on a background thread.
///
/// `start` and `stop` may be called any number of times, in any order and from
/// any number of threads. Each frame is a single glyph byte followed by a
/// single backspace, so the sink never keeps a glyph once `stop` returns.
pub struct Spinner {
    sink: Sink,
    rate: Duration,
    frames: &'static [u8],
    // `Some` exactly while a render task is alive. Held across the whole of
    // `stop`, which makes "stopping" visible to other callers as a wait.
    running: Mutex<Option<Running>>,
}

impl Spinner {
    pub fn new(config: Config) -> Self {
        let sink = config
            .sink
            .unwrap_or_else(|| Box::new(io::stderr()) as Box<dyn Write + Send>);
        let rate = config
            .rate
            .filter(|rate| !rate.is_zero())
            .unwrap_or(DEFAULT_RATE);
        Spinner {
            sink: Arc::new(Mutex::new(sink)),
            rate,
            frames: FRAMES,
            running: Mutex::new(None),
        }
    }

    pub fn rate(&self) -> Duration {
        self.rate
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().is_some()
    }

    /// Starts drawing frames in the background and returns immediately.
    /// Does nothing if the spinner is already running.
    pub fn start(&self) {
        let mut running = self.running.lock();
        if running.is_some() {
            return;
        }

        let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();
        let task = RenderTask {
            rate: self.rate,
            frames: self.frames,
            sink: Arc::clone(&self.sink),
            cancel: cancel_rx,
            done: done_tx,
        };

        match task.spawn() {
            Ok(()) => {
                debug!("Spinner render task spawned ({:?} per frame)", self.rate);
                *running = Some(Running {
                    cancel: cancel_tx,
                    done: done_rx,
                });
            }
            // The task was dropped along with its signals; stay idle.
            Err(err) => warn!("Could not spawn the spinner render thread: {}", err),
        }
    }

    /// Stops the render task and waits until its last frame has been erased.
    /// Does nothing if the spinner is not running.
    ///
    /// Once this returns, nothing else is written to the sink until the next
    /// `start`.
    pub fn stop(&self) {
        let mut running = self.running.lock();
        if let Some(signals) = running.take() {
            debug!("Spinner stop requested");
            signals.halt();
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Spinner::new(Config::default())
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
