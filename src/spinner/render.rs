use super::Sink;
use log::{trace, warn};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};
use tokio::time::{self, Instant, MissedTickBehavior};

/// The glyphs drawn, in order, one per frame.
pub const FRAMES: &[u8] = b"-\\|/";

const BACKSPACE: &[u8] = b"\x08";

const THREAD_NAME: &str = "terminal-spinner";

/// Everything a render task needs, owned by the task itself so that it never
/// has to look at the spinner that started it.
pub(super) struct RenderTask {
    pub rate: Duration,
    pub frames: &'static [u8],
    pub sink: Sink,
    pub cancel: tokio::sync::oneshot::Receiver<()>,
    pub done: oneshot::Sender<()>,
}

impl RenderTask {
    /// Runs the task on its own thread. The thread drives a single-threaded
    /// tokio runtime, so starting a spinner does not require one from the
    /// caller.
    pub fn spawn(self) -> io::Result<()> {
        thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || self.run())
            .map(|_| ())
    }

    fn run(self) {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                // Dropping `done` unblocks whoever stops us.
                warn!("Could not build the spinner runtime: {}", err);
                return;
            }
        };

        let RenderTask {
            rate,
            frames,
            sink,
            cancel,
            done,
        } = self;
        runtime.block_on(render(rate, frames, &sink, cancel));

        if done.send(()).is_err() {
            trace!("Spinner stopped with nobody waiting");
        }
    }
}

/// Draws `frames` in a loop until `cancel` fires (or its sender goes away).
/// Every glyph is erased before the next one is drawn and before returning.
async fn render(
    rate: Duration,
    frames: &[u8],
    sink: &Sink,
    mut cancel: tokio::sync::oneshot::Receiver<()>,
) {
    // The first tick is one full period away, as with every following one.
    let mut ticks = time::interval_at(Instant::now() + rate, rate);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    for frame in frames.iter().cycle() {
        write(sink, std::slice::from_ref(frame));

        let cancelled = tokio::select! {
            biased;
            _ = &mut cancel => true,
            _ = ticks.tick() => false,
        };

        write(sink, BACKSPACE);
        if cancelled {
            return;
        }
    }
}

/// A failed write is dropped: the spinner is cosmetic and must never take the
/// host program down with it.
fn write(sink: &Sink, bytes: &[u8]) {
    let mut sink = sink.lock();
    if let Err(err) = sink.write_all(bytes).and_then(|_| sink.flush()) {
        trace!("Spinner write failed: {}", err);
    }
}
