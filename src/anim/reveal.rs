//! Sequenced reveal timer.
//!
//! Discloses an ordered list of lines one per tick, then runs a short
//! two-stage grace period (settle, then glitch) before signalling completion.
//! Used by the boot screen, but knows nothing about rendering.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, ReentrantMutex};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::ticker::{sleep_unless_cancelled, Ticker};

/// Default delay between the last revealed line and the glitch transition
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(400);
/// Default length of the glitch transition before completion fires
pub const DEFAULT_TEAR: Duration = Duration::from_millis(300);

/// Where a reveal run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Lines are still being disclosed (or settling after the last one)
    Revealing,
    /// Grace period screen-tear before completion
    Glitching,
    /// Completion callback has fired
    Complete,
    /// Cancelled before completion; nothing further will happen
    Cancelled,
}

/// Snapshot of a reveal run, published on every state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame {
    /// Prefix of the lines revealed so far
    pub revealed: Vec<String>,
    /// Total number of lines in the sequence
    pub total: usize,
    pub phase: RevealPhase,
}

impl RevealFrame {
    /// Fraction of lines revealed, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.revealed.len() as f64 / self.total as f64
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() == self.total
    }
}

/// Pure reveal state: the fixed lines and how many are visible.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    lines: Vec<String>,
    revealed_count: usize,
}

impl RevealSequence {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            revealed_count: 0,
        }
    }

    /// Reveal one more line. Returns `false` if everything was already visible.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed_count += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_count >= self.lines.len()
    }

    pub fn revealed(&self) -> &[String] {
        &self.lines[..self.revealed_count]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn frame(&self, phase: RevealPhase) -> RevealFrame {
        RevealFrame {
            revealed: self.revealed().to_vec(),
            total: self.lines.len(),
            phase,
        }
    }
}

type CompletionFn = Box<dyn FnOnce() + Send + 'static>;

struct RevealState {
    sequence: RevealSequence,
    phase: RevealPhase,
    on_complete: Option<CompletionFn>,
}

struct RevealShared {
    state: Mutex<RevealState>,
    frames: watch::Sender<RevealFrame>,
    token: CancellationToken,
    /// Held across the completion callback. Reentrant so the callback can
    /// cancel its own handle.
    firing: ReentrantMutex<()>,
}

impl RevealShared {
    /// Apply `f` unless the run has been cancelled or finished, then publish.
    ///
    /// Publishing happens under the state lock so frames are totally ordered
    /// with respect to `cancel`.
    fn update(&self, f: impl FnOnce(&mut RevealState)) -> bool {
        let mut state = self.state.lock();
        if matches!(state.phase, RevealPhase::Cancelled | RevealPhase::Complete) {
            return false;
        }
        f(&mut state);
        self.frames.send_replace(state.sequence.frame(state.phase));
        true
    }

    fn is_revealed(&self) -> bool {
        self.state.lock().sequence.is_complete()
    }

    fn complete(&self) {
        let _firing = self.firing.lock();
        let callback = {
            let mut state = self.state.lock();
            if matches!(state.phase, RevealPhase::Cancelled | RevealPhase::Complete) {
                return;
            }
            state.phase = RevealPhase::Complete;
            self.frames
                .send_replace(state.sequence.frame(RevealPhase::Complete));
            state.on_complete.take()
        };
        // Outside the state lock so the callback may inspect the handle
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Blocks while a completion callback is running on another thread.
    fn cancel(&self) {
        let _firing = self.firing.lock();
        {
            let mut state = self.state.lock();
            if !matches!(state.phase, RevealPhase::Cancelled | RevealPhase::Complete) {
                state.phase = RevealPhase::Cancelled;
                state.on_complete = None;
                self.frames
                    .send_replace(state.sequence.frame(RevealPhase::Cancelled));
            }
        }
        self.token.cancel();
    }
}

/// Reveal timer configuration.
#[derive(Debug, Clone, Copy)]
pub struct RevealTimer {
    interval: Duration,
    settle: Duration,
    tear: Duration,
}

impl RevealTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            settle: DEFAULT_SETTLE,
            tear: DEFAULT_TEAR,
        }
    }

    /// Override the post-reveal grace period (settle, then glitch)
    pub fn with_grace(mut self, settle: Duration, tear: Duration) -> Self {
        self.settle = settle;
        self.tear = tear;
        self
    }

    /// Total delay between the last revealed line and completion
    pub fn grace(&self) -> Duration {
        self.settle + self.tear
    }

    /// Start revealing `lines` on a spawned task.
    ///
    /// Must be called from within a tokio runtime. `on_complete` fires at most
    /// once, and never after [`RevealHandle::cancel`] has returned.
    pub fn spawn<I, S, F>(&self, lines: I, on_complete: F) -> RevealHandle
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce() + Send + 'static,
    {
        let sequence = RevealSequence::new(lines);
        let (frames, _) = watch::channel(sequence.frame(RevealPhase::Revealing));
        let shared = Arc::new(RevealShared {
            state: Mutex::new(RevealState {
                sequence,
                phase: RevealPhase::Revealing,
                on_complete: Some(Box::new(on_complete)),
            }),
            frames,
            token: CancellationToken::new(),
            firing: ReentrantMutex::new(()),
        });

        tokio::spawn(drive(Arc::clone(&shared), *self));
        RevealHandle { shared }
    }
}

/// Start a reveal with the default grace period.
pub fn start<I, S, F>(lines: I, interval: Duration, on_complete: F) -> RevealHandle
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnOnce() + Send + 'static,
{
    RevealTimer::new(interval).spawn(lines, on_complete)
}

async fn drive(shared: Arc<RevealShared>, timer: RevealTimer) {
    let token = shared.token.clone();
    let had_lines = !shared.is_revealed();
    let mut ticker = Ticker::new(timer.interval, token.clone());

    while !shared.is_revealed() {
        if !ticker.tick().await {
            return;
        }
        let mut revealed = 0;
        if !shared.update(|state| {
            state.sequence.advance();
            revealed = state.sequence.revealed_count();
        }) {
            return;
        }
        tracing::trace!(revealed, "Reveal tick");
    }

    if had_lines {
        if !sleep_unless_cancelled(timer.settle, &token).await {
            return;
        }
        if !shared.update(|state| state.phase = RevealPhase::Glitching) {
            return;
        }
        if !sleep_unless_cancelled(timer.tear, &token).await {
            return;
        }
    }

    shared.complete();
}

/// Cancellable reference to a running reveal.
///
/// Dropping the handle cancels the run.
pub struct RevealHandle {
    shared: Arc<RevealShared>,
}

impl RevealHandle {
    /// Stop future ticks and suppress a pending completion. Idempotent.
    ///
    /// If the completion callback is already running it finishes before this
    /// returns.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// Latest published frame
    pub fn frame(&self) -> RevealFrame {
        self.shared.frames.borrow().clone()
    }

    pub fn phase(&self) -> RevealPhase {
        self.shared.state.lock().phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.phase(),
            RevealPhase::Complete | RevealPhase::Cancelled
        )
    }

    /// Receive every frame as it is published
    pub fn subscribe(&self) -> watch::Receiver<RevealFrame> {
        self.shared.frames.subscribe()
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}
