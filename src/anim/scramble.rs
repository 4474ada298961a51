//! Text scramble effect.
//!
//! Characters start out as random symbols and resolve left to right, two
//! iterations per character, until the label reads its target text again.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::ticker::Ticker;

/// Symbols substituted for unresolved characters (ASCII only)
pub const SCRAMBLE_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?0123456789";

/// Default delay between scramble frames
pub const DEFAULT_SCRAMBLE_INTERVAL: Duration = Duration::from_millis(30);

/// Pure scramble state for one target string.
///
/// `iteration` counts completed steps. The displayed frame for iteration `k`
/// has its first `k / 2` characters resolved.
#[derive(Debug, Clone)]
pub struct ScrambleState {
    target: Vec<char>,
    target_text: String,
    iteration: usize,
    display: String,
}

impl ScrambleState {
    pub fn new(target: impl Into<String>) -> Self {
        let target_text = target.into();
        Self {
            target: target_text.chars().collect(),
            display: target_text.clone(),
            target_text,
            iteration: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target_text
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Number of iterations a full run takes
    pub fn max_iterations(&self) -> usize {
        self.target.len() * 2
    }

    /// Count of leading characters locked to the target
    pub fn resolved_len(&self) -> usize {
        (self.iteration / 2).min(self.target.len())
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.max_iterations()
    }

    /// Rewind to the start of a run, showing the target unscrambled
    pub fn restart(&mut self) {
        self.iteration = 0;
        self.display.clone_from(&self.target_text);
    }

    /// Advance one iteration and rebuild the display.
    ///
    /// Returns `true` while the run has further iterations to go. The final
    /// iteration always leaves the display equal to the target.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_finished() {
            self.display.clone_from(&self.target_text);
            return false;
        }

        self.iteration += 1;
        if self.is_finished() {
            self.display.clone_from(&self.target_text);
            return false;
        }

        let resolved = self.resolved_len();
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if i < resolved {
                    ch
                } else if ch == ' ' {
                    ' '
                } else {
                    random_symbol(rng)
                }
            })
            .collect();
        true
    }
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    let symbols = SCRAMBLE_SYMBOLS.as_bytes();
    symbols[rng.random_range(0..symbols.len())] as char
}

/// What a label should render right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    pub in_progress: bool,
}

struct ScrambleShared {
    state: Mutex<ScrambleRun>,
    frames: watch::Sender<ScrambleFrame>,
}

struct ScrambleRun {
    scramble: ScrambleState,
    in_progress: bool,
}

impl ScrambleShared {
    fn publish(&self, run: &ScrambleRun) {
        self.frames.send_replace(ScrambleFrame {
            text: run.scramble.display().to_string(),
            in_progress: run.in_progress,
        });
    }

    /// One tick of the running animation. Returns `false` once the run ended.
    fn advance(&self) -> bool {
        let mut run = self.state.lock();
        let more = run.scramble.step(&mut rand::rng());
        if !more {
            run.in_progress = false;
        }
        self.publish(&run);
        more
    }

    /// Snap back to the target when a run is torn down early
    fn abort(&self) {
        let mut run = self.state.lock();
        if run.in_progress {
            run.in_progress = false;
            run.scramble.restart();
            self.publish(&run);
        }
    }
}

/// Scramble animation bound to one label.
///
/// [`trigger`](Self::trigger) starts a run on a spawned task; triggers while
/// a run is already going are ignored. Dropping the animator stops it.
pub struct ScrambleAnimator {
    shared: Arc<ScrambleShared>,
    interval: Duration,
    token: CancellationToken,
}

impl ScrambleAnimator {
    pub fn new(target: impl Into<String>) -> Self {
        let scramble = ScrambleState::new(target);
        let (frames, _) = watch::channel(ScrambleFrame {
            text: scramble.display().to_string(),
            in_progress: false,
        });
        Self {
            shared: Arc::new(ScrambleShared {
                state: Mutex::new(ScrambleRun {
                    scramble,
                    in_progress: false,
                }),
                frames,
            }),
            interval: DEFAULT_SCRAMBLE_INTERVAL,
            token: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start a run unless one is in progress. Must be called within a tokio runtime.
    ///
    /// Returns whether a new run was started.
    pub fn trigger(&self) -> bool {
        {
            let mut run = self.shared.state.lock();
            if run.in_progress || run.scramble.max_iterations() == 0 {
                return false;
            }
            run.scramble.restart();
            run.in_progress = true;
            self.shared.publish(&run);
        }

        let shared = Arc::clone(&self.shared);
        let mut ticker = Ticker::new(self.interval, self.token.clone());
        tokio::spawn(async move {
            loop {
                if !ticker.tick().await {
                    shared.abort();
                    return;
                }
                if !shared.advance() {
                    return;
                }
            }
        });
        true
    }

    pub fn target(&self) -> String {
        self.shared.state.lock().scramble.target().to_string()
    }

    pub fn display(&self) -> String {
        self.shared.frames.borrow().text.clone()
    }

    pub fn in_progress(&self) -> bool {
        self.shared.frames.borrow().in_progress
    }

    pub fn frame(&self) -> ScrambleFrame {
        self.shared.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScrambleFrame> {
        self.shared.frames.subscribe()
    }
}

impl Drop for ScrambleAnimator {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_end(state: &mut ScrambleState, rng: &mut StdRng) -> Vec<(usize, String)> {
        let mut frames = Vec::new();
        while state.step(rng) {
            frames.push((state.iteration(), state.display().to_string()));
        }
        frames.push((state.iteration(), state.display().to_string()));
        frames
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(SCRAMBLE_SYMBOLS.len(), 39);
        assert!(SCRAMBLE_SYMBOLS.is_ascii());
        assert!(!SCRAMBLE_SYMBOLS.contains(' '));
        assert!(SCRAMBLE_SYMBOLS.contains('"'));
        assert!(SCRAMBLE_SYMBOLS.ends_with("0123456789"));
    }

    #[test]
    fn test_converges_after_two_iterations_per_char() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = ScrambleState::new("AB CD");
        assert_eq!(state.max_iterations(), 10);

        let frames = run_to_end(&mut state, &mut rng);
        assert_eq!(frames.len(), 10);
        assert_eq!(frames.last().map(|(i, _)| *i), Some(10));
        assert_eq!(state.display(), "AB CD");
        assert!(state.is_finished());
    }

    #[test]
    fn test_iteration_four_locks_first_two() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = ScrambleState::new("AB CD");
        for _ in 0..4 {
            assert!(state.step(&mut rng));
        }
        assert_eq!(state.iteration(), 4);
        assert_eq!(state.resolved_len(), 2);

        let shown: Vec<char> = state.display().chars().collect();
        assert_eq!(shown.len(), 5);
        assert_eq!(&shown[..3], &['A', 'B', ' ']);
        // Unresolved positions come from the symbol table, never the letters
        for ch in &shown[3..] {
            assert!(SCRAMBLE_SYMBOLS.contains(*ch));
        }
    }

    #[test]
    fn test_step_after_finish_is_stable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = ScrambleState::new("ok");
        while state.step(&mut rng) {}
        assert!(!state.step(&mut rng));
        assert_eq!(state.display(), "ok");
        assert_eq!(state.iteration(), 4);
    }

    #[test]
    fn test_empty_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = ScrambleState::new("");
        assert!(state.is_finished());
        assert!(!state.step(&mut rng));
        assert_eq!(state.display(), "");
    }

    proptest! {
        #[test]
        fn prop_always_converges_to_target(target in "[ a-zA-Z0-9_]{0,24}", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = ScrambleState::new(target.clone());
            let frames = run_to_end(&mut state, &mut rng);
            prop_assert_eq!(state.display(), target.as_str());
            prop_assert_eq!(frames.last().map(|(_, text)| text.as_str()), Some(target.as_str()));
        }

        #[test]
        fn prop_resolved_chars_never_change(target in "[ a-zA-Z]{1,16}", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = ScrambleState::new(target.clone());
            let expected: Vec<char> = target.chars().collect();
            for (iteration, text) in run_to_end(&mut state, &mut rng) {
                let shown: Vec<char> = text.chars().collect();
                prop_assert_eq!(shown.len(), expected.len());
                for i in 0..(iteration / 2).min(expected.len()) {
                    prop_assert_eq!(shown[i], expected[i]);
                }
            }
        }

        #[test]
        fn prop_spaces_are_literal(target in "[ a-z]{1,16}", seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = ScrambleState::new(target.clone());
            let expected: Vec<char> = target.chars().collect();
            for (_, text) in run_to_end(&mut state, &mut rng) {
                for (shown, want) in text.chars().zip(expected.iter()) {
                    if *want == ' ' {
                        prop_assert_eq!(shown, ' ');
                    }
                }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_animator_runs_to_completion() {
        let animator = ScrambleAnimator::new("Projects");
        assert!(animator.trigger());
        assert!(animator.in_progress());
        let mut rx = animator.subscribe();

        let mut frames = 0;
        loop {
            rx.changed().await.expect("animator alive");
            frames += 1;
            if !rx.borrow_and_update().in_progress {
                break;
            }
        }
        assert_eq!(frames, 16);
        assert_eq!(animator.display(), "Projects");
        assert!(!animator.in_progress());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_while_running_is_ignored() {
        let animator = ScrambleAnimator::new("Contact");
        assert!(animator.trigger());

        tokio::time::sleep(Duration::from_millis(95)).await;
        let iteration_before = animator.shared.state.lock().scramble.iteration();
        assert_eq!(iteration_before, 3);

        assert!(!animator.trigger());
        assert_eq!(animator.shared.state.lock().scramble.iteration(), 3);

        // Original schedule still holds: 14 iterations at 30ms
        tokio::time::sleep(Duration::from_millis(420 - 95 + 5)).await;
        assert!(!animator.in_progress());
        assert_eq!(animator.display(), "Contact");

        // A finished run can be started again
        assert!(animator.trigger());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_label_never_runs() {
        let animator = ScrambleAnimator::new("");
        assert!(!animator.trigger());
        assert!(!animator.in_progress());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_run() {
        let animator = ScrambleAnimator::new("About");
        let rx = animator.subscribe();
        animator.trigger();
        tokio::time::sleep(Duration::from_millis(40)).await;
        drop(animator);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let frame = rx.borrow().clone();
        assert_eq!(frame.text, "About");
        assert!(!frame.in_progress);
    }
}
