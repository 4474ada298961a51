//! Timed animation state machines.
//!
//! Both machines are independent and restartable. Each runs on its own tokio
//! task driven by a [`Ticker`], publishes frames through a `watch` channel,
//! and stops when its owner is dropped.

pub mod reveal;
pub mod scramble;
pub mod ticker;

pub use reveal::{
    RevealFrame, RevealHandle, RevealPhase, RevealSequence, RevealTimer, DEFAULT_SETTLE,
    DEFAULT_TEAR,
};
pub use scramble::{
    ScrambleAnimator, ScrambleFrame, ScrambleState, DEFAULT_SCRAMBLE_INTERVAL, SCRAMBLE_SYMBOLS,
};
pub use ticker::Ticker;
