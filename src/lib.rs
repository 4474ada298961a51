pub mod anim;
pub mod config;
pub mod data;
pub mod syslog;
pub mod ui;
pub mod util;

pub use anim::{RevealHandle, RevealTimer, ScrambleAnimator};
pub use config::Config;
pub use data::{filter_projects, Project, ProjectFilter, PROJECTS};
pub use syslog::{LogEntry, LogSink, SystemLog};
pub use ui::{App, AppOptions, Route};
