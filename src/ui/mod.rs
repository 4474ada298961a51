pub mod action;
pub mod app;
pub mod components;
pub mod contact;
pub mod events;
pub mod route;
pub mod terminal_guard;

pub use action::{Action, KeyContext};
pub use app::{App, AppOptions};
pub use contact::{ContactForm, FormError, FormField};
pub use events::{AppEvent, Focus, Screen};
pub use route::Route;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
