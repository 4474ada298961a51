mod archive_view;
mod boot_screen;
mod contact_view;
mod home_view;
mod key_hints;
mod markdown;
mod nav_bar;
mod not_found;
mod project_detail;
mod skill_matrix;
mod system_log_view;
mod text_input;
pub mod theme;

pub use archive_view::{ArchiveView, CARD_HEIGHT};
pub use boot_screen::BootScreen;
pub use contact_view::ContactView;
pub use home_view::{HomeView, ABOUT_OFFSET};
pub use key_hints::render_key_hints;
pub use markdown::{code_lines, MarkdownRenderer};
pub use nav_bar::NavBar;
pub use not_found::NotFoundView;
pub use project_detail::ProjectDetail;
pub use skill_matrix::skill_matrix_lines;
pub use system_log_view::SystemLogView;
pub use text_input::TextInputState;
