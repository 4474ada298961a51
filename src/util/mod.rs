//! Utility modules

pub mod opener;
pub mod paths;

pub use opener::{file_name_from_url, open_url};
pub use paths::{config_path, data_dir, init_data_dir, log_file_path, logs_dir};
