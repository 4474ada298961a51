//! Hand URLs to the platform's default handler.
//!
//! This is how the CV download and external links work: the browser (or
//! whatever the desktop has registered) does the actual fetching.

use std::io;
use std::process::{Command, Stdio};

/// Command used to open a URL on this platform
fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open `url` without waiting for the handler to exit.
pub fn open_url(url: &str) -> io::Result<()> {
    if url.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty URL"));
    }

    let mut cmd = opener_command(url);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let child = cmd.spawn()?;
    tracing::debug!(url, pid = child.id(), "Spawned URL opener");
    Ok(())
}

/// Last path segment of a URL, used as a human-readable file name.
pub fn file_name_from_url(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(url)
}
