//! Outbound links. All destinations are fixed strings from the site content;
//! nothing typed by the user is ever turned into a URL.

use anyhow::{Context, Result};

/// Opens a URL somewhere outside the terminal.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Hands URLs to the platform's default browser.
#[derive(Debug, Clone, Copy)]
pub struct SystemOpener {
    launch_browser: bool,
}

impl SystemOpener {
    /// With `launch_browser` off, links are only logged.
    pub fn new(launch_browser: bool) -> Self {
        Self { launch_browser }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if !self.launch_browser {
            tracing::info!(url, "browser launch disabled, not opening link");
            return Ok(());
        }
        tracing::info!(url, "opening link");
        open::that(url).with_context(|| format!("Failed to open link: {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_opener_succeeds_without_launching() {
        let mut opener = SystemOpener::new(false);
        assert!(opener.open("https://wa.link/8qk7mn").is_ok());
    }

    #[test]
    fn test_opener_is_object_safe() {
        let _opener: Box<dyn LinkOpener> = Box::new(SystemOpener::new(false));
    }
}
