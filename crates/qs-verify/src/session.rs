// Browser session lifecycle
//
// One session per script run. The browser is closed exactly once, on both
// success and failure paths: `close()` consumes the session, and a page
// creation failure during launch closes the half-built browser before the
// error propagates.

use std::path::Path;

use playwright_rs::{Browser, LaunchOptions, Page, Playwright};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// An exclusively-owned headless browser with a single open page.
pub struct Session {
    // Held so the driver process outlives the browser handle.
    _playwright: Playwright,
    browser: Browser,
    page: Page,
}

impl Session {
    /// Launches headless Chromium with one page.
    pub async fn launch() -> Result<Self> {
        Self::launch_with(LaunchOptions::new().headless(true)).await
    }

    pub async fn launch_with(options: LaunchOptions) -> Result<Self> {
        let playwright = Playwright::launch().await.map_err(Error::Launch)?;
        let browser = playwright
            .chromium()
            .launch_with_options(options)
            .await
            .map_err(Error::Launch)?;

        let page = match browser.new_page().await {
            Ok(page) => page,
            Err(source) => {
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "could not close browser after page creation failed");
                }
                return Err(Error::Launch(source));
            }
        };

        debug!(browser = browser.name(), version = browser.version(), "browser session started");
        Ok(Self {
            _playwright: playwright,
            browser,
            page,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Best-effort failure screenshot: a capture error is logged, never
    /// propagated, so it cannot mask the error that triggered it.
    pub async fn try_screenshot(&self, path: &Path) {
        match self.page.screenshot_to_file(path, None).await {
            Ok(_) => debug!(path = %path.display(), "failure screenshot captured"),
            Err(err) => {
                warn!(error = %err, path = %path.display(), "could not capture failure screenshot");
            }
        }
    }

    /// Closes the browser, consuming the session.
    pub async fn close(self) -> Result<()> {
        debug!("closing browser session");
        self.browser.close().await.map_err(Error::Close)
    }
}
