// Browser driver seam
//
// Page objects only ever talk to a `Driver`: wait-and-fetch is built on
// `count`, everything else is one primitive per user interaction. The
// Playwright implementation below is what runs against a real site.

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::Result;
use async_trait::async_trait;
use playwright_rs::{Browser, BrowserContext, ClickOptions, LaunchOptions, Page, Playwright};
use std::sync::Arc;

/// Browser primitives required by the page objects.
///
/// Selectors use Playwright syntax; `"<selector> >> nth=<i>"` addresses the
/// i-th match.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the tab to `url`.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Returns the last committed URL.
    async fn current_url(&self) -> Result<String>;

    /// Returns how many elements match `selector` right now. Never waits.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Clicks the first match.
    ///
    /// Returns once a navigation started by the click has committed, so the
    /// elements seen afterwards belong to the response document. A form step
    /// that is submitted again therefore never mistakes the previous
    /// attempt's error for the new one.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Replaces the value of an input or textarea.
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Chooses the option whose value is `value`.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;

    /// Ensures a checkbox is checked.
    async fn check(&self, selector: &str) -> Result<()>;

    /// Returns the rendered text of the first match.
    async fn inner_text(&self, selector: &str) -> Result<String>;

    /// Releases whatever the driver holds for one scenario.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Hands out a fresh driver for every scenario.
#[async_trait]
pub trait DriverFactory: Send + Sync {
    async fn open_driver(&self) -> Result<Arc<dyn Driver>>;
}

/// `Driver` over a Playwright page living in its own browser context.
pub struct PlaywrightDriver {
    context: BrowserContext,
    page: Page,
}

impl PlaywrightDriver {
    /// Opens an isolated context (own cookies and storage) with one page.
    pub async fn open(browser: &Browser) -> Result<Self> {
        let context = browser.new_context().await?;
        let page = context.new_page().await?;
        Ok(Self { context, page })
    }
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("goto {}", url);
        self.page.goto(url, None).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.page.url())
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.locator(selector).await.count().await?)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let options = ClickOptions::builder().no_wait_after(false).build();
        self.page
            .locator(selector)
            .await
            .click(Some(options))
            .await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.page.locator(selector).await.fill(text, None).await?;
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .select_option(value, None)
            .await?;
        Ok(())
    }

    async fn check(&self, selector: &str) -> Result<()> {
        self.page.locator(selector).await.check(None).await?;
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        Ok(self.page.locator(selector).await.inner_text().await?)
    }

    async fn close(&self) -> Result<()> {
        Ok(self.context.close().await?)
    }
}

/// Owns the Playwright server and one browser for the whole run.
pub struct PlaywrightLauncher {
    playwright: Playwright,
    browser: Browser,
}

impl PlaywrightLauncher {
    /// Starts Playwright and launches the configured browser.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        tracing::debug!(
            "Launching {} (headless: {})",
            config.browser,
            config.headless
        );
        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let options = LaunchOptions::default().headless(config.headless);
        let browser = browser_type.launch_with_options(options).await?;
        Ok(Self {
            playwright,
            browser,
        })
    }

    /// Closes the browser and stops the Playwright server.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

#[async_trait]
impl DriverFactory for PlaywrightLauncher {
    async fn open_driver(&self) -> Result<Arc<dyn Driver>> {
        let driver = PlaywrightDriver::open(&self.browser).await?;
        Ok(Arc::new(driver))
    }
}
