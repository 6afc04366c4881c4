// Session - driver handle plus waiting rules shared by every page object
//
// Actions wait for their element before touching it, polling the driver
// until the element shows up or the timeout expires. Presence checks never
// wait.

use crate::config::SuiteConfig;
use crate::driver::Driver;
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// One browser tab plus the site it is pointed at.
///
/// Cloning is cheap; clones share the same tab.
#[derive(Clone)]
pub struct Session {
    driver: Arc<dyn Driver>,
    base_url: Url,
    timeout: Duration,
    poll_interval: Duration,
}

impl Session {
    pub fn new(driver: Arc<dyn Driver>, config: &SuiteConfig) -> Self {
        Self {
            driver,
            base_url: config.base_url.clone(),
            timeout: config.timeout_duration(),
            poll_interval: config.poll_interval_duration(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn open(&self, url: &Url) -> Result<()> {
        self.driver.goto(url.as_str()).await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.driver.current_url().await
    }

    /// Returns whether `selector` matches anything right now.
    pub async fn is_present(&self, selector: &str) -> Result<bool> {
        Ok(self.driver.count(selector).await? > 0)
    }

    pub async fn count(&self, selector: &str) -> Result<usize> {
        self.driver.count(selector).await
    }

    /// Waits until `selector` matches at least one element.
    pub async fn wait_for(&self, selector: &str) -> Result<()> {
        self.wait_for_any(&[selector]).await.map(|_| ())
    }

    /// Waits until one of `selectors` matches and returns its index.
    ///
    /// Selectors are checked in order on every poll, so the earliest one wins
    /// when several are present at once.
    pub async fn wait_for_any(&self, selectors: &[&str]) -> Result<usize> {
        let start = Instant::now();

        loop {
            for (index, selector) in selectors.iter().enumerate() {
                match self.driver.count(selector).await {
                    Ok(n) if n > 0 => return Ok(index),
                    Ok(_) => {}
                    // A document that is being replaced cannot be queried.
                    Err(e) => tracing::trace!("count {} failed: {}", selector, e),
                }
            }

            if start.elapsed() >= self.timeout {
                return Err(Error::element_not_found(
                    &selectors.join(" | "),
                    self.timeout,
                ));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        self.wait_for(selector).await?;
        tracing::debug!("click {}", selector);
        self.driver.click(selector).await
    }

    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.wait_for(selector).await?;
        tracing::debug!("fill {} ({} chars)", selector, text.chars().count());
        self.driver.fill(selector, text).await
    }

    pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        self.wait_for(selector).await?;
        tracing::debug!("select {} = {}", selector, value);
        self.driver.select_option(selector, value).await
    }

    pub async fn check(&self, selector: &str) -> Result<()> {
        self.wait_for(selector).await?;
        tracing::debug!("check {}", selector);
        self.driver.check(selector).await
    }

    /// Reads the displayed text of `selector`, trimmed at both ends.
    pub async fn text(&self, selector: &str) -> Result<String> {
        self.wait_for(selector).await?;
        let text = self.driver.inner_text(selector).await?;
        Ok(text.trim().to_string())
    }

    /// Waits for a view's signature element.
    ///
    /// A timeout is reported as landing on the wrong page, with the URL the
    /// browser actually shows.
    pub async fn expect_view(&self, view: &str, signature: &str) -> Result<()> {
        match self.wait_for(signature).await {
            Ok(()) => {
                tracing::debug!("on {} view", view);
                Ok(())
            }
            Err(Error::ElementNotFound { .. }) => Err(Error::UnexpectedPage {
                expected: view.to_string(),
                url: self.current_url().await?,
            }),
            Err(e) => Err(e),
        }
    }
}

/// Addresses the `index`-th match of `selector` (0-indexed).
pub fn nth(selector: &str, index: usize) -> String {
    format!("{} >> nth={}", selector, index)
}
