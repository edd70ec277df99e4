// PlaywrightDriver - PageDriver backed by a playwright-rs Page
//
// Every call builds a fresh playwright-rs Locator from the rendered selector,
// so nothing is cached between calls and each action gets Playwright's own
// actionability waiting.
//
// Queries used by the expect API must not block: text and value reads check
// the match count first and report ElementNotFound instead of waiting for
// Playwright's 30 second action timeout.

use crate::error::{Error, Result};
use crate::page::PageDriver;
use async_trait::async_trait;

/// Production driver wrapping one playwright-rs page.
#[derive(Clone)]
pub struct PlaywrightDriver {
    page: playwright_rs::Page,
}

impl PlaywrightDriver {
    pub fn new(page: playwright_rs::Page) -> Self {
        Self { page }
    }

    /// Returns the wrapped playwright-rs page for operations the page object model
    /// does not cover (screenshots, routing, evaluate).
    pub fn inner(&self) -> &playwright_rs::Page {
        &self.page
    }

    async fn existing(&self, selector: &str) -> Result<playwright_rs::Locator> {
        let locator = self.page.locator(selector).await;
        if locator.count().await? == 0 {
            return Err(Error::ElementNotFound(selector.to_string()));
        }
        Ok(locator)
    }
}

#[async_trait]
impl PageDriver for PlaywrightDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);
        self.page.goto(url, None).await?;
        Ok(())
    }

    async fn url(&self) -> Result<String> {
        Ok(self.page.url())
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let locator = self.page.locator(selector).await;
        Ok(locator.count().await?)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let locator = self.page.locator(selector).await;
        Ok(locator.is_visible().await?)
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        let locator = self.existing(selector).await?;
        Ok(locator.inner_text().await?)
    }

    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>> {
        let locator = self.page.locator(selector).await;
        let count = locator.count().await?;
        let mut texts = Vec::with_capacity(count);
        for index in 0..count {
            let text = locator.nth(index as i32).text_content().await?;
            texts.push(text.unwrap_or_default());
        }
        tracing::debug!("{} matched {} elements", selector, texts.len());
        Ok(texts)
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        let locator = self.existing(selector).await?;
        Ok(locator.input_value(None).await?)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let locator = self.page.locator(selector).await;
        locator
            .click(None)
            .await
            .map_err(|e| Error::from(e).context(format!("click {}", selector)))
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let locator = self.page.locator(selector).await;
        locator
            .fill(value, None)
            .await
            .map_err(|e| Error::from(e).context(format!("fill {}", selector)))
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        let locator = self.page.locator(selector).await;
        let selected = locator
            .select_option(value, None)
            .await
            .map_err(|e| Error::from(e).context(format!("select_option {}", selector)))?;
        tracing::debug!("{} selected {:?}", selector, selected);
        Ok(())
    }
}

impl std::fmt::Debug for PlaywrightDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaywrightDriver")
            .field("url", &self.page.url())
            .finish()
    }
}
