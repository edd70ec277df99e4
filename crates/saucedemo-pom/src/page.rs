// Page - Handle on one browser tab, independent of the automation backend
//
// The page object model only needs a small slice of a browser driver:
// navigation, a handful of element queries and three interactions. That slice
// is the PageDriver trait. Page wraps a shared driver together with the
// assertion timing used by expectations created from its locators.
//
// Architecture:
// - PageDriver is the seam: PlaywrightDriver in production, a scripted fake in unit tests
// - Page is cheap to clone (Arc + two Durations) and holds no element state
// - Locators created here are lazy; nothing touches the driver until an action runs

use crate::error::Result;
use crate::locator::Locator;
use crate::selector::{AriaRole, Selector};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for assertions (5 seconds, matching Playwright)
pub const DEFAULT_EXPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Browser capability consumed by the page object model.
///
/// Selectors arrive as rendered Playwright selector strings (see [`crate::Selector`]).
/// Actions (`click`, `fill`, `select_option`) wait for actionability inside the driver;
/// queries (`count`, `is_visible`, `all_text_contents`) return the current state without
/// waiting.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigates the page to `url`.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Returns the current URL of the page.
    async fn url(&self) -> Result<String>;

    /// Returns the number of elements matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Returns whether the element matching `selector` is visible (false when absent).
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Returns the rendered text of the element matching `selector`.
    async fn inner_text(&self, selector: &str) -> Result<String>;

    /// Returns the text content of every element matching `selector`, in document order.
    async fn all_text_contents(&self, selector: &str) -> Result<Vec<String>>;

    /// Returns the value of the input, textarea or select matching `selector`.
    async fn input_value(&self, selector: &str) -> Result<String>;

    /// Clicks the element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Fills the input matching `selector` with `value`.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Selects the option with `value` in the select element matching `selector`.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;
}

/// A browser page bound to a driver.
///
/// # Example
///
/// ```ignore
/// use saucedemo_pom::{Page, PageObjectModel, expect};
///
/// async fn check_title(page: &Page) -> saucedemo_pom::Result<()> {
///     let pom = PageObjectModel::new(page);
///     expect(pom.inventory().title()).to_have_text("Products").await
/// }
/// ```
#[derive(Clone)]
pub struct Page {
    driver: Arc<dyn PageDriver>,
    expect_timeout: Duration,
    poll_interval: Duration,
}

impl Page {
    /// Creates a page over a shared driver with default assertion timing.
    pub fn new(driver: Arc<dyn PageDriver>) -> Self {
        Self {
            driver,
            expect_timeout: DEFAULT_EXPECT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates a page that owns `driver`.
    pub fn from_driver<D: PageDriver + 'static>(driver: D) -> Self {
        Self::new(Arc::new(driver))
    }

    /// Sets the timeout used by expectations created from this page's locators.
    pub fn with_expect_timeout(mut self, timeout: Duration) -> Self {
        self.expect_timeout = timeout;
        self
    }

    /// Sets the poll interval used by expectations created from this page's locators.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn expect_timeout(&self) -> Duration {
        self.expect_timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub(crate) fn driver(&self) -> &dyn PageDriver {
        self.driver.as_ref()
    }

    /// Returns true when both handles drive the same browser page.
    pub fn same_page(&self, other: &Page) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.driver), Arc::as_ptr(&other.driver))
    }

    /// Navigates to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("goto {}", url);
        self.driver.goto(url).await
    }

    /// Returns the current URL.
    pub async fn url(&self) -> Result<String> {
        self.driver.url().await
    }

    /// Locates elements by raw CSS selector.
    pub fn locator(&self, css: &str) -> Locator {
        Locator::new(self.clone(), Selector::css(css))
    }

    /// Locates elements by their `data-test` attribute.
    pub fn get_by_test_id(&self, id: &str) -> Locator {
        Locator::new(self.clone(), Selector::test_id(id))
    }

    /// Locates elements by accessible role and accessible name.
    pub fn get_by_role(&self, role: AriaRole, name: &str) -> Locator {
        Locator::new(self.clone(), Selector::role(role, name))
    }

    /// Locates elements by visible text.
    pub fn get_by_text(&self, text: &str) -> Locator {
        Locator::new(self.clone(), Selector::text(text))
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("expect_timeout", &self.expect_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
