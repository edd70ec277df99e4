// Assertions - Auto-retry assertions for testing
//
// Provides an expect() API with auto-retry logic matching Playwright's assertions.
// Each assertion samples the page until the condition holds or the timeout
// elapses, then fails with a message naming the selector, the expectation and
// the last observed state. This is the only waiting the suite does on its own.
//
// Timing defaults come from the locator's Page (see Page::with_expect_timeout),
// so a per-test configuration never leaks into other tests.
//
// See: https://playwright.dev/docs/test-assertions

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::page::Page;
use regex::Regex;
use std::time::{Duration, Instant};

/// Creates an expectation for a locator with auto-retry behavior.
///
/// Assertions retry until they pass or the page's expect timeout elapses (default: 5 seconds).
///
/// # Example
///
/// ```ignore
/// use saucedemo_pom::{expect, PageObjectModel};
///
/// let pom = PageObjectModel::new(&page);
/// expect(pom.inventory().title()).to_have_text("Products").await?;
/// expect(pom.shared().shopping_cart_link()).to_be_empty().await?;
/// expect(pom.login().error_message("Epic sadface")).not().to_be_visible().await?;
/// ```
pub fn expect(locator: Locator) -> Expectation {
    Expectation::new(locator)
}

/// Creates an expectation on page-level state (URL).
pub fn expect_page(page: &Page) -> PageExpectation {
    PageExpectation::new(page.clone())
}

// What a single poll samples from the locator.
enum Check<'a> {
    Visible,
    Text(&'a str),
    ContainsText(&'a str),
    TextRegex(&'a Regex),
    Empty,
    Value(&'a str),
    Count(usize),
}

/// Expectation wraps a locator and provides assertion methods with auto-retry.
pub struct Expectation {
    locator: Locator,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// Allow clippy::wrong_self_convention for to_* methods that consume self
// This matches Playwright's expect API pattern where assertions are chained and consumed
#[allow(clippy::wrong_self_convention)]
impl Expectation {
    pub(crate) fn new(locator: Locator) -> Self {
        let timeout = locator.page().expect_timeout();
        let poll_interval = locator.page().poll_interval();
        Self {
            locator,
            timeout,
            poll_interval,
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    ///
    /// Note: We intentionally use `.not()` method instead of implementing `std::ops::Not`
    /// to match Playwright's API across all language bindings.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Asserts that the element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        self.run(Check::Visible, "to be visible".to_string()).await
    }

    /// Asserts that the element is hidden or absent.
    pub async fn to_be_hidden(self) -> Result<()> {
        // to_be_hidden is the opposite of to_be_visible
        self.not().to_be_visible().await
    }

    /// Asserts that the element has the specified text (exact match after trimming).
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let expected = expected.trim();
        let description = format!("to have text '{}'", expected);
        self.run(Check::Text(expected), description).await
    }

    /// Asserts that the element's text contains the specified substring.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let description = format!("to contain text '{}'", expected);
        self.run(Check::ContainsText(expected), description).await
    }

    /// Asserts that the element's text matches the specified regex pattern.
    pub async fn to_have_text_regex(self, pattern: &str) -> Result<()> {
        let re = Regex::new(pattern)
            .map_err(|e| Error::AssertionFailed(format!("Invalid regex: {}", e)))?;
        let description = format!("to match pattern '{}'", pattern);
        self.run(Check::TextRegex(&re), description).await
    }

    /// Asserts that the element exists and has no text.
    pub async fn to_be_empty(self) -> Result<()> {
        self.run(Check::Empty, "to be empty".to_string()).await
    }

    /// Asserts that the input or select element has the specified value.
    pub async fn to_have_value(self, expected: &str) -> Result<()> {
        let description = format!("to have value '{}'", expected);
        self.run(Check::Value(expected), description).await
    }

    /// Asserts that the locator matches exactly `expected` elements.
    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        let description = format!("to have count {}", expected);
        self.run(Check::Count(expected), description).await
    }

    // Samples the locator once: whether the check holds, and what was observed.
    async fn sample(&self, check: &Check<'_>) -> Result<(bool, String)> {
        match check {
            Check::Visible => {
                let visible = self.locator.is_visible().await?;
                let actual = if visible { "visible" } else { "hidden" };
                Ok((visible, actual.to_string()))
            }
            Check::Count(expected) => {
                let count = self.locator.count().await?;
                Ok((count == *expected, count.to_string()))
            }
            Check::Value(expected) => match self.locator.input_value().await {
                Ok(value) => Ok((value == *expected, value)),
                Err(Error::ElementNotFound(_)) => Ok((false, "<no element>".to_string())),
                Err(e) => Err(e),
            },
            Check::Text(_) | Check::ContainsText(_) | Check::TextRegex(_) | Check::Empty => {
                let text = match self.locator.inner_text().await {
                    Ok(text) => text,
                    Err(Error::ElementNotFound(_)) => {
                        return Ok((false, "<no element>".to_string()));
                    }
                    Err(e) => return Err(e),
                };
                let actual = text.trim();
                let holds = match check {
                    Check::Text(expected) => actual == *expected,
                    Check::ContainsText(expected) => actual.contains(expected),
                    Check::TextRegex(re) => re.is_match(actual),
                    _ => actual.is_empty(),
                };
                Ok((holds, actual.to_string()))
            }
        }
    }

    async fn run(self, check: Check<'_>, description: String) -> Result<()> {
        let start = Instant::now();
        let selector = self.locator.selector().to_string();

        loop {
            let (holds, actual) = self.sample(&check).await?;

            // Check if condition matches (with negation support)
            if holds != self.negate {
                return Ok(());
            }

            // Check timeout
            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' NOT {}, but it was '{}' after {:?}",
                        selector, description, actual, self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' {}, but had '{}' after {:?}",
                        selector, description, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            // Wait before next poll
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Expectation on page-level state, with the same auto-retry behavior as [`Expectation`].
pub struct PageExpectation {
    page: Page,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

#[allow(clippy::wrong_self_convention)]
impl PageExpectation {
    pub(crate) fn new(page: Page) -> Self {
        Self {
            timeout: page.expect_timeout(),
            poll_interval: page.poll_interval(),
            page,
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Asserts that the page URL equals `expected`.
    ///
    /// Both sides are normalized first, so `https://saucelabs.com` equals
    /// `https://saucelabs.com/`.
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        let start = Instant::now();
        let expected = normalize_url(expected);

        loop {
            let actual = normalize_url(&self.page.url().await?);

            if (actual == expected) != self.negate {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page NOT to have URL '{}', but it did after {:?}",
                        expected, self.timeout
                    )
                } else {
                    format!(
                        "Expected page to have URL '{}', but had '{}' after {:?}",
                        expected, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

// Unparseable input (about:blank is fine, plain paths are not) is compared verbatim.
fn normalize_url(raw: &str) -> String {
    url::Url::parse(raw)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| raw.to_string())
}
