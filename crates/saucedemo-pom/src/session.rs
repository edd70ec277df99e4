// Session - Per-test browser fixture
//
// A Session owns a Playwright server connection, one browser and one fresh
// browser context with a single page. Every test builds its own Session from
// an explicit SuiteConfig, so tests can run in parallel without sharing
// cookies, storage or assertion settings.
//
// Lifecycle:
//   launch -> (open | authenticated) -> test body -> close
// Dropping a Session without close() still kills the Playwright server, but
// close() shuts the browser down gracefully and reports errors.

use crate::assertions::expect;
use crate::catalog::{Route, titles};
use crate::config::{BrowserKind, Credentials, SuiteConfig};
use crate::driver::PlaywrightDriver;
use crate::error::{Error, Result};
use crate::flows;
use crate::page::Page;
use crate::pom::PageObjectModel;
use playwright_rs::{Browser, BrowserContext, LaunchOptions, Playwright};

/// One browser context with one page, configured from a [`SuiteConfig`].
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    driver: PlaywrightDriver,
    page: Page,
    config: SuiteConfig,
}

impl Session {
    /// Launches the configured browser and opens a blank page.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            "Launching {:?} (headless: {})",
            config.browser,
            config.headless
        );

        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("launching Playwright"))?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let options = LaunchOptions::new().headless(config.headless);
        let browser = browser_type
            .launch_with_options(options)
            .await
            .map_err(|e| Error::from(e).context(format!("launching {:?}", config.browser)))?;

        let context = browser.new_context().await?;
        let raw_page = context.new_page().await?;
        let driver = PlaywrightDriver::new(raw_page);
        let page = Page::from_driver(driver.clone()).with_expect_timeout(config.expect_timeout());
        tracing::debug!("Session ready");

        Ok(Self {
            playwright,
            browser,
            context,
            driver,
            page,
            config: config.clone(),
        })
    }

    /// Launches a session and loads the login page.
    pub async fn open(config: &SuiteConfig) -> Result<Self> {
        let session = Self::launch(config).await?;
        session.goto(Route::Login).await?;
        Ok(session)
    }

    /// Launches a session and logs in with `credentials`, ending on the product listing.
    ///
    /// Fails if the listing title does not appear, e.g. for a locked out account.
    pub async fn authenticated(config: &SuiteConfig, credentials: &Credentials) -> Result<Self> {
        let session = Self::open(config).await?;
        flows::login(&session.page, credentials).await?;
        expect(session.pom().inventory().title())
            .to_have_text(titles::PRODUCTS)
            .await
            .map_err(|e| e.context(format!("logging in as {}", credentials.username)))?;
        Ok(session)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Locator registry bound to this session's page
    pub fn pom(&self) -> PageObjectModel {
        PageObjectModel::new(&self.page)
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// The underlying playwright-rs page, for anything outside the page object model
    pub fn raw_page(&self) -> &playwright_rs::Page {
        self.driver.inner()
    }

    /// Navigates to a store page relative to the configured base URL.
    pub async fn goto(&self, route: Route) -> Result<()> {
        let url = self.config.url_for(route)?;
        self.page.goto(&url).await
    }

    /// Closes the context and browser, then shuts down the Playwright server.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("Closing session");
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("browser", &self.config.browser)
            .field("base_url", &self.config.base_url)
            .field("page", &self.driver)
            .finish()
    }
}
