//! saucedemo-pom: Page Object Model and flow helpers for the Swag Labs demo store
//!
//! This crate holds everything the end-to-end suite for <https://www.saucedemo.com>
//! shares: one locator registry per page, the `login` and `select_product` flows,
//! an auto-retrying `expect()` API, a per-test browser [`Session`] and the store's
//! known users, products and messages.
//!
//! Browser access goes through the [`PageDriver`] trait. [`PlaywrightDriver`] drives a
//! real browser via playwright-rs; the registry, assertions and flows never see it.
//!
//! # Examples
//!
//! ## Log in and open a product
//!
//! ```ignore
//! use saucedemo_pom::{Credentials, Session, SuiteConfig, expect, select_product, DEFAULT_PRODUCT};
//!
//! #[tokio::main]
//! async fn main() -> saucedemo_pom::Result<()> {
//!     let config = SuiteConfig::from_env()?;
//!     let session = Session::authenticated(&config, &Credentials::default()).await?;
//!
//!     select_product(session.page(), DEFAULT_PRODUCT).await?;
//!     expect(session.pom().inventory_item().price())
//!         .to_have_text("$29.99")
//!         .await?;
//!
//!     session.close().await
//! }
//! ```
//!
//! ## Check a rejected login
//!
//! ```ignore
//! use saucedemo_pom::{Credentials, Session, SuiteConfig, expect, login, messages};
//!
//! #[tokio::main]
//! async fn main() -> saucedemo_pom::Result<()> {
//!     let config = SuiteConfig::default();
//!     let session = Session::open(&config).await?;
//!
//!     login(session.page(), &Credentials::demo_user("locked_out_user")).await?;
//!     expect(session.pom().login().error_message(messages::LOCKED_OUT))
//!         .to_be_visible()
//!         .await?;
//!
//!     session.close().await
//! }
//! ```
//!
//! ## Sort the listing
//!
//! ```ignore
//! use saucedemo_pom::{Session, SortOrder};
//!
//! # async fn run(session: &Session) -> saucedemo_pom::Result<()> {
//! let inventory = session.pom().inventory();
//! let order = SortOrder::PriceAscending;
//! inventory.product_sort_dropdown().select_option(order.option_value()).await?;
//! let prices = inventory.product_price_list().all_text_contents().await?;
//! order.assert_sorted(&prices)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (flows at `info`, driver calls at `debug`) and never
//! installs a subscriber. Tests enable output with `RUST_LOG=saucedemo_pom=debug`.

pub mod assertions;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod flows;
pub mod locator;
pub mod page;
pub mod pom;
pub mod selector;
pub mod session;
pub mod sorting;
pub mod test_data;

#[cfg(test)]
mod fake;

// Re-export error types
pub use error::{Error, Result};

// Re-export assertions API
pub use assertions::{Expectation, PageExpectation, expect, expect_page};

// Re-export page, locator and driver seam
pub use driver::PlaywrightDriver;
pub use locator::Locator;
pub use page::{DEFAULT_EXPECT_TIMEOUT, DEFAULT_POLL_INTERVAL, Page, PageDriver};
pub use selector::{AriaRole, Selector, Strategy};

// Re-export the locator registry
pub use pom::{
    CartRegion, InventoryItemRegion, InventoryRegion, LoginRegion, NavigationRegion,
    PageObjectModel, ProductCard, SharedRegion,
};

// Re-export flows and fixtures
pub use config::{BrowserKind, Credentials, SuiteConfig};
pub use flows::{login, select_product, submit_checkout_information};
pub use session::Session;

// Re-export store facts
pub use catalog::{DEFAULT_PRODUCT, MenuItem, Product, Route, messages, titles};
pub use sorting::SortOrder;
