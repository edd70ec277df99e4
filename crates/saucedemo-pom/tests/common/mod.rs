// Common helpers for the live-site tests
//
// Every test builds its own Session from the SAUCEDEMO_* environment, so the
// tests can run in parallel against the same store.
//
// Run with:
//   RUST_LOG=saucedemo_pom=debug cargo test -p saucedemo-pom -- --ignored

// Each test binary compiles this module separately and uses only part of it.
#![allow(dead_code)]

use saucedemo_pom::catalog::Route;
use saucedemo_pom::{PageObjectModel, Product, Session, SuiteConfig, expect, titles};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by RUST_LOG. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn config() -> SuiteConfig {
    SuiteConfig::from_env().expect("Invalid SAUCEDEMO_* configuration")
}

/// Session on the login page
pub async fn login_page(config: &SuiteConfig) -> Session {
    Session::open(config)
        .await
        .expect("Failed to open login page")
}

/// Session logged in with the configured credentials, on the product listing
pub async fn logged_in(config: &SuiteConfig) -> Session {
    Session::authenticated(config, &config.credentials)
        .await
        .expect("Failed to log in")
}

/// Adds `product` from the listing and walks through the cart to the
/// checkout information form.
pub async fn start_checkout(session: &Session, product: &Product) -> saucedemo_pom::Result<()> {
    let pom: PageObjectModel = session.pom();

    pom.inventory()
        .product_card(product.name)
        .add_to_cart_button()
        .click()
        .await?;
    pom.shared().shopping_cart_link().click().await?;
    expect(pom.cart().title()).to_have_text(titles::CART).await?;

    pom.cart().checkout_button().click().await?;
    expect(pom.cart().title())
        .to_have_text(titles::CHECKOUT_INFORMATION)
        .await
}

/// Absolute URL of a store page under the session's base URL
pub fn url(session: &Session, route: Route) -> String {
    session
        .config()
        .url_for(route)
        .expect("Failed to build store URL")
}
