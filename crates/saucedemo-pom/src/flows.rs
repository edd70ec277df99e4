// Flows - Reusable multi-step sequences shared by the tests
//
// Flows are plain async functions over a Page. They build a PageObjectModel on
// the fly, hold no state between calls and never retry: the only waiting is
// the bounded polling of the expect API used for their pre/postconditions.

use crate::assertions::expect;
use crate::catalog::titles;
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::pom::PageObjectModel;
use crate::test_data::CheckoutForm;

/// Submits the login form with `credentials`.
///
/// Expects the login page to be loaded. Makes no assertion about the outcome:
/// callers check the landing title or the error message themselves, which lets
/// the same flow drive both the valid and the rejected logins.
pub async fn login(page: &Page, credentials: &Credentials) -> Result<()> {
    tracing::info!("Logging in as {}", credentials.username);
    let pom = PageObjectModel::new(page);
    let form = pom.login();

    form.username_input().fill(&credentials.username).await?;
    form.password_input().fill(&credentials.password).await?;
    tracing::debug!("Submitting login form");
    form.login_button().click().await
}

/// Opens the details page of the product displayed as `product_name`.
///
/// # Errors
///
/// - [`Error::Precondition`] when the page is not showing the product listing
/// - [`Error::Postcondition`] when the details page does not show `product_name`
/// - Driver errors from the click itself, unwrapped
pub async fn select_product(page: &Page, product_name: &str) -> Result<()> {
    const FLOW: &str = "select_product";
    tracing::info!("Selecting product {}", product_name);
    let pom = PageObjectModel::new(page);

    expect(pom.inventory().title())
        .to_have_text(titles::PRODUCTS)
        .await
        .map_err(|e| Error::precondition(FLOW, e))?;

    pom.inventory().product_by_name(product_name).click().await?;

    expect(pom.inventory_item().name())
        .to_have_text(product_name)
        .await
        .map_err(|e| Error::postcondition(FLOW, e))?;
    tracing::debug!("Details page shows {}", product_name);
    Ok(())
}

/// Fills the checkout information form and presses Continue.
///
/// Fields left as `None` are not touched, so validation errors can be provoked
/// one field at a time. The outcome is for the caller to check.
pub async fn submit_checkout_information(page: &Page, form: &CheckoutForm) -> Result<()> {
    tracing::info!("Submitting checkout information");
    let pom = PageObjectModel::new(page);
    let cart = pom.cart();

    let fields = [
        (cart.first_name_input(), &form.first_name),
        (cart.last_name_input(), &form.last_name),
        (cart.postal_code_input(), &form.postal_code),
    ];
    for (input, value) in fields {
        if let Some(value) = value {
            input.fill(value).await?;
        }
    }
    cart.continue_button().click().await
}
