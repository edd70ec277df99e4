// End-to-end purchase against the live store
//
// login -> add product -> cart -> information -> overview -> finish

mod common;

use saucedemo_pom::catalog::{BACKPACK, Route};
use saucedemo_pom::test_data::{CheckoutForm, Customer};
use saucedemo_pom::{expect, expect_page, messages, submit_checkout_information, titles};

#[tokio::test]
#[ignore = "requires network access and Playwright browsers"]
async fn test_purchase_one_product() -> anyhow::Result<()> {
    common::init_tracing();
    let config = common::config();
    let session = common::logged_in(&config).await;
    let pom = session.pom();

    common::start_checkout(&session, &BACKPACK).await?;
    expect(pom.shared().shopping_cart_link())
        .to_have_text("1")
        .await?;

    let customer = Customer::random();
    tracing::info!(
        "Checking out as {} {} ({})",
        customer.first_name,
        customer.last_name,
        customer.postal_code
    );
    submit_checkout_information(session.page(), &CheckoutForm::complete(&customer)).await?;

    expect(pom.cart().overview_title())
        .to_have_text(titles::CHECKOUT_OVERVIEW)
        .await?;
    expect(pom.cart().cart_item_names())
        .to_have_text(BACKPACK.name)
        .await?;

    pom.cart().finish_button().click().await?;
    expect_page(session.page())
        .to_have_url(&common::url(&session, Route::CheckoutComplete))
        .await?;
    expect(pom.cart().title())
        .to_have_text(titles::CHECKOUT_COMPLETE)
        .await?;
    expect(pom.cart().complete_header())
        .to_have_text(messages::ORDER_COMPLETE_HEADER)
        .await?;
    expect(pom.cart().complete_text())
        .to_have_text(messages::ORDER_COMPLETE_TEXT)
        .await?;
    expect(pom.shared().shopping_cart_link()).to_be_empty().await?;

    session.close().await?;
    Ok(())
}
