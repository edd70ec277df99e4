// Integration tests for the sidebar menu
//
// Every entry gets its own logged-in session: Logout ends the session and
// About leaves the store.

mod common;

use saucedemo_pom::catalog::MenuItem;
use saucedemo_pom::test_data::menu_cases;
use saucedemo_pom::{expect, expect_page};

#[tokio::test]
#[ignore = "requires network access and Playwright browsers"]
async fn test_menu_entries() -> anyhow::Result<()> {
    common::init_tracing();
    let config = common::config();

    for case in menu_cases() {
        tracing::info!("Menu entry: {} from {:?}", case.item.text(), case.start);
        let session = common::logged_in(&config).await;
        let pom = session.pom();
        let navigation = pom.navigation();

        session.goto(case.start).await?;
        expect_page(session.page())
            .to_have_url(&common::url(&session, case.start))
            .await?;

        navigation.open_menu_button().click().await?;
        expect(navigation.entry(case.item)).to_be_visible().await?;
        navigation.entry(case.item).click().await?;

        expect_page(session.page())
            .to_have_url(&case.destination.url(&config)?)
            .await?;

        if case.item == MenuItem::Logout {
            expect(pom.login().login_button())
                .to_be_visible()
                .await?;
        }

        session.close().await?;
    }
    Ok(())
}

#[tokio::test]
#[ignore = "requires network access and Playwright browsers"]
async fn test_close_menu_hides_entries() -> anyhow::Result<()> {
    common::init_tracing();
    let config = common::config();
    let session = common::logged_in(&config).await;
    let pom = session.pom();
    let navigation = pom.navigation();

    navigation.open_menu_button().click().await?;
    for item in MenuItem::ALL {
        expect(navigation.entry(item)).to_be_visible().await?;
    }

    navigation.close_menu_button().click().await?;
    expect(navigation.logout()).to_be_hidden().await?;

    session.close().await?;
    Ok(())
}
