// Page Object Model - Locator registry for the Swag Labs store
//
// One PageObjectModel per page handle. Each region is a borrowed view with one
// method per element, returning a fresh lazy Locator on every call. Building
// the registry or a region performs no I/O.
//
// Selection strategy precedence, most robust first:
//   data-test attribute > role + accessible name > CSS class > visible text
// Visible text is only used where the store offers nothing better (product
// names, error messages).
//
// Elements that appear on several pages live in SharedRegion and are
// referenced, never redefined, by the regions that expose them.

mod cart;
mod inventory;
mod inventory_item;
mod login;
mod navigation;
mod shared;

pub use cart::CartRegion;
pub use inventory::{InventoryRegion, ProductCard};
pub use inventory_item::InventoryItemRegion;
pub use login::LoginRegion;
pub use navigation::NavigationRegion;
pub use shared::SharedRegion;

use crate::page::Page;

/// Locator registry bound to one page.
///
/// # Example
///
/// ```ignore
/// use saucedemo_pom::{expect, PageObjectModel};
///
/// let pom = PageObjectModel::new(&page);
/// pom.login().username_input().fill("standard_user").await?;
/// pom.login().password_input().fill("secret_sauce").await?;
/// pom.login().login_button().click().await?;
/// expect(pom.inventory().title()).to_have_text("Products").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PageObjectModel {
    page: Page,
}

impl PageObjectModel {
    pub fn new(page: &Page) -> Self {
        Self { page: page.clone() }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Elements present on several pages (title, shopping cart link and badge)
    pub fn shared(&self) -> SharedRegion<'_> {
        SharedRegion::new(&self.page)
    }

    pub fn login(&self) -> LoginRegion<'_> {
        LoginRegion::new(&self.page)
    }

    /// Product listing page
    pub fn inventory(&self) -> InventoryRegion<'_> {
        InventoryRegion::new(&self.page)
    }

    /// Product details page
    pub fn inventory_item(&self) -> InventoryItemRegion<'_> {
        InventoryItemRegion::new(&self.page)
    }

    /// Cart and checkout pages
    pub fn cart(&self) -> CartRegion<'_> {
        CartRegion::new(&self.page)
    }

    /// Sidebar menu
    pub fn navigation(&self) -> NavigationRegion<'_> {
        NavigationRegion::new(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locator;
    use crate::fake::FakeDriver;
    use crate::selector::Strategy;

    fn pom() -> PageObjectModel {
        PageObjectModel::new(&Page::from_driver(FakeDriver::new()))
    }

    // Every zero-argument factory in the registry, with a label for failure messages.
    fn all_locators(pom: &PageObjectModel) -> Vec<(&'static str, Locator)> {
        vec![
            ("shared.title", pom.shared().title()),
            ("shared.shopping_cart_link", pom.shared().shopping_cart_link()),
            ("shared.shopping_cart_badge", pom.shared().shopping_cart_badge()),
            ("login.username_input", pom.login().username_input()),
            ("login.password_input", pom.login().password_input()),
            ("login.login_button", pom.login().login_button()),
            ("inventory.title", pom.inventory().title()),
            ("inventory.product_sort_dropdown", pom.inventory().product_sort_dropdown()),
            ("inventory.product_name_list", pom.inventory().product_name_list()),
            ("inventory.product_price_list", pom.inventory().product_price_list()),
            ("inventory.shopping_cart_link", pom.inventory().shopping_cart_link()),
            ("inventory_item.add_to_cart_button", pom.inventory_item().add_to_cart_button()),
            ("inventory_item.remove_from_cart_button", pom.inventory_item().remove_from_cart_button()),
            ("inventory_item.name", pom.inventory_item().name()),
            ("inventory_item.description", pom.inventory_item().description()),
            ("inventory_item.price", pom.inventory_item().price()),
            ("inventory_item.back_to_products_button", pom.inventory_item().back_to_products_button()),
            ("cart.title", pom.cart().title()),
            ("cart.overview_title", pom.cart().overview_title()),
            ("cart.shopping_cart_link", pom.cart().shopping_cart_link()),
            ("cart.cart_item_names", pom.cart().cart_item_names()),
            ("cart.checkout_button", pom.cart().checkout_button()),
            ("cart.continue_shopping_button", pom.cart().continue_shopping_button()),
            ("cart.first_name_input", pom.cart().first_name_input()),
            ("cart.last_name_input", pom.cart().last_name_input()),
            ("cart.postal_code_input", pom.cart().postal_code_input()),
            ("cart.continue_button", pom.cart().continue_button()),
            ("cart.cancel_button", pom.cart().cancel_button()),
            ("cart.finish_button", pom.cart().finish_button()),
            ("cart.complete_header", pom.cart().complete_header()),
            ("cart.complete_text", pom.cart().complete_text()),
            ("navigation.open_menu_button", pom.navigation().open_menu_button()),
            ("navigation.close_menu_button", pom.navigation().close_menu_button()),
            ("navigation.all_items", pom.navigation().all_items()),
            ("navigation.about", pom.navigation().about()),
            ("navigation.logout", pom.navigation().logout()),
            ("navigation.reset_app_state", pom.navigation().reset_app_state()),
        ]
    }

    #[test]
    fn test_every_factory_is_deterministic() {
        let pom = pom();
        let first = all_locators(&pom);
        let second = all_locators(&pom);

        for ((name, a), (_, b)) in first.iter().zip(second.iter()) {
            assert_eq!(a, b, "{name} changed between calls");
            assert!(!a.selector().is_empty(), "{name} has an empty selector");
        }
    }

    #[test]
    fn test_registry_clones_share_the_page() {
        let pom = pom();
        let copy = pom.clone();
        assert_eq!(pom.login().login_button(), copy.login().login_button());

        let other = self::pom();
        assert_ne!(pom.login().login_button(), other.login().login_button());
    }

    #[test]
    fn test_shared_elements_are_defined_once() {
        let pom = pom();
        let title = pom.shared().title();
        assert_eq!(pom.inventory().title(), title);
        assert_eq!(pom.cart().title(), title);
        assert_eq!(pom.cart().overview_title(), title);

        let cart_link = pom.shared().shopping_cart_link();
        assert_eq!(pom.inventory().shopping_cart_link(), cart_link);
        assert_eq!(pom.cart().shopping_cart_link(), cart_link);
    }

    #[test]
    fn test_raw_text_only_where_no_better_hook_exists() {
        let pom = pom();
        for (name, locator) in all_locators(&pom) {
            let strategies: Vec<Strategy> =
                locator.chain().iter().filter_map(|s| s.strategy()).collect();
            assert!(
                !strategies.contains(&Strategy::Text),
                "{name} relies on raw text"
            );
        }

        // Parameterized text lookups are the documented exceptions.
        assert_eq!(
            pom.login().error_message("Epic sadface").chain()[0].strategy(),
            Some(Strategy::Text)
        );
        assert_eq!(
            pom.inventory().product_by_name("Sauce Labs Backpack").chain()[0].strategy(),
            Some(Strategy::Text)
        );
    }
}
