// Shared region - Elements rendered identically on several pages
//
// The header title and the shopping cart link appear on the listing, details,
// cart and checkout pages. They are defined here once; other regions hand out
// these exact locators.

use crate::locator::Locator;
use crate::page::Page;

#[derive(Debug, Clone, Copy)]
pub struct SharedRegion<'a> {
    page: &'a Page,
}

impl<'a> SharedRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    /// Page title in the secondary header ("Products", "Your Cart", ...)
    pub fn title(&self) -> Locator {
        self.page.get_by_test_id("title")
    }

    /// Cart icon link; its text is the item count, empty when the cart is empty
    pub fn shopping_cart_link(&self) -> Locator {
        self.page.get_by_test_id("shopping-cart-link")
    }

    /// Item count badge on the cart icon; absent when the cart is empty
    pub fn shopping_cart_badge(&self) -> Locator {
        self.page.get_by_test_id("shopping-cart-badge")
    }
}
