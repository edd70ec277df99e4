// Cart region - Cart page and the checkout steps that follow it

use super::shared::SharedRegion;
use crate::locator::Locator;
use crate::page::Page;
use crate::selector::AriaRole;

#[derive(Debug, Clone, Copy)]
pub struct CartRegion<'a> {
    page: &'a Page,
}

impl<'a> CartRegion<'a> {
    pub(crate) fn new(page: &'a Page) -> Self {
        Self { page }
    }

    fn shared(&self) -> SharedRegion<'a> {
        SharedRegion::new(self.page)
    }

    pub fn title(&self) -> Locator {
        self.shared().title()
    }

    pub fn shopping_cart_link(&self) -> Locator {
        self.shared().shopping_cart_link()
    }

    /// Names of the products in the cart (also listed on the checkout overview)
    pub fn cart_item_names(&self) -> Locator {
        self.page.locator(".inventory_item_name")
    }

    pub fn checkout_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Checkout")
    }

    pub fn continue_shopping_button(&self) -> Locator {
        self.page.get_by_test_id("continue-shopping")
    }

    // Checkout: Your Information

    pub fn first_name_input(&self) -> Locator {
        self.page.get_by_role(AriaRole::Textbox, "First Name")
    }

    pub fn last_name_input(&self) -> Locator {
        self.page.get_by_role(AriaRole::Textbox, "Last Name")
    }

    pub fn postal_code_input(&self) -> Locator {
        self.page.get_by_role(AriaRole::Textbox, "ZIP/Postal Code")
    }

    pub fn continue_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Continue")
    }

    pub fn cancel_button(&self) -> Locator {
        self.page.get_by_test_id("cancel")
    }

    /// Validation error containing `text`
    pub fn error_message(&self, text: &str) -> Locator {
        self.page.get_by_text(text)
    }

    // Checkout: Overview

    /// Title on the overview step; same element as every other page title
    pub fn overview_title(&self) -> Locator {
        self.shared().title()
    }

    pub fn finish_button(&self) -> Locator {
        self.page.get_by_role(AriaRole::Button, "Finish")
    }

    // Checkout: Complete!

    pub fn complete_header(&self) -> Locator {
        self.page.get_by_test_id("complete-header")
    }

    pub fn complete_text(&self) -> Locator {
        self.page.get_by_test_id("complete-text")
    }
}
