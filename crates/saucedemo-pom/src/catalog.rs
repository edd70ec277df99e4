// Catalog - Known facts about the Swag Labs store
//
// Users, products, routes, menu entries and the user-visible messages the suite
// asserts on. Everything here mirrors the live site; if the site copy changes,
// this is the one place to update.

/// Password shared by every demo account
pub const PASSWORD: &str = "secret_sauce";

pub const STANDARD_USER: &str = "standard_user";
pub const LOCKED_OUT_USER: &str = "locked_out_user";
pub const PROBLEM_USER: &str = "problem_user";
pub const PERFORMANCE_GLITCH_USER: &str = "performance_glitch_user";
pub const ERROR_USER: &str = "error_user";
pub const VISUAL_USER: &str = "visual_user";

/// Accounts accepted by the login form
pub const ACCEPTED_USERS: [&str; 6] = [
    STANDARD_USER,
    LOCKED_OUT_USER,
    PROBLEM_USER,
    PERFORMANCE_GLITCH_USER,
    ERROR_USER,
    VISUAL_USER,
];

/// Page titles shown in the `data-test="title"` header
pub mod titles {
    pub const PRODUCTS: &str = "Products";
    pub const CART: &str = "Your Cart";
    pub const CHECKOUT_INFORMATION: &str = "Checkout: Your Information";
    pub const CHECKOUT_OVERVIEW: &str = "Checkout: Overview";
    pub const CHECKOUT_COMPLETE: &str = "Checkout: Complete!";
}

/// Error and confirmation copy
pub mod messages {
    pub const INVALID_CREDENTIALS: &str =
        "Epic sadface: Username and password do not match any user in this service";
    pub const LOCKED_OUT: &str = "Epic sadface: Sorry, this user has been locked out";
    pub const USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
    pub const PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
    pub const FIRST_NAME_REQUIRED: &str = "Error: First Name is required";
    pub const LAST_NAME_REQUIRED: &str = "Error: Last Name is required";
    pub const POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";
    pub const ORDER_COMPLETE_HEADER: &str = "Thank you for your order!";
    pub const ORDER_COMPLETE_TEXT: &str =
        "Your order has been dispatched, and will arrive just as fast as the pony can get there!";
}

/// A product listed in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Display name, as shown on the listing and detail pages
    pub name: &'static str,
    /// Numeric id used by `inventory-item.html?id=N`
    pub item_id: u32,
    /// Display price including the currency sign
    pub price: &'static str,
}

impl Product {
    /// Identifier used in the product's `add-to-cart-*` / `remove-*` test ids.
    pub fn id(&self) -> String {
        product_id(self.name)
    }
}

pub const BACKPACK: Product = Product {
    name: "Sauce Labs Backpack",
    item_id: 4,
    price: "$29.99",
};

pub const BIKE_LIGHT: Product = Product {
    name: "Sauce Labs Bike Light",
    item_id: 0,
    price: "$9.99",
};

pub const BOLT_T_SHIRT: Product = Product {
    name: "Sauce Labs Bolt T-Shirt",
    item_id: 1,
    price: "$15.99",
};

pub const FLEECE_JACKET: Product = Product {
    name: "Sauce Labs Fleece Jacket",
    item_id: 5,
    price: "$49.99",
};

pub const ONESIE: Product = Product {
    name: "Sauce Labs Onesie",
    item_id: 2,
    price: "$7.99",
};

pub const RED_T_SHIRT: Product = Product {
    name: "Test.allTheThings() T-Shirt (Red)",
    item_id: 3,
    price: "$15.99",
};

/// Every product in the inventory, in default (name ascending) order
pub const PRODUCTS: [Product; 6] = [
    BACKPACK,
    BIKE_LIGHT,
    BOLT_T_SHIRT,
    FLEECE_JACKET,
    ONESIE,
    RED_T_SHIRT,
];

/// Product used by setup flows when a test does not care which product it handles
pub const DEFAULT_PRODUCT: &str = BACKPACK.name;

/// Fragment of the backpack description used by the product details test
pub const BACKPACK_DESCRIPTION_SNIPPET: &str = "carry.allTheThings()";

/// Derives the store's product identifier from a display name
/// (`"Sauce Labs Backpack"` → `"sauce-labs-backpack"`).
pub fn product_id(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Finds a catalog product by display name.
pub fn product_by_name(name: &str) -> Option<Product> {
    PRODUCTS.iter().copied().find(|p| p.name == name)
}

/// Pages of the store, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Inventory,
    InventoryItem(u32),
    Cart,
    CheckoutInformation,
    CheckoutOverview,
    CheckoutComplete,
}

impl Route {
    /// Path (and query) relative to the base URL
    pub fn path(&self) -> String {
        match self {
            Route::Login => String::new(),
            Route::Inventory => "inventory.html".to_string(),
            Route::InventoryItem(id) => format!("inventory-item.html?id={}", id),
            Route::Cart => "cart.html".to_string(),
            Route::CheckoutInformation => "checkout-step-one.html".to_string(),
            Route::CheckoutOverview => "checkout-step-two.html".to_string(),
            Route::CheckoutComplete => "checkout-complete.html".to_string(),
        }
    }
}

/// External page the "About" menu entry leads to
pub const ABOUT_URL: &str = "https://saucelabs.com/";

/// Entries of the sidebar navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AllItems,
    About,
    Logout,
    ResetAppState,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::AllItems,
        MenuItem::About,
        MenuItem::Logout,
        MenuItem::ResetAppState,
    ];

    /// Visible label
    pub fn text(&self) -> &'static str {
        match self {
            MenuItem::AllItems => "All Items",
            MenuItem::About => "About",
            MenuItem::Logout => "Logout",
            MenuItem::ResetAppState => "Reset App State",
        }
    }

    /// `data-test` attribute of the menu link
    pub fn test_id(&self) -> &'static str {
        match self {
            MenuItem::AllItems => "inventory-sidebar-link",
            MenuItem::About => "about-sidebar-link",
            MenuItem::Logout => "logout-sidebar-link",
            MenuItem::ResetAppState => "reset-sidebar-link",
        }
    }
}
