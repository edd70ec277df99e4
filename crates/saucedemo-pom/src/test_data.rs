// Test data - Generated customers and parametrized case tables
//
// Customer details are random per run (rand), so checkout tests do not depend
// on any particular name. The case tables drive the login, checkout validation
// and navigation menu tests.

use crate::catalog::{
    ABOUT_URL, LOCKED_OUT_USER, MenuItem, PASSWORD, Route, STANDARD_USER, messages, titles,
};
use crate::config::{Credentials, SuiteConfig};
use crate::error::Result;
use rand::Rng;
use rand::seq::SliceRandom;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Linus", "Barbara", "Ken", "Margaret", "Dennis", "Radia", "Edsger",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Torvalds", "Liskov", "Thompson", "Hamilton", "Ritchie",
    "Perlman", "Dijkstra",
];

/// Shipping details entered on the checkout information page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl Customer {
    /// A customer with a random name and 5-digit zip code.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
        let last_name = LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace");
        let postal_code = format!("{:05}", rng.gen_range(0..100_000u32));
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            postal_code,
        }
    }
}

/// Checkout information form contents; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub postal_code: Option<String>,
}

impl CheckoutForm {
    /// Every field filled from `customer`
    pub fn complete(customer: &Customer) -> Self {
        Self {
            first_name: Some(customer.first_name.clone()),
            last_name: Some(customer.last_name.clone()),
            postal_code: Some(customer.postal_code.clone()),
        }
    }
}

/// What the checkout information page shows after Continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Stays on the form and shows this error
    Error(&'static str),
    /// Moves on to the page with this title
    Title(&'static str),
}

#[derive(Debug, Clone)]
pub struct CheckoutCase {
    pub title: &'static str,
    pub form: CheckoutForm,
    pub expected: CheckoutOutcome,
}

/// Checkout form validation, one missing field at a time.
pub fn checkout_validation_cases() -> Vec<CheckoutCase> {
    let customer = Customer::random();
    let full = CheckoutForm::complete(&customer);
    vec![
        CheckoutCase {
            title: "empty form",
            form: CheckoutForm::default(),
            expected: CheckoutOutcome::Error(messages::FIRST_NAME_REQUIRED),
        },
        CheckoutCase {
            title: "first name only",
            form: CheckoutForm {
                first_name: full.first_name.clone(),
                ..CheckoutForm::default()
            },
            expected: CheckoutOutcome::Error(messages::LAST_NAME_REQUIRED),
        },
        CheckoutCase {
            title: "missing postal code",
            form: CheckoutForm {
                postal_code: None,
                ..full.clone()
            },
            expected: CheckoutOutcome::Error(messages::POSTAL_CODE_REQUIRED),
        },
        CheckoutCase {
            title: "all fields",
            form: full,
            expected: CheckoutOutcome::Title(titles::CHECKOUT_OVERVIEW),
        },
    ]
}

/// What the login page shows after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Lands on the page with this title
    LandsOn(&'static str),
    /// Stays on the login page with an error containing this text
    Rejected(&'static str),
}

#[derive(Debug, Clone)]
pub struct LoginCase {
    pub title: &'static str,
    pub credentials: Credentials,
    pub expected: LoginOutcome,
}

pub fn login_cases() -> Vec<LoginCase> {
    vec![
        LoginCase {
            title: "valid credentials",
            credentials: Credentials::default(),
            expected: LoginOutcome::LandsOn(titles::PRODUCTS),
        },
        LoginCase {
            title: "wrong password",
            credentials: Credentials::new(STANDARD_USER, "wrong_password"),
            expected: LoginOutcome::Rejected(messages::INVALID_CREDENTIALS),
        },
        LoginCase {
            title: "unknown user",
            credentials: Credentials::demo_user("invalid_user"),
            expected: LoginOutcome::Rejected(messages::INVALID_CREDENTIALS),
        },
        LoginCase {
            title: "unknown user and password",
            credentials: Credentials::new("invalid_user", "invalid_password"),
            expected: LoginOutcome::Rejected(messages::INVALID_CREDENTIALS),
        },
        LoginCase {
            title: "locked out user",
            credentials: Credentials::demo_user(LOCKED_OUT_USER),
            expected: LoginOutcome::Rejected(messages::LOCKED_OUT),
        },
        LoginCase {
            title: "empty username",
            credentials: Credentials::new("", PASSWORD),
            expected: LoginOutcome::Rejected(messages::USERNAME_REQUIRED),
        },
        LoginCase {
            title: "empty password",
            credentials: Credentials::new(STANDARD_USER, ""),
            expected: LoginOutcome::Rejected(messages::PASSWORD_REQUIRED),
        },
    ]
}

/// Where a menu entry should lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Store(Route),
    External(&'static str),
}

impl Destination {
    pub fn url(&self, config: &SuiteConfig) -> Result<String> {
        match self {
            Destination::Store(route) => config.url_for(*route),
            Destination::External(url) => Ok(url.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuCase {
    pub item: MenuItem,
    /// Page the menu is opened from (after login)
    pub start: Route,
    pub destination: Destination,
}

/// Sidebar entries with the page they are opened from; Logout is tried from
/// several pages since it must end the session from anywhere.
pub fn menu_cases() -> Vec<MenuCase> {
    let mut cases = vec![
        MenuCase {
            item: MenuItem::AllItems,
            start: Route::InventoryItem(4),
            destination: Destination::Store(Route::Inventory),
        },
        MenuCase {
            item: MenuItem::About,
            start: Route::Inventory,
            destination: Destination::External(ABOUT_URL),
        },
        MenuCase {
            item: MenuItem::Logout,
            start: Route::Inventory,
            destination: Destination::Store(Route::Login),
        },
        MenuCase {
            item: MenuItem::ResetAppState,
            start: Route::Inventory,
            destination: Destination::Store(Route::Inventory),
        },
    ];
    cases.extend(
        [Route::InventoryItem(4), Route::Cart].map(|start| MenuCase {
            item: MenuItem::Logout,
            start,
            destination: Destination::Store(Route::Login),
        }),
    );
    cases
}
