use crate::configuration::PriceLimits;
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::{Display, Formatter};

/// Title the product API reports for item numbers it doesn't know.
pub const NULL_TITLE: &str = "null";
/// `AddToCartType` value of an item that can be put in the cart.
pub const PURCHASABLE: i64 = 0;

/// Body of a `ProductRealtime` response. The API answers 200 for every item
/// number, so every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(rename = "MainItem")]
    pub main_item: MainItem,
    #[serde(rename = "Additional")]
    pub additional: Additional,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MainItem {
    pub description: Description,
    #[serde(rename = "Instock")]
    pub in_stock: bool,
    pub final_price: f64,
    #[serde(rename = "Stock")]
    pub stock_count: i64,
    pub item_number: String,
    pub add_to_cart_type: i64,
}

#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Description {
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Additional {
    pub limit_quantity: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductSnapshot {
    pub title: String,
    pub in_stock: bool,
    pub final_price: f64,
    pub stock_count: i64,
    pub cart_eligibility: i64,
    pub purchase_limit: i64,
}

impl From<ProductPayload> for ProductSnapshot {
    fn from(payload: ProductPayload) -> Self {
        let ProductPayload {
            main_item,
            additional,
        } = payload;
        Self {
            title: main_item.description.title,
            in_stock: main_item.in_stock,
            final_price: main_item.final_price,
            stock_count: main_item.stock_count,
            cart_eligibility: main_item.add_to_cart_type,
            purchase_limit: additional.limit_quantity,
        }
    }
}

impl ProductSnapshot {
    pub fn is_missing(&self) -> bool {
        self.title == NULL_TITLE
    }

    /// Price without its fractional part, truncated toward zero.
    pub fn whole_price(&self) -> i64 {
        self.final_price.trunc() as i64
    }

    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.final_price)
    }

    pub fn is_purchasable(&self) -> bool {
        self.in_stock && self.cart_eligibility == PURCHASABLE
    }

    /// Checks in order: existence, price bounds, stock.
    pub fn evaluate(&self, limits: &PriceLimits) -> Verdict {
        if self.is_missing() {
            return Verdict::NotFound;
        }
        if !limits.contains(self.whole_price()) {
            return Verdict::OutOfBudget;
        }
        if self.is_purchasable() {
            Verdict::Available
        } else {
            Verdict::Unavailable
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    NotFound,
    OutOfBudget,
    Available,
    Unavailable,
}

impl Verdict {
    /// Whether the reject policy applies to this outcome.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Verdict::NotFound | Verdict::OutOfBudget)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::NotFound => write!(f, "not found"),
            Verdict::OutOfBudget => write!(f, "out of budget"),
            Verdict::Available => write!(f, "in stock"),
            Verdict::Unavailable => write!(f, "not in stock"),
        }
    }
}

/// What gets mailed out when a watched item becomes available.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAlert {
    pub title: String,
    pub url: String,
    pub price: String,
    pub stock: i64,
    pub limit: i64,
}

impl StockAlert {
    pub fn new(snapshot: &ProductSnapshot, url: &str) -> Self {
        Self {
            title: snapshot.title.clone(),
            url: url.to_string(),
            price: snapshot.formatted_price(),
            stock: snapshot.stock_count,
            limit: snapshot.purchase_limit,
        }
    }

    pub fn dummy() -> Self {
        Self {
            title: "test title".to_string(),
            url: "https://example.com/?ItemNumber=1".to_string(),
            price: "19.99".to_string(),
            stock: 3,
            limit: 2,
        }
    }
}
