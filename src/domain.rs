use rusty_money::{iso::Currency, Findable, Money};
use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;

/// A purchasable item as listed by the payments provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub default_price_id: String,
    pub currency: String,
    pub unit_amount: i64,
    pub price: f64,
}

impl Product {
    /// Formats the default price in the currency the provider listed it in,
    /// e.g. `$99.90` for 9990 minor units of USD.
    pub fn formatted_price(&self) -> Result<String, StorefrontError> {
        let code = self.currency.to_uppercase();
        match Currency::find(&code) {
            Some(currency) => Ok(Money::from_minor(self.unit_amount, currency).to_string()),
            None => Err(StorefrontError::UnknownCurrency(code)),
        }
    }
}
