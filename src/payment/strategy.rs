use crate::money::Money;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Identifies which strategy produced a receipt.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

/// Confirmation of a single payment.
///
/// Renders as `Paid $<amount> using <method>: <account>`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub account: String,
    pub amount: Money,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paid ${} using {}: {}",
            self.amount,
            self.method.label(),
            self.account
        )
    }
}

/// A pluggable way of paying for a cart.
pub trait PaymentStrategy {
    fn pay(&self, amount: Money) -> Receipt;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;

#[derive(Debug, Clone)]
pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: Money) -> Receipt {
        debug!(card = %self.card_number, %amount, "charging credit card");
        Receipt {
            method: PaymentMethod::CreditCard,
            account: self.card_number.clone(),
            amount,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: Money) -> Receipt {
        debug!(email = %self.email, %amount, "charging paypal account");
        Receipt {
            method: PaymentMethod::PayPal,
            account: self.email.clone(),
            amount,
        }
    }
}
