//! Strategy pattern: a shopping cart that pays through an interchangeable
//! payment behavior.

pub mod cart;
pub mod strategy;

pub use cart::ShoppingCart;
pub use strategy::{CreditCardPayment, PayPalPayment, PaymentMethod, PaymentStrategy, Receipt};
