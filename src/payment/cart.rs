use super::strategy::{PaymentStrategy, PaymentStrategyBox, Receipt};
use crate::error::{Result, ShowcaseError};
use crate::money::Money;
use tracing::info;

/// A cart that pays through whichever strategy was selected last.
#[derive(Default)]
pub struct ShoppingCart {
    payment_strategy: Option<PaymentStrategyBox>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active strategy. The previous one is dropped.
    pub fn set_payment_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        self.payment_strategy = Some(Box::new(strategy));
    }

    /// Pays `amount` with the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::NoPaymentStrategy`] if no strategy was ever set.
    pub fn checkout(&self, amount: Money) -> Result<Receipt> {
        let strategy = self
            .payment_strategy
            .as_ref()
            .ok_or(ShowcaseError::NoPaymentStrategy)?;
        let receipt = strategy.pay(amount);
        info!(method = ?receipt.method, %amount, "checkout complete");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::strategy::{CreditCardPayment, PayPalPayment, PaymentMethod};
    use rust_decimal_macros::dec;

    #[test]
    fn test_checkout_without_strategy() {
        let cart = ShoppingCart::new();
        let result = cart.checkout(Money::new(dec!(10)));
        assert!(matches!(result, Err(ShowcaseError::NoPaymentStrategy)));
    }

    #[test]
    fn test_strategy_replacement() {
        let mut cart = ShoppingCart::new();
        cart.set_payment_strategy(CreditCardPayment::new("1111"));
        let first = cart.checkout(Money::new(dec!(1))).unwrap();
        assert_eq!(first.method, PaymentMethod::CreditCard);

        cart.set_payment_strategy(PayPalPayment::new("me@example.com"));
        let second = cart.checkout(Money::new(dec!(2))).unwrap();
        assert_eq!(second.method, PaymentMethod::PayPal);
        assert_eq!(second.account, "me@example.com");
    }

    #[test]
    fn test_checkout_is_repeatable() {
        let mut cart = ShoppingCart::new();
        cart.set_payment_strategy(CreditCardPayment::new("1234"));
        let a = cart.checkout(Money::new(dec!(5))).unwrap();
        let b = cart.checkout(Money::new(dec!(5))).unwrap();
        assert_eq!(a, b);
    }
}
