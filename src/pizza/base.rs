use crate::money::Money;
use rust_decimal_macros::dec;

/// Anything that can be sold as a pizza.
pub trait Pizza {
    fn description(&self) -> String;
    fn cost(&self) -> Money;
}

impl<P: Pizza + ?Sized> Pizza for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Money {
        (**self).cost()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPizza;

impl PlainPizza {
    pub const DESCRIPTION: &'static str = "Plain Pizza";
    pub const COST: Money = Money::new(dec!(5.00));

    pub fn new() -> Self {
        Self
    }
}

impl Pizza for PlainPizza {
    fn description(&self) -> String {
        Self::DESCRIPTION.to_string()
    }

    fn cost(&self) -> Money {
        Self::COST
    }
}
