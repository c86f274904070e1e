use super::base::Pizza;
use crate::money::Money;
use rust_decimal_macros::dec;
use tracing::trace;

pub type PizzaBox = Box<dyn Pizza>;

/// Owns exactly one wrapped pizza and forwards both operations to it
/// unchanged. Concrete toppings build on this and add their own share.
pub struct PizzaDecorator {
    inner: PizzaBox,
}

impl PizzaDecorator {
    pub fn new(pizza: impl Pizza + 'static) -> Self {
        Self::from_boxed(Box::new(pizza))
    }

    pub fn from_boxed(inner: PizzaBox) -> Self {
        Self { inner }
    }
}

impl Pizza for PizzaDecorator {
    fn description(&self) -> String {
        self.inner.description()
    }

    fn cost(&self) -> Money {
        self.inner.cost()
    }
}

pub struct Cheese {
    base: PizzaDecorator,
}

impl Cheese {
    pub const SUFFIX: &'static str = ", Cheese";
    pub const PRICE: Money = Money::new(dec!(1.50));

    pub fn new(pizza: impl Pizza + 'static) -> Self {
        Self::from_boxed(Box::new(pizza))
    }

    pub fn from_boxed(pizza: PizzaBox) -> Self {
        trace!("adding cheese");
        Self {
            base: PizzaDecorator::from_boxed(pizza),
        }
    }
}

impl Pizza for Cheese {
    fn description(&self) -> String {
        self.base.description() + Self::SUFFIX
    }

    fn cost(&self) -> Money {
        self.base.cost() + Self::PRICE
    }
}

pub struct Pepperoni {
    base: PizzaDecorator,
}

impl Pepperoni {
    pub const SUFFIX: &'static str = ", Pepperoni";
    pub const PRICE: Money = Money::new(dec!(2.00));

    pub fn new(pizza: impl Pizza + 'static) -> Self {
        Self::from_boxed(Box::new(pizza))
    }

    pub fn from_boxed(pizza: PizzaBox) -> Self {
        trace!("adding pepperoni");
        Self {
            base: PizzaDecorator::from_boxed(pizza),
        }
    }
}

impl Pizza for Pepperoni {
    fn description(&self) -> String {
        self.base.description() + Self::SUFFIX
    }

    fn cost(&self) -> Money {
        self.base.cost() + Self::PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::base::PlainPizza;

    #[test]
    fn test_base_decorator_forwards() {
        let decorated = PizzaDecorator::new(PlainPizza);
        assert_eq!(decorated.description(), "Plain Pizza");
        assert_eq!(decorated.cost(), PlainPizza::COST);
    }

    #[test]
    fn test_cheese() {
        let pizza = Cheese::new(PlainPizza);
        assert_eq!(pizza.description(), "Plain Pizza, Cheese");
        assert_eq!(pizza.cost(), Money::new(dec!(6.5)));
    }

    #[test]
    fn test_pepperoni() {
        let pizza = Pepperoni::new(PlainPizza);
        assert_eq!(pizza.description(), "Plain Pizza, Pepperoni");
        assert_eq!(pizza.cost(), Money::new(dec!(7)));
    }

    #[test]
    fn test_nesting_order() {
        let pizza = Cheese::new(Pepperoni::new(PlainPizza));
        assert_eq!(pizza.description(), "Plain Pizza, Pepperoni, Cheese");
        assert_eq!(pizza.cost().to_string(), "8.5");

        let pizza = Pepperoni::new(Cheese::new(PlainPizza));
        assert_eq!(pizza.description(), "Plain Pizza, Cheese, Pepperoni");
        assert_eq!(pizza.cost().to_string(), "8.5");
    }

    #[test]
    fn test_same_topping_twice() {
        let pizza = Cheese::new(Cheese::new(PlainPizza));
        assert_eq!(pizza.description(), "Plain Pizza, Cheese, Cheese");
        assert_eq!(pizza.cost(), Money::new(dec!(8)));
    }

    #[test]
    fn test_decorator_over_decorator_forwards() {
        let pizza = PizzaDecorator::new(Cheese::new(PlainPizza));
        assert_eq!(pizza.description(), "Plain Pizza, Cheese");
        assert_eq!(pizza.cost(), Money::new(dec!(6.5)));
    }
}
