use super::base::{Pizza, PlainPizza};
use super::decorator::{Cheese, Pepperoni, PizzaBox};
use crate::error::ShowcaseError;
use crate::money::Money;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Cheese,
    Pepperoni,
}

impl Topping {
    pub const ALL: [Topping; 2] = [Topping::Cheese, Topping::Pepperoni];

    /// Wraps `pizza` in this topping's decorator.
    pub fn apply(self, pizza: PizzaBox) -> PizzaBox {
        match self {
            Topping::Cheese => Box::new(Cheese::from_boxed(pizza)),
            Topping::Pepperoni => Box::new(Pepperoni::from_boxed(pizza)),
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Topping::Cheese => Cheese::PRICE,
            Topping::Pepperoni => Pepperoni::PRICE,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Topping::Cheese => Cheese::SUFFIX,
            Topping::Pepperoni => Pepperoni::SUFFIX,
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topping::Cheese => f.write_str("cheese"),
            Topping::Pepperoni => f.write_str("pepperoni"),
        }
    }
}

impl FromStr for Topping {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topping::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShowcaseError::UnknownTopping(s.to_string()))
    }
}

/// Builds a plain pizza wrapped in `toppings`, first one innermost.
pub fn build_pizza(toppings: &[Topping]) -> PizzaBox {
    debug!(?toppings, "building pizza");
    toppings
        .iter()
        .fold(Box::new(PlainPizza) as PizzaBox, |pizza, topping| {
            topping.apply(pizza)
        })
}

/// Snapshot of a finished pizza.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PizzaOrder {
    pub description: String,
    pub cost: Money,
}

impl PizzaOrder {
    pub fn of(pizza: &dyn Pizza) -> Self {
        Self {
            description: pizza.description(),
            cost: pizza.cost(),
        }
    }
}

impl fmt::Display for PizzaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "Cost: ${}", self.cost)
    }
}
