//! Decorator pattern: toppings layered over a plain pizza, each adding to
//! the description and the price.

pub mod base;
pub mod decorator;
pub mod topping;

pub use base::{Pizza, PlainPizza};
pub use decorator::{Cheese, Pepperoni, PizzaBox, PizzaDecorator};
pub use topping::{PizzaOrder, Topping, build_pizza};
