use pattern_showcase::money::Money;
use pattern_showcase::pizza::Topping;
use rand::Rng;
use rust_decimal::Decimal;

#[allow(dead_code)]
pub fn random_toppings(rng: &mut impl Rng, max_len: usize) -> Vec<Topping> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Topping::Cheese
            } else {
                Topping::Pepperoni
            }
        })
        .collect()
}

/// Amounts with up to four decimal places, negatives included.
#[allow(dead_code)]
pub fn random_amount(rng: &mut impl Rng) -> Money {
    let units = rng.gen_range(-1_000_000i64..=1_000_000);
    let scale = rng.gen_range(0..=4u32);
    Money::new(Decimal::new(units, scale))
}
