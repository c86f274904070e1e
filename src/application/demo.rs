use crate::error::Result;
use crate::media::{AudioPlayer, MediaPlayer, PlayOutcome};
use crate::money::Money;
use crate::payment::{CreditCardPayment, PayPalPayment, Receipt, ShoppingCart};
use crate::pizza::{Cheese, Pepperoni, PizzaOrder, PlainPizza};
use rust_decimal_macros::dec;
use tracing::info;

/// Pays twice from one cart, switching strategy in between.
pub fn payment_demo() -> Result<Vec<Receipt>> {
    info!("running payment demo");
    let mut cart = ShoppingCart::new();

    cart.set_payment_strategy(CreditCardPayment::new("1234-5678-9876-5432"));
    let card = cart.checkout(Money::new(dec!(100.00)))?;

    cart.set_payment_strategy(PayPalPayment::new("user@example.com"));
    let paypal = cart.checkout(Money::new(dec!(250.00)))?;

    Ok(vec![card, paypal])
}

/// The `(type, file)` pairs the media demo plays, in order.
pub const MEDIA_PLAYLIST: [(&str, &str); 3] = [
    ("mp3", "song.mp3"),
    ("mp4", "video.mp4"),
    ("vlc", "movie.vlc"),
];

pub fn media_demo() -> Vec<PlayOutcome> {
    info!("running media demo");
    let player = AudioPlayer::new();
    MEDIA_PLAYLIST
        .iter()
        .map(|(audio_type, file_name)| player.play(audio_type, file_name))
        .collect()
}

/// Plain pizza with cheese, then pepperoni on top.
pub fn pizza_demo() -> PizzaOrder {
    info!("running pizza demo");
    let pizza = Pepperoni::new(Cheese::new(PlainPizza::new()));
    PizzaOrder::of(&pizza)
}
