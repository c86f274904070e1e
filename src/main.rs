use clap::{ArgAction, Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pattern_showcase::application::demo;
use pattern_showcase::interfaces::report::{OutputFormat, ReportWriter};
use pattern_showcase::media::{AudioPlayer, MediaPlayer};
use pattern_showcase::money::Money;
use pattern_showcase::payment::{CreditCardPayment, PayPalPayment, ShoppingCart};
use pattern_showcase::pizza::{PizzaOrder, Topping, build_pizza};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for results (text or json)
    #[arg(long, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strategy pattern: pay for a cart with interchangeable methods
    Payment(PaymentArgs),
    /// Adapter pattern: play media through a common player interface
    Media(MediaArgs),
    /// Decorator pattern: layer toppings over a plain pizza
    Pizza(PizzaArgs),
}

#[derive(Args)]
struct PaymentArgs {
    /// Pay by credit card with this number
    #[arg(long, conflicts_with = "paypal", requires = "amount")]
    card: Option<String>,

    /// Pay through PayPal with this email
    #[arg(long, requires = "amount")]
    paypal: Option<String>,

    /// Amount to check out. Without it the built-in demo runs.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<Money>,
}

#[derive(Args)]
struct MediaArgs {
    /// Media type, e.g. mp3, vlc, mp4
    #[arg(requires = "file")]
    audio_type: Option<String>,

    /// File to play
    file: Option<String>,
}

#[derive(Args)]
struct PizzaArgs {
    /// Topping to add (repeatable, applied in order)
    #[arg(long = "topping", value_name = "TOPPING")]
    toppings: Vec<Topping>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut report = ReportWriter::new(stdout.lock(), cli.format);

    match cli.command {
        Command::Payment(args) => match args.amount {
            None => {
                for receipt in demo::payment_demo().into_diagnostic()? {
                    report.write_receipt(&receipt).into_diagnostic()?;
                }
            }
            Some(amount) => {
                let mut cart = ShoppingCart::new();
                if let Some(card) = args.card {
                    cart.set_payment_strategy(CreditCardPayment::new(card));
                } else if let Some(email) = args.paypal {
                    cart.set_payment_strategy(PayPalPayment::new(email));
                }
                let receipt = cart.checkout(amount).into_diagnostic()?;
                report.write_receipt(&receipt).into_diagnostic()?;
            }
        },
        Command::Media(args) => match (args.audio_type, args.file) {
            (Some(audio_type), Some(file)) => {
                let outcome = AudioPlayer::new().play(&audio_type, &file);
                report.write_play(&outcome).into_diagnostic()?;
            }
            _ => {
                for outcome in demo::media_demo() {
                    report.write_play(&outcome).into_diagnostic()?;
                }
            }
        },
        Command::Pizza(args) => {
            let order = if args.toppings.is_empty() {
                demo::pizza_demo()
            } else {
                PizzaOrder::of(build_pizza(&args.toppings).as_ref())
            };
            report.write_order(&order).into_diagnostic()?;
        }
    }

    report.flush().into_diagnostic()?;
    Ok(())
}
