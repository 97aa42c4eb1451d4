//! Brewtopia CLI
//!
//! Command-line front end for the Brewtopia cart and sales dashboard:
//! - Manage the cart stored in a local profile
//! - Check out (prints the payment link)
//! - Draw the sales chart in the terminal
//! - Read or change the theme preference

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use brewtopia::cart::{
    added_message, format_amount, unit_price_label, AddOutcome, CartStore, CartView, Checkout,
    CheckoutError, CheckoutOutcome, PaymentLauncher, QuantityChange,
};
use brewtopia::config::{generate_default_config, Config, ConfigDiscovery, LoggingConfig};
use brewtopia::dashboard::{ChartHost, ChartPeriod, TextRenderer, ThemeToggle};
use brewtopia::notify::NotificationCenter;
use brewtopia::storage::FileStore;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "brewtopia")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brewtopia cart and sales dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile directory (overrides config)
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Open the payment page for the current cart
    Checkout,

    /// Draw the sales chart
    Chart {
        /// Period: monthly, quarterly or yearly
        #[arg(default_value = "monthly")]
        period: String,
        /// Width of the longest bar
        #[arg(short, long, default_value = "40")]
        width: usize,
    },

    /// Show or change the theme preference
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Add one unit of an item
    Add { name: String, price: f64 },
    /// Remove an item entirely
    Remove { name: String },
    /// Change an item's quantity by a signed amount
    Update {
        name: String,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart contents
    Show,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Dark,
    Light,
    Toggle,
}

/// Prints the payment link instead of opening a browser
struct PrintLauncher;

impl PaymentLauncher for PrintLauncher {
    fn open(&mut self, url: &str) -> Result<(), CheckoutError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "Complete your order at: {}", url).map_err(|e| CheckoutError::Launch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut discovery = match &cli.config {
        Some(path) => ConfigDiscovery::from_path(path)?,
        None => Config::load_default(),
    };
    if let Some(profile) = &cli.profile {
        discovery.config.storage.profile_dir = profile.to_string_lossy().to_string();
    }

    init_logging(&discovery.config.logging);
    discovery.log();
    let config = discovery.config;

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Cart { action } => {
            let profile = open_profile(&config)?;
            let mut cart = CartStore::load(profile);
            let mut notices = NotificationCenter::new(config.notifications.settings());
            let symbol = config.checkout.currency_symbol.as_str();

            match action {
                CartAction::Add { name, price } => {
                    let outcome = cart.add(&name, price)?;
                    notices.show_now(added_message(&name), brewtopia::NoticeKind::Success);
                    if let AddOutcome::Incremented { quantity } = outcome {
                        tracing::debug!("{} now x{}", name, quantity);
                    }
                }
                CartAction::Remove { name } => {
                    if cart.remove(&name).is_none() {
                        println!("{} is not in the cart", name);
                    }
                }
                CartAction::Update { name, delta } => match cart.update_quantity(&name, delta) {
                    Some(QuantityChange::Updated { quantity }) => {
                        println!("{} x{}", name, quantity)
                    }
                    Some(QuantityChange::Removed(item)) => println!("Removed {}", item.name),
                    None => println!("{} is not in the cart", name),
                },
                CartAction::Clear => cart.clear(),
                CartAction::Show => {}
            }

            print_notices(&notices);
            print_cart(&CartView::project(&cart), symbol, cli.format)?;
            println!("Items in cart: {}", cart.total_quantity());
        }

        Commands::Checkout => {
            let profile = open_profile(&config)?;
            let cart = CartStore::load(profile);
            let mut notices = NotificationCenter::new(config.notifications.settings());
            let checkout = Checkout::new(config.checkout.payment_url.clone());

            let now = chrono::Utc::now().timestamp_millis();
            let outcome = checkout.run(&cart, &mut PrintLauncher, &mut notices, now);
            print_notices(&notices);

            match outcome {
                CheckoutOutcome::Redirected { order, .. } => match cli.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&order)?)
                    }
                    OutputFormat::Table => {
                        println!("Order {}", order.reference);
                        println!("  {}", order.summary);
                        println!(
                            "  Total: {}",
                            format_amount(&config.checkout.currency_symbol, order.total)
                        );
                    }
                },
                CheckoutOutcome::EmptyCart { .. } => std::process::exit(1),
                CheckoutOutcome::LaunchFailed { error, .. } => return Err(error.into()),
            }
        }

        Commands::Chart { period, width } => {
            let period: ChartPeriod = period.parse()?;
            let mut host = ChartHost::new(TextRenderer::new(width));
            let chart = host.render(period)?;
            print!("{}", chart.frame);
        }

        Commands::Theme { action } => {
            let profile = open_profile(&config)?;
            let mut theme = ThemeToggle::load(profile);
            match action {
                ThemeAction::Show => {}
                ThemeAction::Dark => {
                    theme.set_theme(true);
                }
                ThemeAction::Light => {
                    theme.set_theme(false);
                }
                ThemeAction::Toggle => {
                    theme.toggle();
                }
            }
            println!("Theme: {} (button: {})", theme.theme(), theme.button_label());
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("brewtopia={}", logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn open_profile(config: &Config) -> anyhow::Result<FileStore> {
    let dir = config.profile_dir();
    tracing::debug!("Profile directory: {:?}", dir);
    FileStore::open(&dir).with_context(|| format!("opening profile {}", dir.display()))
}

fn print_notices(notices: &NotificationCenter) {
    for notice in notices.iter() {
        println!("[{}] {}", notice.kind, notice.message);
    }
}

fn print_cart(view: &CartView, symbol: &str, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if let Some(placeholder) = view.placeholder {
        println!("{}", placeholder);
    }

    let name_width = view.rows.iter().map(|r| r.name.len()).max().unwrap_or(4);
    for row in &view.rows {
        println!(
            "{:<nw$}  {:>12}  x{:<3}  {:>10}",
            row.name,
            unit_price_label(symbol, row.unit_price),
            row.quantity,
            format_amount(symbol, row.line_total),
            nw = name_width
        );
    }
    println!("Total: {}", format_amount(symbol, view.total));
    Ok(())
}
