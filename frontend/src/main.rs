use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pawguardians::{
    logging, AnimalCard, ConsoleNotifier, DonateOutcome, DonationBackend, DonationPage, Locale,
    Notifier, PageConfig, SimulatedBackend, StaticWallet, Wallet,
};

#[derive(Parser, Debug)]
#[command(name = "pawguardians", about = "Street-animal donation page in the terminal")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured locale (tr, en)
    #[arg(long)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the animal cards and their progress
    Cards,
    /// Donate to an animal
    Donate {
        #[arg(long)]
        animal: u32,
        #[arg(long)]
        amount: Option<String>,
        /// Wallet address standing in for the browser extension
        #[arg(long)]
        address: Option<String>,
    },
}

fn render_card<W: Wallet, B: DonationBackend, N: Notifier>(
    page: &DonationPage<W, B, N>,
    card: &AnimalCard,
    messages: &pawguardians::locale::Messages,
) {
    println!("{} {}", card.emoji(), card.name);
    println!("   {}", card.description);
    let filled = (card.progress_percent() / 5.0).round() as usize;
    println!(
        "   [{}{}] {}: {} XLM  {}: {} XLM  %{} {}",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        messages.raised,
        card.raised,
        messages.target,
        card.target,
        card.completion_percent(),
        messages.completed,
    );
    if page.selected().is_some_and(|selected| selected.id == card.id) {
        println!("   {}", messages.selected);
    }
}

fn render<W: Wallet, B: DonationBackend, N: Notifier>(page: &DonationPage<W, B, N>, locale: Locale) {
    let messages = locale.messages();
    println!("{}", messages.title);
    match page.wallet_caption() {
        Some(caption) => println!("{caption}"),
        None => println!("{}", page.connect_label()),
    }
    println!();
    for card in page.cards() {
        render_card(page, card, messages);
    }
    println!();
    println!("{}", page.hint());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = PageConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    logging::init(&config.log_filter);
    tracing::debug!(?config, "starting");

    let backend = SimulatedBackend::new(config.simulated_delay());

    match cli.command {
        Command::Cards => {
            let mut page =
                DonationPage::new(&config, StaticWallet::absent(), backend, ConsoleNotifier);
            page.mount().await;
            render(&page, config.locale);
        }
        Command::Donate {
            animal,
            amount,
            address,
        } => {
            let wallet = address.map(StaticWallet::new).unwrap_or_else(StaticWallet::absent);
            let mut page = DonationPage::new(&config, wallet, backend, ConsoleNotifier);
            page.mount().await;
            if page.public_key().is_none() {
                page.connect_wallet().await;
            }
            page.select(animal);
            if let Some(amount) = amount {
                page.set_amount(amount);
            }
            render(&page, config.locale);
            println!("{}", page.donate_label());

            if page.donate().await != DonateOutcome::Completed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
