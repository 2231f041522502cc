use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use supply_ledger::auth::{SignatureAuthenticator, TransferBuilder};
use supply_ledger::config::{account_address, account_keypair, SimulationConfig, TransferSpec};
use supply_ledger::ledger::{parse_amount, Amount, Ledger, SharedLedger};
use supply_ledger::{Address, LedgerGateway};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledger", about = "Fixed-supply ledger harness", version)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a ledger and replay signed transfers against it
    Simulate {
        /// JSON simulation config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Initial supply (overrides config)
        #[arg(long, value_parser = parse_amount)]
        supply: Option<Amount>,

        /// Owner account name (overrides config)
        #[arg(long)]
        owner: Option<String>,

        /// Extra transfer as FROM:TO:AMOUNT, may repeat
        #[arg(long = "transfer", value_parser = parse_transfer)]
        transfers: Vec<TransferSpec>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the address derived for an account name
    Address { name: String },
}

fn parse_transfer(raw: &str) -> Result<TransferSpec, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (from, to, amount) = match parts.as_slice() {
        [from, to, amount] if !from.is_empty() && !to.is_empty() => (*from, *to, *amount),
        _ => return Err(format!("expected FROM:TO:AMOUNT, got '{}'", raw)),
    };

    Ok(TransferSpec {
        from: from.to_string(),
        to: to.to_string(),
        amount: parse_amount(amount).map_err(|e| e.to_string())?,
    })
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config file first, then command-line overrides on top
fn load_simulation(
    config: Option<&Path>,
    supply: Option<Amount>,
    owner: Option<String>,
    transfers: Vec<TransferSpec>,
) -> anyhow::Result<SimulationConfig> {
    let mut simulation = match config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(supply) = supply {
        simulation.initial_supply = supply;
    }
    if let Some(owner) = owner {
        simulation.owner = owner;
    }
    simulation.transfers.extend(transfers);
    Ok(simulation)
}

fn simulate(config: SimulationConfig, json: bool) -> anyhow::Result<()> {
    let owner = account_address(&config.owner);
    let ledger = Ledger::with_config(&config.ledger, config.initial_supply, owner)
        .context("creating ledger")?;
    let gateway = LedgerGateway::new(SharedLedger::new(ledger), SignatureAuthenticator::new());

    let mut names: HashMap<Address, String> = HashMap::new();
    names.insert(owner, config.owner.clone());

    let mut applied = 0usize;
    for (index, spec) in config.transfers.iter().enumerate() {
        let sender = account_keypair(&spec.from);
        let recipient = account_address(&spec.to);
        names.insert(sender.address(), spec.from.clone());
        names.insert(recipient, spec.to.clone());

        let nonce = gateway.with_authenticator(|auth| auth.next_nonce(&sender.address()));
        let signed = TransferBuilder::new()
            .sender(&sender)
            .recipient(recipient)
            .amount(spec.amount)
            .nonce(nonce)
            .build()
            .with_context(|| format!("signing transfer {}", index + 1))?;

        match gateway.submit(&signed) {
            Ok(receipt) => {
                applied += 1;
                info!(
                    step = index + 1,
                    from = %spec.from,
                    to = %spec.to,
                    amount = %spec.amount,
                    sender_balance = %receipt.from_balance,
                    "transfer applied"
                );
            }
            Err(e) => warn!(step = index + 1, from = %spec.from, to = %spec.to, "transfer failed: {}", e),
        }
    }

    let ledger = gateway.ledger();
    ledger.verify_conservation()?;
    let snapshot = ledger.snapshot();

    if json {
        let encoded = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", encoded);
    } else {
        println!(
            "total supply {} ({} of {} transfers applied)",
            snapshot.total_supply(),
            applied,
            config.transfers.len()
        );
        for holding in snapshot.holdings() {
            let name = names.get(&holding.address).map(String::as_str).unwrap_or("?");
            println!("{}  {:>12}  {}", holding.address, name, holding.balance);
        }
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Simulate {
            config,
            supply,
            owner,
            transfers,
            json,
        } => {
            let simulation = load_simulation(config.as_deref(), supply, owner, transfers)?;
            simulate(simulation, json)
        }
        Command::Address { name } => {
            println!("{}", account_address(&name));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
