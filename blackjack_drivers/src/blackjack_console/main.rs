mod session;

use std::io;
use std::path::PathBuf;
use std::process;

use blackjack_drivers::{parse_config_from_file, ChipLedger, Config, Console};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::session::Session;

const DEFAULT_CONFIG_PATH: &str = "~/.blackjack.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Keeps chip balances in this file between sessions
    #[arg(short, long)]
    ledger: Option<PathBuf>,

    /// Seeds the shuffle for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,
}

/// The default config file is optional; an explicitly given one is not.
fn load_config(config: &str) -> Result<Config, String> {
    if config != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(config).map_err(|err| err.to_string());
    }
    let home_dir = home::home_dir().ok_or_else(|| String::from("Cannot find home directory"))?;
    let config_file_path = home_dir.join(".blackjack.yml");
    if !config_file_path.exists() {
        log::info!("No config at {}, using defaults", config_file_path.display());
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        return Err(String::from(
            "This should be a path rather than a directory",
        ));
    }
    parse_config_from_file(&config_file_path).map_err(|err| err.to_string())
}

fn run(args: CommandLineArgs) -> Result<(), String> {
    let config = load_config(&args.config)?;
    log::debug!("{:#?}", config);
    let rule: blackjack::Rule = config.rule.try_into().map_err(|err| format!("{}", err))?;

    let ledger = match &args.ledger {
        Some(path) => ChipLedger::load(path).map_err(|err| err.to_string())?,
        None => None,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(rule, &config.table, ledger, args.ledger, rng, console);
    session.run().map_err(|err| err.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CommandLineArgs::parse();
    if let Err(err) = run(args) {
        log::error!("{}", err);
        process::exit(1);
    }
}
