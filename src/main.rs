use anyhow::Context;
use champ_catalog::api::DataDragonClient;
use champ_catalog::catalog::TagFilter;
use champ_catalog::config::Config;
use champ_catalog::controller::{Controller, ThreadDispatcher, UiEvent};
use champ_catalog::detail::DetailLoader;
use champ_catalog::display::{display_error, display_info, display_success, TerminalChart, TerminalRenderer};
use champ_catalog::session::Session;
use champ_catalog::shell::{self, ShellMessage};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Champion Catalog")]
#[command(about = "Browse the champion roster, details and skins from Data Dragon", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Data locale (default: pt_BR)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the card grid, optionally filtered
    List {
        /// Match name, title or class label
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one class (Assassin, Mago, ... or all)
        #[arg(short, long)]
        tag: Option<TagFilter>,
    },
    /// Show lore, abilities and tips for one champion
    Detail { id: String },
    /// Show the skin gallery for one champion
    Skins { id: String },
    /// Interactive browser (default)
    Browse,
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CATALOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(timeout) = args.timeout {
        anyhow::ensure!(timeout > 0, "--timeout must be positive");
        config.timeout_secs = timeout;
    }
    let patience = config.timeout() + Duration::from_secs(1);

    let client = Arc::new(DataDragonClient::new(config.clone()));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching latest patch and roster...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let started = Session::start(client.as_ref());
    spinner.finish_and_clear();
    let session = started.context("Failed to connect to Riot Games")?;

    display_success(&format!(
        "Patch {} · {} champions ({})",
        session.version(),
        session.catalog().len(),
        config.locale
    ));

    let (tx, rx) = mpsc::channel::<ShellMessage>();
    let loader = DetailLoader::new(client, session.version());
    let dispatcher = ThreadDispatcher::new(loader, tx.clone());
    let mut controller = Controller::new(
        session,
        TerminalRenderer::stdout(),
        Box::new(TerminalChart),
        Box::new(dispatcher),
    );

    match args.command.unwrap_or(Command::Browse) {
        Command::List { search, tag } => {
            controller.show(search.as_deref().unwrap_or(""), tag.unwrap_or_default());
            controller.teardown();
        }
        Command::Detail { id } => {
            controller.handle(&UiEvent::OpenDetail(id));
            shell::wait_until_idle(&mut controller, &rx, patience);
            controller.teardown();
        }
        Command::Skins { id } => {
            controller.handle(&UiEvent::OpenSkins(id));
            shell::wait_until_idle(&mut controller, &rx, patience);
            controller.teardown();
        }
        Command::Browse => {
            display_info("Type 'help' for commands.");
            controller.refresh();
            shell::spawn_stdin_reader(tx);
            shell::run_loop(controller, &rx);
        }
    }

    Ok(())
}
