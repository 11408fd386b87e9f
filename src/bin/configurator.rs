use casa_configurator::adapters::navigator::{PrintNavigator, SystemNavigator};
use casa_configurator::adapters::terminal;
use casa_configurator::config::{AppConfig, TomlConfig};
use casa_configurator::utils::{logger, validation::Validate};
use casa_configurator::{Catalog, ConfiguratorSession, ContactTargets, LinkGenerator};
use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(name = "configurator")]
#[command(about = "Interactive smart-home device configurator")]
struct Args {
    /// Path to a TOML configuration file (only the [contact] section is used)
    #[arg(short, long)]
    config: Option<String>,

    /// Print generated links instead of opening them
    #[arg(long)]
    no_open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config.into_app_config(),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let links = LinkGenerator::new(ContactTargets::from_config(&config));
    let mut session = ConfiguratorSession::new(Catalog::builtin(), links);

    println!("AL Casa Inteligente · Sem Obras");
    println!("Escreva `help` para ver os comandos.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if args.no_open {
        let mut navigator = PrintNavigator::new(io::stdout());
        terminal::run_loop(&mut session, stdin.lock(), &mut stdout, &mut navigator)?;
    } else {
        let mut navigator = SystemNavigator;
        terminal::run_loop(&mut session, stdin.lock(), &mut stdout, &mut navigator)?;
        if let Some(link) = session.last_link() {
            tracing::debug!("Last generated link: {}", link);
        }
    }

    Ok(())
}
