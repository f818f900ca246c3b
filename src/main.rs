use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use storefront::core::Tab;
use storefront::core::config::{self, CliOverrides, StartupLog, StorefrontConfig};
use storefront::core::state::Navigator;

#[derive(Parser)]
#[command(name = "storefront", about = "Tab coordinator navigation demo")]
struct Args {
    /// Tab to start on
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Deep link to open at launch (repeatable), e.g. product/999 or modal/login
    #[arg(short, long = "open", value_name = "LINK")]
    open: Vec<String>,

    /// Skip the onboarding cover even if the config enables it
    #[arg(long)]
    no_onboarding: bool,

    /// Apply startup navigation, print the state as JSON and exit
    #[arg(long)]
    print_state: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Loading happens before the logger exists; its messages are replayed after.
    let mut startup = StartupLog::new();
    let (file_config, config_error) = match config::load_config(&mut startup) {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        start_tab: args.tab,
        no_onboarding: args.no_onboarding,
        deep_links: args.open,
    };
    let resolved = config::resolve(&file_config, &cli, &mut startup);

    // Initialize file logger - the terminal UI owns stdout
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Storefront starting up on tab {}", resolved.start_tab);
    startup.replay();
    if let Some(e) = &config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    if args.print_state {
        let navigator = Navigator::from_config(&resolved);
        let json = serde_json::to_string_pretty(&navigator.state().snapshot())?;
        println!("{json}");
        return Ok(());
    }

    storefront::tui::run(&resolved)
}
