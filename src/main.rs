use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rosewright_config::config::PageConfig;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON page configuration; explicit command-line flags win over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the configuration page markup for a query string.
    Render(cmd::render::RenderArgs),
    /// Print the settings payload a save would send back.
    Submit(cmd::submit::SubmitArgs),
    /// Tabulate the options a query string declares.
    Describe(cmd::describe::DescribeArgs),
    /// Tabulate the language choices in display order.
    Langs(cmd::langs::LangsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // stdout carries the page or payload; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Render(args) => (&args.config, "render"),
        Commands::Submit(args) => (&args.config, "submit"),
        Commands::Describe(args) => (&args.config, "describe"),
        Commands::Langs(args) => (&args.config, "langs"),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("Loading page configuration from {}", path);
            let mut file_config = PageConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("Could not load {}: {}", path, e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let result = match cli.command {
        Commands::Render(args) => cmd::render::run(args, &config),
        Commands::Submit(args) => cmd::submit::run(args, &config),
        Commands::Describe(args) => cmd::describe::run(args, &config),
        Commands::Langs(args) => cmd::langs::run(args, &config),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
