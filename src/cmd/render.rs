use clap::Args;
use rosewright_config::api;
use rosewright_config::config::PageConfig;
use rosewright_config::CfResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: PageConfig,

    /// Query string (or full URL) the page is opened with.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Write the markup here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: RenderArgs, config: &PageConfig) -> CfResult<()> {
    let html = api::render_config_page(config, &args.query)?;
    match args.output {
        Some(path) => {
            fs::write(&path, &html)?;
            info!("Wrote {} bytes of markup to {}", html.len(), path);
        }
        None => println!("{}", html),
    }
    Ok(())
}
