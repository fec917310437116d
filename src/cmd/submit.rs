use clap::Args;
use rosewright_config::api;
use rosewright_config::config::PageConfig;
use rosewright_config::CfResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub config: PageConfig,

    /// Query string (or full URL) the page was opened with.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Form fields changed by the user, url-encoded (`draw_mode=1&...`).
    #[arg(short, long, default_value = "")]
    pub form: String,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: SubmitArgs, config: &PageConfig) -> CfResult<()> {
    let result = api::submit_config_form(config, &args.query, &args.form)?;
    info!("Payload carries {} settings", result.len());

    let json = if args.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{}", json);
    Ok(())
}
