use crate::reports;
use clap::Args;
use rosewright_config::api;
use rosewright_config::config::PageConfig;
use rosewright_config::CfResult;

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub config: PageConfig,

    #[arg(short, long, default_value = "")]
    pub query: String,
}

pub fn run(args: DescribeArgs, config: &PageConfig) -> CfResult<()> {
    let page = api::build_page(config, &args.query)?;
    reports::print_declaration_report(&page);
    Ok(())
}
