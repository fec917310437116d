use crate::reports;
use clap::Args;
use rosewright_config::config::PageConfig;
use rosewright_config::langs::resolve_sorted;
use rosewright_config::CfResult;

#[derive(Args, Debug, Clone)]
pub struct LangsArgs {
    #[command(flatten)]
    pub config: PageConfig,
}

pub fn run(_args: LangsArgs, config: &PageConfig) -> CfResult<()> {
    let strings = config.load_strings()?;
    let entries = config.generation.profile().languages.entries();
    let resolved = resolve_sorted(&entries, &strings);
    reports::print_language_report(config.generation, &resolved);
    Ok(())
}
