//! String-in, string-out services over [`ConfigPage`], shared by the CLI
//! and anything embedding the crate.

use crate::capability::CapabilitySet;
use crate::config::PageConfig;
use crate::error::CfResult;
use crate::page::ConfigPage;
use crate::serialize::ResultObject;

/// Accepts either a full URL or a bare query string.
pub fn parse_capabilities(input: &str) -> CfResult<CapabilitySet> {
    if input.contains("://") {
        CapabilitySet::from_url(input)
    } else {
        Ok(CapabilitySet::from_query(input))
    }
}

pub fn build_page(config: &PageConfig, input: &str) -> CfResult<ConfigPage> {
    let caps = parse_capabilities(input)?;
    let strings = config.load_strings()?;
    ConfigPage::build(config.generation, caps, strings)
}

pub fn render_config_page(config: &PageConfig, input: &str) -> CfResult<String> {
    Ok(build_page(config, input)?.render())
}

/// The payload the host receives when the user saves without touching
/// anything except the fields in `form_body`.
pub fn submit_config_form(
    config: &PageConfig,
    input: &str,
    form_body: &str,
) -> CfResult<ResultObject> {
    Ok(build_page(config, input)?.submit_form_body(form_body))
}
