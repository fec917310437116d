use crate::capability::CapabilitySet;
use crate::error::CfResult;
use crate::i18n::StringTable;
use crate::product::{declare_options, Generation, ProductProfile};
use crate::registry::OptionRegistry;
use crate::render;
use crate::serialize::{apply_developer_unlock, serialize, FormSnapshot, ResultObject};
use tracing::info;

/// One configuration page: the capability set it was opened with and the
/// declarations that set produced.
#[derive(Debug, Clone)]
pub struct ConfigPage {
    pub generation: Generation,
    pub caps: CapabilitySet,
    pub strings: StringTable,
    pub registry: OptionRegistry,
}

impl ConfigPage {
    pub fn build(
        generation: Generation,
        caps: CapabilitySet,
        strings: StringTable,
    ) -> CfResult<Self> {
        let registry = declare_options(generation, &caps, &strings)?;
        info!(
            "Built {} page with {} options from {} query parameters",
            generation,
            registry.len(),
            caps.len()
        );
        Ok(Self {
            generation,
            caps,
            strings,
            registry,
        })
    }

    pub fn from_query(generation: Generation, query: &str, strings: StringTable) -> CfResult<Self> {
        Self::build(generation, CapabilitySet::from_query(query), strings)
    }

    pub fn profile(&self) -> ProductProfile {
        self.generation.profile()
    }

    pub fn render(&self) -> String {
        render::render_page(self)
    }

    pub fn initial_snapshot(&self) -> FormSnapshot {
        FormSnapshot::initial(&self.registry, &self.caps)
    }

    /// Serializes a snapshot, then applies the developer unlock where the
    /// generation has one.
    pub fn submit(&self, snapshot: &FormSnapshot) -> ResultObject {
        let mut result = serialize(&self.registry, snapshot);
        if self.profile().developer_unlock {
            apply_developer_unlock(&self.caps, &mut result);
        }
        result
    }

    /// Submits the page as rendered, with `body` applied over the initial
    /// selections.
    pub fn submit_form_body(&self, body: &str) -> ResultObject {
        let mut snapshot = self.initial_snapshot();
        snapshot.apply_form_body(&self.registry, body);
        self.submit(&snapshot)
    }
}
