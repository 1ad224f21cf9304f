//! Implementation of the `sentinel modules` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Module;
use crate::services::ModulePolicy;

/// One row of the module catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Routed to the model at all
    pub analytical: bool,
    /// Produces a scored structured report
    pub structured: bool,
    /// Uses web-grounded search
    pub retrieval: bool,
}

/// Catalog of every module
#[derive(Debug, Serialize)]
pub struct ModulesOutput {
    /// Modules in menu order
    pub modules: Vec<ModuleEntry>,
}

impl ModulesOutput {
    /// Build the catalog from the policy table
    pub fn collect() -> Self {
        let modules = Module::ALL
            .into_iter()
            .map(|module| {
                let policy = ModulePolicy::lookup(module);
                ModuleEntry {
                    id: module.id(),
                    title: module.title(),
                    analytical: module.is_analytical(),
                    structured: policy.is_some_and(|p| p.requires_schema),
                    retrieval: policy.is_some_and(|p| p.use_retrieval),
                }
            })
            .collect();
        Self { modules }
    }
}

impl CommandOutput for ModulesOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_modules(&Module::ALL)
    }
}

/// Print the module catalog.
pub fn execute(json_mode: bool) -> Result<()> {
    output(&ModulesOutput::collect(), json_mode);
    Ok(())
}
