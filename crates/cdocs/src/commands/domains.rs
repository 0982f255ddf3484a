//! `cdocs domains` command implementation.

use cdocs_site::{CatalogSite, VersionMode};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the domains command.
#[derive(Args)]
pub(crate) struct DomainsArgs {
    /// Leave out archived versions (files under `versioned/`).
    #[arg(long)]
    current_only: bool,
}

impl DomainsArgs {
    /// Print the assembled domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the content index can't be read.
    pub(crate) fn execute(self, site: &CatalogSite, output: &Output) -> Result<(), CliError> {
        let mode = if self.current_only {
            VersionMode::CurrentOnly
        } else {
            VersionMode::AllVersions
        };
        let domains = site.domains(mode)?;

        for domain in domains.iter() {
            for reference in &domain.unresolved_services {
                output.warning(&format!(
                    "Domain {}: service {} not found",
                    domain.id(),
                    reference.id
                ));
            }
        }

        output.json(&*domains)
    }
}
