//! `cdocs language` command implementation.

use cdocs_site::CatalogSite;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the language command.
#[derive(Args)]
pub(crate) struct LanguageArgs {
    /// Domain id.
    domain: String,
}

impl LanguageArgs {
    /// Print the ubiquitous-language entries next to a domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain doesn't exist or the index can't be read.
    pub(crate) fn execute(self, site: &CatalogSite, output: &Output) -> Result<(), CliError> {
        let domain = super::require_domain(site, &self.domain)?;
        let entries = site.ubiquitous_language(&domain)?;

        if entries.is_empty() {
            output.info(&format!("No ubiquitous language for domain {}", domain.id()));
        }

        output.json(&entries)
    }
}
