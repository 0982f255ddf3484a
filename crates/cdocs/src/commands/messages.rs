//! `cdocs messages` command implementation.

use cdocs_site::CatalogSite;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the messages command.
#[derive(Args)]
pub(crate) struct MessagesArgs {
    /// Domain id.
    domain: String,
}

impl MessagesArgs {
    /// Print the messages sent and received by a domain's services.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain doesn't exist or the index can't be read.
    pub(crate) fn execute(self, site: &CatalogSite, output: &Output) -> Result<(), CliError> {
        let domain = super::require_domain(site, &self.domain)?;
        let messages = site.messages_for_domain(&domain)?;

        for reference in &messages.unresolved {
            output.warning(&format!("Message {} not found", reference.id));
        }

        output.json(&messages)
    }
}
