//! `cdocs adjacent` command implementation.

use cdocs_site::CatalogSite;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the adjacent command.
#[derive(Args)]
pub(crate) struct AdjacentArgs {
    /// Page slug (e.g. `docs/guides/intro`, `/guides/intro`).
    slug: String,
}

impl AdjacentArgs {
    /// Print the previous and next pages of a slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebar can't be resolved.
    pub(crate) fn execute(self, site: &CatalogSite, output: &Output) -> Result<(), CliError> {
        let adjacent = site.adjacent_pages(&self.slug)?;

        if adjacent.prev.is_none() && adjacent.next.is_none() {
            tracing::info!(slug = %self.slug, "No adjacent pages");
        }

        output.json(&adjacent)
    }
}
