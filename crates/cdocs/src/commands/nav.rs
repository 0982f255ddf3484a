//! `cdocs nav` command implementation.

use cdocs_site::CatalogSite;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Print the flattened page list instead of the tree.
    #[arg(long)]
    flat: bool,
}

impl NavArgs {
    /// Print the resolved sidebar.
    ///
    /// Docs files without a content index entry are reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebar can't be resolved.
    pub(crate) fn execute(self, site: &CatalogSite, output: &Output) -> Result<(), CliError> {
        let tree = site.navigation_tree()?;

        for id in &tree.dropped {
            output.warning(&format!("No content index entry for {id}, skipped"));
        }

        if self.flat {
            output.json(&cdocs_site::flatten(&tree.items))
        } else {
            output.json(&tree.items)
        }
    }
}
