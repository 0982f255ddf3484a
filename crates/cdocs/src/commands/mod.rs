//! CLI command implementations.

pub(crate) mod adjacent;
pub(crate) mod domains;
pub(crate) mod language;
pub(crate) mod messages;
pub(crate) mod nav;

use std::path::PathBuf;
use std::sync::Arc;

use cdocs_config::{CliSettings, Config};
use cdocs_content::MemoryIndex;
use cdocs_site::{CatalogSite, Domain, PathLayout};
use cdocs_storage::FsSource;
use clap::Args;

use crate::error::CliError;

pub(crate) use adjacent::AdjacentArgs;
pub(crate) use domains::DomainsArgs;
pub(crate) use language::LanguageArgs;
pub(crate) use messages::MessagesArgs;
pub(crate) use nav::NavArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover catalog.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog project directory (overrides config and PROJECT_DIR).
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Content index snapshot (overrides config).
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Enable verbose output (debug logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration and build the catalog site.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the content index can't be
    /// loaded.
    pub(crate) fn load_site(self) -> Result<CatalogSite, CliError> {
        let cli_settings = CliSettings {
            project_dir: self.project_dir,
            index_path: self.index,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let index_path = config.content_resolved.index_path.as_deref().ok_or_else(|| {
            CliError::Validation(
                "No content index configured: set [content] index or pass --index".to_owned(),
            )
        })?;
        let index = MemoryIndex::load(index_path)?;

        let docs_dir = config.docs_resolved.docs_dir();
        let source = FsSource::with_patterns(docs_dir, &config.docs_resolved.patterns)
            .map_err(|e| CliError::Validation(format!("Invalid docs.patterns: {e}")))?;

        tracing::debug!(
            project_dir = %config.docs_resolved.project_dir.display(),
            index = %index_path.display(),
            entries = index.len(),
            "Catalog loaded"
        );

        let layout = PathLayout::new(
            &config.docs_resolved.project_dir,
            &config.docs_resolved.site_dir,
        );
        Ok(CatalogSite::new(
            Arc::new(source),
            Arc::new(index),
            config.sidebar,
            layout,
        ))
    }
}

/// Find a domain by logical id.
fn require_domain(site: &CatalogSite, id: &str) -> Result<Domain, CliError> {
    site.find_domain(id)?
        .ok_or_else(|| CliError::DomainNotFound(id.to_owned()))
}
