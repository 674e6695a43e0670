//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use guitarla_commerce::catalog::Catalog;
use guitarla_commerce::engine::{CartEngine, KvPersistence};
use guitarla_store::FileStore;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.json");

/// Engine persisting to the configured store directory.
pub type Engine = CartEngine<KvPersistence<FileStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Resolved store directory.
    pub fn store_dir(&self) -> PathBuf {
        resolve(self.base_dir(), &self.config.store.dir)
    }

    /// Load the catalog from the configured file or the built-in data.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.catalog.path {
            Some(path) => {
                let path = resolve(self.base_dir(), path);
                self.output.debug(&format!("Catalog: {}", path.display()));
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Catalog::from_json(BUILTIN_CATALOG).context("Built-in catalog is invalid"),
        }
    }

    /// Open the store and restore the cart.
    pub fn engine(&self) -> Result<Engine> {
        let dir = self.store_dir();
        debug!(dir = %dir.display(), "opening cart store");
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open store: {}", dir.display()))?;
        Ok(CartEngine::initialize(KvPersistence::new(store)))
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                if let Ok(config) = CliConfig::load(&config_path) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &Path, config: CliConfig, config_path: Option<PathBuf>) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            config_path,
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), CliConfig::default(), None);

        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("guitarla.toml"), "[store]\ndir = \"carts\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.store.dir, "carts");
        assert_eq!(path, dir.path().join("guitarla.toml"));
    }

    #[test]
    fn test_store_dir_is_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("sub");
        let config_path = dir.path().join("guitarla.toml");
        let ctx = context_in(&cwd, CliConfig::default(), Some(config_path));

        assert_eq!(ctx.store_dir(), dir.path().join(".guitarla"));
    }

    #[test]
    fn test_engine_persists_into_store_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), CliConfig::default(), None);
        let catalog = ctx.catalog().unwrap();

        let mut engine = ctx.engine().unwrap();
        engine.add_to_cart(&catalog.items()[0]);

        let reloaded = ctx.engine().unwrap();
        assert_eq!(reloaded.cart().len(), 1);
        assert!(dir.path().join(".guitarla").join("cart.json").is_file());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.path = Some("missing.json".to_string());
        let ctx = context_in(dir.path(), config, None);

        let err = ctx.catalog().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read catalog"));
    }
}
