use anyhow::Context;
use press_config::PressConfig;
use press_store::SubmissionStore;

/// Shared application resources initialized once at startup and passed to
/// every command handler.
pub struct AppContext {
    pub store: SubmissionStore,
    pub config: PressConfig,
}

impl AppContext {
    /// Open the store described by `config`, relative to the current directory.
    pub fn init(config: PressConfig) -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("failed to read current directory")?;
        let store = SubmissionStore::open(&config.store, &base)?;
        Ok(Self { store, config })
    }

    /// Context over an in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let config = PressConfig::default();
        let store = SubmissionStore::in_memory(config.store.slot.clone());
        Self { store, config }
    }

    /// In-memory context that also hands back its storage, so tests can make
    /// writes fail.
    #[cfg(test)]
    pub fn in_memory_with_storage() -> (Self, std::sync::Arc<press_store::MemoryStorage>) {
        let config = PressConfig::default();
        let storage = std::sync::Arc::new(press_store::MemoryStorage::new());
        let store = SubmissionStore::new(
            storage.clone(),
            config.store.slot.clone(),
            press_store::trail::writer::TrailWriter::disabled(),
        );
        (Self { store, config }, storage)
    }

    /// File-backed context rooted at `base`, trail enabled.
    #[cfg(test)]
    pub fn on_disk(base: &std::path::Path) -> Self {
        let config = PressConfig::default();
        let store = SubmissionStore::open(&config.store, base).expect("store should open");
        Self { store, config }
    }
}
