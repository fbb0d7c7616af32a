use crate::config::Config;
use crate::models::LocalEntry;
use crate::talks::api::{FetchError, Transport};
use crate::talks::enrich::{enrich, TaskOutcome};
use crate::talks::placeholder::ListRoot;
use futures::task::{LocalFutureObj, LocalSpawn, LocalSpawnExt, SpawnError};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use thiserror::Error;
use web_sys::Element;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("No element with id '{0}' to render the watch log into")]
    MissingListRoot(String),

    #[error("Could not load the local watch log: {0}")]
    LocalData(#[source] FetchError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub enriched: usize,
    pub absorbed: usize,
}

/// Runs tasks on the page's event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Looks up the element the log renders into. Its absence is the one
/// failure that aborts startup.
pub fn mount_point(list_root_id: &str) -> Result<Element, StartupError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(list_root_id))
        .ok_or_else(|| StartupError::MissingListRoot(list_root_id.to_string()))
}

/// Drops entries that would break the id join: empty ids and repeats.
pub fn validate_entries(entries: Vec<LocalEntry>) -> Vec<LocalEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            if entry.id.is_empty() {
                warn!("Skipping watch log entry without an id ({})", entry.watched_at);
                return false;
            }
            if !seen.insert(entry.id.clone()) {
                warn!("Skipping repeated watch log entry {}", entry.id);
                return false;
            }
            true
        })
        .collect()
}

pub struct Orchestrator<T, S> {
    config: Config,
    transport: T,
    spawner: S,
}

impl<T, S> Orchestrator<T, S>
where
    T: Transport + Clone + 'static,
    S: LocalSpawn,
{
    pub fn new(config: Config, transport: T, spawner: S) -> Self {
        Self {
            config,
            transport,
            spawner,
        }
    }

    /// Loads the local log, puts a skeleton block for every entry into
    /// `root`, and enriches them all concurrently.
    ///
    /// Every skeleton is appended before the first task gets to run, since
    /// nothing here yields between the appends. Handles are awaited in entry
    /// order only to tally the outcomes.
    pub async fn run(&self, root: &ListRoot) -> Result<RunSummary, StartupError> {
        let entries = self
            .transport
            .get_json::<Vec<LocalEntry>>(&self.config.local_data_path)
            .await
            .map_err(StartupError::LocalData)?;
        let entries = validate_entries(entries);
        info!(
            "Loaded {} watched talks from {}",
            entries.len(),
            self.config.local_data_path
        );

        let mut summary = RunSummary {
            entries: entries.len(),
            ..RunSummary::default()
        };
        let mut handles = Vec::with_capacity(entries.len());

        for entry in entries {
            let url = self.config.detail_url(&entry.id);
            let placeholder = root.append(entry);
            let id = placeholder.id().to_string();

            let task = enrich(self.transport.clone(), url, placeholder);
            match self.spawner.spawn_local_with_handle(task) {
                Ok(handle) => handles.push((id, handle)),
                Err(e) => {
                    error!("Could not start enrichment for {}: {}", id, e);
                    summary.absorbed += 1;
                }
            }
        }

        for (id, handle) in handles {
            match handle.await {
                TaskOutcome::Enriched => summary.enriched += 1,
                TaskOutcome::Absorbed(kind) => {
                    debug!("{} stays a skeleton ({:?})", id, kind);
                    summary.absorbed += 1;
                }
            }
        }

        info!(
            "Enriched {} of {} talks ({} left as skeleton)",
            summary.enriched, summary.entries, summary.absorbed
        );
        Ok(summary)
    }
}
