//! Process-wide handle to the loaded dataset.
//!
//! The load outcome is recorded exactly once. A loaded dataset is never
//! replaced or edited, and a failed load stays failed for the rest of the
//! session so no view is ever built from partial data.

use crate::error::{Error, Result};
use crate::loader::{self, LoadReport};
use crate::types::Dataset;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Outcome {
    Loaded(Dataset),
    Failed { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
    Failed,
}

#[derive(Debug, Default)]
pub struct Session {
    outcome: OnceCell<Outcome>,
}

static GLOBAL: Session = Session::new();

/// The session shared by the whole process.
pub fn global() -> &'static Session {
    &GLOBAL
}

impl Session {
    pub const fn new() -> Self {
        Self {
            outcome: OnceCell::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        match self.outcome.get() {
            None => LoadState::Unloaded,
            Some(Outcome::Loaded(_)) => LoadState::Loaded,
            Some(Outcome::Failed { .. }) => LoadState::Failed,
        }
    }

    /// Load the dataset file into this session.
    ///
    /// Only the first call does any work. Later calls return
    /// [`Error::AlreadyLoaded`], or the original load error if that first
    /// attempt failed.
    pub fn load(&self, path: &Path) -> Result<(&Dataset, LoadReport)> {
        let mut report = None;
        let outcome = self.outcome.get_or_init(|| match loader::load_dataset(path) {
            Ok((dataset, r)) => {
                report = Some(r);
                Outcome::Loaded(dataset)
            }
            Err(e) => {
                tracing::error!(error = %e, "dataset load failed");
                let reason = match e {
                    Error::DatasetLoad { reason, .. } => reason,
                    other => other.to_string(),
                };
                Outcome::Failed {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        });
        match (outcome, report) {
            (Outcome::Loaded(dataset), Some(r)) => Ok((dataset, r)),
            (Outcome::Loaded(_), None) => Err(Error::AlreadyLoaded),
            (Outcome::Failed { path, reason }, _) => Err(Error::DatasetLoad {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// Install an already-built dataset; same once-only rule as [`Session::load`].
    pub fn install(&self, dataset: Dataset) -> Result<&Dataset> {
        self.outcome
            .set(Outcome::Loaded(dataset))
            .map_err(|_| Error::AlreadyLoaded)?;
        self.dataset()
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        match self.outcome.get() {
            None => Err(Error::NotLoaded),
            Some(Outcome::Loaded(dataset)) => Ok(dataset),
            Some(Outcome::Failed { path, reason }) => Err(Error::DatasetLoad {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }
}
