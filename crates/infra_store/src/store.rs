//! The fund store
//!
//! Loads the record set from the backing file once at startup and rewrites
//! the whole file after every successful mutation. The outer JSON key is
//! authoritative for lookup; a record whose own `fund_id` disagrees with
//! its key is rejected at load time rather than silently reconciled.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use domain_fund::{Fund, FundProjection};

use crate::error::StoreError;

/// Default backing file, relative to the working directory
pub const FUND_FILE: &str = "funds.json";

/// In-memory record set backed by a single JSON file.
///
/// All mutating operations hold one mutex across "mutate mapping + persist",
/// so concurrent requests cannot interleave a map update with a file write.
#[derive(Debug)]
pub struct FundStore {
    path: PathBuf,
    funds: Mutex<BTreeMap<String, Fund>>,
}

impl FundStore {
    /// Opens the store, loading the record set from `path` if it exists.
    ///
    /// A missing file yields an empty store. A file that exists but cannot
    /// be parsed as a record set is a fatal condition: the error propagates
    /// and the service must not start serving.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let funds = match fs::read_to_string(&path) {
            Ok(contents) => {
                let records: BTreeMap<String, FundProjection> =
                    serde_json::from_str(&contents)
                        .map_err(|source| StoreError::malformed(&path, source))?;

                let mut funds = BTreeMap::new();
                for (key, projection) in records {
                    let fund_id = projection.fund_id.to_string();
                    if key != fund_id {
                        return Err(StoreError::IdMismatch { key, fund_id });
                    }
                    funds.insert(key, projection.into_fund());
                }
                funds
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::io(&path, source)),
        };

        tracing::info!(
            path = %path.display(),
            records = funds.len(),
            "Fund store loaded"
        );

        Ok(Self {
            path,
            funds: Mutex::new(funds),
        })
    }

    /// Returns projections of every fund, ordered by id
    pub fn list(&self) -> Vec<FundProjection> {
        self.lock().values().map(FundProjection::from).collect()
    }

    /// Looks up a single fund by id
    pub fn get(&self, id: &str) -> Option<FundProjection> {
        self.lock().get(id).map(FundProjection::from)
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Inserts a new fund and persists the record set.
    ///
    /// If the file write fails the insertion is rolled back, so the mapping
    /// keeps mirroring the last successfully saved state.
    pub fn insert(&self, fund: Fund) -> Result<FundProjection, StoreError> {
        let key = fund.id.to_string();
        let projection = FundProjection::from(&fund);

        let mut funds = self.lock();
        funds.insert(key.clone(), fund);
        if let Err(err) = save(&self.path, &funds) {
            funds.remove(&key);
            return Err(err);
        }
        Ok(projection)
    }

    /// Updates a fund's performance figure and persists the record set.
    ///
    /// Returns `Ok(None)` when no fund has the given id.
    pub fn update_performance(
        &self,
        id: &str,
        performance: f64,
    ) -> Result<Option<FundProjection>, StoreError> {
        let mut funds = self.lock();
        let Some(fund) = funds.get_mut(id) else {
            return Ok(None);
        };

        let previous = fund.performance;
        fund.set_performance(performance);
        let projection = FundProjection::from(&*fund);

        if let Err(err) = save(&self.path, &funds) {
            if let Some(fund) = funds.get_mut(id) {
                fund.set_performance(previous);
            }
            return Err(err);
        }
        Ok(Some(projection))
    }

    /// Removes a fund and persists the record set.
    ///
    /// Returns `Ok(false)` when no fund has the given id.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut funds = self.lock();
        let Some(fund) = funds.remove(id) else {
            return Ok(false);
        };

        if let Err(err) = save(&self.path, &funds) {
            funds.insert(id.to_string(), fund);
            return Err(err);
        }
        Ok(true)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Fund>> {
        // A poisoned lock only means another request panicked after its
        // mutation was rolled back or completed; the map itself is intact.
        self.funds.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serializes the whole mapping, keyed by id, and atomically replaces the
/// backing file via a sibling temp file and rename.
fn save(path: &Path, funds: &BTreeMap<String, Fund>) -> Result<(), StoreError> {
    let records: BTreeMap<&String, FundProjection> = funds
        .iter()
        .map(|(key, fund)| (key, FundProjection::from(fund)))
        .collect();

    let contents = serde_json::to_string_pretty(&records)
        .map_err(|source| StoreError::malformed(path, source))?;

    let tmp = temp_path(path);
    fs::write(&tmp, contents).map_err(|source| StoreError::io(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| StoreError::io(path, source))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
