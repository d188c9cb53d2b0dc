use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Append-only record store backed by a JSON array file.
///
/// Each store serializes its own read-modify-write cycles behind an async
/// mutex; writes go through a temp file in the same directory followed by
/// an atomic rename so readers never observe a partial file.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Load every record. A missing file reads as an empty store.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_all()
    }

    /// Load the records matching a predicate
    pub async fn find<F>(&self, predicate: F) -> Result<Vec<T>, StoreError>
    where
        F: Fn(&T) -> bool,
    {
        let _guard = self.lock.lock().await;
        Ok(self.read_all()?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Load the first record matching a predicate
    pub async fn find_one<F>(&self, predicate: F) -> Result<Option<T>, StoreError>
    where
        F: Fn(&T) -> bool,
    {
        let _guard = self.lock.lock().await;
        Ok(self.read_all()?.into_iter().find(|r| predicate(r)))
    }

    /// Append one record to the store
    pub async fn append(&self, record: T) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    fn read_all(&self) -> Result<Vec<T>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(parent)?;

        let tmp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&tmp, records)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
