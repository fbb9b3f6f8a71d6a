use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entities::Pool;
use crate::error::{storage_read_error, storage_write_error, Error};
use crate::store::{decode, encode, PoolStore};

/// Whole-blob JSON store backed by a single file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PoolStore for JsonFileStore {
    #[tracing::instrument(skip(self))]
    fn load(&self) -> Result<Vec<Pool>, Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // an absent file is an empty collection
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(storage_read_error(err)),
        };

        decode(&raw)
    }

    #[tracing::instrument(skip_all)]
    fn save(&self, pools: &[Pool]) -> Result<(), Error> {
        let raw = encode(pools)?;

        fs::write(&self.path, raw).map_err(storage_write_error)
    }
}
