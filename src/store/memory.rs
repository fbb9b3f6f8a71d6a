use std::sync::Mutex;

use crate::entities::Pool;
use crate::error::{storage_read_error, storage_write_error, Error};
use crate::store::{decode, encode, PoolStore};

/// In-process stand-in for a browser key-value entry: the collection
/// lives as one serialized string.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cell: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoolStore for MemoryStore {
    fn load(&self) -> Result<Vec<Pool>, Error> {
        let cell = self.cell.lock().map_err(storage_read_error)?;

        match cell.as_deref() {
            Some(raw) => decode(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, pools: &[Pool]) -> Result<(), Error> {
        let raw = encode(pools)?;

        let mut cell = self.cell.lock().map_err(storage_write_error)?;
        *cell = Some(raw);

        Ok(())
    }
}
