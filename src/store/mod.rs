mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::entities::Pool;
use crate::error::{payload_error, Error};

pub const PAYLOAD_VERSION: u32 = 1;

/// Versioned envelope around the persisted collection.
#[derive(Serialize, Deserialize)]
struct Payload {
    version: u32,
    pools: Vec<Pool>,
}

/// The whole pool collection is the persistence aggregate: read in full,
/// rewritten in full on every mutation.
pub trait PoolStore {
    fn load(&self) -> Result<Vec<Pool>, Error>;
    fn save(&self, pools: &[Pool]) -> Result<(), Error>;
}

fn encode(pools: &[Pool]) -> Result<String, Error> {
    let payload = Payload {
        version: PAYLOAD_VERSION,
        pools: pools.to_vec(),
    };

    Ok(serde_json::to_string(&payload)?)
}

fn decode(raw: &str) -> Result<Vec<Pool>, Error> {
    let payload: Payload = serde_json::from_str(raw)?;

    if payload.version != PAYLOAD_VERSION {
        return Err(payload_error(payload.version));
    }

    Ok(payload.pools)
}
