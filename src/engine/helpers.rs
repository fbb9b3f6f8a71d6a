use chrono::{DateTime, Duration, Utc};

use crate::entities::Pool;
use crate::error::{pool_not_found_error, Error};

pub fn fetch_pool<'a>(pools: &'a [Pool], id: &str) -> Result<&'a Pool, Error> {
    pools
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| pool_not_found_error())
}

pub fn fetch_pool_mut<'a>(pools: &'a mut [Pool], id: &str) -> Result<&'a mut Pool, Error> {
    pools
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| pool_not_found_error())
}

/// Nudges the creation instant forward until the derived id is unique
/// within the collection.
pub fn unique_pool_id(pools: &[Pool], created_at: DateTime<Utc>) -> (String, DateTime<Utc>) {
    let mut created_at = created_at;

    loop {
        let id = Pool::id_for(created_at);

        if !pools.iter().any(|p| p.id == id) {
            return (id, created_at);
        }

        created_at = created_at + Duration::milliseconds(1);
    }
}
