use super::helpers::fetch_pool;
use super::Engine;

use crate::api::QueryAPI;
use crate::entities::{Pool, User};
use crate::error::Error;
use crate::store::PoolStore;

impl<S: PoolStore> QueryAPI for Engine<S> {
    #[tracing::instrument(skip(self))]
    fn find_pool(&self, id: &str) -> Result<Pool, Error> {
        let pools = self.store.load()?;

        let pool = fetch_pool(&pools, id)?;

        Ok(pool.clone())
    }

    #[tracing::instrument(skip(self))]
    fn list_joinable_pools(&self) -> Result<Vec<Pool>, Error> {
        let pools = self.store.load()?;

        Ok(pools.into_iter().filter(|p| p.is_joinable()).collect())
    }

    #[tracing::instrument(skip(self))]
    fn list_pools_awaiting_driver(&self) -> Result<Vec<Pool>, Error> {
        let pools = self.store.load()?;

        Ok(pools.into_iter().filter(|p| p.awaits_driver()).collect())
    }

    #[tracing::instrument(skip(self))]
    fn find_passenger_pool(&self, user: &User) -> Result<Option<Pool>, Error> {
        let pools = self.store.load()?;

        Ok(pools.into_iter().find(|p| p.has_passenger(&user.id)))
    }
}
