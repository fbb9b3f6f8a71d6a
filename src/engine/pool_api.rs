use chrono::Utc;

use super::helpers::{fetch_pool_mut, unique_pool_id};
use super::Engine;

use crate::api::{CreatePool, PoolAPI};
use crate::entities::{Driver, Pool, User};
use crate::error::Error;
use crate::store::PoolStore;

impl<S: PoolStore> PoolAPI for Engine<S> {
    #[tracing::instrument(skip(self))]
    fn create_pool(&self, user: &User, params: CreatePool) -> Result<Pool, Error> {
        let mut pools = self.store.load()?;

        let (id, created_at) = unique_pool_id(&pools, Utc::now());
        let pool = Pool::new(id, created_at, params, &self.config, Some(user.id));

        tracing::info!("created pool {} to {}", pool.id, pool.destination);

        pools.push(pool.clone());
        self.store.save(&pools)?;

        Ok(pool)
    }

    #[tracing::instrument(skip(self))]
    fn join_pool(&self, user: &User, id: &str) -> Result<Pool, Error> {
        let mut pools = self.store.load()?;

        let pool = fetch_pool_mut(&mut pools, id)?;
        pool.add_passenger(user.as_passenger())?;

        tracing::info!(
            "{} joined pool {}, {} of {} seats taken",
            user.name,
            pool.id,
            pool.passengers.len(),
            pool.capacity
        );

        let pool = pool.clone();
        self.store.save(&pools)?;

        Ok(pool)
    }

    #[tracing::instrument(skip(self))]
    fn exit_pool(&self, user: &User, id: &str) -> Result<Option<Pool>, Error> {
        let mut pools = self.store.load()?;

        let pool = fetch_pool_mut(&mut pools, id)?;
        pool.remove_passenger(&user.id)?;

        let emptied = pool.is_empty();
        let snapshot = pool.clone();

        let remaining = match emptied {
            true => {
                tracing::info!("last passenger left pool {}, deleting it", id);

                pools.retain(|p| p.id != id);
                None
            }
            false => Some(snapshot),
        };

        self.store.save(&pools)?;

        Ok(remaining)
    }

    #[tracing::instrument(skip(self))]
    fn assign_driver(&self, driver: &Driver, id: &str) -> Result<Pool, Error> {
        let mut pools = self.store.load()?;

        let pool = fetch_pool_mut(&mut pools, id)?;
        pool.assign_driver(driver.clone())?;

        tracing::info!(
            "driver {} accepted pool {}, status is now {}",
            driver.name,
            pool.id,
            pool.status.name()
        );

        let pool = pool.clone();
        self.store.save(&pools)?;

        Ok(pool)
    }
}
