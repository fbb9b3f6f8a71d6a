mod demand_api;
mod helpers;
mod pool_api;
mod query_api;

use chrono::Utc;

use crate::api::{DemandAPI, API};
use crate::config::PoolConfig;
use crate::demand::DemandCalendar;
use crate::error::Error;
use crate::store::PoolStore;

pub struct Engine<S: PoolStore> {
    store: S,
    config: PoolConfig,
    calendar: DemandCalendar,
}

impl<S: PoolStore> Engine<S> {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(store: S) -> Result<Self, Error> {
        Self::with_config(store, PoolConfig::default(), DemandCalendar::default())
    }

    #[tracing::instrument(name = "Engine::with_config", skip_all)]
    pub fn with_config(
        store: S,
        config: PoolConfig,
        calendar: DemandCalendar,
    ) -> Result<Self, Error> {
        // a blank store gets a versioned empty payload up front
        let pools = store.load()?;
        store.save(&pools)?;

        Ok(Self {
            store,
            config,
            calendar,
        })
    }

    /// Page-load hook: run predictive generation for the current date.
    #[tracing::instrument(skip(self))]
    pub fn init(&self) -> Result<(), Error> {
        self.generate_predictive_pools(Utc::now().date_naive())?;

        Ok(())
    }
}

impl<S: PoolStore> API for Engine<S> {}
