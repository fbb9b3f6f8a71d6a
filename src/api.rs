use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Driver, Pool, User};
use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePool {
    pub destination: String,
    pub pickup_location: String,
    pub departure_time: DateTime<Utc>,
}

pub trait PoolAPI {
    fn create_pool(&self, user: &User, params: CreatePool) -> Result<Pool, Error>;

    fn join_pool(&self, user: &User, id: &str) -> Result<Pool, Error>;

    /// Returns `None` when the exiting passenger was the last one and the
    /// pool was deleted.
    fn exit_pool(&self, user: &User, id: &str) -> Result<Option<Pool>, Error>;

    fn assign_driver(&self, driver: &Driver, id: &str) -> Result<Pool, Error>;
}

pub trait QueryAPI {
    fn find_pool(&self, id: &str) -> Result<Pool, Error>;

    /// Pools a rider may browse and join: pending or accepted.
    fn list_joinable_pools(&self) -> Result<Vec<Pool>, Error>;

    /// Pools a driver may pick up: pending, no driver yet.
    fn list_pools_awaiting_driver(&self) -> Result<Vec<Pool>, Error>;

    /// The first pool the user is currently a passenger of, if any.
    fn find_passenger_pool(&self, user: &User) -> Result<Option<Pool>, Error>;
}

pub trait DemandAPI {
    /// Creates the canned pool for the date's calendar event, unless an
    /// open pool to that destination already covers the day. Idempotent
    /// per day per destination.
    fn generate_predictive_pools(&self, date: NaiveDate) -> Result<Vec<Pool>, Error>;
}

pub trait API: PoolAPI + QueryAPI + DemandAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
