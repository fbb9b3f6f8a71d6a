use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::CreatePool;
use crate::config::PoolConfig;
use crate::entities::Driver;
use crate::error::{
    already_accepted_error, already_joined_error, not_a_member_error, pool_full_error, Error,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub status: Status,
    pub destination: String,
    pub pickup_location: String,
    pub departure_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub capacity: u32,
    pub price_per_head: f64,
    pub passengers: Vec<Passenger>,
    pub driver: Option<Driver>,
    pub created_by: Option<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Passenger {
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Accepted,
    Confirmed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "PENDING".into(),
            Self::Accepted => "ACCEPTED".into(),
            Self::Confirmed => "CONFIRMED".into(),
        }
    }
}

impl Pool {
    pub fn new(
        id: String,
        created_at: DateTime<Utc>,
        params: CreatePool,
        config: &PoolConfig,
        created_by: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            status: Status::Pending,
            destination: params.destination,
            pickup_location: params.pickup_location,
            departure_time: params.departure_time,
            created_at,
            capacity: config.capacity,
            price_per_head: config.price_per_head,
            passengers: Vec::new(),
            driver: None,
            created_by,
        }
    }

    /// Ids derive from the creation instant.
    pub fn id_for(created_at: DateTime<Utc>) -> String {
        format!("SPR-{}", created_at.timestamp_millis())
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity as usize
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn has_passenger(&self, user_id: &Uuid) -> bool {
        self.passengers.iter().any(|p| &p.user_id == user_id)
    }

    /// Riders can see and join pools that are not yet confirmed.
    pub fn is_joinable(&self) -> bool {
        match self.status {
            Status::Pending | Status::Accepted => true,
            Status::Confirmed => false,
        }
    }

    pub fn awaits_driver(&self) -> bool {
        match self.status {
            Status::Pending => true,
            _ => false,
        }
    }

    #[tracing::instrument]
    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<(), Error> {
        if self.is_full() {
            return Err(pool_full_error());
        }

        if self.has_passenger(&passenger.user_id) {
            return Err(already_joined_error());
        }

        self.passengers.push(passenger);

        // filling the last seat confirms the pool, but only once a driver is on it
        if self.driver.is_some() && self.is_full() {
            self.status = Status::Confirmed;
        }

        Ok(())
    }

    #[tracing::instrument]
    pub fn remove_passenger(&mut self, user_id: &Uuid) -> Result<(), Error> {
        let index = self
            .passengers
            .iter()
            .position(|p| &p.user_id == user_id)
            .ok_or_else(|| not_a_member_error())?;

        self.passengers.remove(index);

        // a seat opened up
        if let Status::Confirmed = self.status {
            self.status = Status::Accepted;
        }

        Ok(())
    }

    #[tracing::instrument]
    pub fn assign_driver(&mut self, driver: Driver) -> Result<(), Error> {
        match self.status {
            Status::Pending => {
                self.status = match self.is_full() {
                    true => Status::Confirmed,
                    false => Status::Accepted,
                };
                self.driver = Some(driver);

                Ok(())
            }
            _ => Err(already_accepted_error()),
        }
    }
}
