use chrono::{DateTime, Utc};

use crate::api::{CreatePool, PoolAPI};
use crate::entities::{Pool, User};
use crate::error::{validation_error, Error};

/// Raw booking fields as submitted from the landing page form.
#[derive(Clone, Debug)]
pub struct BookingForm {
    pub pickup_location: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
}

impl BookingForm {
    /// Both location fields must be non-empty after trimming.
    pub fn validate(self) -> Result<CreatePool, Error> {
        let pickup_location = self.pickup_location.trim().to_string();
        let destination = self.destination.trim().to_string();

        if pickup_location.is_empty() {
            return Err(validation_error("pickup location is required"));
        }

        if destination.is_empty() {
            return Err(validation_error("drop-off location is required"));
        }

        Ok(CreatePool {
            destination,
            pickup_location,
            departure_time: self.departure_time,
        })
    }
}

/// Submit handler: validate the form, then hand the booking to the pool
/// manager. Rendering and navigation stay with the caller.
#[tracing::instrument(skip(api))]
pub fn submit_booking<A: PoolAPI + ?Sized>(
    api: &A,
    user: &User,
    form: BookingForm,
) -> Result<Pool, Error> {
    let params = form.validate()?;

    api.create_pool(user, params)
}
