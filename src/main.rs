use std::sync::Arc;

use chrono::{Duration, Utc};

use sprpool::api::{DynAPI, PoolAPI, QueryAPI};
use sprpool::booking::{submit_booking, BookingForm};
use sprpool::engine::Engine;
use sprpool::entities::{Driver, User};
use sprpool::store::JsonFileStore;

fn main() {
    tracing_subscriber::fmt::init();

    let store = JsonFileStore::new("sprpool.json");
    let engine = Engine::new(store).unwrap();

    engine.init().unwrap();

    let api = Arc::new(engine) as DynAPI;

    let rider = User::new("Asha");
    let driver = Driver::new("Marcus");

    let form = BookingForm {
        pickup_location: "Campus Main Gate".into(),
        destination: "Central Railway Station".into(),
        departure_time: Utc::now() + Duration::hours(3),
    };

    let pool = submit_booking(api.as_ref(), &rider, form).unwrap();
    let pool = api.join_pool(&rider, &pool.id).unwrap();
    let pool = api.assign_driver(&driver, &pool.id).unwrap();

    tracing::info!(
        "pool {} to {} is {} with {} of {} seats taken",
        pool.id,
        pool.destination,
        pool.status.name(),
        pool.passengers.len(),
        pool.capacity
    );

    for pool in api.list_joinable_pools().unwrap() {
        tracing::info!(
            "open pool {} to {} departing {}",
            pool.id,
            pool.destination,
            pool.departure_time
        );
    }
}
