use chrono::{Duration, NaiveDate, Utc};

use sprpool::api::{CreatePool, DemandAPI, PoolAPI, QueryAPI};
use sprpool::booking::{submit_booking, BookingForm};
use sprpool::config::PoolConfig;
use sprpool::demand::{DemandCalendar, DemandEvent};
use sprpool::engine::Engine;
use sprpool::entities::{Driver, Status, User};
use sprpool::error::{
    already_accepted_error, already_joined_error, not_a_member_error, pool_full_error,
    pool_not_found_error, validation_error,
};
use sprpool::store::{JsonFileStore, MemoryStore};

fn engine() -> Engine<MemoryStore> {
    Engine::with_config(
        MemoryStore::new(),
        PoolConfig::default(),
        DemandCalendar::new(),
    )
    .unwrap()
}

fn params() -> CreatePool {
    CreatePool {
        destination: "Central Railway Station".into(),
        pickup_location: "Campus Main Gate".into(),
        departure_time: Utc::now() + Duration::hours(3),
    }
}

fn riders(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User::new(&format!("rider-{}", i)))
        .collect()
}

#[test]
fn joining_a_full_pool_leaves_state_unchanged() {
    let engine = engine();
    let creator = User::new("creator");

    let pool = engine.create_pool(&creator, params()).unwrap();

    for rider in riders(4) {
        engine.join_pool(&rider, &pool.id).unwrap();
    }

    let err = engine
        .join_pool(&User::new("late-rider"), &pool.id)
        .unwrap_err();

    assert_eq!(err.code, pool_full_error().code);

    let pool = engine.find_pool(&pool.id).unwrap();
    assert_eq!(pool.passengers.len(), 4);
    assert!(matches!(pool.status, Status::Pending));
}

#[test]
fn joining_twice_returns_already_joined_without_duplicating() {
    let engine = engine();
    let rider = User::new("rider-a");

    let pool = engine.create_pool(&rider, params()).unwrap();

    engine.join_pool(&rider, &pool.id).unwrap();
    let err = engine.join_pool(&rider, &pool.id).unwrap_err();

    assert_eq!(err.code, already_joined_error().code);
    assert_eq!(engine.find_pool(&pool.id).unwrap().passengers.len(), 1);
}

#[test]
fn fourth_join_confirms_a_pool_with_a_driver() {
    let engine = engine();
    let driver = Driver::new("driver");

    let pool = engine.create_pool(&User::new("creator"), params()).unwrap();
    engine.assign_driver(&driver, &pool.id).unwrap();

    for rider in riders(4) {
        engine.join_pool(&rider, &pool.id).unwrap();
    }

    let latest = engine.find_pool(&pool.id).unwrap();

    assert!(matches!(latest.status, Status::Confirmed));
    assert_eq!(latest.passengers.len(), 4);
    assert_eq!(latest.driver.unwrap().id, driver.id);
}

#[test]
fn exiting_the_last_passenger_deletes_the_pool() {
    let engine = engine();
    let rider = User::new("rider");

    let pool = engine.create_pool(&rider, params()).unwrap();
    engine.assign_driver(&Driver::new("driver"), &pool.id).unwrap();
    engine.join_pool(&rider, &pool.id).unwrap();

    assert!(matches!(
        engine.find_pool(&pool.id).unwrap().status,
        Status::Accepted
    ));

    let remaining = engine.exit_pool(&rider, &pool.id).unwrap();

    assert!(remaining.is_none());
    let err = engine.find_pool(&pool.id).unwrap_err();
    assert_eq!(err.code, pool_not_found_error().code);
}

#[test]
fn exiting_a_confirmed_pool_demotes_it_to_accepted() {
    let engine = engine();
    let driver = Driver::new("driver");
    let all_riders = riders(4);

    let pool = engine.create_pool(&all_riders[0], params()).unwrap();
    engine.assign_driver(&driver, &pool.id).unwrap();

    for rider in &all_riders {
        engine.join_pool(rider, &pool.id).unwrap();
    }

    let pool = engine.exit_pool(&all_riders[0], &pool.id).unwrap().unwrap();

    assert!(matches!(pool.status, Status::Accepted));
    assert_eq!(pool.passengers.len(), 3);
    assert_eq!(pool.driver.unwrap().id, driver.id);
}

#[test]
fn exiting_requires_membership() {
    let engine = engine();

    let pool = engine.create_pool(&User::new("creator"), params()).unwrap();

    let err = engine.exit_pool(&User::new("outsider"), &pool.id).unwrap_err();

    assert_eq!(err.code, not_a_member_error().code);
}

#[test]
fn unknown_pool_id_is_not_found() {
    let engine = engine();
    let rider = User::new("rider");

    let err = engine.join_pool(&rider, "SPR-0").unwrap_err();

    assert_eq!(err.code, pool_not_found_error().code);
}

#[test]
fn a_pool_accepts_only_one_driver() {
    let engine = engine();

    let pool = engine.create_pool(&User::new("creator"), params()).unwrap();

    engine.assign_driver(&Driver::new("first"), &pool.id).unwrap();
    let err = engine
        .assign_driver(&Driver::new("second"), &pool.id)
        .unwrap_err();

    assert_eq!(err.code, already_accepted_error().code);
}

#[test]
fn rider_and_driver_views_follow_status() {
    let engine = engine();
    let all_riders = riders(4);

    let open = engine.create_pool(&User::new("creator"), params()).unwrap();
    let accepted = engine.create_pool(&User::new("creator"), params()).unwrap();
    let confirmed = engine.create_pool(&User::new("creator"), params()).unwrap();

    engine.assign_driver(&Driver::new("d1"), &accepted.id).unwrap();

    engine.assign_driver(&Driver::new("d2"), &confirmed.id).unwrap();
    for rider in &all_riders {
        engine.join_pool(rider, &confirmed.id).unwrap();
    }

    let joinable = engine.list_joinable_pools().unwrap();
    assert_eq!(joinable.len(), 2);
    assert!(joinable.iter().all(|p| p.id != confirmed.id));

    let awaiting = engine.list_pools_awaiting_driver().unwrap();
    assert_eq!(awaiting.len(), 1);
    assert_eq!(awaiting[0].id, open.id);
}

#[test]
fn find_passenger_pool_returns_the_joined_pool() {
    let engine = engine();
    let rider = User::new("rider");

    let pool = engine.create_pool(&rider, params()).unwrap();

    assert!(engine.find_passenger_pool(&rider).unwrap().is_none());

    engine.join_pool(&rider, &pool.id).unwrap();

    let joined = engine.find_passenger_pool(&rider).unwrap().unwrap();
    assert_eq!(joined.id, pool.id);
}

#[test]
fn predictive_generation_is_idempotent_per_day() {
    let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();

    let calendar = DemandCalendar::new().with_event(
        date,
        DemandEvent {
            name: "Holiday Rush".into(),
            destination: "Central Railway Station".into(),
            pickup_location: "Campus Main Gate".into(),
        },
    );

    let engine =
        Engine::with_config(MemoryStore::new(), PoolConfig::default(), calendar).unwrap();

    let first = engine.generate_predictive_pools(date).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].destination, "Central Railway Station");
    assert_eq!(first[0].departure_time.date_naive(), date);
    assert!(first[0].created_by.is_none());

    let second = engine.generate_predictive_pools(date).unwrap();
    assert!(second.is_empty());

    assert_eq!(engine.list_joinable_pools().unwrap().len(), 1);
}

#[test]
fn predictive_generation_skips_uneventful_days() {
    let engine = engine();

    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

    assert!(engine.generate_predictive_pools(date).unwrap().is_empty());
}

#[test]
fn rejected_booking_persists_nothing() {
    let engine = engine();
    let rider = User::new("rider");

    let form = BookingForm {
        pickup_location: "  ".into(),
        destination: "Central Railway Station".into(),
        departure_time: Utc::now(),
    };

    let err = submit_booking(&engine, &rider, form).unwrap_err();

    assert_eq!(err.code, validation_error("").code);
    assert!(engine.list_joinable_pools().unwrap().is_empty());
}

#[test]
fn accepted_booking_lands_in_the_store() {
    let engine = engine();
    let rider = User::new("rider");

    let form = BookingForm {
        pickup_location: "Campus Main Gate".into(),
        destination: "Central Railway Station".into(),
        departure_time: Utc::now() + Duration::hours(3),
    };

    let pool = submit_booking(&engine, &rider, form).unwrap();

    assert!(matches!(pool.status, Status::Pending));
    assert_eq!(pool.created_by, Some(rider.id));
    assert_eq!(engine.find_pool(&pool.id).unwrap().pickup_location, "Campus Main Gate");
}

#[test]
fn the_collection_survives_an_engine_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pools.json");

    let rider = User::new("rider");

    let pool_id = {
        let engine = Engine::with_config(
            JsonFileStore::new(&path),
            PoolConfig::default(),
            DemandCalendar::new(),
        )
        .unwrap();

        let pool = engine.create_pool(&rider, params()).unwrap();
        engine.join_pool(&rider, &pool.id).unwrap();

        pool.id
    };

    let engine = Engine::with_config(
        JsonFileStore::new(&path),
        PoolConfig::default(),
        DemandCalendar::new(),
    )
    .unwrap();

    let joined = engine.find_passenger_pool(&rider).unwrap().unwrap();
    assert_eq!(joined.id, pool_id);
    assert_eq!(joined.passengers.len(), 1);
}

#[test]
fn capacity_bound_holds_across_operations() {
    let engine = engine();
    let all_riders = riders(6);

    let pool = engine.create_pool(&all_riders[0], params()).unwrap();
    engine.assign_driver(&Driver::new("driver"), &pool.id).unwrap();

    for rider in &all_riders {
        let _ = engine.join_pool(rider, &pool.id);
    }

    engine.exit_pool(&all_riders[1], &pool.id).unwrap();
    let _ = engine.join_pool(&all_riders[5], &pool.id);

    for pool in engine.list_joinable_pools().unwrap() {
        assert!(pool.passengers.len() <= pool.capacity as usize);
    }
    let pool = engine.find_pool(&pool.id).unwrap();
    assert!(pool.passengers.len() <= pool.capacity as usize);
}
