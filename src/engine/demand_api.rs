use chrono::{NaiveDate, Utc};

use super::helpers::unique_pool_id;
use super::Engine;

use crate::api::{CreatePool, DemandAPI};
use crate::entities::Pool;
use crate::error::Error;
use crate::store::PoolStore;

const DEPARTURE_HOUR: u32 = 18;

impl<S: PoolStore> DemandAPI for Engine<S> {
    #[tracing::instrument(skip(self))]
    fn generate_predictive_pools(&self, date: NaiveDate) -> Result<Vec<Pool>, Error> {
        let event = match self.calendar.event_on(date) {
            Some(event) => event,
            None => return Ok(Vec::new()),
        };

        let mut pools = self.store.load()?;

        // one open pool per destination per day
        let covered = pools.iter().any(|p| {
            p.destination == event.destination
                && p.departure_time.date_naive() == date
                && !p.is_full()
        });

        if covered {
            tracing::info!(
                "an open pool to {} already covers {}, skipping",
                event.destination,
                event.name
            );

            return Ok(Vec::new());
        }

        let departure_time = date
            .and_hms_opt(DEPARTURE_HOUR, 0, 0)
            .expect("valid departure time")
            .and_utc();

        let (id, created_at) = unique_pool_id(&pools, Utc::now());

        let pool = Pool::new(
            id,
            created_at,
            CreatePool {
                destination: event.destination.clone(),
                pickup_location: event.pickup_location.clone(),
                departure_time,
            },
            &self.config,
            None,
        );

        tracing::info!("created predictive pool {} for {}", pool.id, event.name);

        pools.push(pool.clone());
        self.store.save(&pools)?;

        Ok(vec![pool])
    }
}
