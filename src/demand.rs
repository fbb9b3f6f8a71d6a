use std::collections::HashMap;

use chrono::NaiveDate;

/// An anticipated demand spike: riders heading to one destination from a
/// known pickup point.
#[derive(Clone, Debug)]
pub struct DemandEvent {
    pub name: String,
    pub destination: String,
    pub pickup_location: String,
}

/// Static date-to-event map behind predictive pooling.
#[derive(Clone, Debug)]
pub struct DemandCalendar {
    events: HashMap<NaiveDate, DemandEvent>,
}

impl DemandCalendar {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    pub fn with_event(mut self, date: NaiveDate, event: DemandEvent) -> Self {
        self.events.insert(date, event);
        self
    }

    pub fn event_on(&self, date: NaiveDate) -> Option<&DemandEvent> {
        self.events.get(&date)
    }
}

/// The built-in calendar shipped with the demo.
impl Default for DemandCalendar {
    fn default() -> Self {
        Self::new()
            .with_event(
                date(2026, 12, 25),
                DemandEvent {
                    name: "Holiday Rush".into(),
                    destination: "Central Railway Station".into(),
                    pickup_location: "Campus Main Gate".into(),
                },
            )
            .with_event(
                date(2026, 12, 31),
                DemandEvent {
                    name: "New Year Countdown".into(),
                    destination: "City Square".into(),
                    pickup_location: "Campus Main Gate".into(),
                },
            )
            .with_event(
                date(2027, 3, 14),
                DemandEvent {
                    name: "Spring Festival".into(),
                    destination: "Riverside Grounds".into(),
                    pickup_location: "Campus Main Gate".into(),
                },
            )
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
