use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Passenger;

/// A rider identity. Passed explicitly into every operation that acts
/// on their behalf.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn as_passenger(&self) -> Passenger {
        Passenger {
            user_id: self.id,
            name: self.name.clone(),
        }
    }
}
