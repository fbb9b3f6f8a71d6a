use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A driver identity. Embedded into a pool once assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
}

impl Driver {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
