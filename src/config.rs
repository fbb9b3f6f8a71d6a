/// Fixed economics of a pool: seat count and flat per-head price.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub capacity: u32,
    pub price_per_head: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            price_per_head: 50.0,
        }
    }
}
