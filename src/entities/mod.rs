mod driver;
mod pool;
mod user;

pub use driver::Driver;
pub use pool::{Passenger, Pool, Status};
pub use user::User;
