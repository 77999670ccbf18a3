pub mod aggregate;

pub use aggregate::{Movie, Person};
