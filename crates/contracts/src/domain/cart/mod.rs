pub mod aggregate;

pub use aggregate::{Cart, CartLine};
