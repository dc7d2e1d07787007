pub mod driver;
pub mod ui;

pub use driver::{use_checkout, CheckoutController};
