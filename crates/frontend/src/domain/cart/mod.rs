pub mod context;
pub mod ui;

pub use context::{use_cart, CartContext};
