pub mod session;

pub use session::{CheckoutSession, CheckoutState, WindowDirective};
