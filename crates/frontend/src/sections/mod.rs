pub mod about;
pub mod consultation;
pub mod faq;
pub mod hero;

pub use about::About;
pub use consultation::ConsultationForm;
pub use faq::Faq;
pub use hero::Hero;
