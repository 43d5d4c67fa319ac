mod content;
mod hero;
mod navbar;
mod notice;
mod phone_mockup;
mod waitlist_form;

pub use content::{Features, Footer, HowItWorks, Problem, Team};
pub use hero::Hero;
pub use navbar::Navbar;
pub use notice::NotificationHost;
pub use phone_mockup::PhoneMockup;
pub use waitlist_form::WaitlistSection;
