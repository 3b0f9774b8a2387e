// Portfolio page sections
// Atharv Pitrubhakta (c)2025

mod backdrop;
mod contact;
mod education;
mod experience;
mod footer;
mod nav;
mod projects;
mod reveal;
mod skills;
mod summary;
mod tracking;

pub use backdrop::Backdrop;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
pub use summary::Summary;
pub use tracking::ScrollTracking;
