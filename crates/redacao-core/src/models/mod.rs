pub mod dashboard;
pub mod essay;
pub mod scoring;
pub mod user;
