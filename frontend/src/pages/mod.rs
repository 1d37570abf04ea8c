pub mod calendar;
pub mod dashboard;
pub mod landing;
pub mod settings;
pub mod stats;
