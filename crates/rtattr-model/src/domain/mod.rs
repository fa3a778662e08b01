mod requirement;
pub use requirement::Requirement;
