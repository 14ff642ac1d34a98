pub mod modal;
pub mod project;
