pub mod dashboard_scraper;
pub mod data_persistance;
pub mod droid;

pub use dashboard_scraper::*;
pub use data_persistance::*;
pub use droid::*;
