pub mod catalog;
pub mod logging;
