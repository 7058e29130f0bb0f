pub mod detail;
pub mod filter_bar;
pub mod grid;
