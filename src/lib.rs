/// Pokeview - Pokédex catalog viewer (TUI Edition)
///
/// Core library providing the catalog client, filtering, detail loading
/// and the terminal front end that drives them.

pub mod config;
pub mod core;
pub mod tui;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
