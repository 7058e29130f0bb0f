//! Integration tests
//!
//! - `catalog_http`: `CatalogClient` against a wiremock server
//! - `view_flow`: reducer + effects driven end to end over a mocked source

mod catalog_http;
