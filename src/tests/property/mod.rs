//! Property-based tests for the catalog
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `filter_props`: Tests for the search / type-tag filter
//!   - Identity filter returns the collection unchanged
//!   - Every displayed entry matches, every matching entry is displayed
//!   - Output is an order-preserving subsequence of the input
//!   - Filtering twice equals filtering once
//!   - Unresolved type membership never narrows the result
//!
//! - `entity_id_props`: Tests for entity id extraction
//!   - Well-formed urls round-trip their id
//!   - Zero, non-numeric and short urls are rejected
//!
//! Case count follows `PROPTEST_CASES` (default 256):
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod entity_id_props;
mod filter_props;
