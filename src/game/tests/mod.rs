//! Rules-engine tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - pseudo-legality, king safety, enumeration, mate
//! - `apply.rs` - move application and metadata bookkeeping
//! - `notation.rs` - algebraic and figurine notation
//! - `proptest.rs` - property-based tests

mod apply;
