//! Storage for the field being marched forward in time.
//! A `Field` is one buffer of `N + 2` values, interior points `1..=N`
//! bracketed by two ghost cells that stay zero for the whole run.
//! A `FieldPair` holds the two buffers a run alternates between.

mod field;
mod field_pair;

pub use field::*;
pub use field_pair::*;
