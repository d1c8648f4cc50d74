//! Document serializers
//!
//! Only ALE itself lives here. Tabular output of projected rows (CSV, JSON) is the
//! business of `ale-babel`.

pub mod ale;

pub use ale::serialize_ale;
