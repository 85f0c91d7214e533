//! Taskdata — declarative task schemas and attribute trees.
//!
//! This is the public meta-crate. Downstream users depend on **taskdata**
//! only.
//!
//! It re-exports the stable public API from:
//!   - `taskdata-core`   (runtime attribute tree, contracts, vocabulary)
//!   - `taskdata-schema` (schema definitions and materialization)

pub use taskdata_core as core;
pub use taskdata_schema as schema;

//
// Prelude
//

pub mod prelude {
    pub use taskdata_core::prelude::*;
    pub use taskdata_schema::prelude::*;
}
