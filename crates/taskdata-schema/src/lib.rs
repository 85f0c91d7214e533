//! Declarative task schemas.
//!
//! A schema is an ordered, key-indexed registry of field descriptors.
//! Connectors declare their fields once, then apply the schema to a
//! task-data container to materialize a typed attribute tree:
//!
//! ```
//! use taskdata_core::{data::TaskData, vocabulary};
//! use taskdata_schema::prelude::*;
//!
//! let mut schema = TaskSchema::new();
//! schema.create_field(vocabulary::SUMMARY, "Summary", vocabulary::TYPE_SHORT_TEXT);
//!
//! let mut data = TaskData::new("example", "https://bugs.example.org", "1");
//! schema.initialize(&mut data).unwrap();
//! assert!(data.root().attribute(vocabulary::SUMMARY).is_some());
//! ```

pub mod builder;
pub mod default_schema;
pub mod field;
pub mod flags;
pub mod schema;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        builder::FieldBuilder,
        default_schema::DefaultTaskSchema,
        field::Field,
        flags::{Flag, FlagSet},
        schema::TaskSchema,
    };
    pub use serde::{Deserialize, Serialize};
    pub use taskdata_core::{
        traits::{AttributeNode, TaskDataNode},
        vocabulary,
    };
}
