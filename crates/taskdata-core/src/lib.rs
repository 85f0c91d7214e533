//! Runtime task-data model.
//!
//! This crate holds the *runtime representations* of a task record, as
//! opposed to their declarative forms in `taskdata-schema`:
//!
//! - `attribute` — the in-memory attribute tree (`TaskAttribute`)
//! - `data` — the task-data container presented to schema materialization
//! - `traits` — the contracts the schema layer works against
//! - `vocabulary` — the shared attribute type and kind string constants
//!
//! In general:
//! - `taskdata-schema` defines *what exists*
//! - `taskdata-core` defines *what runs*

pub mod attribute;
pub mod data;
pub mod error;
pub mod traits;
pub mod vocabulary;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        attribute::{AttributeOption, TaskAttribute, TaskAttributeMeta},
        data::TaskData,
        error::AttributeError,
        traits::{AttributeNode, TaskDataNode},
        vocabulary,
    };
    pub use serde::{Deserialize, Serialize};
}
