//! Shared attribute vocabulary.
//!
//! The schema layer passes these strings through without validating them;
//! connectors are free to extend the type set with their own tags.

//
// Attribute types
//

pub const TYPE_ATTACHMENT: &str = "attachment";
pub const TYPE_BOOLEAN: &str = "boolean";
pub const TYPE_COMMENT: &str = "comment";
pub const TYPE_DATE: &str = "date";
pub const TYPE_DATETIME: &str = "dateTime";
pub const TYPE_LONG_TEXT: &str = "longText";
pub const TYPE_MULTI_SELECT: &str = "multiSelect";
pub const TYPE_OPERATION: &str = "operation";
pub const TYPE_PERSON: &str = "person";
pub const TYPE_SHORT_TEXT: &str = "shortText";
pub const TYPE_SINGLE_SELECT: &str = "singleSelect";
pub const TYPE_URL: &str = "url";

//
// Attribute kinds
//

pub const KIND_DEFAULT: &str = "task.common.kind.default";
pub const KIND_OPERATION: &str = "task.common.kind.operations";
pub const KIND_PEOPLE: &str = "task.common.kind.people";

//
// Common attribute keys
//

pub const COMMENT_NEW: &str = "task.common.comment.new";
pub const COMPONENT: &str = "task.common.component";
pub const DATE_COMPLETION: &str = "task.common.date.completed";
pub const DATE_CREATION: &str = "task.common.date.created";
pub const DATE_DUE: &str = "task.common.date.due";
pub const DATE_MODIFICATION: &str = "task.common.date.modified";
pub const DESCRIPTION: &str = "task.common.description";
pub const PRIORITY: &str = "task.common.priority";
pub const PRODUCT: &str = "task.common.product";
pub const SEVERITY: &str = "task.common.severity";
pub const STATUS: &str = "task.common.status";
pub const SUMMARY: &str = "task.common.summary";
pub const TASK_KIND: &str = "task.common.kind";
pub const TASK_URL: &str = "task.common.url";
pub const USER_ASSIGNED: &str = "task.common.user.assigned";
pub const USER_REPORTER: &str = "task.common.user.reporter";

/// Key of the root attribute of every task-data container.
pub const ROOT_KEY: &str = "root";
