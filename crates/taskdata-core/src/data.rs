use crate::{
    attribute::TaskAttribute,
    traits::TaskDataNode,
    vocabulary,
};
use serde::Serialize;

///
/// TaskData
///
/// A task record as exchanged with a repository: the identity triple plus
/// the root of the attribute tree. Carries no behaviour of its own; the
/// schema layer fills the tree via `TaskDataNode`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TaskData {
    connector_kind: String,
    repository_url: String,
    task_id: String,
    root: TaskAttribute,
}

impl TaskData {
    #[must_use]
    pub fn new(
        connector_kind: impl Into<String>,
        repository_url: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            connector_kind: connector_kind.into(),
            repository_url: repository_url.into(),
            task_id: task_id.into(),
            root: TaskAttribute::new(vocabulary::ROOT_KEY),
        }
    }

    #[must_use]
    pub fn connector_kind(&self) -> &str {
        &self.connector_kind
    }

    #[must_use]
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    #[must_use]
    pub const fn root(&self) -> &TaskAttribute {
        &self.root
    }

    pub const fn root_mut(&mut self) -> &mut TaskAttribute {
        &mut self.root
    }
}

impl TaskDataNode for TaskData {
    type Attribute = TaskAttribute;

    fn root_mut(&mut self) -> &mut TaskAttribute {
        &mut self.root
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_key_is_stable() {
        let data = TaskData::new("trac", "https://bugs.example.org", "42");
        assert_eq!(data.root().key(), vocabulary::ROOT_KEY);
        assert_eq!(data.task_id(), "42");
    }

    #[test]
    fn fresh_container_serializes_to_a_bare_root() {
        let data = TaskData::new("trac", "https://bugs.example.org", "42");
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "connector_kind": "trac",
                "repository_url": "https://bugs.example.org",
                "task_id": "42",
                "root": { "key": "root", "meta": {} },
            })
        );
    }
}
