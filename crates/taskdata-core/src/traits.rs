//! Contracts between the schema layer and a task-data host.
//!
//! Materialization is written against these traits only, so a connector
//! may substitute its own attribute tree (remote proxies, strict hosts
//! that reject duplicate keys) without touching the schema layer.

///
/// AttributeNode
///
/// One node of a task attribute tree. `create_mapped_attribute` owns the
/// insertion semantics for duplicate keys; whatever it reports is passed
/// through materialization unchanged.
///

pub trait AttributeNode {
    type Error;

    /// Insert (or re-map) a child attribute under `key` and return it.
    fn create_mapped_attribute(&mut self, key: &str) -> Result<&mut Self, Self::Error>;

    fn set_label(&mut self, label: &str);

    fn set_attr_type(&mut self, attr_type: &str);

    /// `None` clears any previously stamped kind.
    fn set_kind(&mut self, kind: Option<&str>);

    fn set_read_only(&mut self, read_only: bool);

    /// Append an option, preserving call order.
    fn put_option(&mut self, value: &str, label: &str);
}

///
/// TaskDataNode
///
/// A task-data container; all the schema layer needs from it is the root
/// of its attribute tree.
///

pub trait TaskDataNode {
    type Attribute: AttributeNode;

    fn root_mut(&mut self) -> &mut Self::Attribute;
}
