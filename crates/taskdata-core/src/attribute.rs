use crate::traits::AttributeNode;
use derive_more::Display;
use serde::Serialize;
use std::convert::Infallible;

///
/// TaskAttribute
///
/// One node of the in-memory attribute tree. Children and options keep
/// insertion order; re-mapping an existing key resets the child's content
/// but keeps its original position.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TaskAttribute {
    key: String,
    meta: TaskAttributeMeta,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<AttributeOption>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TaskAttribute>,
}

impl TaskAttribute {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: TaskAttributeMeta::default(),
            values: Vec::new(),
            options: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn meta(&self) -> &TaskAttributeMeta {
        &self.meta
    }

    pub const fn meta_mut(&mut self) -> &mut TaskAttributeMeta {
        &mut self.meta
    }

    /// Insert a child attribute under `key`, replacing the content of any
    /// existing child with that key in place.
    pub fn create_mapped_attribute(&mut self, key: &str) -> &mut Self {
        self.map_child(key)
    }

    fn map_child(&mut self, key: &str) -> &mut Self {
        let pos = match self.children.iter().position(|c| c.key == key) {
            Some(pos) => {
                self.children[pos] = Self::new(key);
                pos
            }
            None => {
                self.children.push(Self::new(key));
                self.children.len() - 1
            }
        };

        &mut self.children[pos]
    }

    /// Look up a direct child by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.key == key)
    }

    #[must_use]
    pub fn attribute_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.children.iter_mut().find(|c| c.key == key)
    }

    /// Direct children, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Self] {
        &self.children
    }

    //
    // values
    //

    /// First value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replace all values with a single one.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.values.clear();
        self.values.push(value.into());
    }

    pub fn add_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    //
    // options
    //

    /// Append an option, preserving call order.
    pub fn put_option(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(AttributeOption {
            value: value.into(),
            label: label.into(),
        });
    }

    #[must_use]
    pub fn options(&self) -> &[AttributeOption] {
        &self.options
    }
}

impl AttributeNode for TaskAttribute {
    type Error = Infallible;

    fn create_mapped_attribute(&mut self, key: &str) -> Result<&mut Self, Infallible> {
        Ok(self.map_child(key))
    }

    fn set_label(&mut self, label: &str) {
        self.meta.label = Some(label.to_string());
    }

    fn set_attr_type(&mut self, attr_type: &str) {
        self.meta.attr_type = Some(attr_type.to_string());
    }

    fn set_kind(&mut self, kind: Option<&str>) {
        self.meta.kind = kind.map(ToString::to_string);
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.meta.read_only = read_only;
    }

    fn put_option(&mut self, value: &str, label: &str) {
        self.options.push(AttributeOption {
            value: value.to_string(),
            label: label.to_string(),
        });
    }
}

///
/// TaskAttributeMeta
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TaskAttributeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

impl TaskAttributeMeta {
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn attr_type(&self) -> Option<&str> {
        self.attr_type.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }
}

///
/// AttributeOption
///
/// One `(value, label)` entry of an attribute's option list.
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[display("{label}")]
pub struct AttributeOption {
    pub value: String,
    pub label: String,
}

///
/// TESTS
///
