use crate::prelude::*;
use derive_more::Display;
use std::hash::{Hash, Hasher};

///
/// Field
///
/// Declarative description of one attribute slot of a task schema.
/// Descriptors are immutable once constructed; refinements go through
/// `TaskSchema::inherit_from` and produce a fresh descriptor.
///
/// Identity is the `(key, index_key)` pair. Label, type, and flags are
/// deliberately excluded so that refinements which alter presentation but
/// preserve identity compare equal.
///

#[derive(Clone, Debug, Display, Serialize)]
#[display("{label}")]
pub struct Field {
    key: String,
    label: String,
    attr_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    index_key: Option<String>,

    #[serde(skip_serializing_if = "FlagSet::is_empty")]
    flags: FlagSet,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    default_options: Vec<(String, String)>,
}

impl Field {
    /// Construct a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `key`, `label`, or `attr_type` is empty; that is a
    /// programming error, not an operational one.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        attr_type: impl Into<String>,
        index_key: Option<&str>,
        flags: FlagSet,
    ) -> Self {
        let key = key.into();
        let label = label.into();
        let attr_type = attr_type.into();

        assert!(!key.is_empty(), "field key must be non-empty");
        assert!(!label.is_empty(), "field label must be non-empty");
        assert!(!attr_type.is_empty(), "field type must be non-empty");

        Self {
            key,
            label,
            attr_type,
            index_key: index_key.map(ToString::to_string),
            flags,
            default_options: Vec::new(),
        }
    }

    /// Shorthand for a plain, unflagged, unindexed field.
    #[must_use]
    pub fn of(
        key: impl Into<String>,
        label: impl Into<String>,
        attr_type: impl Into<String>,
    ) -> Self {
        Self::new(key, label, attr_type, None, FlagSet::EMPTY)
    }

    /// Attach default options, preserving declaration order.
    #[must_use]
    pub fn with_default_options(mut self, options: &[(&str, &str)]) -> Self {
        self.default_options = options
            .iter()
            .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
            .collect();

        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }

    /// The key under which this field participates in full-text indexing,
    /// or `None` if it is not indexable. Two fields may share an index key
    /// (grouping into one bucket).
    #[must_use]
    pub fn index_key(&self) -> Option<&str> {
        self.index_key.as_deref()
    }

    /// A copy of the flag set; mutating it never affects the descriptor.
    #[must_use]
    pub const fn flags(&self) -> FlagSet {
        self.flags
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.flags.contains(Flag::ReadOnly)
    }

    /// The attribute kind selected by the flag set.
    /// `Attribute` dominates `Operation`, which dominates `People`.
    #[must_use]
    pub const fn kind(&self) -> Option<&'static str> {
        if self.flags.contains(Flag::Attribute) {
            Some(vocabulary::KIND_DEFAULT)
        } else if self.flags.contains(Flag::Operation) {
            Some(vocabulary::KIND_OPERATION)
        } else if self.flags.contains(Flag::People) {
            Some(vocabulary::KIND_PEOPLE)
        } else {
            None
        }
    }

    /// Default options as `(value, label)` pairs, in declaration order.
    #[must_use]
    pub fn default_options(&self) -> &[(String, String)] {
        &self.default_options
    }

    /// Materialize this field as a child of `parent`: create the mapped
    /// attribute, stamp its metadata, and register the default options.
    /// Host errors pass through unchanged.
    pub fn create_attribute<'a, A: AttributeNode>(
        &self,
        parent: &'a mut A,
    ) -> Result<&'a mut A, A::Error> {
        let attribute = parent.create_mapped_attribute(&self.key)?;

        attribute.set_label(&self.label);
        attribute.set_attr_type(&self.attr_type);
        attribute.set_read_only(self.is_read_only());
        attribute.set_kind(self.kind());

        for (value, label) in &self.default_options {
            attribute.put_option(value, label);
        }

        Ok(attribute)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.index_key == other.index_key
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.index_key.hash(state);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, RandomState};
    use taskdata_core::attribute::TaskAttribute;

    // one state for both values; fresh states hash with different seeds
    fn hashes(a: &Field, b: &Field) -> (u64, u64) {
        let state = RandomState::new();
        (state.hash_one(a), state.hash_one(b))
    }

    #[test]
    fn kind_precedence_attribute_dominates() {
        let field = Field::new(
            "foo",
            "Foo",
            "t",
            None,
            FlagSet::of(&[Flag::People, Flag::Attribute]),
        );

        assert_eq!(field.kind(), Some(vocabulary::KIND_DEFAULT));
    }

    #[test]
    fn kind_precedence_operation_dominates_people() {
        let field = Field::new(
            "op",
            "Op",
            "t",
            None,
            FlagSet::of(&[Flag::Operation, Flag::People]),
        );

        assert_eq!(field.kind(), Some(vocabulary::KIND_OPERATION));
    }

    #[test]
    fn no_kind_without_kind_flags() {
        let field = Field::new("x", "X", "t", None, FlagSet::from(Flag::ReadOnly));

        assert_eq!(field.kind(), None);
        assert!(field.is_read_only());
    }

    #[test]
    fn equality_ignores_label_type_and_flags() {
        let a = Field::new("id", "Id", vocabulary::TYPE_SHORT_TEXT, Some("id_idx"), FlagSet::EMPTY);
        let b = Field::new(
            "id",
            "Identifier",
            vocabulary::TYPE_LONG_TEXT,
            Some("id_idx"),
            FlagSet::from(Flag::ReadOnly),
        );

        assert_eq!(a, b);

        let (hash_a, hash_b) = hashes(&a, &b);
        assert_eq!(hash_a, hash_b);
    }

    #[test]
    fn inequality_when_index_key_differs() {
        let plain = Field::new("id", "Id", "t", None, FlagSet::EMPTY);
        let indexed = Field::new("id", "Id", "t", Some("id_idx"), FlagSet::EMPTY);

        assert_ne!(plain, indexed);
    }

    #[test]
    fn display_is_the_label() {
        let field = Field::of("task.common.summary", "Summary", vocabulary::TYPE_SHORT_TEXT);
        assert_eq!(field.to_string(), "Summary");
    }

    #[test]
    #[should_panic(expected = "field key must be non-empty")]
    fn empty_key_is_a_contract_violation() {
        let _ = Field::of("", "Label", "t");
    }

    #[test]
    #[should_panic(expected = "field label must be non-empty")]
    fn empty_label_is_a_contract_violation() {
        let _ = Field::of("key", "", "t");
    }

    #[test]
    #[should_panic(expected = "field type must be non-empty")]
    fn empty_type_is_a_contract_violation() {
        let _ = Field::of("key", "Label", "");
    }

    #[test]
    fn create_attribute_stamps_metadata_and_options() {
        let field = Field::new(
            "task.common.priority",
            "Priority",
            vocabulary::TYPE_SINGLE_SELECT,
            None,
            FlagSet::of(&[Flag::Attribute, Flag::ReadOnly]),
        )
        .with_default_options(&[("P1", "High"), ("P2", "Normal")]);

        let mut root = TaskAttribute::new("root");
        let attribute = field.create_attribute(&mut root).unwrap();

        assert_eq!(attribute.key(), "task.common.priority");
        assert_eq!(attribute.meta().label(), Some("Priority"));
        assert_eq!(attribute.meta().attr_type(), Some(vocabulary::TYPE_SINGLE_SELECT));
        assert_eq!(attribute.meta().kind(), Some(vocabulary::KIND_DEFAULT));
        assert!(attribute.meta().is_read_only());

        let options: Vec<_> = attribute
            .options()
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(options, [("P1", "High"), ("P2", "Normal")]);
    }

    #[test]
    fn empty_option_map_stamps_no_options() {
        let field = Field::of("status", "Status", vocabulary::TYPE_SHORT_TEXT);

        let mut root = TaskAttribute::new("root");
        let attribute = field.create_attribute(&mut root).unwrap();

        assert!(attribute.options().is_empty());
    }
}
