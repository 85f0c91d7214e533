use crate::prelude::*;

///
/// FieldBuilder
///
/// Transient shaping tool for publishing a variant of an inherited field.
/// Seeded with copies of the source descriptor's state; the source is
/// never mutated. `create` consumes the builder, registers the new
/// descriptor in the owning schema under the current key, and returns it.
///

pub struct FieldBuilder<'a> {
    schema: &'a mut TaskSchema,
    key: String,
    label: String,
    attr_type: String,
    index_key: Option<String>,
    flags: FlagSet,
    default_options: Vec<(String, String)>,
}

impl<'a> FieldBuilder<'a> {
    pub(crate) fn inherit(schema: &'a mut TaskSchema, source: &Field) -> Self {
        Self {
            schema,
            key: source.key().to_string(),
            label: source.label().to_string(),
            attr_type: source.attr_type().to_string(),
            index_key: source.index_key().map(ToString::to_string),
            flags: source.flags(),
            default_options: source.default_options().to_vec(),
        }
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn attr_type(mut self, attr_type: impl Into<String>) -> Self {
        self.attr_type = attr_type.into();
        self
    }

    #[must_use]
    pub fn index_key(mut self, index_key: impl Into<String>) -> Self {
        self.index_key = Some(index_key.into());
        self
    }

    /// Make the refined field non-indexable.
    #[must_use]
    pub fn clear_index_key(mut self) -> Self {
        self.index_key = None;
        self
    }

    /// Replace the flag set.
    #[must_use]
    pub fn flags(mut self, flags: FlagSet) -> Self {
        self.flags = flags;
        self
    }

    /// Union the given flags into the set.
    #[must_use]
    pub fn add_flags<I: IntoIterator<Item = Flag>>(mut self, flags: I) -> Self {
        for flag in flags {
            self.flags.insert(flag);
        }
        self
    }

    /// Remove the given flags from the set.
    #[must_use]
    pub fn remove_flags<I: IntoIterator<Item = Flag>>(mut self, flags: I) -> Self {
        for flag in flags {
            self.flags.remove(flag);
        }
        self
    }

    /// Replace the default options.
    #[must_use]
    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.default_options = options
            .iter()
            .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
            .collect();
        self
    }

    /// Finalize: construct the descriptor and register it in the owning
    /// schema under the builder's current key.
    pub fn create(self) -> Field {
        let Self {
            schema,
            key,
            label,
            attr_type,
            index_key,
            flags,
            default_options,
        } = self;

        let options: Vec<(&str, &str)> = default_options
            .iter()
            .map(|(value, label)| (value.as_str(), label.as_str()))
            .collect();

        let field =
            Field::new(key, label, attr_type, index_key.as_deref(), flags).with_default_options(&options);

        schema.register_field(field)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn base_schema() -> (TaskSchema, Field) {
        let mut schema = TaskSchema::new();
        let owner = schema.create_field_indexed(
            "owner",
            "Owner",
            vocabulary::TYPE_PERSON,
            "owner_idx",
            FlagSet::of(&[Flag::People, Flag::ReadOnly]),
        );

        (schema, owner)
    }

    #[test]
    fn refinement_never_mutates_the_source() {
        let (ancestor, owner) = base_schema();

        let mut derived = TaskSchema::new();
        let refined = derived
            .inherit_from(&owner)
            .remove_flags([Flag::ReadOnly])
            .create();

        assert!(!refined.is_read_only());
        assert!(!derived.get_field_by_key("owner").unwrap().is_read_only());

        // the ancestor's descriptor is untouched
        assert!(owner.is_read_only());
        assert!(ancestor.get_field_by_key("owner").unwrap().is_read_only());
    }

    #[test]
    fn inherited_index_key_is_propagated() {
        let (_, owner) = base_schema();

        let mut derived = TaskSchema::new();
        let refined = derived.inherit_from(&owner).label("Assignee").create();

        assert_eq!(refined.index_key(), Some("owner_idx"));
        assert_eq!(refined.label(), "Assignee");
        // identity is (key, index_key), so the refinement compares equal
        assert_eq!(refined, owner);
    }

    #[test]
    fn rekeyed_refinement_registers_under_the_new_key() {
        let (_, owner) = base_schema();

        let mut derived = TaskSchema::new();
        derived
            .inherit_from(&owner)
            .key("assignee")
            .clear_index_key()
            .create();

        assert!(derived.get_field_by_key("owner").is_none());

        let assignee = derived.get_field_by_key("assignee").unwrap();
        assert_eq!(assignee.attr_type(), vocabulary::TYPE_PERSON);
        assert_eq!(assignee.index_key(), None);
    }

    #[test]
    fn add_and_replace_flags() {
        let (_, owner) = base_schema();

        let mut derived = TaskSchema::new();
        let widened = derived.inherit_from(&owner).add_flags([Flag::Attribute]).create();
        assert_eq!(widened.kind(), Some(vocabulary::KIND_DEFAULT));

        let replaced = derived
            .inherit_from(&owner)
            .flags(FlagSet::from(Flag::Operation))
            .create();
        assert_eq!(replaced.kind(), Some(vocabulary::KIND_OPERATION));
        assert!(!replaced.is_read_only());
    }

    #[test]
    fn inherited_options_survive_refinement() {
        let mut schema = TaskSchema::new();
        let priority = schema.register_field(
            Field::new(
                "priority",
                "Priority",
                vocabulary::TYPE_SINGLE_SELECT,
                None,
                FlagSet::from(Flag::Attribute),
            )
            .with_default_options(&[("P1", "High"), ("P2", "Low")]),
        );

        let mut derived = TaskSchema::new();
        let refined = derived.inherit_from(&priority).label("Importance").create();

        assert_eq!(refined.default_options().len(), 2);
        assert_eq!(refined.default_options()[0].0, "P1");
    }
}
