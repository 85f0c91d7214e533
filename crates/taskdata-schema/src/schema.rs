use crate::prelude::*;

///
/// TaskSchema
///
/// An ordered, key-indexed registry of field descriptors. Registration
/// happens once while a connector describes its task shape; after that
/// the schema is read-only and safe to share.
///
/// Keys are unique. Registering a key again replaces the previous
/// descriptor *in place*, keeping the position of the first insertion;
/// that replacement is the refinement mechanism used by derived schemas.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct TaskSchema {
    fields: Vec<Field>,
}

impl TaskSchema {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// The descriptor registered under `key`, if any.
    #[must_use]
    pub fn get_field_by_key(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key() == key)
    }

    /// Declare a plain field: no index key, no flags.
    pub fn create_field(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        attr_type: impl Into<String>,
    ) -> Field {
        self.register(Field::of(key, label, attr_type))
    }

    /// Declare a flagged, unindexed field.
    pub fn create_field_with_flags(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        attr_type: impl Into<String>,
        flags: FlagSet,
    ) -> Field {
        self.register(Field::new(key, label, attr_type, None, flags))
    }

    /// Declare a field that participates in full-text indexing under
    /// `index_key`.
    pub fn create_field_indexed(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        attr_type: impl Into<String>,
        index_key: &str,
        flags: FlagSet,
    ) -> Field {
        self.register(Field::new(key, label, attr_type, Some(index_key), flags))
    }

    /// Register a descriptor built elsewhere (e.g. one carrying default
    /// options). Replaces any previous entry with the same key in place.
    pub fn register_field(&mut self, field: Field) -> Field {
        self.register(field)
    }

    /// Seed a builder from an existing descriptor, typically one owned by
    /// an ancestor schema. The builder copies the source's key, label,
    /// type, index key, flags, and default options; nothing is registered
    /// here until the builder's `create` runs.
    pub fn inherit_from(&mut self, source: &Field) -> FieldBuilder<'_> {
        FieldBuilder::inherit(self, source)
    }

    /// Materialize every field, in declaration order, on the container's
    /// root attribute. Fails fast on the first host error; the partial
    /// tree built so far is left as observed, no rollback.
    pub fn initialize<D: TaskDataNode>(
        &self,
        data: &mut D,
    ) -> Result<(), <D::Attribute as AttributeNode>::Error> {
        let root = data.root_mut();
        for field in &self.fields {
            field.create_attribute(root)?;
        }

        Ok(())
    }

    /// Registered fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Distinct index buckets, in first-seen declaration order. Fields
    /// without an index key are skipped (non-indexable).
    #[must_use]
    pub fn index_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for field in &self.fields {
            if let Some(index_key) = field.index_key() {
                if !keys.contains(&index_key) {
                    keys.push(index_key);
                }
            }
        }

        keys
    }

    fn register(&mut self, field: Field) -> Field {
        match self.fields.iter_mut().find(|f| f.key() == field.key()) {
            Some(slot) => *slot = field.clone(),
            None => self.fields.push(field.clone()),
        }

        field
    }
}

///
/// TESTS
///
