use crate::prelude::*;

// Index buckets shared with the task-list index.
const INDEX_SUMMARY: &str = "summary";
const INDEX_CONTENT: &str = "content";
const INDEX_PERSON: &str = "person";

///
/// DefaultTaskSchema
///
/// The common task attributes every connector starts from. Connector
/// schemas refine these fields via `inherit_from` rather than redeclaring
/// them.
///
/// Server-managed fields (status, dates, url, reporter) are read-only;
/// people fields carry `Flag::People`; the select-style fields carry
/// `Flag::Attribute` so they show up in the default attributes section.
///

#[derive(Clone, Debug)]
pub struct DefaultTaskSchema {
    schema: TaskSchema,
    summary: Field,
    description: Field,
    status: Field,
    priority: Field,
    task_kind: Field,
    owner: Field,
    reporter: Field,
    date_created: Field,
    date_modified: Field,
    date_completed: Field,
    date_due: Field,
    task_url: Field,
    component: Field,
    product: Field,
    severity: Field,
    new_comment: Field,
}

impl DefaultTaskSchema {
    #[must_use]
    pub fn new() -> Self {
        let mut schema = TaskSchema::new();

        let summary = schema.create_field_indexed(
            vocabulary::SUMMARY,
            "Summary",
            vocabulary::TYPE_SHORT_TEXT,
            INDEX_SUMMARY,
            FlagSet::EMPTY,
        );
        let description = schema.create_field_indexed(
            vocabulary::DESCRIPTION,
            "Description",
            vocabulary::TYPE_LONG_TEXT,
            INDEX_CONTENT,
            FlagSet::EMPTY,
        );
        let status = schema.create_field_with_flags(
            vocabulary::STATUS,
            "Status",
            vocabulary::TYPE_SHORT_TEXT,
            FlagSet::from(Flag::ReadOnly),
        );
        let priority = schema.register_field(
            Field::new(
                vocabulary::PRIORITY,
                "Priority",
                vocabulary::TYPE_SINGLE_SELECT,
                None,
                FlagSet::from(Flag::Attribute),
            )
            .with_default_options(&[
                ("P1", "Very High"),
                ("P2", "High"),
                ("P3", "Normal"),
                ("P4", "Low"),
                ("P5", "Very Low"),
            ]),
        );
        let task_kind = schema.create_field_with_flags(
            vocabulary::TASK_KIND,
            "Kind",
            vocabulary::TYPE_SINGLE_SELECT,
            FlagSet::from(Flag::Attribute),
        );
        let owner = schema.create_field_indexed(
            vocabulary::USER_ASSIGNED,
            "Owner",
            vocabulary::TYPE_PERSON,
            INDEX_PERSON,
            FlagSet::from(Flag::People),
        );
        let reporter = schema.create_field_indexed(
            vocabulary::USER_REPORTER,
            "Reporter",
            vocabulary::TYPE_PERSON,
            INDEX_PERSON,
            FlagSet::of(&[Flag::People, Flag::ReadOnly]),
        );
        let date_created = schema.create_field_with_flags(
            vocabulary::DATE_CREATION,
            "Created",
            vocabulary::TYPE_DATETIME,
            FlagSet::from(Flag::ReadOnly),
        );
        let date_modified = schema.create_field_with_flags(
            vocabulary::DATE_MODIFICATION,
            "Modified",
            vocabulary::TYPE_DATETIME,
            FlagSet::from(Flag::ReadOnly),
        );
        let date_completed = schema.create_field_with_flags(
            vocabulary::DATE_COMPLETION,
            "Completed",
            vocabulary::TYPE_DATETIME,
            FlagSet::from(Flag::ReadOnly),
        );
        let date_due =
            schema.create_field(vocabulary::DATE_DUE, "Due", vocabulary::TYPE_DATE);
        let task_url = schema.create_field_with_flags(
            vocabulary::TASK_URL,
            "URL",
            vocabulary::TYPE_URL,
            FlagSet::from(Flag::ReadOnly),
        );
        let component = schema.create_field_with_flags(
            vocabulary::COMPONENT,
            "Component",
            vocabulary::TYPE_SINGLE_SELECT,
            FlagSet::from(Flag::Attribute),
        );
        let product = schema.create_field_with_flags(
            vocabulary::PRODUCT,
            "Product",
            vocabulary::TYPE_SINGLE_SELECT,
            FlagSet::from(Flag::Attribute),
        );
        let severity = schema.create_field_with_flags(
            vocabulary::SEVERITY,
            "Severity",
            vocabulary::TYPE_SINGLE_SELECT,
            FlagSet::from(Flag::Attribute),
        );
        let new_comment = schema.create_field(
            vocabulary::COMMENT_NEW,
            "Comment",
            vocabulary::TYPE_LONG_TEXT,
        );

        Self {
            schema,
            summary,
            description,
            status,
            priority,
            task_kind,
            owner,
            reporter,
            date_created,
            date_modified,
            date_completed,
            date_due,
            task_url,
            component,
            product,
            severity,
            new_comment,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &TaskSchema {
        &self.schema
    }

    /// Apply the default schema to a task-data container.
    pub fn initialize<D: TaskDataNode>(
        &self,
        data: &mut D,
    ) -> Result<(), <D::Attribute as AttributeNode>::Error> {
        self.schema.initialize(data)
    }

    #[must_use]
    pub const fn summary(&self) -> &Field {
        &self.summary
    }

    #[must_use]
    pub const fn description(&self) -> &Field {
        &self.description
    }

    #[must_use]
    pub const fn status(&self) -> &Field {
        &self.status
    }

    #[must_use]
    pub const fn priority(&self) -> &Field {
        &self.priority
    }

    #[must_use]
    pub const fn task_kind(&self) -> &Field {
        &self.task_kind
    }

    #[must_use]
    pub const fn owner(&self) -> &Field {
        &self.owner
    }

    #[must_use]
    pub const fn reporter(&self) -> &Field {
        &self.reporter
    }

    #[must_use]
    pub const fn date_created(&self) -> &Field {
        &self.date_created
    }

    #[must_use]
    pub const fn date_modified(&self) -> &Field {
        &self.date_modified
    }

    #[must_use]
    pub const fn date_completed(&self) -> &Field {
        &self.date_completed
    }

    #[must_use]
    pub const fn date_due(&self) -> &Field {
        &self.date_due
    }

    #[must_use]
    pub const fn task_url(&self) -> &Field {
        &self.task_url
    }

    #[must_use]
    pub const fn component(&self) -> &Field {
        &self.component
    }

    #[must_use]
    pub const fn product(&self) -> &Field {
        &self.product
    }

    #[must_use]
    pub const fn severity(&self) -> &Field {
        &self.severity
    }

    #[must_use]
    pub const fn new_comment(&self) -> &Field {
        &self.new_comment
    }
}

impl Default for DefaultTaskSchema {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use taskdata_core::data::TaskData;

    #[test]
    fn summary_comes_first() {
        let schema = DefaultTaskSchema::new();
        let first = schema.schema().fields().next().unwrap();

        assert_eq!(first.key(), vocabulary::SUMMARY);
    }

    #[test]
    fn people_fields_share_the_person_bucket() {
        let schema = DefaultTaskSchema::new();

        assert_eq!(schema.owner().index_key(), Some(INDEX_PERSON));
        assert_eq!(schema.reporter().index_key(), Some(INDEX_PERSON));

        // same key space but distinct machine keys
        assert_ne!(schema.owner().key(), schema.reporter().key());
    }

    #[test]
    fn server_managed_fields_are_read_only() {
        let schema = DefaultTaskSchema::new();

        for field in [
            schema.status(),
            schema.reporter(),
            schema.date_created(),
            schema.date_modified(),
            schema.date_completed(),
            schema.task_url(),
        ] {
            assert!(field.is_read_only(), "{} should be read-only", field.key());
        }

        assert!(!schema.summary().is_read_only());
        assert!(!schema.date_due().is_read_only());
    }

    #[test]
    fn materializes_priority_options_in_order() {
        let schema = DefaultTaskSchema::new();
        let mut data = TaskData::new("example", "https://bugs.example.org", "7");
        schema.initialize(&mut data).unwrap();

        let priority = data.root().attribute(vocabulary::PRIORITY).unwrap();
        let values: Vec<_> = priority.options().iter().map(|o| o.value.as_str()).collect();

        assert_eq!(values, ["P1", "P2", "P3", "P4", "P5"]);
        assert_eq!(priority.meta().kind(), Some(vocabulary::KIND_DEFAULT));
    }

    #[test]
    fn index_buckets_cover_summary_content_and_person() {
        let schema = DefaultTaskSchema::new();
        assert_eq!(
            schema.schema().index_keys(),
            [INDEX_SUMMARY, INDEX_CONTENT, INDEX_PERSON]
        );
    }
}
