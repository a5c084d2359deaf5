pub mod endpoint;
pub mod replication_instance;
pub mod replication_task;
pub mod settings;
pub mod tags;

use anyhow::Context;
use aws_sdk_databasemigration::{
    primitives::DateTime,
    types::{self, builders::FilterBuilder},
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::Utc;

use crate::v1::params::{Filter, Tag};

pub(crate) fn to_utc(value: DateTime) -> Option<chrono::DateTime<Utc>> {
    value.to_chrono_utc().ok()
}

pub(crate) fn from_utc(value: chrono::DateTime<Utc>) -> DateTime {
    DateTime::from_secs_and_nanos(value.timestamp(), value.timestamp_subsec_nanos())
}

impl From<Tag> for types::Tag {
    fn from(tag: Tag) -> types::Tag {
        types::Tag::builder()
            .set_key(Some(tag.key))
            .set_value(tag.value)
            .build()
    }
}

impl From<types::Tag> for Tag {
    fn from(tag: types::Tag) -> Self {
        Tag {
            key: tag.key.unwrap_or_default(),
            value: tag.value,
        }
    }
}

impl TryFrom<Filter> for types::Filter {
    type Error = anyhow::Error;
    fn try_from(filter: Filter) -> Result<Self, Self::Error> {
        FilterBuilder::default()
            .set_name(Some(filter.name))
            .set_values(Some(filter.values))
            .build()
            .context("Failed to build Filter from Filter parameter")
    }
}

pub(crate) fn sdk_tags(tags: Option<Vec<Tag>>) -> Option<Vec<types::Tag>> {
    tags.map(|tags| tags.into_iter().map(types::Tag::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_convert_both_ways() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(to_utc(from_utc(at)), Some(at));
    }

    #[test]
    fn tags_keep_missing_values_missing() {
        let sdk = types::Tag::from(Tag {
            key: "owner".to_string(),
            value: None,
        });
        assert_eq!(sdk.key(), Some("owner"));
        assert_eq!(sdk.value(), None);
        assert_eq!(Tag::from(sdk).value, None);
    }

    #[test]
    fn filters_carry_name_and_values() {
        let filter = types::Filter::try_from(Filter::new("engine-name", &["mysql", "oracle"]))
            .unwrap();
        assert_eq!(filter.name(), "engine-name");
        assert_eq!(
            filter.values().to_vec(),
            vec!["mysql".to_string(), "oracle".to_string()]
        );
    }
}
