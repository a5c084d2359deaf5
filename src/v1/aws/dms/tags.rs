use serde::{Deserialize, Serialize};

use super::sdk_tags;
use crate::v1::{
    aws::{DmsManager, OperationKind},
    lenient,
    manager::{DispatchError, Operation},
    mapper::Prune,
    params::Tag,
    select::ResponseSelector,
};

pub struct AddTagsToResource;
pub struct RemoveTagsFromResource;
pub struct ListTagsForResource;

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableAddTagsToResourceInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_arn: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl Prune for SerializableAddTagsToResourceInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableRemoveTagsFromResourceInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tag_keys: Option<Vec<String>>,
}

impl Prune for SerializableRemoveTagsFromResourceInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableListTagsForResourceInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_arn_list: Option<Vec<String>>,
}

impl Prune for SerializableListTagsForResourceInput {
    fn prune(&mut self) {}
}

/// Tagging calls return an empty document.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SerializableTaggingOutput {}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableListTagsForResourceOutput {
    pub tag_list: Option<Vec<Tag>>,
}

impl Operation for AddTagsToResource {
    const KIND: OperationKind = OperationKind::AddTagsToResource;
    type Input = SerializableAddTagsToResourceInput;
    type Output = SerializableTaggingOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::parameter("ResourceArn")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .add_tags_to_resource()
                .set_resource_arn(input.resource_arn)
                .set_tags(sdk_tags(input.tags))
                .send()
                .await
                .map(|_| SerializableTaggingOutput {})
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for RemoveTagsFromResource {
    const KIND: OperationKind = OperationKind::RemoveTagsFromResource;
    type Input = SerializableRemoveTagsFromResourceInput;
    type Output = SerializableTaggingOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::parameter("ResourceArn")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .remove_tags_from_resource()
                .set_resource_arn(input.resource_arn)
                .set_tag_keys(input.tag_keys)
                .send()
                .await
                .map(|_| SerializableTaggingOutput {})
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for ListTagsForResource {
    const KIND: OperationKind = OperationKind::ListTagsForResource;
    type Input = SerializableListTagsForResourceInput;
    type Output = SerializableListTagsForResourceOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("TagList")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .list_tags_for_resource()
                .set_resource_arn(input.resource_arn)
                .set_resource_arn_list(input.resource_arn_list)
                .send()
                .await
                .map(|response| SerializableListTagsForResourceOutput {
                    tag_list: response
                        .tag_list
                        .map(|tags| tags.into_iter().map(Into::into).collect()),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::{
        mapper::map_request,
        params::{ParamValue, ParameterSet},
    };

    #[test]
    fn tags_map_from_a_tag_list_parameter() {
        let input: SerializableAddTagsToResourceInput = map_request(
            &ParameterSet::new()
                .with("ResourceArn", "arn:ep")
                .with("Tags", vec![Tag::new("team", "data")]),
        )
        .unwrap();
        assert_eq!(input.tags, Some(vec![Tag::new("team", "data")]));
    }

    #[test]
    fn tag_keys_take_a_string_list() {
        let keys: ParamValue = r#"["team","owner"]"#.parse().unwrap();
        let params: ParameterSet = [("TagKeys", keys)].into_iter().collect();
        let input: SerializableRemoveTagsFromResourceInput = map_request(&params).unwrap();
        assert_eq!(
            input.tag_keys,
            Some(vec!["team".to_string(), "owner".to_string()])
        );
    }
}
