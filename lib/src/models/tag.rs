use crate::jsonapi::Resource;
use serde::{Deserialize, Serialize};

pub const TAG_TYPE: &str = "tags";

pub type Tag = Resource<TagAttributes>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagAttributes {
    pub name: String,
}

impl Resource<TagAttributes> {
    pub fn named(id: impl Into<String>, name: &str) -> Self {
        Resource::new(
            id,
            TAG_TYPE,
            TagAttributes {
                name: name.to_string(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Sort tags alphabetically by name, as the tag list shows them
pub fn sort_by_name(tags: &mut [Tag]) {
    tags.sort_by(|a, b| a.name().cmp(b.name()));
}
