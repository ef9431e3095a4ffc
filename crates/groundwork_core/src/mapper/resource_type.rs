//! Item mapping for [`ResourceType`].

use crate::domain::ResourceType;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for ResourceType {
    fn table() -> &'static str {
        tables::RESOURCE_TYPES
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_string(&mut item, "displayName", &self.display_name);
        fields::put_enum(&mut item, "category", &self.category);
        fields::put_bool(&mut item, "enabled", self.enabled);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);
        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(ResourceType {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            display_name: fields::required_string(item, "displayName")?,
            category: fields::required_enum(item, "category")?,
            enabled: fields::required_bool(item, "enabled")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
        }))
    }
}
