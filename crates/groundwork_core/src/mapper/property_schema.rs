//! Item mapping for [`PropertySchema`].

use crate::domain::PropertySchema;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for PropertySchema {
    fn table() -> &'static str {
        tables::PROPERTY_SCHEMAS
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "propertyName", &self.property_name);
        fields::put_string(&mut item, "displayName", &self.display_name);
        fields::put_enum(&mut item, "dataType", &self.data_type);
        fields::put_bool(&mut item, "required", self.required);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);
        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        fields::put_opt_uuid(&mut item, "mappingId", self.mapping_id);
        fields::put_opt_json(&mut item, "defaultValue", self.default_value.as_ref())?;
        fields::put_document_nonempty(&mut item, "validationRules", &self.validation_rules)?;
        fields::put_opt_int(&mut item, "displayOrder", self.display_order);
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(PropertySchema {
            id: fields::required_uuid(item, "id")?,
            property_name: fields::required_string(item, "propertyName")?,
            display_name: fields::required_string(item, "displayName")?,
            data_type: fields::required_enum(item, "dataType")?,
            required: fields::required_bool(item, "required")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
            mapping_id: fields::optional_uuid(item, "mappingId")?,
            default_value: fields::optional_json(item, "defaultValue")?,
            validation_rules: fields::optional_document(item, "validationRules")?,
            display_order: fields::optional_int(item, "displayOrder")?,
        }))
    }
}
