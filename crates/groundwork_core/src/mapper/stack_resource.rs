//! Item mapping for [`StackResource`].

use crate::domain::StackResource;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for StackResource {
    fn table() -> &'static str {
        tables::STACK_RESOURCES
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);
        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        fields::put_opt_uuid(&mut item, "resourceTypeId", self.resource_type_id);
        fields::put_opt_uuid(&mut item, "cloudProviderId", self.cloud_provider_id);
        fields::put_opt_uuid(&mut item, "stackId", self.stack_id);
        fields::put_document_nonempty(&mut item, "configuration", &self.configuration)?;
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(StackResource {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
            resource_type_id: fields::optional_uuid(item, "resourceTypeId")?,
            cloud_provider_id: fields::optional_uuid(item, "cloudProviderId")?,
            stack_id: fields::optional_uuid(item, "stackId")?,
            configuration: fields::optional_document(item, "configuration")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use groundwork_value::Value;
    use serde_json::json;
    use uuid::Uuid;

    fn resource() -> StackResource {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let configuration = match json!({
            "engine": "postgres",
            "storageGb": 100,
            "replicas": [],
            "multiAz": true
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        StackResource {
            id: Uuid::new_v4(),
            name: "orders-db".into(),
            description: None,
            resource_type_id: Some(Uuid::new_v4()),
            cloud_provider_id: Some(Uuid::new_v4()),
            stack_id: Some(Uuid::new_v4()),
            configuration,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn roundtrip() {
        let original = resource();
        let item = original.to_item().unwrap();
        let decoded = StackResource::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn empty_list_inside_configuration_survives() {
        let item = resource().to_item().unwrap();
        let config = item.get("configuration").and_then(Value::as_map).unwrap();
        assert_eq!(config["replicas"], Value::List(vec![]));

        let decoded = StackResource::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded.configuration["replicas"], json!([]));
    }
}
