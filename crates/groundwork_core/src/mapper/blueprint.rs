//! Item mapping for [`Blueprint`].
//!
//! The many-valued `supportedCloudProviderIds` relationship is owned by the
//! blueprint and stored as an ordered list of identities. The inverse-side
//! relationships (stacks created from this blueprint) are never written
//! here; they live as `blueprintId` foreign keys on the stack items.

use crate::domain::Blueprint;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for Blueprint {
    fn table() -> &'static str {
        tables::BLUEPRINTS
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);
        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        fields::put_opt_bool(&mut item, "isActive", self.is_active);
        fields::put_uuid_list_nonempty(
            &mut item,
            "supportedCloudProviderIds",
            &self.supported_cloud_provider_ids,
        );
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(Blueprint {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
            is_active: fields::optional_bool(item, "isActive")?,
            supported_cloud_provider_ids: fields::optional_uuid_list(
                item,
                "supportedCloudProviderIds",
            )?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use groundwork_value::Value;
    use uuid::Uuid;

    fn blueprint() -> Blueprint {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        Blueprint {
            id: Uuid::new_v4(),
            name: "standard-web-service".into(),
            description: Some("Load balancer, service, database".into()),
            is_active: Some(true),
            supported_cloud_provider_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn roundtrip() {
        let original = blueprint();
        let item = original.to_item().unwrap();
        let decoded = Blueprint::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn provider_list_preserves_order() {
        let original = blueprint();
        let item = original.to_item().unwrap();
        let stored = item
            .get("supportedCloudProviderIds")
            .and_then(Value::as_list)
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(
            stored[0].as_text(),
            Some(original.supported_cloud_provider_ids[0].to_string().as_str())
        );
    }

    #[test]
    fn empty_provider_list_is_omitted() {
        let mut original = blueprint();
        original.supported_cloud_provider_ids.clear();
        let item = original.to_item().unwrap();
        assert!(!item.contains_key("supportedCloudProviderIds"));

        let decoded = Blueprint::from_item(&item).unwrap().unwrap();
        assert!(decoded.supported_cloud_provider_ids.is_empty());
    }
}
