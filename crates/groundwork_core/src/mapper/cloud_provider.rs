//! Item mapping for [`CloudProvider`].

use crate::domain::CloudProvider;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for CloudProvider {
    fn table() -> &'static str {
        tables::CLOUD_PROVIDERS
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_string(&mut item, "displayName", &self.display_name);
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
        Ok(Some(CloudProvider {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            display_name: fields::required_string(item, "displayName")?,
            enabled: fields::required_bool(item, "enabled")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use chrono::NaiveDate;
    use groundwork_value::{CodecError, Value};
    use uuid::Uuid;

    fn provider() -> CloudProvider {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        CloudProvider {
            id: Uuid::new_v4(),
            name: "aws".into(),
            display_name: "Amazon Web Services".into(),
            description: None,
            enabled: true,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn roundtrip() {
        let original = provider();
        let item = original.to_item().unwrap();
        let decoded = CloudProvider::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn unset_description_is_omitted() {
        let item = provider().to_item().unwrap();
        assert!(!item.contains_key("description"));
    }

    #[test]
    fn empty_item_reads_as_not_found() {
        assert_eq!(CloudProvider::from_item(&Item::new()).unwrap(), None);
    }

    #[test]
    fn corrupt_enabled_flag_is_a_decode_error() {
        let mut item = provider().to_item().unwrap();
        item.insert("enabled", Value::Text("yes".into()));
        let err = CloudProvider::from_item(&item).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Decode(CodecError::WrongKind { .. })
        ));
    }
}
