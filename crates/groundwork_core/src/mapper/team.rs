//! Item mapping for [`Team`].

use crate::domain::Team;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for Team {
    fn table() -> &'static str {
        tables::TEAMS
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);
        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        fields::put_opt_bool(&mut item, "isActive", self.is_active);
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(Team {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
            is_active: fields::optional_bool(item, "isActive")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn team() -> Team {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        Team {
            id: Uuid::new_v4(),
            name: "platform".into(),
            description: Some("Platform engineering".into()),
            is_active: Some(true),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn roundtrip() {
        let original = team();
        let item = original.to_item().unwrap();
        let decoded = Team::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn minimal_team_roundtrip() {
        let mut original = team();
        original.description = None;
        original.is_active = None;
        let item = original.to_item().unwrap();
        assert_eq!(item.len(), 4);

        let decoded = Team::from_item(&item).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    fn timestamps() -> impl Strategy<Value = NaiveDateTime> {
        // Seconds up to 2100-01-01, millisecond sub-second precision.
        (0i64..4_102_444_800, 0u32..1_000).prop_map(|(secs, millis)| {
            DateTime::from_timestamp(secs, millis * 1_000_000)
                .unwrap()
                .naive_utc()
        })
    }

    proptest! {
        #[test]
        fn any_team_survives_the_roundtrip(
            bytes in any::<[u8; 16]>(),
            name in "[a-zA-Z0-9 _-]{1,24}",
            description in proptest::option::of("[a-zA-Z0-9 ]{0,40}"),
            is_active in proptest::option::of(any::<bool>()),
            created_at in timestamps(),
            updated_at in timestamps(),
        ) {
            let original = Team {
                id: Uuid::from_bytes(bytes),
                name,
                description,
                is_active,
                created_at,
                updated_at,
            };
            let item = original.to_item().unwrap();
            let decoded = Team::from_item(&item).unwrap().unwrap();
            prop_assert_eq!(decoded, original);
        }
    }
}
