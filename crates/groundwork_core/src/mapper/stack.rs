//! Item mapping for [`Stack`], the widest entity in the catalog.

use crate::domain::Stack;
use crate::error::CoreResult;
use crate::mapper::{fields, ItemMapper};
use crate::repository::tables;
use groundwork_value::Item;

impl ItemMapper for Stack {
    fn table() -> &'static str {
        tables::STACKS
    }

    fn to_item(&self) -> CoreResult<Item> {
        let mut item = Item::new();
        fields::put_uuid(&mut item, "id", self.id);
        fields::put_string(&mut item, "name", &self.name);
        fields::put_string(&mut item, "cloudName", &self.cloud_name);
        fields::put_string(&mut item, "routePath", &self.route_path);
        fields::put_enum(&mut item, "stackType", &self.stack_type);
        fields::put_string(&mut item, "createdBy", &self.created_by);
        fields::put_timestamp(&mut item, "createdAt", self.created_at);
        fields::put_timestamp(&mut item, "updatedAt", self.updated_at);

        fields::put_opt_string(&mut item, "description", self.description.as_deref());
        fields::put_opt_string(&mut item, "repositoryURL", self.repository_url.as_deref());
        fields::put_opt_enum(
            &mut item,
            "programmingLanguage",
            self.programming_language.as_ref(),
        );
        fields::put_opt_bool(&mut item, "isPublic", self.is_public);
        fields::put_opt_string(&mut item, "ephemeralPrefix", self.ephemeral_prefix.as_deref());

        fields::put_opt_uuid(&mut item, "teamId", self.team_id);
        fields::put_opt_uuid(&mut item, "stackCollectionId", self.stack_collection_id);
        fields::put_opt_uuid(&mut item, "blueprintId", self.blueprint_id);

        fields::put_document_nonempty(&mut item, "configuration", &self.configuration)?;
        Ok(item)
    }

    fn from_item(item: &Item) -> CoreResult<Option<Self>> {
        if item.is_empty() {
            return Ok(None);
        }
        Ok(Some(Stack {
            id: fields::required_uuid(item, "id")?,
            name: fields::required_string(item, "name")?,
            cloud_name: fields::required_string(item, "cloudName")?,
            route_path: fields::required_string(item, "routePath")?,
            stack_type: fields::required_enum(item, "stackType")?,
            created_by: fields::required_string(item, "createdBy")?,
            created_at: fields::required_timestamp(item, "createdAt")?,
            updated_at: fields::required_timestamp(item, "updatedAt")?,
            description: fields::optional_string(item, "description")?,
            repository_url: fields::optional_string(item, "repositoryURL")?,
            programming_language: fields::optional_enum(item, "programmingLanguage")?,
            is_public: fields::optional_bool(item, "isPublic")?,
            ephemeral_prefix: fields::optional_string(item, "ephemeralPrefix")?,
            team_id: fields::optional_uuid(item, "teamId")?,
            stack_collection_id: fields::optional_uuid(item, "stackCollectionId")?,
            blueprint_id: fields::optional_uuid(item, "blueprintId")?,
            configuration: fields::optional_document(item, "configuration")?,
        }))
    }
}
