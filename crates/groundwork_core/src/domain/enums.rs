//! Catalog enums, stored by declared constant name.

use groundwork_value::scalar::EnumText;
use serde::{Deserialize, Serialize};

/// The kind of workload a stack represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackType {
    /// Pure infrastructure, no application code.
    Infrastructure,
    /// RESTful API on serverless compute.
    RestfulServerless,
    /// RESTful API on provisioned compute.
    RestfulApi,
    /// Browser-delivered JavaScript application.
    JavascriptWebApplication,
    /// Event consumer/producer on serverless compute.
    EventDrivenServerless,
    /// Event consumer/producer on provisioned compute.
    EventDrivenApi,
}

impl StackType {
    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            StackType::Infrastructure => "Infrastructure",
            StackType::RestfulServerless => "RESTful Serverless",
            StackType::RestfulApi => "RESTful API",
            StackType::JavascriptWebApplication => "JavaScript Web Application",
            StackType::EventDrivenServerless => "Event-driven Serverless",
            StackType::EventDrivenApi => "Event-driven API",
        }
    }
}

impl EnumText for StackType {
    const ENUM_NAME: &'static str = "StackType";

    fn as_text(&self) -> &'static str {
        match self {
            StackType::Infrastructure => "INFRASTRUCTURE",
            StackType::RestfulServerless => "RESTFUL_SERVERLESS",
            StackType::RestfulApi => "RESTFUL_API",
            StackType::JavascriptWebApplication => "JAVASCRIPT_WEB_APPLICATION",
            StackType::EventDrivenServerless => "EVENT_DRIVEN_SERVERLESS",
            StackType::EventDrivenApi => "EVENT_DRIVEN_API",
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "INFRASTRUCTURE" => Some(StackType::Infrastructure),
            "RESTFUL_SERVERLESS" => Some(StackType::RestfulServerless),
            "RESTFUL_API" => Some(StackType::RestfulApi),
            "JAVASCRIPT_WEB_APPLICATION" => Some(StackType::JavascriptWebApplication),
            "EVENT_DRIVEN_SERVERLESS" => Some(StackType::EventDrivenServerless),
            "EVENT_DRIVEN_API" => Some(StackType::EventDrivenApi),
            _ => None,
        }
    }
}

/// Primary implementation language of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgrammingLanguage {
    /// Quarkus (JVM).
    Quarkus,
    /// Node.js.
    NodeJs,
    /// React front-end.
    React,
}

impl ProgrammingLanguage {
    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgrammingLanguage::Quarkus => "Quarkus",
            ProgrammingLanguage::NodeJs => "Node.js",
            ProgrammingLanguage::React => "React",
        }
    }
}

impl EnumText for ProgrammingLanguage {
    const ENUM_NAME: &'static str = "ProgrammingLanguage";

    fn as_text(&self) -> &'static str {
        match self {
            ProgrammingLanguage::Quarkus => "QUARKUS",
            ProgrammingLanguage::NodeJs => "NODE_JS",
            ProgrammingLanguage::React => "REACT",
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "QUARKUS" => Some(ProgrammingLanguage::Quarkus),
            "NODE_JS" => Some(ProgrammingLanguage::NodeJs),
            "REACT" => Some(ProgrammingLanguage::React),
            _ => None,
        }
    }
}

/// Where a resource type may be used: shared infrastructure (blueprints),
/// per-stack resources, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceCategory {
    /// Only usable in blueprints (e.g. a shared cluster).
    Shared,
    /// Only usable in stacks (e.g. a per-stack database).
    NonShared,
    /// Usable in either context.
    Both,
}

impl EnumText for ResourceCategory {
    const ENUM_NAME: &'static str = "ResourceCategory";

    fn as_text(&self) -> &'static str {
        match self {
            ResourceCategory::Shared => "SHARED",
            ResourceCategory::NonShared => "NON_SHARED",
            ResourceCategory::Both => "BOTH",
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "SHARED" => Some(ResourceCategory::Shared),
            "NON_SHARED" => Some(ResourceCategory::NonShared),
            "BOTH" => Some(ResourceCategory::Both),
            _ => None,
        }
    }
}

/// Data type of a configurable property, for validation and form
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyDataType {
    /// Free text.
    String,
    /// Integral or fractional number.
    Number,
    /// True/false.
    Boolean,
    /// Ordered list of values.
    List,
}

impl EnumText for PropertyDataType {
    const ENUM_NAME: &'static str = "PropertyDataType";

    fn as_text(&self) -> &'static str {
        match self {
            PropertyDataType::String => "STRING",
            PropertyDataType::Number => "NUMBER",
            PropertyDataType::Boolean => "BOOLEAN",
            PropertyDataType::List => "LIST",
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "STRING" => Some(PropertyDataType::String),
            "NUMBER" => Some(PropertyDataType::Number),
            "BOOLEAN" => Some(PropertyDataType::Boolean),
            "LIST" => Some(PropertyDataType::List),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_type_texts_roundtrip() {
        for variant in [
            StackType::Infrastructure,
            StackType::RestfulServerless,
            StackType::RestfulApi,
            StackType::JavascriptWebApplication,
            StackType::EventDrivenServerless,
            StackType::EventDrivenApi,
        ] {
            assert_eq!(StackType::from_text(variant.as_text()), Some(variant));
        }
    }

    #[test]
    fn display_names_differ_from_stored_texts() {
        assert_eq!(StackType::RestfulApi.as_text(), "RESTFUL_API");
        assert_eq!(StackType::RestfulApi.display_name(), "RESTful API");
        assert_eq!(ProgrammingLanguage::NodeJs.display_name(), "Node.js");
    }

    #[test]
    fn unknown_text_resolves_to_none() {
        assert_eq!(ResourceCategory::from_text("shared"), None);
        assert_eq!(PropertyDataType::from_text("INT"), None);
    }
}
