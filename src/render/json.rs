//! JSON Backend
//!
//! Dumps the visual tree and the configuration schema for external hosts
//! and authoring tools.

use schemars::schema_for;

use crate::domain::SectionConfig;
use crate::error::Result;
use crate::view::Node;

/// Pretty-printed JSON of a visual tree
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// JSON Schema describing `SectionConfig`
pub fn config_schema() -> Result<String> {
    let schema = schema_for!(SectionConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AboutSection;
    use crate::domain::Identity;

    #[test]
    fn tree_json_carries_roles_and_links() {
        let config = SectionConfig::new(
            Identity::new("Ana", "Dev", "Hi").linkedin("jdoe"),
            vec!["Rust".to_string()],
        );
        let json = to_json(&AboutSection::new(config).tree()).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["kind"], "section");
        assert_eq!(value["background"], "#0f172a");
        assert!(json.contains(r#""href": "https://linkedin.com/in/jdoe""#));
        assert!(json.contains(r#""variant": "grid""#));
    }

    #[test]
    fn schema_lists_authoring_titles() {
        let schema = config_schema().expect("schema");
        let value: serde_json::Value = serde_json::from_str(&schema).expect("valid json");
        let properties = &value["properties"];

        assert_eq!(properties["name"]["title"], "Nome");
        assert_eq!(properties["description"]["format"], "textarea");
        assert_eq!(properties["techDisplayStyle"]["title"], "Estilo das Tecnologias");

        let required: Vec<&str> = value["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        for field in ["name", "title", "description", "technologies"] {
            assert!(required.contains(&field), "{field} should be required");
        }
        assert!(!required.contains(&"avatar"));
    }
}
