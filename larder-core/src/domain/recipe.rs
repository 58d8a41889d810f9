//! Recipe domain types

use serde::{Deserialize, Serialize};

/// Prefix of every generated recipe identifier
pub const RECIPE_ID_PREFIX: &str = "recipe";

/// Length of the random part of a recipe identifier
pub const RECIPE_ID_SUFFIX_LENGTH: usize = 16;

/// A named, typed script owned by the user who created it
///
/// The script is opaque: it is stored and returned byte for byte and never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub script: String,
    pub creator: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Returns true when every tag in `required` is carried by this recipe
    pub fn has_all_tags(&self, required: &[String]) -> bool {
        required.iter().all(|tag| self.tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_tags(tags: &[&str]) -> Recipe {
        Recipe {
            id: "recipe0000000000000000".to_string(),
            name: "base".to_string(),
            recipe_type: "dockerfile".to_string(),
            script: "FROM alpine".to_string(),
            creator: "u1".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_has_all_tags_requires_every_tag() {
        let recipe = recipe_with_tags(&["a", "b", "c"]);

        assert!(recipe.has_all_tags(&["a".to_string(), "c".to_string()]));
        assert!(!recipe.has_all_tags(&["a".to_string(), "d".to_string()]));
    }

    #[test]
    fn test_has_all_tags_with_no_filter() {
        let recipe = recipe_with_tags(&[]);
        assert!(recipe.has_all_tags(&[]));
    }

    #[test]
    fn test_type_is_serialized_as_type() {
        let json = serde_json::to_value(recipe_with_tags(&["ci"])).unwrap();
        assert_eq!(json["type"], "dockerfile");
        assert!(json.get("recipe_type").is_none());
    }
}
