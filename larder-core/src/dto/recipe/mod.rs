//! Recipe DTOs
//!
//! Request bodies accepted by the recipe endpoints and the descriptor they
//! answer with.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::link::Link;
use crate::domain::recipe::Recipe;
use crate::links::RecipeLinks;

/// Number of recipes returned by a search when the caller does not say
pub const DEFAULT_MAX_ITEMS: usize = 30;

/// Request to create a new recipe
///
/// Required fields are optional here so that an absent field and an empty
/// one are reported the same way by validation. There is no
/// `creator` field: a creator sent by a client is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl NewRecipe {
    pub fn new(
        name: impl Into<String>,
        recipe_type: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            recipe_type: Some(recipe_type.into()),
            script: Some(script.into()),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Full replacement of an existing recipe
///
/// Every field except `id` replaces the stored value; a field left out is
/// stored empty. The stored creator is always kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// Reads an explicit `null` the same way as a missing list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Facets and pagination window of a recipe search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSearch {
    /// Every tag must be present on a matching recipe
    pub tags: Vec<String>,
    /// Exact type match when set
    pub recipe_type: Option<String>,
    pub skip_count: usize,
    pub max_items: usize,
}

impl RecipeSearch {
    /// Builds a search, applying the default window for unspecified bounds
    pub fn new(
        tags: Vec<String>,
        recipe_type: Option<String>,
        skip_count: Option<usize>,
        max_items: Option<usize>,
    ) -> Self {
        Self {
            tags,
            recipe_type,
            skip_count: skip_count.unwrap_or(0),
            max_items: max_items.unwrap_or(DEFAULT_MAX_ITEMS),
        }
    }

    /// Returns true when `recipe` satisfies both facets
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let type_matches = self
            .recipe_type
            .as_deref()
            .is_none_or(|wanted| recipe.recipe_type == wanted);

        type_matches && recipe.has_all_tags(&self.tags)
    }
}

impl Default for RecipeSearch {
    fn default() -> Self {
        Self::new(Vec::new(), None, None, None)
    }
}

/// Externally visible representation of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub script: String,
    pub creator: String,
    pub tags: Vec<String>,
    pub links: Vec<Link>,
}

impl RecipeDescriptor {
    /// Copies the visible fields of `recipe` and attaches its links
    pub fn assemble(recipe: Recipe, links: RecipeLinks) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            recipe_type: recipe.recipe_type,
            script: recipe.script,
            creator: recipe.creator,
            tags: recipe.tags,
            links: links.into_vec(),
        }
    }

    /// Finds a link by relation name
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }
}

/// Service-level description listing the collection actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub href: String,
    pub description: String,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{self, REL_GET_SCRIPT, REL_REMOVE};

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "recipeAbCdEf0123456789".to_string(),
            name: "r1".to_string(),
            recipe_type: "dockerfile".to_string(),
            script: "FROM x".to_string(),
            creator: "u1".to_string(),
            tags: vec!["ci".to_string(), "base".to_string()],
        }
    }

    #[test]
    fn test_search_defaults() {
        let search = RecipeSearch::default();
        assert_eq!(search.skip_count, 0);
        assert_eq!(search.max_items, DEFAULT_MAX_ITEMS);
        assert!(search.tags.is_empty());
        assert!(search.recipe_type.is_none());
    }

    #[test]
    fn test_search_matches_tags_and_type() {
        let recipe = sample_recipe();

        let by_tags = RecipeSearch::new(vec!["ci".into(), "base".into()], None, None, None);
        assert!(by_tags.matches(&recipe));

        let missing_tag = RecipeSearch::new(vec!["ci".into(), "gpu".into()], None, None, None);
        assert!(!missing_tag.matches(&recipe));

        let by_type = RecipeSearch::new(vec![], Some("dockerfile".into()), None, None);
        assert!(by_type.matches(&recipe));

        let type_prefix = RecipeSearch::new(vec![], Some("docker".into()), None, None);
        assert!(!type_prefix.matches(&recipe));

        let both_wrong_type =
            RecipeSearch::new(vec!["ci".into()], Some("compose".into()), None, None);
        assert!(!both_wrong_type.matches(&recipe));
    }

    #[test]
    fn test_assemble_copies_fields_and_links() {
        let recipe = sample_recipe();
        let links = links::compose(&recipe.id, "http://localhost:8080/api/recipe");

        let descriptor = RecipeDescriptor::assemble(recipe.clone(), links);

        assert_eq!(descriptor.id, recipe.id);
        assert_eq!(descriptor.name, recipe.name);
        assert_eq!(descriptor.recipe_type, recipe.recipe_type);
        assert_eq!(descriptor.script, recipe.script);
        assert_eq!(descriptor.creator, recipe.creator);
        assert_eq!(descriptor.tags, recipe.tags);
        assert_eq!(descriptor.links.len(), 3);
        assert!(descriptor.link(REL_GET_SCRIPT).is_some());
        assert!(descriptor.link(REL_REMOVE).is_some());
    }

    #[test]
    fn test_new_recipe_ignores_creator() {
        let req: NewRecipe = serde_json::from_value(serde_json::json!({
            "name": "r1",
            "type": "dockerfile",
            "script": "FROM x",
            "creator": "mallory"
        }))
        .unwrap();

        assert_eq!(req.name.as_deref(), Some("r1"));
        assert_eq!(req.recipe_type.as_deref(), Some("dockerfile"));
        assert!(req.tags.is_empty());
    }

    #[test]
    fn test_null_tags_read_as_empty() {
        let req: NewRecipe = serde_json::from_value(serde_json::json!({
            "name": "r1",
            "type": "dockerfile",
            "script": "FROM x",
            "tags": null
        }))
        .unwrap();
        assert!(req.tags.is_empty());

        let update: RecipeUpdate =
            serde_json::from_value(serde_json::json!({ "id": "recipe1", "tags": null })).unwrap();
        assert_eq!(update.id.as_deref(), Some("recipe1"));
        assert!(update.tags.is_empty());

        let listed: RecipeUpdate =
            serde_json::from_value(serde_json::json!({ "id": "recipe1", "tags": ["a"] }))
                .unwrap();
        assert_eq!(listed.tags, vec!["a"]);
    }
}
