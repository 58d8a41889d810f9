//! Request validation
//!
//! Checks run in a fixed order and stop at the first missing field, so a
//! client always gets one precise message.

use std::fmt;

use larder_core::dto::recipe::{NewRecipe, RecipeUpdate};
use thiserror::Error;

/// A field a request cannot do without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The create request body itself
    Recipe,
    Type,
    Script,
    Name,
    /// The update request body itself
    Update,
    Id,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequiredField::Recipe => "Recipe",
            RequiredField::Type => "Recipe type",
            RequiredField::Script => "Recipe script",
            RequiredField::Name => "Recipe name",
            RequiredField::Update => "Update",
            RequiredField::Id => "Recipe id",
        };
        f.write_str(label)
    }
}

/// Validation failure reported back to the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} required")]
    MissingField(RequiredField),
}

/// A create request with every required field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewRecipe {
    pub name: String,
    pub recipe_type: String,
    pub script: String,
    pub tags: Vec<String>,
}

/// An update request that names its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecipeUpdate {
    pub id: String,
    pub name: String,
    pub recipe_type: String,
    pub script: String,
    pub tags: Vec<String>,
}

/// Check a create request: request, then type, then script, then name
pub fn validate_for_create(req: Option<NewRecipe>) -> Result<ValidNewRecipe, ValidationError> {
    let req = req.ok_or(ValidationError::MissingField(RequiredField::Recipe))?;

    let recipe_type = required(req.recipe_type, RequiredField::Type)?;
    let script = required(req.script, RequiredField::Script)?;
    let name = required(req.name, RequiredField::Name)?;

    Ok(ValidNewRecipe {
        name,
        recipe_type,
        script,
        tags: req.tags,
    })
}

/// Check an update request: only the payload and its id are required
///
/// Fields left out are replaced by empty values; an update is a full replace.
pub fn validate_for_update(
    req: Option<RecipeUpdate>,
) -> Result<ValidRecipeUpdate, ValidationError> {
    let req = req.ok_or(ValidationError::MissingField(RequiredField::Update))?;
    let id = req
        .id
        .ok_or(ValidationError::MissingField(RequiredField::Id))?;

    Ok(ValidRecipeUpdate {
        id,
        name: req.name.unwrap_or_default(),
        recipe_type: req.recipe_type.unwrap_or_default(),
        script: req.script.unwrap_or_default(),
        tags: req.tags,
    })
}

fn required(value: Option<String>, field: RequiredField) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}
