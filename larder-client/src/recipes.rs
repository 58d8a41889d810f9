//! Recipe API endpoints

use crate::LarderClient;
use crate::error::{ClientError, Result};
use larder_core::dto::recipe::{NewRecipe, RecipeDescriptor, RecipeSearch, RecipeUpdate};

impl LarderClient {
    // =============================================================================
    // Recipe Management
    // =============================================================================

    /// Create a new recipe owned by the client's user
    ///
    /// # Example
    /// ```no_run
    /// # use larder_client::LarderClient;
    /// # use larder_core::dto::recipe::NewRecipe;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = LarderClient::new("http://localhost:8080", "alice");
    /// let recipe = client
    ///     .create_recipe(&NewRecipe::new("base", "dockerfile", "FROM alpine").with_tags(["ci"]))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_recipe(&self, req: &NewRecipe) -> Result<RecipeDescriptor> {
        let response = self
            .authorized(self.client.post(self.recipes_url()))
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a recipe by ID
    pub async fn get_recipe(&self, id: &str) -> Result<RecipeDescriptor> {
        let url = format!("{}/{}", self.recipes_url(), id);
        let response = self.authorized(self.client.get(&url)).send().await?;

        self.handle_response(response).await
    }

    /// Get the raw script of a recipe
    ///
    /// Fails with a parse error when the body length does not match the
    /// Content-Length announced by the server.
    pub async fn get_script(&self, id: &str) -> Result<String> {
        let url = format!("{}/{}/script", self.recipes_url(), id);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = self.check_status(response).await?;

        let announced = response.content_length();
        let bytes = response.bytes().await?;

        if let Some(announced) = announced.filter(|&len| len != bytes.len() as u64) {
            return Err(ClientError::ParseError(format!(
                "Script length {} does not match Content-Length {}",
                bytes.len(),
                announced
            )));
        }

        String::from_utf8(bytes.to_vec())
            .map_err(|e| ClientError::ParseError(format!("Script is not valid UTF-8: {}", e)))
    }

    /// Search the user's recipes
    pub async fn search_recipes(&self, search: &RecipeSearch) -> Result<Vec<RecipeDescriptor>> {
        let response = self
            .authorized(self.client.get(self.recipes_url()))
            .query(&search_query(search))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Replace a recipe
    pub async fn update_recipe(&self, update: &RecipeUpdate) -> Result<RecipeDescriptor> {
        let response = self
            .authorized(self.client.put(self.recipes_url()))
            .json(update)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a recipe
    pub async fn remove_recipe(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.recipes_url(), id);
        let response = self.authorized(self.client.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}

/// Query pairs for a search; tags repeat once per value
fn search_query(search: &RecipeSearch) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> = search
        .tags
        .iter()
        .map(|tag| ("tags", tag.clone()))
        .collect();

    if let Some(recipe_type) = &search.recipe_type {
        query.push(("type", recipe_type.clone()));
    }

    query.push(("skipCount", search.skip_count.to_string()));
    query.push(("maxItems", search.max_items.to_string()));
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_repeats_tags() {
        let search = RecipeSearch::new(
            vec!["a".to_string(), "b".to_string()],
            Some("dockerfile".to_string()),
            Some(5),
            None,
        );

        assert_eq!(
            search_query(&search),
            vec![
                ("tags", "a".to_string()),
                ("tags", "b".to_string()),
                ("type", "dockerfile".to_string()),
                ("skipCount", "5".to_string()),
                ("maxItems", "30".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_query_without_facets() {
        let query = search_query(&RecipeSearch::default());
        assert_eq!(
            query,
            vec![
                ("skipCount", "0".to_string()),
                ("maxItems", "30".to_string())
            ]
        );
    }
}
