//! Hypermedia link composition
//!
//! Links are built from a fixed relation → URI template table below rather
//! than from route definitions. Keep the templates in step with the router
//! in `larder-server`.

use crate::domain::link::{Link, LinkMethod};

pub const REL_SELF: &str = "self";
pub const REL_GET_SCRIPT: &str = "get recipe script";
pub const REL_REMOVE: &str = "remove recipe";
pub const REL_CREATE: &str = "create recipe";
pub const REL_SEARCH: &str = "search recipes";
pub const REL_UPDATE: &str = "update recipe";

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

/// The links attached to a single recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeLinks {
    pub self_link: Link,
    pub script: Link,
    pub delete: Link,
}

impl RecipeLinks {
    /// Flatten into the order used on the wire: script, delete, self
    pub fn into_vec(self) -> Vec<Link> {
        vec![self.script, self.delete, self.self_link]
    }
}

/// Compose the links of the recipe `recipe_id` under `base_uri`
///
/// `base_uri` is the absolute URI of the recipe collection, e.g.
/// `http://localhost:8080/api/recipe`. A trailing slash is ignored.
pub fn compose(recipe_id: &str, base_uri: &str) -> RecipeLinks {
    let resource = format!("{}/{}", base_uri.trim_end_matches('/'), recipe_id);

    RecipeLinks {
        script: Link::new(LinkMethod::Get, format!("{}/script", resource), REL_GET_SCRIPT)
            .produces(TEXT_PLAIN),
        delete: Link::new(LinkMethod::Delete, resource.clone(), REL_REMOVE),
        self_link: Link::new(LinkMethod::Get, resource, REL_SELF).produces(APPLICATION_JSON),
    }
}

/// Compose the collection-level links (create, search, update)
pub fn compose_service(base_uri: &str) -> Vec<Link> {
    let collection = base_uri.trim_end_matches('/');

    vec![
        Link::new(LinkMethod::Post, collection, REL_CREATE)
            .consumes(APPLICATION_JSON)
            .produces(APPLICATION_JSON),
        Link::new(LinkMethod::Get, collection, REL_SEARCH).produces(APPLICATION_JSON),
        Link::new(LinkMethod::Put, collection, REL_UPDATE)
            .consumes(APPLICATION_JSON)
            .produces(APPLICATION_JSON),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/api/recipe";

    #[test]
    fn test_compose_recipe_links() {
        let links = compose("recipe123", BASE);

        assert_eq!(links.script.href, "http://localhost:8080/api/recipe/recipe123/script");
        assert_eq!(links.script.method, LinkMethod::Get);
        assert_eq!(links.script.rel, REL_GET_SCRIPT);
        assert_eq!(links.script.produces.as_deref(), Some("text/plain"));

        assert_eq!(links.delete.href, "http://localhost:8080/api/recipe/recipe123");
        assert_eq!(links.delete.method, LinkMethod::Delete);
        assert_eq!(links.delete.rel, REL_REMOVE);

        assert_eq!(links.self_link.href, "http://localhost:8080/api/recipe/recipe123");
        assert_eq!(links.self_link.method, LinkMethod::Get);
    }

    #[test]
    fn test_compose_ignores_trailing_slash() {
        assert_eq!(compose("r", "http://h/api/recipe/"), compose("r", "http://h/api/recipe"));
    }

    #[test]
    fn test_wire_order() {
        let rels: Vec<String> = compose("r", BASE)
            .into_vec()
            .into_iter()
            .map(|l| l.rel)
            .collect();
        assert_eq!(rels, vec![REL_GET_SCRIPT, REL_REMOVE, REL_SELF]);
    }

    #[test]
    fn test_compose_service_links() {
        let links = compose_service(BASE);
        let methods: Vec<LinkMethod> = links.iter().map(|l| l.method).collect();

        assert_eq!(methods, vec![LinkMethod::Post, LinkMethod::Get, LinkMethod::Put]);
        assert!(links.iter().all(|l| l.href == BASE));
    }
}
