pub mod adoptions;
pub mod pages;
pub mod pets;

#[cfg(test)]
pub(crate) mod test_support;

use pawhaven_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(pets::create_module());
    registry.register(adoptions::create_module());
    registry.register(pages::create_module());
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::test_support::{app, get_json, migrated_pool, registry};

    #[test]
    fn modules_register_in_order() {
        let registry = registry();
        let names: Vec<_> = registry.modules().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["pets", "adoptions", "pages"]);
    }

    #[tokio::test]
    async fn openapi_document_covers_every_api_route() {
        let app = app(migrated_pool().await);

        let (status, doc) = get_json(&app, "/docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        for path in ["/healthz", "/api/pets", "/api/pets/{id}", "/api/adopt", "/api/admin/pets"] {
            assert!(doc["paths"].get(path).is_some(), "{path} undocumented");
        }
        assert!(doc["components"]["schemas"].get("AdoptionInquiry").is_some());
    }
}
