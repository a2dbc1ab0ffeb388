//! Gateway Integration Tests
//!
//! REST gateway tests run against a local mock backend; pure filtering
//! behavior is covered on the frontend.

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use crate::domain::{DomainError, Place};
    use crate::gateway::{
        BackendConfig, MemoryPlaceGateway, PlaceGateway, RestPlaceGateway,
    };

    fn place(id: &str, name: &str, category: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            address: "Nakhon Sawan".to_string(),
            latitude: 15.704,
            longitude: 100.137,
            image_url: format!("https://img.example/{}.jpg", id),
            phone: None,
        }
    }

    const LOCATION_ROWS: &str = r#"[
        {"id":"1","name":"Bung Boraphet","description":"Largest freshwater swamp","category":"Nature","address":"Mueang","latitude":15.67,"longitude":100.23,"image_url":"https://img.example/1.jpg","phone":"056-000-111"},
        {"id":"2","name":"Wat Khiriwong","description":null,"category":"Temple","address":"Mueang","latitude":15.69,"longitude":100.12,"image_url":"https://img.example/2.jpg","phone":null}
    ]"#;

    #[tokio::test]
    async fn fetch_all_queries_ordered_by_name() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/rest/v1/location")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "name.asc".into()),
            ]))
            .match_header("apikey", "test-key")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LOCATION_ROWS)
            .expect(1)
            .create_async()
            .await;

        let gateway = RestPlaceGateway::new(BackendConfig::new(server.url(), "test-key"));
        let places = gateway.fetch_all().await.expect("fetch_all failed");

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Bung Boraphet");
        assert_eq!(places[0].phone.as_deref(), Some("056-000-111"));
        assert_eq!(places[1].description, None);
    }

    #[tokio::test]
    async fn fetch_by_id_returns_single_row() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::to_string(&vec![place("2", "Wat Khiriwong", "Temple")])
            .expect("fixture serializes");
        let _m = server
            .mock("GET", "/rest/v1/location")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("id".into(), "eq.2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let gateway = RestPlaceGateway::new(BackendConfig::new(server.url(), "test-key"));
        let found = gateway.fetch_by_id("2").await.expect("fetch_by_id failed");

        assert_eq!(found.id, "2");
        assert_eq!(found.category, "Temple");
    }

    #[tokio::test]
    async fn fetch_by_id_unknown_id_is_not_found() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/rest/v1/location")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("id".into(), "eq.42".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let gateway = RestPlaceGateway::new(BackendConfig::new(server.url(), "test-key"));
        let result = gateway.fetch_by_id("42").await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn backend_failure_is_transport_error() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/rest/v1/location")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let gateway = RestPlaceGateway::new(BackendConfig::new(server.url(), "test-key"));
        let result = gateway.fetch_all().await;

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }

    #[tokio::test]
    async fn memory_gateway_orders_by_name() {
        let gateway = MemoryPlaceGateway::new(vec![
            place("1", "Wat Khiriwong", "Temple"),
            place("2", "Bung Boraphet", "Nature"),
        ]);

        let places = gateway.fetch_all().await.unwrap();
        assert_eq!(places[0].name, "Bung Boraphet");
        assert_eq!(places[1].name, "Wat Khiriwong");
    }

    #[tokio::test]
    async fn memory_gateway_unknown_id_is_not_found() {
        let gateway = MemoryPlaceGateway::new(vec![place("1", "Wat Khiriwong", "Temple")]);

        let found = gateway.fetch_by_id("1").await.unwrap();
        assert_eq!(found.id, "1");

        let missing = gateway.fetch_by_id("42").await;
        assert!(matches!(missing, Err(DomainError::NotFound(_))));
    }
}
