#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use vanbladel::routes::status::{HELLO_MESSAGE, ROOT_MESSAGE};
    use vanbladel::test_utils::{test_config, TestContext};

    #[tokio::test]
    async fn test_root_and_hello() {
        let ctx = TestContext::new();

        let (status, body) = ctx.get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": ROOT_MESSAGE}));

        let (status, body) = ctx.get("/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": HELLO_MESSAGE}));

        let (status, body) = ctx.get("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_diagnostics_without_configuration() {
        let ctx = TestContext::unavailable();

        let (status, body) = ctx.get("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "✅ Running");
        assert_eq!(body["database"], "⚠️  Available but not initialized");
        assert_eq!(body["database_url"], "❌ Not Set");
        assert_eq!(body["database_name"], "❌ Not Set");
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["collections"], json!([]));
    }

    #[tokio::test]
    async fn test_diagnostics_lists_collections() {
        let ctx = TestContext::new();
        ctx.post("/api/products", json!({"title": "Golf"})).await;
        ctx.post("/api/appointments", json!({"name": "Jan", "phone": "0612345678"}))
            .await;

        let (status, body) = ctx.get("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "✅ Connected & Working");
        assert_eq!(body["connection_status"], "Connected");
        assert_eq!(body["database_url"], "✅ Set");
        assert_eq!(body["database_name"], "✅ Set");
        assert_eq!(body["collections"], json!(["appointment", "product"]));
    }

    #[tokio::test]
    async fn test_diagnostics_with_unreachable_server() {
        // Nothing listens on port 1; the driver only fails once it is used
        let ctx = TestContext::from_config(test_config(
            Some("mongodb://127.0.0.1:1"),
            Some("vanbladel"),
        ))
        .await;

        let (status, body) = ctx.get("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection_status"], "Connected");
        assert!(body["database"]
            .as_str()
            .unwrap()
            .starts_with("⚠️  Connected but Error: "));
    }

    #[tokio::test]
    async fn test_diagnostics_with_invalid_url() {
        let ctx = TestContext::from_config(test_config(Some("not-a-url"), Some("vanbladel"))).await;

        let (status, body) = ctx.get("/test").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection_status"], "Not Connected");
        assert_eq!(body["database_url"], "✅ Set");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let ctx = TestContext::new();
        let (status, body) = ctx.get("/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/products"].is_object());
    }
}
