//! Routing, greeting and common header integration tests.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{endpoint_url, http_client};

    #[tokio::test]
    async fn test_should_greet_on_root() {
        let base = endpoint_url().await;
        let resp = http_client().get(format!("{base}/")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Hello, FastAPI!" }));
    }

    #[tokio::test]
    async fn test_should_report_health() {
        let base = endpoint_url().await;
        let resp = http_client()
            .get(format!("{base}/health"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "running");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_should_set_common_headers() {
        let base = endpoint_url().await;
        let resp = http_client().get(format!("{base}/")).send().await.unwrap();

        let headers = resp.headers();
        assert_eq!(headers["server"], "Reformat");
        assert_eq!(headers["content-type"], "application/json");
        assert!(!headers["x-request-id"].is_empty());
    }

    #[tokio::test]
    async fn test_should_return_404_for_unknown_path() {
        let base = endpoint_url().await;
        let resp = http_client()
            .get(format!("{base}/nope"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }

    #[tokio::test]
    async fn test_should_return_405_with_allow_header() {
        let base = endpoint_url().await;
        let resp = http_client()
            .get(format!("{base}/format"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "POST");
    }
}
