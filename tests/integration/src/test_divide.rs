//! `/divide` integration tests.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{endpoint_url, http_client};

    async fn divide(query: &str) -> (reqwest::StatusCode, Value) {
        let base = endpoint_url().await;
        let resp = http_client()
            .get(format!("{base}/divide?{query}"))
            .send()
            .await
            .unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_should_divide_floats() {
        let (status, body) = divide("a=7.5&b=2.5").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, json!({ "result": 3.0 }));
    }

    #[tokio::test]
    async fn test_should_reject_zero_divisor() {
        let (status, body) = divide("a=10&b=0").await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "Division by zero is not allowed" }));
    }

    #[tokio::test]
    async fn test_should_reject_missing_parameter() {
        let (status, body) = divide("a=1").await;
        assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Missing required query parameter: b");
    }

    #[tokio::test]
    async fn test_should_reject_non_numeric_parameter() {
        let (status, body) = divide("a=ten&b=2").await;
        assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Query parameter 'a' must be a number, got 'ten'");
    }
}
