//! `/format` integration tests.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use reformat_core::ReformatConfig;

    use crate::{endpoint_url, post_format, spawn_server};

    #[tokio::test]
    async fn test_should_pretty_print_embedded_json() {
        let base = endpoint_url().await;
        let body = json!({ "json_string": "{\"name\":\"John\",\"age\":30}" }).to_string();

        let resp = post_format(&base, "application/json", body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let out: Value = resp.json().await.unwrap();
        assert_eq!(
            out,
            json!({ "formatted": "{\n  \"name\": \"John\",\n  \"age\": 30\n}" })
        );
    }

    #[tokio::test]
    async fn test_should_be_idempotent_on_formatted_output() {
        let base = endpoint_url().await;
        let body = json!({ "json_string": "{\"b\":[1,2,{\"c\":null}],\"a\":true}" }).to_string();
        let first: Value = post_format(&base, "application/json", body)
            .await
            .json()
            .await
            .unwrap();
        let formatted = first["formatted"].as_str().unwrap().to_owned();

        let again = json!({ "json_string": formatted }).to_string();
        let second: Value = post_format(&base, "application/json", again)
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(second["formatted"].as_str(), Some(formatted.as_str()));
    }

    #[tokio::test]
    async fn test_should_render_yaml_in_block_style() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/yaml", "yaml_string: \"a: 1\\nb: 2\\n\"\n").await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );

        let out: Value = resp.json().await.unwrap();
        assert_eq!(out, json!({ "formatted": "a: 1\nb: 2" }));
    }

    #[tokio::test]
    async fn test_should_treat_unknown_content_type_as_json() {
        let base = endpoint_url().await;
        let body = json!({ "json_string": "[1,2]" }).to_string();

        let resp = post_format(&base, "text/plain", body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(out["formatted"], "[\n  1,\n  2\n]");
    }

    #[tokio::test]
    async fn test_should_reject_malformed_envelope() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/json", "{not json").await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        let detail = out["detail"].as_str().unwrap();
        assert!(detail.starts_with("Invalid JSON body: "), "{detail}");
    }

    #[tokio::test]
    async fn test_should_reject_missing_field() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/json", r#"{"other": "x"}"#).await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(out["detail"], "Missing required field: json_string");
    }

    #[tokio::test]
    async fn test_should_reject_non_string_field() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/json", r#"{"json_string": 42}"#).await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(out["detail"], "Field 'json_string' must be a string");
    }

    #[tokio::test]
    async fn test_should_reject_malformed_inner_document() {
        let base = endpoint_url().await;
        let body = json!({ "json_string": "{\"a\":" }).to_string();

        let resp = post_format(&base, "application/json", body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        let detail = out["detail"].as_str().unwrap();
        assert!(detail.starts_with("Invalid JSON string: "), "{detail}");
    }

    #[tokio::test]
    async fn test_should_reject_malformed_yaml_envelope() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/yaml", "yaml_string: [unclosed\n").await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        let detail = out["detail"].as_str().unwrap();
        assert!(detail.starts_with("Invalid YAML body: "), "{detail}");
    }

    #[tokio::test]
    async fn test_should_name_yaml_field_when_envelope_is_not_a_mapping() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/x-yaml", "- a\n- b\n").await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(
            out["detail"],
            "Request body must be a mapping with a 'yaml_string' field"
        );
    }

    #[tokio::test]
    async fn test_should_keep_wide_integers_exact() {
        let base = endpoint_url().await;
        let body = json!({ "json_string": "{\"id\":123456789012345678901234567890}" }).to_string();

        let resp = post_format(&base, "application/json", body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(out["formatted"], "{\n  \"id\": 123456789012345678901234567890\n}");
    }

    #[tokio::test]
    async fn test_should_reject_non_utf8_body() {
        let base = endpoint_url().await;

        let resp = post_format(&base, "application/json", vec![0xff_u8, 0xfe, 0x00]).await;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let out: Value = resp.json().await.unwrap();
        assert!(out["detail"].is_string());
    }

    #[tokio::test]
    async fn test_should_reject_oversized_body() {
        let config = ReformatConfig {
            max_body_size: 64,
            ..ReformatConfig::default()
        };
        let base = spawn_server(&config).await.unwrap();
        let body = json!({ "json_string": "x".repeat(256) }).to_string();

        let resp = post_format(&base, "application/json", body).await;
        assert_eq!(resp.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
        let out: Value = resp.json().await.unwrap();
        assert_eq!(out["detail"], "Request body exceeds 64 bytes");
    }
}
