use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    // Arrange
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let success = client
        .get(&format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let rejection = app.post_contact(&serde_json::json!({})).await;

    // Assert
    // The header is attached on the way out, so error responses get one too
    assert_eq!(200, success.status().as_u16());
    assert_eq!(400, rejection.status().as_u16());
    for response in [success, rejection] {
        let request_id = response
            .headers()
            .get("x-request-id")
            .expect("The response is missing the x-request-id header");
        assert!(!request_id.to_str().unwrap().is_empty());
    }
}
