//! API integration tests
//!
//! These run against a live server on localhost:8080 with a seeded database
//! (run the rehla-seed binary first with REHLA_ADMIN_PASSWORD=admin).

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["staff"]["username"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "admin");
    assert!(body["password_hash"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_list_attractions_requires_auth() {
    let client = Client::new();

    let response = client
        .get(format!("{}/attractions", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_attractions() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/attractions?emirate=dubai", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
    assert!(body["total"].is_number());
    for item in body["items"].as_array().unwrap() {
        assert_eq!(item["emirate"], "dubai");
    }
}

#[tokio::test]
#[ignore]
async fn test_attraction_crud() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Create
    let response = client
        .post(format!("{}/attractions", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Test Attraction CRUD",
            "emirate": "sharjah",
            "category": "Test",
            "price": "80.00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No attraction ID");

    // Partial update
    let response = client
        .put(format!("{}/attractions/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "price": "95.00" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Test Attraction CRUD");
    assert_eq!(body["price"], "95.00");

    // Soft delete
    let response = client
        .delete(format!("{}/attractions/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // Deleted rows are invisible
    let response = client
        .get(format!("{}/attractions/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_attraction_rejects_bad_rating() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/attractions", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Bad Rating",
            "emirate": "dubai",
            "price": "10.00",
            "rating": 9.5
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_hotel_price_range_validation() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/hotels", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Inverted Range Hotel",
            "stars": 4,
            "location": "dubai",
            "price_min": "500.00",
            "price_max": "300.00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_submission_intake_is_public() {
    let client = Client::new();

    // No Authorization header
    let response = client
        .post(format!("{}/submissions", BASE_URL))
        .json(&json!({
            "customer_name": "Public Intake",
            "email": "public.intake@example.com",
            "duration_days": 4,
            "emirates": ["dubai", "abu-dhabi"],
            "adults": 2,
            "children": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_travelers"], 3);
}

#[tokio::test]
#[ignore]
async fn test_submission_rejects_unknown_emirate() {
    let client = Client::new();

    let response = client
        .post(format!("{}/submissions", BASE_URL))
        .json(&json!({
            "customer_name": "Bad Emirate",
            "email": "bad.emirate@example.com",
            "duration_days": 3,
            "emirates": ["atlantis"],
            "adults": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_cancelled_submission_is_frozen() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/submissions", BASE_URL))
        .json(&json!({
            "customer_name": "Frozen Record",
            "email": "frozen.record@example.com",
            "duration_days": 2,
            "adults": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let submission: Value = response.json().await.expect("Failed to parse response");
    let submission_id = submission["id"].as_i64().expect("No submission ID");

    let response = client
        .put(format!("{}/submissions/{}/status", BASE_URL, submission_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Neither field edits nor further status changes are allowed
    let response = client
        .put(format!("{}/submissions/{}", BASE_URL, submission_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "adults": 3 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let response = client
        .put(format!("{}/submissions/{}/status", BASE_URL, submission_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "pending" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_submission_to_booking_flow() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Customer files a submission
    let response = client
        .post(format!("{}/submissions", BASE_URL))
        .json(&json!({
            "customer_name": "Flow Customer",
            "email": "flow.customer@example.com",
            "phone": "+971501112233",
            "duration_days": 3,
            "emirates": ["dubai"],
            "adults": 2
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let submission: Value = response.json().await.expect("Failed to parse response");
    let submission_id = submission["id"].as_i64().expect("No submission ID");

    // Staff creates a booking from it
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "from_submission_id": submission_id,
            "itinerary": [
                { "day": 1, "title": "Arrival and Dubai Marina" },
                { "day": 2, "title": "Desert safari" },
                { "day": 3, "title": "Burj Khalifa and departure" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    // Customer fields were carried over from the submission
    assert_eq!(booking["customer_name"], "Flow Customer");
    assert_eq!(booking["email"], "flow.customer@example.com");
    assert_eq!(booking["submission_id"], submission_id);
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["total_travelers"], 2);

    // Confirm the booking
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "confirmed" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "confirmed");
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_invalid_itinerary_day() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "customer_name": "Itinerary Overflow",
            "email": "itinerary.overflow@example.com",
            "duration_days": 2,
            "adults": 1,
            "itinerary": [
                { "day": 1, "title": "Day one" },
                { "day": 5, "title": "Out of range" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_skipped_status_transition() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "customer_name": "Transition Test",
            "email": "transition.test@example.com",
            "duration_days": 2,
            "adults": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");

    // pending -> completed skips confirmation and must be rejected
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_download_counter_increments() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "customer_name": "Download Counter",
            "email": "download.counter@example.com",
            "duration_days": 1,
            "adults": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse response");
    let booking_id = booking["id"].as_i64().expect("No booking ID");
    assert_eq!(booking["download_count"], 0);

    let mut last = 0;
    for _ in 0..3 {
        let response = client
            .post(format!("{}/bookings/{}/download", BASE_URL, booking_id))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        let count = body["download_count"].as_i64().unwrap();
        assert!(count > last);
        last = count;
    }
}

#[tokio::test]
#[ignore]
async fn test_customers_aggregation() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/customers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
    for customer in body["items"].as_array().unwrap() {
        assert!(customer["email"].is_string());
        assert!(customer["submission_count"].is_number());
        assert!(customer["booking_count"].is_number());
    }
}

#[tokio::test]
#[ignore]
async fn test_stats() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["catalog"]["attractions"].is_number());
    assert!(body["submissions"]["total"].is_number());
    assert!(body["bookings"]["total_downloads"].is_number());
    assert!(body["bookings_by_month"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_settings_round_trip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .put(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "whatsapp_number": "+971500000000" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["whatsapp_number"], "+971500000000");
    assert!(body["agency_name"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_staff_management() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Create an agent account
    let response = client
        .post(format!("{}/staff", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "username": "test-agent",
            "password": "agent-password-1",
            "display_name": "Test Agent",
            "role": "agent"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let staff: Value = response.json().await.expect("Failed to parse response");
    let staff_id = staff["id"].as_i64().expect("No staff ID");
    assert!(staff["password_hash"].is_null());

    // Agents cannot manage staff
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "test-agent",
            "password": "agent-password-1"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let agent_token = body["token"].as_str().unwrap().to_string();

    let response = client
        .get(format!("{}/staff", BASE_URL))
        .header("Authorization", format!("Bearer {}", agent_token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);

    // Clean up
    let response = client
        .delete(format!("{}/staff/{}", BASE_URL, staff_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}
