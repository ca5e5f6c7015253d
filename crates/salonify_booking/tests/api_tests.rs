use axum::http::{Method, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use tower::ServiceExt;

use fixtures::{appointment_body, body_json, create_test_app, get, post_json};

#[tokio::test]
async fn test_services_endpoint() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/services")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 5);
    assert_eq!(services[4]["id"], "masaj");
    assert_eq!(services[4]["duration"], 60);
}

#[tokio::test]
async fn test_staff_endpoint_filters_by_service() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/staff?serviceId=cilt-bakimi"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body, json!([{
        "id": "staff-1",
        "name": "Ayşe Yılmaz",
        "position": "Cilt Bakım Uzmanı",
        "avatar": "https://randomuser.me/api/portraits/women/1.jpg",
        "specialties": ["cilt-bakimi", "makyaj"]
    }]));

    let response = app.clone().oneshot(get("/api/staff")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));

    let response = app.oneshot(get("/api/admin/staff")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_empty_day_has_eleven_free_slots() {
    let app = create_test_app();
    let response = app
        .oneshot(get("/api/appointments/available?date=2025-03-15&serviceId=masaj"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 11);
    assert_eq!(slots[0], json!({"time": "09:00", "available": true}));
    assert_eq!(slots[10], json!({"time": "19:00", "available": true}));
    assert!(slots.iter().all(|s| s["available"] == true));
}

#[tokio::test]
async fn test_booking_marks_slot_unavailable() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/appointments",
            appointment_body("masaj", "2025-03-15T14:00:00Z", None),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["status"], "pending");
    assert_eq!(body["appointment"]["serviceType"], "masaj");

    let response = app
        .oneshot(get("/api/appointments/available?date=2025-03-15&serviceId=masaj"))
        .await
        .unwrap();
    let body = body_json(response).await;
    for slot in body.as_array().unwrap() {
        let expected_available = slot["time"] != "14:00";
        assert_eq!(slot["available"], expected_available, "slot {}", slot["time"]);
    }
}

#[tokio::test]
async fn test_staff_scoped_availability() {
    let app = create_test_app();
    app.clone()
        .oneshot(post_json(
            "/api/appointments",
            appointment_body("masaj", "2025-03-15T10:00:00Z", Some("staff-2")),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get(
            "/api/appointments/available?date=2025-03-15&serviceId=masaj&staffId=staff-1",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().iter().all(|s| s["available"] == true));

    let response = app
        .oneshot(get(
            "/api/appointments/available?date=2025-03-15&serviceId=masaj&staffId=staff-2",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body[1], json!({"time": "10:00", "available": false}));
}

#[tokio::test]
async fn test_available_slots_without_date_is_400() {
    let app = create_test_app();
    let response = app
        .oneshot(get("/api/appointments/available?serviceId=masaj"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_malformed_date_is_400() {
    let app = create_test_app();
    let response = app
        .clone()
        .oneshot(get("/api/appointments/available?date=15-03-2025&serviceId=masaj"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/api/appointments",
            appointment_body("masaj", "someday", None),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_appointment_missing_fields_is_400() {
    let app = create_test_app();
    let response = app
        .oneshot(post_json(
            "/api/appointments",
            json!({"name": "Ayşe", "service": "masaj", "appointmentDate": "2025-03-15T14:00:00Z"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing required fields");
}

#[tokio::test]
async fn test_non_json_body_is_400() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

#[tokio::test]
async fn test_admin_listing_and_staff_filter() {
    let app = create_test_app();
    for (date, staff) in [
        ("2025-03-15T15:00:00Z", Some("staff-2")),
        ("2025-03-15T09:00:00Z", Some("staff-1")),
        ("2025-03-16T09:00:00Z", None),
    ] {
        app.clone()
            .oneshot(post_json(
                "/api/appointments",
                appointment_body("masaj", date, staff),
            ))
            .await
            .unwrap();
    }

    for uri in [
        "/api/admin/appointments?date=2025-03-15",
        "/api/admin/appointments?date=2025-03-15&staffId=all",
        "/api/appointments?date=2025-03-15",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 2, "{}", uri);
        assert_eq!(list[0]["appointmentDate"], "2025-03-15T09:00:00.000Z");
        assert_eq!(list[0]["customerName"], "Ayşe Kaya");
        assert_eq!(list[0]["serviceName"], "Masaj");
        assert_eq!(list[0]["staffName"], "Ayşe Yılmaz");
    }

    let response = app
        .clone()
        .oneshot(get("/api/admin/appointments?date=2025-03-15&staffId=staff-2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["staffId"], "staff-2");

    let response = app
        .oneshot(get("/api/admin/appointments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeat_customer_is_one_user() {
    let app = create_test_app();
    let mut user_ids = Vec::new();
    for (phone, date) in [
        ("05550000001", "2025-03-15T10:00:00Z"),
        ("05550000002", "2025-03-15T11:00:00Z"),
    ] {
        let mut body = appointment_body("makyaj", date, None);
        body["phone"] = json!(phone);
        let response = app
            .clone()
            .oneshot(post_json("/api/appointments", body))
            .await
            .unwrap();
        user_ids.push(body_json(response).await["appointment"]["userId"].clone());
    }
    assert_eq!(user_ids[0], user_ids[1]);

    let response = app
        .oneshot(get("/api/admin/appointments?date=2025-03-15"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|a| a["customerPhone"] == "05550000002"));
}

#[tokio::test]
async fn test_contact_newsletter_and_chat() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "Ayşe",
                "email": "ayse@example.com",
                "phone": "05551112233",
                "message": "Epilasyon fiyatlarını öğrenebilir miyim?"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "ayse@example.com");

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/contact",
            json!({"name": "Ayşe", "email": "ayse@example.com", "phone": "123", "message": "Merhaba!"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid contact form data");

    let first = app
        .clone()
        .oneshot(post_json("/api/newsletter", json!({"email": "news@example.com"})))
        .await
        .unwrap();
    assert_eq!(
        body_json(first).await,
        json!({"success": true, "email": "news@example.com"})
    );
    let again = app
        .clone()
        .oneshot(post_json("/api/newsletter", json!({"email": "news@example.com"})))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json("/api/chat", json!({"message": "Merhaba"})))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await["response"],
        "Merhaba! Size nasıl yardımcı olabilirim?"
    );

    let response = app
        .oneshot(post_json("/api/chat", json!({"message": 42})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_method_is_405_json() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/appointments")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["code"], 405);

    let response = app.oneshot(get("/api/chat")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
