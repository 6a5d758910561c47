mod common;

use actix_web::{App, http::StatusCode, test, web};
use common::{RecordingStore, achievement};
use hope_portal::{routes, state::AppState};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(
                    $store.clone(),
                    Duration::from_secs(2),
                )))
                .configure(routes::api::scoped_config),
        )
        .await
    };
}

fn donation_payload() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "amount": "40",
        "donationType": "monthly",
        "message": "",
        "anonymous": false,
        "agreeTerms": true
    })
}

fn volunteer_payload() -> Value {
    json!({
        "name": "Sam Teacher",
        "email": "sam@example.org",
        "phone": "+1 234 567 8901",
        "address": "5 School Lane, Springfield",
        "experience": "Eight years teaching primary school.",
        "availability": "weekday_evenings",
        "motivation": "I want to give back to my community.",
        "agreeTerms": true
    })
}

#[actix_web::test]
async fn donation_is_recorded_and_confirmed() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/donations")
        .set_json(donation_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for your donation!");
    assert_eq!(body["data"]["record"]["donation_type"], "monthly");
    assert_eq!(body["data"]["record"]["message"], Value::Null);

    let donations = store.donations.lock().unwrap();
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].email, "jo@x.com");
}

#[actix_web::test]
async fn zero_amount_is_rejected_with_amount_error_only() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/donations")
        .set_json(json!({
            "name": "Jo",
            "email": "jo@x.com",
            "amount": "0",
            "donationType": "one-time",
            "agreeTerms": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!({ "amount": "Please enter a valid donation amount." })
    );
    assert!(store.donations.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn sub_cent_amount_never_reaches_the_store() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let mut payload = donation_payload();
    payload["amount"] = json!("0.001");
    let req = test::TestRequest::post()
        .uri("/api/donations")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.donations.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn wrongly_typed_fields_get_the_json_envelope() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    for (field, value) in [("agreeTerms", json!("yes")), ("name", Value::Null)] {
        let mut payload = donation_payload();
        payload[field] = value;
        let req = test::TestRequest::post()
            .uri("/api/donations")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{field}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body"),
            "{field}"
        );
    }
    assert!(store.donations.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn terms_gate_blocks_volunteer_application() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let mut payload = volunteer_payload();
    payload["agreeTerms"] = json!(false);

    let req = test::TestRequest::post()
        .uri("/api/volunteers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["agreeTerms"],
        "You must agree to the terms and conditions."
    );
    assert!(store.volunteers.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn volunteer_application_is_stored_as_pending() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/volunteers")
        .set_json(volunteer_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["record"]["status"], "pending");
    assert_eq!(body["data"]["confirmation"]["title"], "Application Submitted");
}

#[actix_web::test]
async fn store_failure_returns_notice() {
    let store = Arc::new(RecordingStore::offline());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/donations")
        .set_json(donation_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Something went wrong");
    assert_eq!(
        body["error"],
        "Your donation couldn't be processed. Please try again later."
    );
}

#[actix_web::test]
async fn empty_store_serves_sample_achievements() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/achievements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["source"], "sample");
    assert_eq!(body["data"]["default_year"], 2023);
    let years: Vec<i64> = body["data"]["years"]
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2023, 2022, 2021]);
}

#[actix_web::test]
async fn offline_store_also_serves_sample_achievements() {
    let store = Arc::new(RecordingStore::offline());
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/achievements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["source"], "sample");
}

#[actix_web::test]
async fn stored_achievements_are_grouped_by_year() {
    let store = Arc::new(RecordingStore::with_achievements(vec![
        achievement("Science Fair", "2020-03-14"),
        achievement("Marathon", "2024-10-01"),
        achievement("Library Opening", "2024-02-20"),
    ]));
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/achievements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["source"], "store");
    let years = body["data"]["years"].as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], 2024);
    assert_eq!(years[0]["achievements"][0]["title"], "Marathon");
    assert_eq!(years[0]["achievements"][0]["display_date"], "October 1, 2024");
    assert_eq!(
        years[0]["achievements"][0]["image"],
        "/placeholder.svg?height=300&width=500"
    );
    assert_eq!(years[0]["achievements"][1]["title"], "Library Opening");
    assert_eq!(years[1]["year"], 2020);
}

#[actix_web::test]
async fn achievement_insert_validates_date() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/achievements")
        .set_json(json!({ "title": "Gala", "description": "Raised funds", "date": "soon" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/api/achievements")
        .set_json(json!({ "title": "Gala", "description": "Raised funds", "date": "2024-06-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(store.achievements.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn pages_are_served_by_slug() {
    let store = Arc::new(RecordingStore::default());
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/pages/volunteer").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "Volunteer - Hope Foundation");

    let req = test::TestRequest::get().uri("/api/pages/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
