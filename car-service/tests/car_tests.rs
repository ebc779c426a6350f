mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

fn ferrari(make_id: i32) -> Value {
    json!({
        "name": "Fernando",
        "make_id": make_id,
        "model": "LaFerrari",
        "cool_factor": 10,
        "img": "https://example.com/laferrari.jpg",
        "owns": false
    })
}

async fn create_car(app: &TestApp, token: &str, body: &Value) -> Value {
    let response = app
        .post_authenticated("/api/cars", token)
        .json(body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_create_car_success() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;

    let body = create_car(&app, &token, &ferrari(make_id)).await;

    let claims = app.jwt_handler.verify(&token).unwrap();
    assert!(body["id"].is_number());
    assert_eq!(body["name"], "Fernando");
    assert_eq!(body["make_id"], make_id);
    assert_eq!(body["model"], "LaFerrari");
    assert_eq!(body["cool_factor"], 10);
    assert_eq!(body["owns"], false);
    assert_eq!(body["owner_id"], claims.sub);
}

#[tokio::test]
async fn test_create_car_ignores_client_owner_id() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;

    let mut request = ferrari(make_id);
    request["owner_id"] = json!(uuid::Uuid::new_v4().to_string());

    let body = create_car(&app, &token, &request).await;

    let claims = app.jwt_handler.verify(&token).unwrap();
    assert_eq!(body["owner_id"], claims.sub);
}

#[tokio::test]
async fn test_create_car_unknown_make() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;

    let response = app
        .post_authenticated("/api/cars", &token)
        .json(&ferrari(999))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_car_cool_factor_out_of_range() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;

    for cool_factor in [-1, 11, 1000] {
        let mut request = ferrari(make_id);
        request["cool_factor"] = json!(cool_factor);

        let response = app
            .post_authenticated("/api/cars", &token)
            .json(&request)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_create_car_blank_name() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;

    let mut request = ferrari(make_id);
    request["name"] = json!("   ");

    let response = app
        .post_authenticated("/api/cars", &token)
        .json(&request)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_list_cars_includes_make_name() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let ferrari_id = app.add_make("Ferrari").await;
    let toyota_id = app.add_make("Toyota").await;

    create_car(&app, &token, &ferrari(ferrari_id)).await;
    create_car(
        &app,
        &token,
        &json!({
            "name": "Lewis",
            "make_id": toyota_id,
            "model": "Prius",
            "cool_factor": 0,
            "owns": true
        }),
    )
    .await;

    let response = app
        .get_authenticated("/api/cars", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let cars = body.as_array().expect("Expected array");
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0]["make"], "Ferrari");
    assert_eq!(cars[1]["make"], "Toyota");
    assert_eq!(cars[1]["img"], "");
    assert!(cars[0].get("owner_id").is_none());
}

#[tokio::test]
async fn test_cars_are_scoped_to_owner() {
    let app = TestApp::spawn().await;
    let jon = app.sign_up("jon@user.com", "1234").await;
    let ana = app.sign_up("ana@user.com", "5678").await;
    let make_id = app.add_make("Ferrari").await;

    let car = create_car(&app, &jon, &ferrari(make_id)).await;
    let path = format!("/api/cars/{}", car["id"]);

    let listed: Value = app
        .get_authenticated("/api/cars", &ana)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listed, json!([]));

    let get = app
        .get_authenticated(&path, &ana)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let update = app
        .put_authenticated(&path, &ana)
        .json(&ferrari(make_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = app
        .delete_authenticated(&path, &ana)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    // Still there for its owner
    let get = app
        .get_authenticated(&path, &jon)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_car() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;
    let car = create_car(&app, &token, &ferrari(make_id)).await;

    let response = app
        .get_authenticated(&format!("/api/cars/{}", car["id"]), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], car["id"]);
    assert_eq!(body["make"], "Ferrari");
    assert_eq!(body["model"], "LaFerrari");
}

#[tokio::test]
async fn test_get_car_invalid_id() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;

    let response = app
        .get_authenticated("/api/cars/not-a-number", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_car() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let ferrari_id = app.add_make("Ferrari").await;
    let bmw_id = app.add_make("BMW").await;
    let car = create_car(&app, &token, &ferrari(ferrari_id)).await;
    let path = format!("/api/cars/{}", car["id"]);

    let response = app
        .put_authenticated(&path, &token)
        .json(&json!({
            "name": "Levis",
            "make_id": bmw_id,
            "model": "Z3",
            "cool_factor": 7,
            "owns": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], car["id"]);
    assert_eq!(body["model"], "Z3");
    assert_eq!(body["make_id"], bmw_id);

    let fetched: Value = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched["make"], "BMW");
    assert_eq!(fetched["cool_factor"], 7);
    assert_eq!(fetched["owns"], true);
}

#[tokio::test]
async fn test_delete_car() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    let make_id = app.add_make("Ferrari").await;
    let car = create_car(&app, &token, &ferrari(make_id)).await;
    let path = format!("/api/cars/{}", car["id"]);

    let response = app
        .delete_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get_authenticated(&path, &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_makes_list_and_create() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;

    let response = app
        .post_authenticated("/api/makes", &token)
        .json(&json!({ "name": "Ferrari" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["name"], "Ferrari");

    let listed: Value = app
        .get_authenticated("/api/makes", &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listed, json!([{ "id": created["id"], "name": "Ferrari" }]));
}

#[tokio::test]
async fn test_create_make_duplicate_and_blank() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("jon@user.com", "1234").await;
    app.add_make("Ferrari").await;

    let duplicate = app
        .post_authenticated("/api/makes", &token)
        .json(&json!({ "name": "Ferrari" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let blank = app
        .post_authenticated("/api/makes", &token)
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(blank.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_makes_require_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/makes")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
