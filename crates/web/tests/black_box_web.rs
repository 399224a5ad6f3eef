use reqwest::StatusCode;
use reqwest::header::LOCATION;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = itemservice_web::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn client() -> reqwest::Client {
    // Redirects are part of the observable behavior; never follow them.
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn post_item(
    client: &reqwest::Client,
    url: &str,
    name: &str,
    price: &str,
    quantity: &str,
) -> reqwest::Response {
    client
        .post(url)
        .form(&[("name", name), ("price", price), ("quantity", quantity)])
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_ok() {
    let srv = TestServer::spawn().await;
    let res = client()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_form_renders_blank() {
    let srv = TestServer::spawn().await;
    let res = client()
        .get(format!("{}/items/add", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Add item"));
    for field in ["name", "price", "quantity"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing input {field}");
    }
}

#[tokio::test]
async fn valid_submission_persists_and_redirects() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = post_item(&client, &format!("{}/items/add", srv.base_url), "Book", "10000", "1").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let location = res.headers()[LOCATION].to_str().unwrap().to_string();
    assert_eq!(location, "/items/1?status=true");

    let res = client
        .get(format!("{}{}", srv.base_url, location))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Book"));
    assert!(body.contains("Item saved."));

    // The success banner is transient: gone without the flag.
    let res = client
        .get(format!("{}/items/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert!(!res.text().await.unwrap().contains("Item saved."));
}

#[tokio::test]
async fn items_are_listed_after_creation() {
    let srv = TestServer::spawn().await;
    let client = client();

    post_item(&client, &format!("{}/items/add", srv.base_url), "First", "10000", "1").await;
    post_item(&client, &format!("{}/items/add", srv.base_url), "Second", "20000", "2").await;

    let body = client
        .get(format!("{}/items", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let first = body.find("First").expect("First not listed");
    let second = body.find("Second").expect("Second not listed");
    assert!(first < second, "items should be listed in id order");
}

#[tokio::test]
async fn invalid_submission_redisplays_with_findings() {
    let srv = TestServer::spawn().await;
    let res = post_item(&client(), &format!("{}/items/add", srv.base_url), "", "", "").await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.text().await.unwrap();
    assert!(body.contains("Item name is required."));
    assert!(body.contains("Price must be between 1000 and 1000000."));
    assert!(body.contains("A maximum of 9999 units is allowed."));
}

#[tokio::test]
async fn cross_field_total_renders_as_form_level_banner() {
    let srv = TestServer::spawn().await;
    let res = post_item(&client(), &format!("{}/items/add", srv.base_url), "Book", "100", "1").await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.text().await.unwrap();
    assert!(body.contains("Price must be between 1000 and 1000000."));
    assert!(body.contains("Price times quantity must be at least 10000 (currently 100)."));
    // Submitted values are preserved for re-display.
    assert!(body.contains("value=\"100\""));
    assert!(body.contains("value=\"Book\""));
}

#[tokio::test]
async fn binding_failure_short_circuits_validation() {
    let srv = TestServer::spawn().await;
    let res = post_item(&client(), &format!("{}/items/add", srv.base_url), "", "abc", "1").await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.text().await.unwrap();
    assert!(body.contains("Please enter a number."));
    // Raw text round-trips into the form.
    assert!(body.contains("value=\"abc\""));
    // Semantic validation did not run.
    assert!(!body.contains("Item name is required."));
}

#[tokio::test]
async fn quantity_boundary_is_rejected_at_9999() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = post_item(&client, &format!("{}/items/add", srv.base_url), "Book", "10000", "9999").await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.text().await.unwrap().contains("A maximum of 9999 units is allowed."));

    let res = post_item(&client, &format!("{}/items/add", srv.base_url), "Book", "10000", "9998").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn unknown_item_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = client();

    for path in ["/items/999", "/items/999/edit", "/items/not-an-id"] {
        let res = client
            .get(format!("{}{}", srv.base_url, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path = {path}");
    }
}

#[tokio::test]
async fn edit_flow_validates_and_overwrites() {
    let srv = TestServer::spawn().await;
    let client = client();

    post_item(&client, &format!("{}/items/add", srv.base_url), "Book", "10000", "1").await;

    // The edit form comes pre-populated from the persisted item.
    let body = client
        .get(format!("{}/items/1/edit", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("value=\"Book\""));
    assert!(body.contains("value=\"10000\""));

    // An invalid edit re-renders instead of overwriting.
    let res = post_item(&client, &format!("{}/items/1/edit", srv.base_url), "", "10000", "1").await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // A valid edit overwrites by id and redirects to the detail view.
    let res = post_item(&client, &format!("{}/items/1/edit", srv.base_url), "Novel", "20000", "2").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[LOCATION].to_str().unwrap(),
        "/items/1?status=true"
    );

    let body = client
        .get(format!("{}/items/1", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Novel"));
    assert!(!body.contains("Book"));
}

#[tokio::test]
async fn edit_of_unknown_item_is_not_found() {
    let srv = TestServer::spawn().await;
    let res = post_item(&client(), &format!("{}/items/42/edit", srv.base_url), "Book", "10000", "1").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
