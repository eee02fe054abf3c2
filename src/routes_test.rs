use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_render_inside_app_frame() {
    let routes = generate_route_list(client::app::App);
    let paths: Vec<&str> = routes.iter().map(|r| r.path()).collect();
    assert!(paths.contains(&"/mylist"), "{paths:?}");
    assert!(paths.iter().any(|p| p.contains("*any")), "{paths:?}");
}
