//! End-to-end tests for the assembled site router

#[cfg(test)]
mod site_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use session::{AcceptAnyCredentials, SessionConfig, SessionManager};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::{PAGES, PagesConfig, TemplateComposer, site_router};

    fn repo_dir(name: &str) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../..")).join(name)
    }

    fn config() -> PagesConfig {
        PagesConfig {
            template_dir: repo_dir("templates"),
            static_dir: repo_dir("statics"),
        }
    }

    fn app_with(config: &PagesConfig, sessions: Arc<SessionManager>) -> Router {
        let composer = Arc::new(TemplateComposer::new(&config.template_dir).unwrap());
        site_router(composer, sessions, AcceptAnyCredentials, config)
    }

    fn app() -> Router {
        let sessions = Arc::new(SessionManager::new(&SessionConfig::with_random_keys()).unwrap());
        app_with(&config(), sessions)
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn login(body: &'static str) -> Request<Body> {
        Request::post("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    fn cookie_pair(response: &Response) -> String {
        response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_ungated_pages_render() {
        let app = app();

        for page in PAGES.iter().filter(|page| !page.auth_required) {
            let response = app.clone().oneshot(get(page.path, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", page.path);
            assert!(
                response.headers()[header::CONTENT_TYPE]
                    .to_str()
                    .unwrap()
                    .starts_with("text/html"),
                "{}",
                page.path
            );

            let html = body_text(response).await;
            assert!(
                html.contains(&format!("<title>{}</title>", page.title)),
                "{}",
                page.path
            );
        }
    }

    #[tokio::test]
    async fn test_layout_variants() {
        let app = app();

        let landing = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
        assert!(landing.contains(r#"action="/login""#));
        assert!(landing.contains(r#"name="email""#));
        assert!(landing.contains(r#"name="password""#));
        assert!(!landing.contains("side-menu"));

        let flot = body_text(app.oneshot(get("/flot", None)).await.unwrap()).await;
        assert!(flot.contains("side-menu"));
        assert!(flot.contains("flot-line-chart"));
        assert!(flot.contains("/js/flot-data.js"));
    }

    #[tokio::test]
    async fn test_main_requires_session() {
        let response = app().oneshot(get("/main", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_forged_cookie_is_anonymous() {
        let response = app()
            .oneshot(get("/main", Some("session=1700000000.e30.AAAA")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_login_main_logout_flow() {
        let app = app();

        let response = app
            .clone()
            .oneshot(login("email=alice&password=x"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/main");
        let session = cookie_pair(&response);

        let response = app
            .clone()
            .oneshot(get("/main", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<title>Home Page</title>"));
        assert!(html.contains("<strong>alice</strong>"));

        let first = app
            .clone()
            .oneshot(get("/logout", Some(&session)))
            .await
            .unwrap();
        let second = app.clone().oneshot(get("/logout", None)).await.unwrap();
        for response in [&first, &second] {
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(location(response), "/");
            assert!(
                response.headers()[header::SET_COOKIE]
                    .to_str()
                    .unwrap()
                    .contains("Max-Age=0")
            );
        }
        assert_eq!(
            first.headers()[header::SET_COOKIE],
            second.headers()[header::SET_COOKIE]
        );

        // A client honouring the clear sends no cookie
        let response = app.oneshot(get("/main", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_empty_email_does_not_sign_in() {
        let response = app().oneshot(login("email=&password=x")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_user_name_is_escaped() {
        let app = app();
        let response = app
            .clone()
            .oneshot(login("email=%3Cscript%3E&password=x"))
            .await
            .unwrap();
        let session = cookie_pair(&response);

        let html = body_text(app.oneshot(get("/main", Some(&session))).await.unwrap()).await;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<strong><script>"));
    }

    #[tokio::test]
    async fn test_static_mounts() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get("/dist/css/sb-admin-2.css", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("#page-wrapper"));

        for uri in ["/js/flot-data.js", "/less/sb-admin-2.less", "/bower_components/README.md"] {
            let response = app.clone().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        let response = app.oneshot(get("/dist/missing.css", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = app().oneshot(get("/nowhere", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("404"));
    }

    #[tokio::test]
    async fn test_broken_page_template_is_clean_500() {
        let source = repo_dir("templates");
        let dir = tempfile::tempdir().unwrap();
        for entry in std::fs::read_dir(&source).unwrap() {
            let entry = entry.unwrap();
            std::fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
        }
        std::fs::write(dir.path().join("flot.html"), "{% if %}").unwrap();
        std::fs::write(
            dir.path().join("tables.html"),
            "{% include 'missing.html' %}",
        )
        .unwrap();

        let config = PagesConfig {
            template_dir: dir.path().to_path_buf(),
            static_dir: repo_dir("statics"),
        };
        let sessions = Arc::new(SessionManager::new(&SessionConfig::with_random_keys()).unwrap());
        let app = app_with(&config, sessions);

        for uri in ["/flot", "/tables"] {
            let response = app.clone().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

            let html = body_text(response).await;
            assert!(html.contains("500"), "{uri}");
            assert!(!html.contains("side-menu"), "{uri}");
        }

        let response = app.oneshot(get("/forms", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
