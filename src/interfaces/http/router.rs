//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{TrainingService, UserService};
use crate::domain::{
    ActivityType, CreateTrainingDto, RepositoryProvider, TrainingDto, UserDto, UserSimpleDto,
};

use super::common::ApiResponse;
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{health, metrics, trainings, users};

/// Everything the HTTP surface needs, wired once in `server.rs`.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub user_service: Arc<UserService>,
    pub training_service: Arc<TrainingService>,
    /// `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl ApiState {
    /// Build both services over one store.
    pub fn new(repos: Arc<dyn RepositoryProvider>, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repos.clone())),
            training_service: Arc::new(TrainingService::new(repos.clone())),
            repos,
            metrics,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        metrics::prometheus_metrics,
        // Users
        users::list_users,
        users::list_users_simple,
        users::get_user,
        users::find_by_email,
        users::find_older_than,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Trainings
        trainings::list_trainings,
        trainings::list_by_user,
        trainings::list_by_activity,
        trainings::list_finished_after,
        trainings::create_training,
        trainings::update_training,
        trainings::delete_training,
    ),
    components(
        schemas(
            ApiResponse<String>,
            UserDto,
            UserSimpleDto,
            TrainingDto,
            CreateTrainingDto,
            ActivityType,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and Prometheus metrics"),
        (name = "Users", description = "User management and user queries"),
        (name = "Trainings", description = "Training management and filtered listings"),
    ),
    info(
        title = "Fitness Tracker API",
        version = "0.1.0",
        description = "REST API for users and their trainings",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    let user_routes = Router::new()
        .route("/v1/users", get(users::list_users).post(users::create_user))
        .route("/v1/users/simple", get(users::list_users_simple))
        .route("/v1/users/email", get(users::find_by_email))
        .route("/v1/users/older/{date}", get(users::find_older_than))
        .route(
            "/v1/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(users::UserHandlerState {
            user_service: state.user_service.clone(),
        });

    // `{id}` is the owner on GET and the training itself on PUT/DELETE
    let training_routes = Router::new()
        .route(
            "/v1/trainings",
            get(trainings::list_trainings).post(trainings::create_training),
        )
        .route("/v1/trainings/activityType", get(trainings::list_by_activity))
        .route(
            "/v1/trainings/finished/{date}",
            get(trainings::list_finished_after),
        )
        .route(
            "/v1/trainings/{id}",
            get(trainings::list_by_user)
                .put(trainings::update_training)
                .delete(trainings::delete_training),
        )
        .with_state(trainings::TrainingHandlerState {
            training_service: state.training_service.clone(),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            repos: state.repos.clone(),
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(user_routes)
        .merge(training_routes);

    if let Some(handle) = state.metrics {
        router = router
            .merge(
                Router::new()
                    .route("/metrics", get(prometheus_metrics))
                    .with_state(MetricsState { handle }),
            )
            .layer(middleware::from_fn(http_metrics_middleware));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::Service;

    fn app() -> Router {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(ApiState::new(repos, Some(handle)))
    }

    async fn send(app: &mut Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn anna() -> Value {
        json!({
            "firstName": "Annaифор",
            "lastName": "Nowak",
            "birthdate": "1990-01-01",
            "email": "a@x.com"
        })
    }

    fn morning_run(user_id: i64) -> Value {
        json!({
            "userId": user_id,
            "startTime": "2024-01-01T08:00:00Z",
            "endTime": "2024-01-01T09:00:00Z",
            "activityType": "RUNNING",
            "distance": 10.0,
            "averageSpeed": 10.0
        })
    }

    #[tokio::test]
    async fn user_lifecycle() {
        let mut app = app();

        let (status, body) = send(&mut app, "POST", "/v1/users", Some(anna())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["firstName"], "Annaифор");

        let (status, body) = send(&mut app, "GET", "/v1/users/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "a@x.com");

        let mut replacement = anna();
        replacement["lastName"] = json!("Kowalska");
        let (status, body) = send(&mut app, "PUT", "/v1/users/1", Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["lastName"], "Kowalska");

        let (status, _) = send(&mut app, "DELETE", "/v1/users/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&mut app, "DELETE", "/v1/users/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn create_user_rejections() {
        let mut app = app();

        let mut with_id = anna();
        with_id["id"] = json!(5);
        let (status, _) = send(&mut app, "POST", "/v1/users", Some(with_id)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        send(&mut app, "POST", "/v1/users", Some(anna())).await;
        let (status, _) = send(&mut app, "POST", "/v1/users", Some(anna())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(&mut app, "GET", "/v1/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn user_queries() {
        let mut app = app();
        send(&mut app, "POST", "/v1/users", Some(anna())).await;

        let (_, body) = send(&mut app, "GET", "/v1/users/older/2000-01-01", None).await;
        assert_eq!(body["data"][0]["id"], 1);

        let (_, body) = send(&mut app, "GET", "/v1/users/older/1990-01-01", None).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (status, _) = send(&mut app, "GET", "/v1/users/older/01-01-1990", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&mut app, "GET", "/v1/users/email?email=a@x.com", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&mut app, "GET", "/v1/users/email?email=b@x.com", None).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (_, body) = send(&mut app, "GET", "/v1/users/simple", None).await;
        assert_eq!(body["data"][0]["lastName"], "Nowak");
        assert!(body["data"][0].get("email").is_none());

        let (status, _) = send(&mut app, "GET", "/v1/users/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn training_queries() {
        let mut app = app();
        send(&mut app, "POST", "/v1/users", Some(anna())).await;

        let (status, body) = send(&mut app, "POST", "/v1/trainings", Some(morning_run(1))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"]["id"], 1);
        assert_eq!(body["data"]["activityType"], "RUNNING");

        let (_, body) = send(&mut app, "GET", "/v1/trainings/1", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&mut app, "GET", "/v1/trainings/activityType?activityType=RUNNING", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&mut app, "GET", "/v1/trainings/activityType?activityType=CYCLING", None).await;
        assert!(body["data"].as_array().unwrap().is_empty());

        let (status, _) = send(&mut app, "GET", "/v1/trainings/activityType?activityType=ROWING", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&mut app, "GET", "/v1/trainings/finished/2024-01-01", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&mut app, "GET", "/v1/trainings/finished/2024-01-02", None).await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn training_lifecycle() {
        let mut app = app();
        send(&mut app, "POST", "/v1/users", Some(anna())).await;

        let (status, _) = send(&mut app, "POST", "/v1/trainings", Some(morning_run(9))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&mut app, "POST", "/v1/trainings", Some(morning_run(1))).await;

        let mut swim = morning_run(1);
        swim["activityType"] = json!("Swimming");
        swim["distance"] = json!(1.5);
        let (status, body) = send(&mut app, "PUT", "/v1/trainings/1", Some(swim.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["activityType"], "SWIMMING");
        assert_eq!(body["data"]["distance"], 1.5);

        let (status, _) = send(&mut app, "PUT", "/v1/trainings/7", Some(swim)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&mut app, "DELETE", "/v1/trainings/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&mut app, "DELETE", "/v1/trainings/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_user_error_statuses() {
        let mut app = app();
        send(&mut app, "POST", "/v1/users", Some(anna())).await;
        let mut other = anna();
        other["email"] = json!("b@x.com");
        send(&mut app, "POST", "/v1/users", Some(other.clone())).await;

        other["email"] = json!("a@x.com");
        let (status, body) = send(&mut app, "PUT", "/v1/users/2", Some(other.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        let (status, body) = send(&mut app, "PUT", "/v1/users/42", Some(anna())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (_, body) = send(&mut app, "GET", "/v1/users/2", None).await;
        assert_eq!(body["data"]["email"], "b@x.com");
    }

    #[tokio::test]
    async fn update_training_to_unknown_owner_is_404() {
        let mut app = app();
        send(&mut app, "POST", "/v1/users", Some(anna())).await;
        send(&mut app, "POST", "/v1/trainings", Some(morning_run(1))).await;

        let (status, body) = send(&mut app, "PUT", "/v1/trainings/1", Some(morning_run(8))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_parameters_use_the_envelope() {
        let mut app = app();

        for uri in [
            "/v1/users/abc",
            "/v1/trainings/abc",
            "/v1/users/email",
            "/v1/trainings/activityType",
            "/v1/users/older/01-01-1990",
            "/v1/trainings/finished/yesterday",
            "/v1/trainings/activityType?activityType=ROWING",
        ] {
            let (status, body) = send(&mut app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["success"], false, "{}", uri);
            assert!(body["error"].is_string(), "{}", uri);
        }

        let (_, body) = send(&mut app, "GET", "/v1/trainings/activityType?activityType=ROWING", None).await;
        assert!(body["error"].as_str().unwrap().contains("Running, Cycling"));
    }

    #[tokio::test]
    async fn health_and_metrics_are_served() {
        let mut app = app();

        let (status, body) = send(&mut app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn openapi_document_lists_resource_paths() {
        let mut app = app();

        let (status, body) = send(&mut app, "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/users"].is_object());
        assert!(body["paths"]["/v1/trainings/finished/{date}"].is_object());
    }
}
