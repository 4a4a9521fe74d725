// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::ingestion_service::IngestionService;
use crate::domain::services::send_service::SendService;
use crate::infrastructure::email::EmailClient;
use crate::infrastructure::repositories::candidate_home_repo_impl::CandidateHomeRepositoryImpl;
use crate::infrastructure::repositories::material_repo_impl::MaterialRepositoryImpl;
use crate::infrastructure::repositories::message_repo_impl::MessageRepositoryImpl;
use crate::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use crate::infrastructure::repositories::saved_home_repo_impl::SavedHomeRepositoryImpl;
use crate::infrastructure::repositories::search_criterion_repo_impl::SearchCriterionRepositoryImpl;
use crate::infrastructure::repositories::session_token_repo_impl::SessionTokenRepositoryImpl;
use crate::presentation::handlers::{
    candidate_home_handler, client_handler, contact_handler, cron_handler, material_handler,
    message_handler, preview_handler, saved_home_handler, search_criterion_handler,
};
use crate::presentation::middleware::auth_middleware::{
    auth_middleware, require_admin, AuthState,
};
use crate::scraper::preview::ListingPreviewer;
use axum::{
    middleware,
    routing::{delete, get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由装配所需的全部依赖
///
/// 所有协作对象都在启动时显式构造，经由请求扩展注入处理器，
/// 不依赖任何全局单例。
pub struct AppDeps {
    pub db: Arc<DatabaseConnection>,
    pub settings: Arc<Settings>,
    pub profile_repo: Arc<ProfileRepositoryImpl>,
    pub token_repo: Arc<SessionTokenRepositoryImpl>,
    pub material_repo: Arc<MaterialRepositoryImpl>,
    pub message_repo: Arc<MessageRepositoryImpl>,
    pub saved_repo: Arc<SavedHomeRepositoryImpl>,
    pub candidate_repo: Arc<CandidateHomeRepositoryImpl>,
    pub criteria_repo: Arc<SearchCriterionRepositoryImpl>,
    pub storage: Arc<dyn StorageRepository + Send + Sync>,
    pub email_client: Arc<EmailClient>,
    pub previewer: Arc<ListingPreviewer>,
    pub ingestion:
        Arc<IngestionService<SearchCriterionRepositoryImpl, CandidateHomeRepositoryImpl>>,
    pub send_service: Arc<
        SendService<CandidateHomeRepositoryImpl, SavedHomeRepositoryImpl, ProfileRepositoryImpl>,
    >,
}

/// 创建应用路由
///
/// # 参数
///
/// * `deps` - 路由依赖
///
/// # 返回值
///
/// 返回配置好的路由
pub fn build_router(deps: AppDeps) -> Router {
    let auth_state = AuthState {
        db: deps.db.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/api/contact", post(contact_handler::contact))
        .route("/api/newsletter", post(contact_handler::newsletter))
        .route(
            "/api/cron/candidate-homes",
            post(cron_handler::run_candidate_ingestion),
        );

    let admin_routes = Router::new()
        .route(
            "/api/admin/clients",
            get(client_handler::list_clients).post(client_handler::create_client),
        )
        .route(
            "/api/admin/clients/:id",
            get(client_handler::get_client)
                .patch(client_handler::update_client)
                .delete(client_handler::delete_client),
        )
        .route(
            "/api/admin/clients/:id/materials",
            post(material_handler::upload_material),
        )
        .route(
            "/api/admin/clients/:id/messages",
            get(message_handler::admin_get_messages).post(message_handler::admin_post_message),
        )
        .route(
            "/api/admin/materials/:id",
            delete(material_handler::delete_material),
        )
        .route(
            "/api/admin/candidate-homes",
            get(candidate_home_handler::list_candidates)
                .post(candidate_home_handler::create_candidate)
                .patch(candidate_home_handler::update_status),
        )
        .route(
            "/api/admin/candidate-homes/send",
            post(candidate_home_handler::send_candidates),
        )
        .route(
            "/api/admin/candidate-homes/:id",
            axum::routing::patch(candidate_home_handler::update_notes)
                .delete(candidate_home_handler::delete_candidate),
        )
        .route(
            "/api/admin/search-criteria",
            get(search_criterion_handler::list_criteria)
                .post(search_criterion_handler::create_criterion),
        )
        .route(
            "/api/admin/search-criteria/:id",
            axum::routing::patch(search_criterion_handler::update_criterion)
                .delete(search_criterion_handler::delete_criterion),
        )
        .route("/api/admin/preview", post(preview_handler::preview))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    let portal_routes = Router::new()
        .route(
            "/api/portal/materials",
            get(material_handler::list_my_materials),
        )
        .route(
            "/api/portal/materials/:id/download",
            get(material_handler::download_material),
        )
        .route(
            "/api/portal/messages",
            get(message_handler::portal_get_messages).post(message_handler::portal_post_message),
        )
        .route(
            "/api/portal/saved-homes",
            get(saved_home_handler::list_saved_homes).post(saved_home_handler::create_saved_home),
        )
        .route(
            "/api/portal/saved-homes/:id",
            delete(saved_home_handler::delete_saved_home),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(portal_routes)
        .layer(Extension(deps.settings))
        .layer(Extension(deps.profile_repo))
        .layer(Extension(deps.token_repo))
        .layer(Extension(deps.material_repo))
        .layer(Extension(deps.message_repo))
        .layer(Extension(deps.saved_repo))
        .layer(Extension(deps.candidate_repo))
        .layer(Extension(deps.criteria_repo))
        .layer(Extension(deps.storage))
        .layer(Extension(deps.email_client))
        .layer(Extension(deps.previewer))
        .layer(Extension(deps.ingestion))
        .layer(Extension(deps.send_service))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
