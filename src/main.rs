// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use homeport::config::settings::Settings;
use homeport::domain::repositories::storage_repository::StorageRepository;
use homeport::domain::services::ingestion_service::IngestionService;
use homeport::domain::services::send_service::SendService;
use homeport::infrastructure::database::connection;
use homeport::infrastructure::email::EmailClient;
use homeport::infrastructure::repositories::candidate_home_repo_impl::CandidateHomeRepositoryImpl;
use homeport::infrastructure::repositories::material_repo_impl::MaterialRepositoryImpl;
use homeport::infrastructure::repositories::message_repo_impl::MessageRepositoryImpl;
use homeport::infrastructure::repositories::profile_repo_impl::ProfileRepositoryImpl;
use homeport::infrastructure::repositories::saved_home_repo_impl::SavedHomeRepositoryImpl;
use homeport::infrastructure::repositories::search_criterion_repo_impl::SearchCriterionRepositoryImpl;
use homeport::infrastructure::repositories::session_token_repo_impl::SessionTokenRepositoryImpl;
use homeport::infrastructure::storage::create_storage_repository;
use homeport::presentation::routes::{self, AppDeps};
use homeport::scraper::fetch::PageFetcher;
use homeport::scraper::listing_api::ListingSearchClient;
use homeport::scraper::preview::ListingPreviewer;
use homeport::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting homeport...");

    // Initialize Prometheus Metrics
    homeport::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Repositories
    let profile_repo = Arc::new(ProfileRepositoryImpl::new(db.clone()));
    let token_repo = Arc::new(SessionTokenRepositoryImpl::new(db.clone()));
    let material_repo = Arc::new(MaterialRepositoryImpl::new(db.clone()));
    let message_repo = Arc::new(MessageRepositoryImpl::new(db.clone()));
    let saved_repo = Arc::new(SavedHomeRepositoryImpl::new(db.clone()));
    let candidate_repo = Arc::new(CandidateHomeRepositoryImpl::new(db.clone()));
    let criteria_repo = Arc::new(SearchCriterionRepositoryImpl::new(db.clone()));

    // 5. Initialize Storage
    let storage: Arc<dyn StorageRepository + Send + Sync> =
        Arc::from(create_storage_repository(&settings.storage)?);

    // 6. Initialize outbound collaborators
    let email_client = Arc::new(EmailClient::new(&settings.email));
    if !email_client.is_configured() {
        info!("Email provider not configured; emails will be logged only");
    }

    let fetcher = Arc::new(PageFetcher::new());
    let previewer = Arc::new(ListingPreviewer::new(
        fetcher.clone(),
        Duration::from_secs(settings.scraper.preview_timeout_secs),
    ));
    let search_client = Arc::new(ListingSearchClient::new(
        settings.scraper.search_api_url.clone(),
        settings.scraper.listing_base_url.clone(),
        Duration::from_secs(settings.scraper.ingest_timeout_secs),
    ));

    // 7. Initialize domain services
    let ingestion = Arc::new(IngestionService::new(
        criteria_repo.clone(),
        candidate_repo.clone(),
        search_client,
    ));
    let send_service = Arc::new(SendService::new(
        candidate_repo.clone(),
        saved_repo.clone(),
        profile_repo.clone(),
        email_client.clone(),
    ));

    // 8. Start HTTP server
    let app = routes::build_router(AppDeps {
        db,
        settings: settings.clone(),
        profile_repo,
        token_repo,
        material_repo,
        message_repo,
        saved_repo,
        candidate_repo,
        criteria_repo,
        storage,
        email_client,
        previewer,
        ingestion,
        send_service,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
