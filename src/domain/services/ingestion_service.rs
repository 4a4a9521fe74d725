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

use crate::domain::models::candidate_home::{CandidateHome, CandidateSource};
use crate::domain::models::search_criterion::SearchCriterion;
use crate::domain::repositories::candidate_home_repository::CandidateHomeRepository;
use crate::domain::repositories::profile_repository::RepositoryError;
use crate::domain::repositories::search_criterion_repository::SearchCriterionRepository;
use crate::scraper::listing_api::ListingSearchClient;
use metrics::counter;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// 单个搜索条件的摄取结果
#[derive(Debug, Clone, Serialize)]
pub struct CriterionResult {
    /// 搜索条件ID
    pub criterion_id: Uuid,
    /// 搜索区域ID
    pub region_id: String,
    /// 本条件是否成功
    pub success: bool,
    /// API返回的房源数
    pub found: usize,
    /// 实际新插入的行数（URL重复的被忽略）
    pub inserted: usize,
    /// 失败时的错误信息
    pub message: Option<String>,
}

/// 候选房源摄取服务
///
/// 定时任务的执行主体：顺序遍历所有启用的搜索条件，逐个
/// 调用搜索API并把结果按URL去重落库。单个条件的失败只记录
/// 在该条件的结果里，不会中断其余条件；没有重试。
pub struct IngestionService<C, H>
where
    C: SearchCriterionRepository,
    H: CandidateHomeRepository,
{
    /// 搜索条件仓库
    criteria_repo: Arc<C>,
    /// 候选房源仓库
    candidate_repo: Arc<H>,
    /// 搜索API客户端
    search_client: Arc<ListingSearchClient>,
}

impl<C, H> IngestionService<C, H>
where
    C: SearchCriterionRepository,
    H: CandidateHomeRepository,
{
    /// 创建新的摄取服务实例
    ///
    /// # 参数
    ///
    /// * `criteria_repo` - 搜索条件仓库
    /// * `candidate_repo` - 候选房源仓库
    /// * `search_client` - 搜索API客户端
    pub fn new(
        criteria_repo: Arc<C>,
        candidate_repo: Arc<H>,
        search_client: Arc<ListingSearchClient>,
    ) -> Self {
        Self {
            criteria_repo,
            candidate_repo,
            search_client,
        }
    }

    /// 执行一轮摄取
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<CriterionResult>)` - 每个条件一条结果
    /// * `Err(RepositoryError)` - 读取条件列表失败
    pub async fn run(&self) -> Result<Vec<CriterionResult>, RepositoryError> {
        counter!("candidate_ingest_runs_total").increment(1);

        let criteria = self.criteria_repo.list_active().await?;
        info!(
            "Running candidate ingestion for {} active criteria",
            criteria.len()
        );

        let mut results = Vec::with_capacity(criteria.len());
        // One criterion at a time; run time scales with criteria count
        for criterion in criteria {
            match self.ingest_criterion(&criterion).await {
                Ok((found, inserted)) => {
                    info!(
                        "Criterion {} (region {}): {} found, {} inserted",
                        criterion.id, criterion.region_id, found, inserted
                    );
                    results.push(CriterionResult {
                        criterion_id: criterion.id,
                        region_id: criterion.region_id,
                        success: true,
                        found,
                        inserted,
                        message: None,
                    });
                }
                Err(e) => {
                    error!(
                        "Criterion {} (region {}) failed: {}",
                        criterion.id, criterion.region_id, e
                    );
                    counter!("candidate_ingest_failures_total").increment(1);
                    results.push(CriterionResult {
                        criterion_id: criterion.id,
                        region_id: criterion.region_id,
                        success: false,
                        found: 0,
                        inserted: 0,
                        message: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(results)
    }

    /// 摄取单个搜索条件
    ///
    /// # 返回值
    ///
    /// 返回 (API返回数, 实际插入数)
    async fn ingest_criterion(
        &self,
        criterion: &SearchCriterion,
    ) -> anyhow::Result<(usize, usize)> {
        let listings = self.search_client.search(criterion).await?;
        let found = listings.len();

        let mut inserted = 0;
        for listing in listings {
            let home = CandidateHome::from_listing(listing, CandidateSource::Redfin);
            if self.candidate_repo.insert_ignore_duplicate_url(&home).await? {
                inserted += 1;
                counter!("candidate_ingest_inserted_total").increment(1);
            }
        }

        Ok((found, inserted))
    }
}
