// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM实现领域层定义的仓库接口
/// 负责领域模型与数据库实体之间的转换
pub mod candidate_home_repo_impl;
pub mod material_repo_impl;
pub mod message_repo_impl;
pub mod profile_repo_impl;
pub mod saved_home_repo_impl;
pub mod search_criterion_repo_impl;
pub mod session_token_repo_impl;
