// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 档案仓库（profile_repository）：管理用户档案
/// - 会话令牌仓库（session_token_repository）：管理认证令牌
/// - 资料仓库（material_repository）：管理共享文件的元信息
/// - 消息仓库（message_repository）：管理对话消息
/// - 收藏房源仓库（saved_home_repository）：管理客户收藏
/// - 候选房源仓库（candidate_home_repository）：管理筛选队列
/// - 搜索条件仓库（search_criterion_repository）：管理抓取配置
/// - 存储仓库（storage_repository）：管理文件和对象的存储
///
/// 这些接口确保了领域层不依赖于具体的数据存储技术，
/// 提高了系统的可测试性和可维护性.
pub mod candidate_home_repository;
pub mod material_repository;
pub mod message_repository;
pub mod profile_repository;
pub mod saved_home_repository;
pub mod search_criterion_repository;
pub mod session_token_repository;
pub mod storage_repository;
