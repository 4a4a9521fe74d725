// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 用户档案（profile）：认证用户的身份和角色记录
/// - 资料文件（material）：经纪人共享给客户的文件
/// - 消息（message）：经纪人与客户之间的对话条目
/// - 收藏房源（saved_home）：客户收藏的房源书签
/// - 候选房源（candidate_home）：等待经纪人筛选的房源
/// - 搜索条件（search_criterion）：驱动定时抓取任务的过滤配置
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为。
pub mod candidate_home;
pub mod material;
pub mod message;
pub mod profile;
pub mod saved_home;
pub mod search_criterion;
