// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取模块
///
/// 该模块实现系统中所有的页面抓取与解析功能：
/// - 页面抓取器（fetch）：带超时与浏览器UA的HTTP抓取
/// - Open Graph解析（og_parser）：从HTML中提取房源元数据
/// - 预览服务（preview）：组合抓取与解析，失败时降级为空字段
/// - 搜索API客户端（listing_api）：调用第三方房源搜索API
pub mod fetch;
pub mod listing_api;
pub mod og_parser;
pub mod preview;
