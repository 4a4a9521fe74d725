// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;
use validator::ValidateEmail;

/// 校验邮箱地址语法
pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// 校验是否为http(s)链接
///
/// 候选房源和收藏只接受可解析的http(s) URL。
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "validators_test.rs"]
mod tests;
