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

use crate::domain::models::candidate_home::CandidateHome;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// 固定的邮件文档骨架：头部色带、可选的私人留言块、
/// 每个房源一张卡片、页脚。发送候选房源与分享收藏共用
/// 这一个构建器。
pub fn build_homes_email(personal_message: Option<&str>, homes: &[CandidateHome]) -> String {
    let mut body = String::with_capacity(2048 + homes.len() * 1024);

    body.push_str(
        "<!DOCTYPE html><html><body style=\"margin:0;padding:0;background-color:#f5f5f4;\
         font-family:Arial,Helvetica,sans-serif;\">",
    );

    // Header band
    body.push_str(
        "<div style=\"background-color:#1c1917;color:#fafaf9;padding:24px 32px;\">\
         <h1 style=\"margin:0;font-size:20px;\">Homes picked for you</h1></div>",
    );

    body.push_str("<div style=\"padding:24px 32px;\">");

    // Optional personal note from the agent
    if let Some(message) = personal_message.filter(|m| !m.trim().is_empty()) {
        body.push_str(
            "<div style=\"background-color:#ffffff;border-left:4px solid #1c1917;\
             padding:16px;margin-bottom:24px;\">",
        );
        body.push_str(&encode_text(message).replace('\n', "<br>"));
        body.push_str("</div>");
    }

    for home in homes {
        body.push_str(&home_card(home));
    }

    body.push_str("</div>");

    // Footer
    body.push_str(
        "<div style=\"padding:16px 32px;color:#78716c;font-size:12px;\">\
         You received this email because your agent shared these listings with you.\
         </div></body></html>",
    );

    body
}

/// 单个房源卡片
fn home_card(home: &CandidateHome) -> String {
    let mut card = String::with_capacity(1024);

    card.push_str(
        "<div style=\"background-color:#ffffff;border-radius:8px;overflow:hidden;\
         margin-bottom:24px;box-shadow:0 1px 3px rgba(0,0,0,0.1);\">",
    );

    match &home.image_url {
        Some(image_url) => {
            card.push_str(&format!(
                "<img src=\"{}\" alt=\"\" style=\"display:block;width:100%;height:220px;\
                 object-fit:cover;\">",
                encode_double_quoted_attribute(image_url)
            ));
        }
        None => {
            // Placeholder block keeps the card layout stable
            card.push_str(
                "<div style=\"width:100%;height:220px;background-color:#e7e5e4;\"></div>",
            );
        }
    }

    card.push_str("<div style=\"padding:16px;\">");

    if let Some(price) = &home.price {
        card.push_str(&format!(
            "<div style=\"font-size:18px;font-weight:bold;margin-bottom:4px;\">{}</div>",
            encode_text(price)
        ));
    }

    if let Some(address) = &home.address {
        card.push_str(&format!(
            "<div style=\"color:#44403c;margin-bottom:8px;\">{}</div>",
            encode_text(address)
        ));
    }

    if let Some(notes) = home.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        card.push_str(&format!(
            "<div style=\"color:#57534e;font-style:italic;margin-bottom:8px;\">{}</div>",
            encode_text(notes)
        ));
    }

    card.push_str(&format!(
        "<a href=\"{}\" style=\"color:#1c1917;font-weight:bold;\">View listing</a>",
        encode_double_quoted_attribute(&home.url)
    ));

    card.push_str("</div></div>");
    card
}

/// 联系表单通知邮件
pub fn build_contact_email(name: &str, email: &str, message: &str) -> String {
    format!(
        "<html><body style=\"font-family:Arial,Helvetica,sans-serif;\">\
         <h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong></p><p>{}</p>\
         </body></html>",
        encode_text(name),
        encode_text(email),
        encode_text(message).replace('\n', "<br>")
    )
}

/// 订阅通知邮件
pub fn build_newsletter_email(email: &str) -> String {
    format!(
        "<html><body style=\"font-family:Arial,Helvetica,sans-serif;\">\
         <h2>New newsletter signup</h2>\
         <p><strong>Email:</strong> {}</p>\
         </body></html>",
        encode_text(email)
    )
}

#[cfg(test)]
#[path = "email_template_test.rs"]
mod tests;
