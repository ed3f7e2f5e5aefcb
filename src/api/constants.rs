//! API 模块常量定义

/// 会话 Cookie 名称（不设置 Max-Age，浏览器会话结束即失效）
pub const SESSION_COOKIE_NAME: &str = "termitoon_session";

/// 会话空闲多久后从内存中清除（秒）
pub const SESSION_IDLE_SECS: u64 = 12 * 60 * 60;

/// 管理页面路径
pub const ADMIN_PATH: &str = "/admin";

pub const MSG_LINK_ADDED: &str = "Link added successfully!";
pub const MSG_LINK_DELETED: &str = "Link deleted.";
pub const MSG_LINK_COPIED: &str = "Share link copied!";
