//! 会话管理模块
//!
//! 持久化会话是"用户是否已登录"的唯一事实来源：
//! 登录成功时整体写入 LocalStorage 的固定键，注销时删除。
//! 不存在自动刷新——访问令牌过期后，后续认证请求由后端拒绝，
//! 界面提示重新登录。

use crate::web::LocalStorage;
use careerfolio_shared::{SESSION_STORAGE_KEY, Session};

/// 读取持久化会话
///
/// 纯读取：键不存在（匿名浏览）与记录损坏都返回 None，
/// 损坏的记录会被顺手清掉。
pub fn load_session() -> Option<Session> {
    match LocalStorage::get(SESSION_STORAGE_KEY) {
        None => None,
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(_) => {
                LocalStorage::delete(SESSION_STORAGE_KEY);
                None
            }
        },
    }
}

/// 持久化会话（登录成功的副作用，重复登录直接覆盖）
pub fn persist_session(session: &Session) -> bool {
    LocalStorage::set_json(SESSION_STORAGE_KEY, session)
}

/// 清除持久化会话
///
/// 无论之前是否存在都成功（幂等）。
pub fn clear_session() {
    LocalStorage::delete(SESSION_STORAGE_KEY);
}
