//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径解析与认证守卫属性。

use std::fmt::Display;

/// 应用路由枚举
///
/// 消息详情的对方 id 保留为字符串：路径里允许出现任意值，
/// 数字校验推迟到发送消息之前进行。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 作品列表（默认路由，匿名可浏览）
    #[default]
    ProductList,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 申请重置密码
    ResetPassword,
    /// 确认重置密码（邮件链接携带 uid/token）
    ResetPasswordConfirm { uid: String, token: String },
    /// 激活账户（邮件链接携带 uid/token）
    Activate { uid: String, token: String },
    /// 发布作品（需要认证）
    ProductPost,
    /// 作品详情（需要认证）
    ProductDetail { id: i64 },
    /// 编辑资料（需要认证）
    ProfileEdit { uid: i64 },
    /// 会话列表（需要认证）
    Messages,
    /// 与某个用户的对话（需要认证）
    MessageDetail { uid: String },
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串与首尾斜杠；数字参数解析失败视为 NotFound。
    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or("");
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Self::ProductList,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["reset-password"] => Self::ResetPassword,
            ["password", "reset", "confirm", uid, token] => Self::ResetPasswordConfirm {
                uid: (*uid).to_string(),
                token: (*token).to_string(),
            },
            ["activate", uid, token] => Self::Activate {
                uid: (*uid).to_string(),
                token: (*token).to_string(),
            },
            ["products", "post"] => Self::ProductPost,
            ["products", id] => match id.parse::<i64>() {
                Ok(id) => Self::ProductDetail { id },
                Err(_) => Self::NotFound,
            },
            ["profile", uid, "edit"] => match uid.parse::<i64>() {
                Ok(uid) => Self::ProfileEdit { uid },
                Err(_) => Self::NotFound,
            },
            ["messages"] => Self::Messages,
            ["messages", uid] => Self::MessageDetail {
                uid: (*uid).to_string(),
            },
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::ProductList => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ResetPassword => "/reset-password".to_string(),
            Self::ResetPasswordConfirm { uid, token } => {
                format!("/password/reset/confirm/{}/{}", uid, token)
            }
            Self::Activate { uid, token } => format!("/activate/{}/{}", uid, token),
            Self::ProductPost => "/products/post".to_string(),
            Self::ProductDetail { id } => format!("/products/{}", id),
            Self::ProfileEdit { uid } => format!("/profile/{}/edit", uid),
            Self::Messages => "/messages".to_string(),
            Self::MessageDetail { uid } => format!("/messages/{}", uid),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 二元门：只看会话是否存在，不做角色区分。
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::ProductPost
                | Self::ProductDetail { .. }
                | Self::ProfileEdit { .. }
                | Self::Messages
                | Self::MessageDetail { .. }
        )
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
