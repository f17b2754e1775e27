//! 后端 API 客户端
//!
//! 所有端点定义在 `careerfolio_shared::protocol` 中，此处负责把
//! `ApiRequest` 落到一次 fetch 调用：拼接 URL、附加 Bearer 令牌、
//! 序列化请求体、把失败压平为字符串消息。携带图片的两个端点走
//! multipart 表单，其余均为 JSON。

use crate::web::http::{HttpClient, HttpMethod, HttpRequestBuilder};
use careerfolio_shared::protocol::{
    self, ActivateRequest, ApiRequest, FetchProductRequest, FetchUserRequest, ListProductsRequest,
    LoginRequest, MessageDetailRequest, MessageListRequest, ProductCreateRequest,
    ProfileUpdateRequest, RegisterRequest, ResetPasswordConfirmRequest, ResetPasswordRequest,
    SendMessageRequest, UserInfoRequest,
};
use careerfolio_shared::{ChatMessage, Product, RoleProfile, Session, UserData, UserInfo};
use web_sys::{File, FormData};

/// 后端主机（单一固定地址）
pub const BACKEND_DOMAIN: &str = "http://localhost:8000";

/// 后端 API 客户端
#[derive(Clone, Debug, PartialEq)]
pub struct BackendApi {
    pub base_url: String,
}

impl Default for BackendApi {
    fn default() -> Self {
        Self::new(BACKEND_DOMAIN.to_string())
    }
}

impl BackendApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder_for(&self, method: protocol::HttpMethod, path: &str) -> HttpRequestBuilder {
        let method = match method {
            protocol::HttpMethod::Get => HttpMethod::Get,
            protocol::HttpMethod::Post => HttpMethod::Post,
            protocol::HttpMethod::Patch => HttpMethod::Patch,
            protocol::HttpMethod::Delete => HttpMethod::Delete,
        };
        HttpClient::request(method, &self.url(path))
    }

    /// 统一的 JSON 端点调度
    ///
    /// GET 不携带请求体；空响应体按 `null` 解析，对应 `()` 响应类型。
    /// 非 2xx 时优先透出服务端错误体，否则给出状态码。
    async fn dispatch<R: ApiRequest>(
        &self,
        req: &R,
        token: Option<&str>,
    ) -> Result<R::Response, String> {
        let mut builder = self.builder_for(R::METHOD, &req.path());
        if let Some(token) = token {
            builder = builder.bearer(token);
        }
        if !matches!(R::METHOD, protocol::HttpMethod::Get) {
            let body = serde_json::to_string(req).map_err(|e| e.to_string())?;
            builder = builder.json_body(body);
        }

        let res = builder.send().await.map_err(|e| e.to_string())?;
        Self::parse_response::<R::Response>(res).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        res: crate::web::http::HttpResponse,
    ) -> Result<T, String> {
        let status = res.status();
        let ok = res.ok();
        let text = res.text().await.map_err(|e| e.to_string())?;
        if !ok {
            if text.trim().is_empty() {
                return Err(format!("HTTP {}", status));
            }
            return Err(text);
        }
        let raw = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    // =========================================================
    // 认证
    // =========================================================

    /// 注册新账户
    pub async fn register(&self, req: &RegisterRequest) -> Result<UserInfo, String> {
        self.dispatch(req, None)
            .await
            .map_err(|e| format!("注册失败: {}", e))
    }

    /// 登录并签发令牌对
    pub async fn login(&self, req: &LoginRequest) -> Result<Session, String> {
        self.dispatch(req, None)
            .await
            .map_err(|e| format!("登录失败: {}", e))
    }

    /// 激活账户
    pub async fn activate(&self, req: &ActivateRequest) -> Result<(), String> {
        self.dispatch(req, None)
            .await
            .map_err(|e| format!("激活失败: {}", e))
    }

    /// 申请重置密码
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), String> {
        self.dispatch(req, None)
            .await
            .map_err(|e| format!("重置密码失败: {}", e))
    }

    /// 确认重置密码
    pub async fn reset_password_confirm(
        &self,
        req: &ResetPasswordConfirmRequest,
    ) -> Result<(), String> {
        self.dispatch(req, None)
            .await
            .map_err(|e| format!("重置密码失败: {}", e))
    }

    /// 获取当前登录用户信息
    pub async fn get_user_info(&self, token: &str) -> Result<UserInfo, String> {
        self.dispatch(&UserInfoRequest, Some(token))
            .await
            .map_err(|e| format!("获取用户信息失败: {}", e))
    }

    /// 更新资料（multipart，可携带头像文件）
    pub async fn update_profile(
        &self,
        token: &str,
        req: &ProfileUpdateRequest,
        avatar: Option<&File>,
    ) -> Result<UserInfo, String> {
        let form = Self::profile_form(req, avatar)?;
        let res = self
            .builder_for(protocol::HttpMethod::Patch, &req.path())
            .bearer(token)
            .form_body(form)
            .send()
            .await
            .map_err(|e| e.to_string())
            .map_err(|e| format!("更新资料失败: {}", e))?;
        Self::parse_response(res)
            .await
            .map_err(|e| format!("更新资料失败: {}", e))
    }

    fn profile_form(req: &ProfileUpdateRequest, avatar: Option<&File>) -> Result<FormData, String> {
        let form = FormData::new().map_err(|e| format!("创建表单失败: {:?}", e))?;
        let append = |key: &str, value: &str| {
            form.append_with_str(key, value)
                .map_err(|e| format!("填充表单失败: {:?}", e))
        };
        append("username", &req.username)?;
        append("email", &req.email)?;
        append("role", req.role_profile.role().as_str())?;
        match &req.role_profile {
            RoleProfile::Student { affiliation } => {
                append("profile.affiliation", affiliation)?;
            }
            RoleProfile::Recruiter { company, industry } => {
                append("profile.company", company)?;
                append("profile.industry", industry)?;
            }
        }
        append("profile.bio", &req.bio)?;
        if let Some(file) = avatar {
            form.append_with_blob_and_filename("profile.profile_image", file, &file.name())
                .map_err(|e| format!("附加头像失败: {:?}", e))?;
        }
        Ok(form)
    }

    // =========================================================
    // 作品
    // =========================================================

    /// 获取作品列表
    pub async fn list_products(&self) -> Result<Vec<Product>, String> {
        self.dispatch(&ListProductsRequest, None)
            .await
            .map_err(|e| format!("获取作品列表失败: {}", e))
    }

    /// 获取单个作品
    pub async fn fetch_product(&self, id: i64) -> Result<Product, String> {
        self.dispatch(&FetchProductRequest { id }, None)
            .await
            .map_err(|e| format!("获取作品失败: {}", e))
    }

    /// 发布作品（multipart，可携带缩略图文件）
    pub async fn create_product(
        &self,
        token: &str,
        req: &ProductCreateRequest,
        thumbnail: Option<&File>,
    ) -> Result<Product, String> {
        let form = FormData::new().map_err(|e| format!("创建表单失败: {:?}", e))?;
        let append = |key: &str, value: &str| {
            form.append_with_str(key, value)
                .map_err(|e| format!("填充表单失败: {:?}", e))
        };
        append("title", &req.title)?;
        append("detail", &req.detail)?;
        append("detail_url", &req.detail_url)?;
        if let Some(file) = thumbnail {
            form.append_with_blob_and_filename("thumbnail", file, &file.name())
                .map_err(|e| format!("附加缩略图失败: {:?}", e))?;
        }

        let res = self
            .builder_for(ProductCreateRequest::METHOD, ProductCreateRequest::PATH)
            .bearer(token)
            .form_body(form)
            .send()
            .await
            .map_err(|e| format!("发布作品失败: {}", e))?;
        Self::parse_response(res)
            .await
            .map_err(|e| format!("发布作品失败: {}", e))
    }

    /// 获取用户公开资料
    pub async fn fetch_user(&self, id: i64) -> Result<UserData, String> {
        self.dispatch(&FetchUserRequest { id }, None)
            .await
            .map_err(|e| format!("获取用户失败: {}", e))
    }

    // =========================================================
    // 聊天
    // =========================================================

    /// 获取会话列表（每个对话的最新一条消息）
    pub async fn message_list(&self, token: &str, user_id: i64) -> Result<Vec<ChatMessage>, String> {
        self.dispatch(&MessageListRequest { user_id }, Some(token))
            .await
            .map_err(|e| format!("获取会话列表失败: {}", e))
    }

    /// 获取与某个用户的完整对话
    pub async fn message_detail(
        &self,
        token: &str,
        user_id: i64,
        other_id: i64,
    ) -> Result<Vec<ChatMessage>, String> {
        self.dispatch(&MessageDetailRequest { user_id, other_id }, Some(token))
            .await
            .map_err(|e| format!("获取对话失败: {}", e))
    }

    /// 发送消息
    pub async fn send_message(
        &self,
        token: &str,
        req: &SendMessageRequest,
    ) -> Result<SendMessageRequest, String> {
        self.dispatch(req, Some(token))
            .await
            .map_err(|e| format!("发送消息失败: {}", e))
    }
}
