//! 认证切片
//!
//! 会话生命周期：登录创建并持久化，重复登录覆盖，注销删除。
//! 凭证类流程（注册/登录/激活/重置密码）失败时清掉内存中的会话；
//! 已登录状态下的请求失败（获取用户信息/更新资料）只记录错误，
//! 不影响会话本身。

use super::{Action, StatusFlags, Store};
use crate::api::BackendApi;
use crate::auth as session_store;
use careerfolio_shared::protocol::{
    ActivateRequest, LoginRequest, ProfileUpdateRequest, RegisterRequest,
    ResetPasswordConfirmRequest, ResetPasswordRequest,
};
use careerfolio_shared::{MSG_MISSING_TOKEN, Session, UserInfo};
use web_sys::File;

/// 认证切片状态
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// 当前会话，None 表示匿名浏览
    pub session: Option<Session>,
    /// /users/me/ 返回的用户信息
    pub user_info: Option<UserInfo>,
    pub flags: StatusFlags,
    pub message: String,
}

/// 认证动作
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// 新请求开始
    Pending,
    /// 启动时从持久化存储载入会话
    SessionLoaded(Option<Session>),
    LoginSucceeded(Session),
    RegisterSucceeded,
    ActivateSucceeded,
    ResetPasswordSucceeded,
    ResetPasswordConfirmSucceeded,
    UserInfoLoaded(UserInfo),
    ProfileUpdated(UserInfo),
    LoggedOut,
    /// 凭证类流程失败：记录错误并清除内存中的会话
    CredentialsRejected(String),
    /// 普通请求失败：只记录错误
    Failed(String),
    /// 清空标志与消息（页面离开时）
    Reset,
}

pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::Pending => {
            state.flags.begin();
            state.message.clear();
        }
        AuthAction::SessionLoaded(session) => {
            state.session = session;
        }
        AuthAction::LoginSucceeded(session) => {
            state.flags.succeed();
            state.session = Some(session);
        }
        AuthAction::RegisterSucceeded
        | AuthAction::ActivateSucceeded
        | AuthAction::ResetPasswordSucceeded
        | AuthAction::ResetPasswordConfirmSucceeded => {
            state.flags.succeed();
        }
        AuthAction::UserInfoLoaded(info) | AuthAction::ProfileUpdated(info) => {
            state.flags.succeed();
            state.user_info = Some(info);
        }
        AuthAction::LoggedOut => {
            state.session = None;
            state.user_info = None;
        }
        AuthAction::CredentialsRejected(message) => {
            state.flags.fail();
            state.message = message;
            state.session = None;
        }
        AuthAction::Failed(message) => {
            state.flags.fail();
            state.message = message;
        }
        AuthAction::Reset => {
            state.flags.reset();
            state.message.clear();
        }
    }
}

// =========================================================
// 异步操作（每次调用恰好一次网络请求，失败即终态）
// =========================================================

impl Store {
    fn dispatch_auth(&self, action: AuthAction) {
        self.dispatch(Action::Auth(action));
    }

    /// 启动时从 LocalStorage 载入会话
    pub fn init_session(&self) {
        self.dispatch_auth(AuthAction::SessionLoaded(session_store::load_session()));
    }

    /// 注册
    pub async fn register(&self, req: RegisterRequest) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        match BackendApi::default().register(&req).await {
            Ok(_) => {
                self.dispatch_auth(AuthAction::RegisterSucceeded);
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::CredentialsRejected(e));
                false
            }
        }
    }

    /// 登录
    ///
    /// 成功时持久化会话；失败时清除任何旧会话并记录服务端消息。
    pub async fn login(&self, req: LoginRequest) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        match BackendApi::default().login(&req).await {
            Ok(session) => {
                session_store::persist_session(&session);
                self.dispatch_auth(AuthAction::LoginSucceeded(session));
                true
            }
            Err(e) => {
                session_store::clear_session();
                self.dispatch_auth(AuthAction::CredentialsRejected(e));
                false
            }
        }
    }

    /// 注销：清除持久化会话与内存状态（幂等，无网络请求）
    pub fn logout(&self) {
        session_store::clear_session();
        self.dispatch_auth(AuthAction::LoggedOut);
    }

    /// 激活账户
    pub async fn activate(&self, req: ActivateRequest) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        match BackendApi::default().activate(&req).await {
            Ok(()) => {
                self.dispatch_auth(AuthAction::ActivateSucceeded);
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::CredentialsRejected(e));
                false
            }
        }
    }

    /// 申请重置密码
    pub async fn reset_password(&self, req: ResetPasswordRequest) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        match BackendApi::default().reset_password(&req).await {
            Ok(()) => {
                self.dispatch_auth(AuthAction::ResetPasswordSucceeded);
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::CredentialsRejected(e));
                false
            }
        }
    }

    /// 确认重置密码
    pub async fn reset_password_confirm(&self, req: ResetPasswordConfirmRequest) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        match BackendApi::default().reset_password_confirm(&req).await {
            Ok(()) => {
                self.dispatch_auth(AuthAction::ResetPasswordConfirmSucceeded);
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::CredentialsRejected(e));
                false
            }
        }
    }

    /// 获取当前用户信息
    ///
    /// 前置条件：会话存在。缺少令牌时直接失败，不发网络请求。
    pub async fn get_user_info(&self) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        let Some(token) = self.access_token() else {
            self.dispatch_auth(AuthAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return false;
        };
        match BackendApi::default().get_user_info(&token).await {
            Ok(info) => {
                self.dispatch_auth(AuthAction::UserInfoLoaded(info));
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::Failed(e));
                false
            }
        }
    }

    /// 更新资料
    pub async fn update_profile(&self, req: ProfileUpdateRequest, avatar: Option<File>) -> bool {
        self.dispatch_auth(AuthAction::Pending);
        let Some(token) = self.access_token() else {
            self.dispatch_auth(AuthAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return false;
        };
        match BackendApi::default()
            .update_profile(&token, &req, avatar.as_ref())
            .await
        {
            Ok(info) => {
                self.dispatch_auth(AuthAction::ProfileUpdated(info));
                true
            }
            Err(e) => {
                self.dispatch_auth(AuthAction::Failed(e));
                false
            }
        }
    }

    /// 清空认证切片的标志与消息
    pub fn reset_auth(&self) {
        self.dispatch_auth(AuthAction::Reset);
    }
}
