//! 聊天切片
//!
//! 会话视图的状态机：挂载时并行拉取会话列表、对话详情与对方资料；
//! 发送成功后整体重取详情与列表（不做乐观插入）；发送失败时
//! 已展示的消息列表保持不变，只冒出一条通用错误。

use super::{Action, StatusFlags, Store};
use crate::api::BackendApi;
use careerfolio_shared::protocol::SendMessageRequest;
use careerfolio_shared::{ChatMessage, MSG_MISSING_TOKEN, UserData};

/// 非数字的对方 id 在发送前被拒绝时的固定错误消息
pub const MSG_INVALID_COUNTERPART: &str = "无效的用户 id。";

/// 校验 URL 里携带的对方用户 id
///
/// 发送消息的前置条件：在发出任何网络请求之前完成。
pub fn parse_counterpart_id(uid: &str) -> Result<i64, String> {
    uid.trim()
        .parse::<i64>()
        .map_err(|_| MSG_INVALID_COUNTERPART.to_string())
}

/// 聊天切片状态
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// 每个对话的最新一条消息
    pub message_list: Vec<ChatMessage>,
    /// 当前打开的对话线程
    pub message_detail: Vec<ChatMessage>,
    /// 对话另一方的公开资料
    pub user_data: Option<UserData>,
    /// 最近一次发送成功的消息（后端回显）
    pub sent: Option<SendMessageRequest>,
    pub flags: StatusFlags,
    pub message: String,
}

/// 聊天动作
#[derive(Debug, Clone)]
pub enum ChatAction {
    Pending,
    ListLoaded(Vec<ChatMessage>),
    DetailLoaded(Vec<ChatMessage>),
    UserLoaded(UserData),
    Sent(SendMessageRequest),
    Failed(String),
    Reset,
}

pub fn reduce(state: &mut ChatState, action: ChatAction) {
    match action {
        ChatAction::Pending => {
            state.flags.begin();
            state.message.clear();
        }
        ChatAction::ListLoaded(list) => {
            state.flags.succeed();
            state.message_list = list;
        }
        ChatAction::DetailLoaded(detail) => {
            state.flags.succeed();
            state.message_detail = detail;
        }
        ChatAction::UserLoaded(user) => {
            state.flags.succeed();
            state.user_data = Some(user);
        }
        ChatAction::Sent(sent) => {
            state.flags.succeed();
            state.sent = Some(sent);
        }
        // 发送或拉取失败：线程内容保持原样
        ChatAction::Failed(message) => {
            state.flags.fail();
            state.message = message;
        }
        ChatAction::Reset => {
            state.flags.reset();
            state.message.clear();
            state.message_list = Vec::new();
            state.message_detail = Vec::new();
        }
    }
}

// =========================================================
// 异步操作
// =========================================================

impl Store {
    fn dispatch_chat(&self, action: ChatAction) {
        self.dispatch(Action::Chat(action));
    }

    /// 令牌与其中的用户 id，缺一不可
    fn chat_identity(&self) -> Option<(String, i64)> {
        let token = self.access_token()?;
        let user_id = self.my_user_id()?;
        Some((token, user_id))
    }

    /// 获取会话列表
    pub async fn fetch_message_list(&self) {
        self.dispatch_chat(ChatAction::Pending);
        let Some((token, user_id)) = self.chat_identity() else {
            self.dispatch_chat(ChatAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return;
        };
        match BackendApi::default().message_list(&token, user_id).await {
            Ok(list) => self.dispatch_chat(ChatAction::ListLoaded(list)),
            Err(e) => self.dispatch_chat(ChatAction::Failed(e)),
        }
    }

    /// 获取与 `other_id` 的完整对话
    pub async fn fetch_message_detail(&self, other_id: i64) {
        self.dispatch_chat(ChatAction::Pending);
        let Some((token, user_id)) = self.chat_identity() else {
            self.dispatch_chat(ChatAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return;
        };
        match BackendApi::default()
            .message_detail(&token, user_id, other_id)
            .await
        {
            Ok(detail) => self.dispatch_chat(ChatAction::DetailLoaded(detail)),
            Err(e) => self.dispatch_chat(ChatAction::Failed(e)),
        }
    }

    /// 获取对话另一方的公开资料
    pub async fn fetch_chat_user(&self, other_id: i64) {
        self.dispatch_chat(ChatAction::Pending);
        match BackendApi::default().fetch_user(other_id).await {
            Ok(user) => self.dispatch_chat(ChatAction::UserLoaded(user)),
            Err(e) => self.dispatch_chat(ChatAction::Failed(e)),
        }
    }

    /// 发送消息（聊天输入框与详情页的邀约共用）
    pub async fn send_message(&self, receiver: i64, message: String) -> bool {
        self.dispatch_chat(ChatAction::Pending);
        let Some((token, user_id)) = self.chat_identity() else {
            self.dispatch_chat(ChatAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return false;
        };
        let req = SendMessageRequest::new(user_id, receiver, message);
        match BackendApi::default().send_message(&token, &req).await {
            Ok(sent) => {
                self.dispatch_chat(ChatAction::Sent(sent));
                true
            }
            Err(e) => {
                self.dispatch_chat(ChatAction::Failed(e));
                false
            }
        }
    }

    /// 清空聊天切片（离开聊天页面时）
    pub fn reset_chat(&self) {
        self.dispatch_chat(ChatAction::Reset);
    }
}
