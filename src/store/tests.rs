use super::*;
use careerfolio_shared::protocol::SendMessageRequest;
use careerfolio_shared::{Profile, Role, Session, UserData, UserInfo};

fn session() -> Session {
    Session {
        access: "a.b.c".to_string(),
        refresh: "d.e.f".to_string(),
    }
}

fn user_info(id: i64) -> UserInfo {
    UserInfo {
        id,
        username: format!("user{}", id),
        email: format!("user{}@example.jp", id),
        role: Role::Student,
    }
}

fn user_data(name: &str) -> UserData {
    UserData {
        username: name.to_string(),
        email: String::new(),
        role: Role::Student,
        profile: Some(Profile::default()),
    }
}

fn chat_message(id: i64, sender: i64, receiver: i64) -> careerfolio_shared::ChatMessage {
    careerfolio_shared::ChatMessage {
        id,
        sender,
        sender_user: user_data("sender"),
        receiver,
        receiver_user: user_data("receiver"),
        message: format!("msg-{}", id),
        is_read: false,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

// =========================================================
// 标志生命周期
// =========================================================

#[test]
fn pending_clears_previous_outcome() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Auth(AuthAction::CredentialsRejected("旧错误".to_string())),
    );
    assert!(state.auth.flags.is_error);

    reduce(&mut state, Action::Auth(AuthAction::Pending));
    assert!(state.auth.flags.is_loading);
    assert!(!state.auth.flags.is_error);
    assert!(!state.auth.flags.is_success);
    assert!(state.auth.message.is_empty());
}

#[test]
fn at_most_one_flag_active_through_lifecycle() {
    let active = |f: &StatusFlags| {
        [f.is_loading, f.is_success, f.is_error]
            .iter()
            .filter(|b| **b)
            .count()
    };
    let mut state = AppState::default();
    assert_eq!(active(&state.auth.flags), 0);

    reduce(&mut state, Action::Auth(AuthAction::Pending));
    assert_eq!(active(&state.auth.flags), 1);

    reduce(
        &mut state,
        Action::Auth(AuthAction::LoginSucceeded(session())),
    );
    assert_eq!(active(&state.auth.flags), 1);
    assert!(state.auth.flags.is_success);

    reduce(&mut state, Action::Auth(AuthAction::Pending));
    reduce(
        &mut state,
        Action::Auth(AuthAction::Failed("出错".to_string())),
    );
    assert_eq!(active(&state.auth.flags), 1);
    assert!(state.auth.flags.is_error);
}

// =========================================================
// 认证切片
// =========================================================

#[test]
fn login_success_stores_session() {
    let mut state = AppState::default();
    reduce(&mut state, Action::Auth(AuthAction::Pending));
    reduce(
        &mut state,
        Action::Auth(AuthAction::LoginSucceeded(session())),
    );
    assert_eq!(state.auth.session, Some(session()));
    assert!(state.auth.flags.is_success);
}

#[test]
fn login_failure_clears_session_and_sets_message() {
    let mut state = AppState::default();
    state.auth.session = Some(session());

    reduce(&mut state, Action::Auth(AuthAction::Pending));
    reduce(
        &mut state,
        Action::Auth(AuthAction::CredentialsRejected("登录失败: HTTP 401".to_string())),
    );
    assert!(state.auth.session.is_none());
    assert!(state.auth.flags.is_error);
    assert_eq!(state.auth.message, "登录失败: HTTP 401");
}

#[test]
fn relogin_overwrites_previous_session() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Auth(AuthAction::LoginSucceeded(session())),
    );
    let newer = Session {
        access: "x.y.z".to_string(),
        refresh: "r2".to_string(),
    };
    reduce(
        &mut state,
        Action::Auth(AuthAction::LoginSucceeded(newer.clone())),
    );
    assert_eq!(state.auth.session, Some(newer));
}

#[test]
fn logout_is_idempotent() {
    let mut state = AppState::default();
    state.auth.session = Some(session());
    state.auth.user_info = Some(user_info(1));

    reduce(&mut state, Action::Auth(AuthAction::LoggedOut));
    assert!(state.auth.session.is_none());
    assert!(state.auth.user_info.is_none());

    // 再注销一次也不报错、结果不变
    reduce(&mut state, Action::Auth(AuthAction::LoggedOut));
    assert!(state.auth.session.is_none());
}

#[test]
fn expired_token_failure_keeps_session() {
    // 过期令牌表现为普通请求失败：错误冒出但会话保留，由用户重新登录
    let mut state = AppState::default();
    state.auth.session = Some(session());

    reduce(&mut state, Action::Auth(AuthAction::Pending));
    reduce(
        &mut state,
        Action::Auth(AuthAction::Failed("获取用户信息失败: HTTP 401".to_string())),
    );
    assert!(state.auth.session.is_some());
    assert!(state.auth.flags.is_error);
}

#[test]
fn reset_keeps_payload() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Auth(AuthAction::LoginSucceeded(session())),
    );
    reduce(
        &mut state,
        Action::Auth(AuthAction::UserInfoLoaded(user_info(3))),
    );
    reduce(&mut state, Action::Auth(AuthAction::Reset));

    assert_eq!(state.auth.flags, StatusFlags::default());
    assert!(state.auth.message.is_empty());
    // 会话与用户信息不受 Reset 影响
    assert!(state.auth.session.is_some());
    assert!(state.auth.user_info.is_some());
}

// =========================================================
// 作品切片
// =========================================================

#[test]
fn product_list_is_replaced_wholesale() {
    let mut state = AppState::default();
    let first = vec![product(1), product(2)];
    reduce(
        &mut state,
        Action::Product(ProductAction::ListLoaded(first)),
    );
    assert_eq!(state.product.product_list.len(), 2);

    // 第二次获取整体替换，不做合并
    let second = vec![product(3)];
    reduce(
        &mut state,
        Action::Product(ProductAction::ListLoaded(second)),
    );
    assert_eq!(state.product.product_list.len(), 1);
    assert_eq!(state.product.product_list[0].id, 3);
}

#[test]
fn last_settled_fetch_wins() {
    // 两个并发获取：先发出的后落地，覆盖先落地的结果（已知限制）
    let mut state = AppState::default();
    reduce(&mut state, Action::Product(ProductAction::Pending));
    reduce(&mut state, Action::Product(ProductAction::Pending));
    reduce(
        &mut state,
        Action::Product(ProductAction::ProductLoaded(product(7))),
    );
    reduce(
        &mut state,
        Action::Product(ProductAction::ProductLoaded(product(8))),
    );
    assert_eq!(state.product.product_data.as_ref().map(|p| p.id), Some(8));
}

#[test]
fn post_success_does_not_touch_list() {
    // 最终一致：新作品靠下一次列表获取出现，不做本地插入
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Product(ProductAction::ListLoaded(vec![product(1)])),
    );
    reduce(
        &mut state,
        Action::Product(ProductAction::Posted(product(99))),
    );
    assert!(state.product.flags.is_success);
    assert_eq!(state.product.product_list.len(), 1);
}

fn product(id: i64) -> careerfolio_shared::Product {
    careerfolio_shared::Product {
        id,
        title: format!("作品 {}", id),
        detail: String::new(),
        thumbnail: None,
        detail_url: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        user: 1,
    }
}

// =========================================================
// 聊天切片
// =========================================================

#[test]
fn concurrent_thread_fetches_last_write_wins() {
    let mut state = AppState::default();
    let thread_a = vec![chat_message(1, 10, 20)];
    let thread_b = vec![chat_message(2, 10, 30), chat_message(3, 30, 10)];

    reduce(&mut state, Action::Chat(ChatAction::Pending));
    reduce(&mut state, Action::Chat(ChatAction::Pending));
    reduce(&mut state, Action::Chat(ChatAction::DetailLoaded(thread_a)));
    reduce(&mut state, Action::Chat(ChatAction::DetailLoaded(thread_b)));

    // 最后落地的响应决定展示内容
    assert_eq!(state.chat.message_detail.len(), 2);
    assert_eq!(state.chat.message_detail[0].id, 2);
}

#[test]
fn send_failure_leaves_thread_unchanged() {
    let mut state = AppState::default();
    let thread = vec![chat_message(1, 10, 20)];
    reduce(
        &mut state,
        Action::Chat(ChatAction::DetailLoaded(thread.clone())),
    );

    reduce(&mut state, Action::Chat(ChatAction::Pending));
    reduce(
        &mut state,
        Action::Chat(ChatAction::Failed("发送消息失败: 网络错误".to_string())),
    );
    assert_eq!(state.chat.message_detail, thread);
    assert!(state.chat.flags.is_error);
}

#[test]
fn sent_message_is_echoed_into_state() {
    let mut state = AppState::default();
    let req = SendMessageRequest::new(10, 20, "你好".to_string());
    reduce(&mut state, Action::Chat(ChatAction::Sent(req.clone())));
    assert_eq!(state.chat.sent, Some(req));
    assert!(state.chat.flags.is_success);
}

#[test]
fn chat_reset_clears_lists() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::Chat(ChatAction::ListLoaded(vec![chat_message(1, 10, 20)])),
    );
    reduce(
        &mut state,
        Action::Chat(ChatAction::DetailLoaded(vec![chat_message(2, 10, 20)])),
    );
    reduce(&mut state, Action::Chat(ChatAction::Reset));
    assert!(state.chat.message_list.is_empty());
    assert!(state.chat.message_detail.is_empty());
    assert_eq!(state.chat.flags, StatusFlags::default());
}

// =========================================================
// 发送前校验
// =========================================================

#[test]
fn counterpart_id_must_be_numeric() {
    assert_eq!(chat::parse_counterpart_id("15"), Ok(15));
    assert_eq!(chat::parse_counterpart_id(" 7 "), Ok(7));
    assert!(chat::parse_counterpart_id("abc").is_err());
    assert!(chat::parse_counterpart_id("").is_err());
    assert!(chat::parse_counterpart_id("1.5").is_err());
}

// =========================================================
// 切片相互隔离
// =========================================================

#[test]
fn slices_do_not_bleed_into_each_other() {
    let mut state = AppState::default();
    reduce(&mut state, Action::Product(ProductAction::Pending));
    assert!(state.product.flags.is_loading);
    assert!(!state.auth.flags.is_loading);
    assert!(!state.chat.flags.is_loading);

    reduce(
        &mut state,
        Action::Chat(ChatAction::Failed("出错".to_string())),
    );
    assert!(state.chat.flags.is_error);
    assert!(state.product.flags.is_loading);
    assert!(!state.auth.flags.is_error);
}
