//! 全局状态存储
//!
//! 三个切片（auth / product / chat）收在一个显式类型化的
//! `AppState` 里，放在一对读写信号后面。所有变更都以动作对象
//! 进入纯函数 `reduce`（单一写入者），组件只读信号、派发动作。
//!
//! 并发语义：同类操作并发在途时，后落地者覆盖前者（last-write-wins）；
//! 组件卸载不会取消在途请求。这是已知限制，不是顺序保证。

use leptos::prelude::*;

pub mod auth;
pub mod chat;
pub mod product;

#[cfg(test)]
mod tests;

pub use auth::{AuthAction, AuthState};
pub use chat::{ChatAction, ChatState};
pub use product::{ProductAction, ProductState};

/// 请求生命周期标志
///
/// 不变式：一次请求生命周期内最多一个标志"生效"；
/// 新请求开始时先清空上一轮的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub is_loading: bool,
    pub is_success: bool,
    pub is_error: bool,
}

impl StatusFlags {
    /// 新请求开始：清空结果标志，进入 loading
    pub fn begin(&mut self) {
        *self = Self {
            is_loading: true,
            is_success: false,
            is_error: false,
        };
    }

    /// 请求成功落地
    pub fn succeed(&mut self) {
        *self = Self {
            is_loading: false,
            is_success: true,
            is_error: false,
        };
    }

    /// 请求失败落地
    pub fn fail(&mut self) {
        *self = Self {
            is_loading: false,
            is_success: false,
            is_error: true,
        };
    }

    /// 回到空闲态
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 应用全局状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub product: ProductState,
    pub chat: ChatState,
}

/// 动作对象：所有状态变更的唯一入口
#[derive(Debug, Clone)]
pub enum Action {
    Auth(AuthAction),
    Product(ProductAction),
    Chat(ChatAction),
}

/// 纯归约函数
///
/// 不做 IO、不触信号，便于单元测试。
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Auth(action) => auth::reduce(&mut state.auth, action),
        Action::Product(action) => product::reduce(&mut state.product, action),
        Action::Chat(action) => chat::reduce(&mut state.chat, action),
    }
}

/// 全局存储
///
/// 只含两个 `Copy` 的信号句柄，可按值在组件间传递。
#[derive(Clone, Copy)]
pub struct Store {
    state: ReadSignal<AppState>,
    set_state: WriteSignal<AppState>,
}

impl Store {
    pub fn new() -> Self {
        let (state, set_state) = signal(AppState::default());
        Self { state, set_state }
    }

    /// 读取状态信号
    pub fn state(&self) -> ReadSignal<AppState> {
        self.state
    }

    /// 派发动作（唯一的写入路径）
    pub fn dispatch(&self, action: Action) {
        self.set_state.update(|state| reduce(state, action));
    }

    /// 认证状态信号（注入路由守卫）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().auth.session.is_some())
    }

    /// 当前访问令牌（非响应式读取，供异步操作使用）
    pub(crate) fn access_token(&self) -> Option<String> {
        self.state
            .get_untracked()
            .auth
            .session
            .map(|s| s.access)
    }

    /// 当前用户 id，来自访问令牌的载荷（非响应式读取）
    pub fn my_user_id(&self) -> Option<i64> {
        self.state
            .get_untracked()
            .auth
            .session
            .and_then(|s| s.user_id())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建存储并挂入 Context
pub fn provide_store() -> Store {
    let store = Store::new();
    provide_context(store);
    store
}

/// 从 Context 获取存储
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store not found in context. Ensure provide_store was called.")
}
