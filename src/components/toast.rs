//! 瞬时通知模块
//!
//! 所有错误与成功提示的唯一出口：一条消息、一个"是否出错"标记，
//! 3 秒后自动消失。错误不携带结构化码，展示即终态。

use leptos::prelude::*;

const TOAST_DURATION_SECS: u64 = 3;

/// 通知上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// (消息内容, 是否出错)
    notification: ReadSignal<Option<(String, bool)>>,
    set_notification: WriteSignal<Option<(String, bool)>>,
}

impl ToastContext {
    fn new() -> Self {
        let (notification, set_notification) = signal(None);
        Self {
            notification,
            set_notification,
        }
    }

    /// 成功提示
    pub fn success(&self, message: &str) {
        self.set_notification.set(Some((message.to_string(), false)));
    }

    /// 错误提示
    pub fn error(&self, message: &str) {
        self.set_notification.set(Some((message.to_string(), true)));
    }
}

/// 创建通知上下文并挂入 Context
pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知展示组件，挂在 App 根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();
    let notification = ctx.notification;
    let set_notification = ctx.set_notification;

    // 出现后定时清除
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(TOAST_DURATION_SECS),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
