//! CareerFolio 前端应用
//!
//! 求职/作品集分享服务的客户端。架构分层：
//! - `web::route` / `web::router`: 路由领域模型与守卫引擎
//! - `auth`: 持久化会话管理
//! - `store`: 三切片（auth / product / chat）的单一写入者状态存储
//! - `api`: 后端 REST 客户端
//! - `components`: 页面组件层

pub mod api;
pub mod auth;
pub mod store;

mod components {
    pub mod activate;
    pub mod icons;
    pub mod login;
    pub mod message_detail;
    pub mod messages;
    pub mod nav;
    pub mod product_detail;
    pub mod product_list;
    pub mod product_post;
    pub mod profile_edit;
    pub mod register;
    pub mod reset_password;
    pub mod reset_password_confirm;
    pub mod toast;

    use wasm_bindgen::JsCast;

    /// 从 `<input type="file">` 的 change 事件中取出首个文件
    ///
    /// 选择后又取消的场景返回 None。
    pub(crate) fn file_from_input(ev: &web_sys::Event) -> Option<web_sys::File> {
        let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
        input.files()?.get(0)
    }
}

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod http;
    pub mod route;
    pub mod router;
    pub mod storage;

    pub use http::HttpClient;
    pub use storage::LocalStorage;

    use careerfolio_shared::date::Timestamp;

    /// 当前时间的毫秒时间戳（相对时间展示用）
    pub fn now_timestamp() -> Timestamp {
        Timestamp::new(js_sys::Date::now() as i64)
    }
}

use crate::components::activate::ActivatePage;
use crate::components::login::LoginPage;
use crate::components::message_detail::MessageDetailPage;
use crate::components::messages::MessagesPage;
use crate::components::nav::Nav;
use crate::components::product_detail::ProductDetailPage;
use crate::components::product_list::ProductListPage;
use crate::components::product_post::ProductPostPage;
use crate::components::profile_edit::ProfileEditPage;
use crate::components::register::RegisterPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::reset_password_confirm::ResetPasswordConfirmPage;
use crate::components::toast::{ToastHost, provide_toasts};
use crate::store::provide_store;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::ProductList => view! { <ProductListPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::ResetPasswordConfirm { uid, token } => {
            view! { <ResetPasswordConfirmPage uid=uid token=token /> }.into_any()
        }
        AppRoute::Activate { uid, token } => {
            view! { <ActivatePage uid=uid token=token /> }.into_any()
        }
        AppRoute::ProductPost => view! { <ProductPostPage /> }.into_any(),
        AppRoute::ProductDetail { id } => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::ProfileEdit { uid } => view! { <ProfileEditPage uid=uid /> }.into_any(),
        AppRoute::Messages => view! { <MessagesPage /> }.into_any(),
        AppRoute::MessageDetail { uid } => view! { <MessageDetailPage uid=uid /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建存储与通知上下文
    let store = provide_store();
    provide_toasts();

    // 2. 从 LocalStorage 载入持久化会话（唯一的登录事实来源）
    store.init_session();

    // 3. 认证状态信号，注入路由服务实现守卫
    let is_authenticated = store.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Nav />
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
