//! 顶部导航栏

use crate::components::icons::{Briefcase, LogOut};
use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();
    let state = store.state();

    // 从访问令牌解出自己的用户 id，会话变化时自动更新
    let my_user_id = Signal::derive(move || {
        state
            .get()
            .auth
            .session
            .as_ref()
            .and_then(|s| s.user_id())
    });

    let on_logout = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store.logout();
        toast.success("已退出登录。");
        router.navigate("/login");
    };

    view! {
        <header class="navbar bg-primary text-primary-content px-6 shadow">
            <div class="flex-1 gap-2">
                <Briefcase class="h-6 w-6" />
                <Link to="/" class="text-lg font-semibold">"CareerFolio"</Link>
            </div>
            <div class="flex-none gap-4">
                <Show
                    when=move || my_user_id.get().is_some()
                    fallback=|| view! {
                        <Link to="/login" class="link link-hover mr-4">"登录"</Link>
                        <Link to="/register" class="link link-hover">"注册"</Link>
                    }
                >
                    <Link to="/messages" class="link link-hover mr-4">"消息"</Link>
                    <Link to="/products/post" class="link link-hover mr-4">"发布作品"</Link>
                    {move || {
                        let id = my_user_id.get().unwrap_or(0);
                        view! {
                            <Link to=format!("/profile/{}/edit", id) class="link link-hover mr-4">
                                "编辑资料"
                            </Link>
                        }
                    }}
                    <a href="/" class="link link-hover inline-flex items-center gap-1" on:click=on_logout>
                        <LogOut class="h-4 w-4" /> "退出"
                    </a>
                </Show>
            </div>
        </header>
    }
}
