//! 账户激活页面
//!
//! 激活链接由邮件送达，uid/token 从路由参数带入。

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::use_router;
use careerfolio_shared::protocol::ActivateRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ActivatePage(uid: String, token: String) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let uid = uid.clone();
        let token = token.clone();

        set_is_submitting.set(true);
        spawn_local(async move {
            let ok = store.activate(ActivateRequest { uid, token }).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_auth();
                toast.success("账户已激活，现在可以登录了。");
                router.navigate("/login");
            } else {
                let message = store.state().get_untracked().auth.message;
                toast.error(&message);
            }
        });
    };

    view! {
        <div class="flex flex-col min-h-screen bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-md mx-auto mt-8">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="text-center font-bold text-xl mb-4">"要激活账户吗？"</h1>
                    <div class="form-control">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "激活中..." }.into_any()
                            } else {
                                "激活".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
