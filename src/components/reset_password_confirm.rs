//! 确认重置密码页面
//!
//! uid/token 来自邮件链接的路由参数。

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::use_router;
use careerfolio_shared::protocol::ResetPasswordConfirmRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResetPasswordConfirmPage(uid: String, token: String) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (new_password, set_new_password) = signal(String::new());
    let (re_new_password, set_re_new_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if new_password.get().is_empty() || re_new_password.get().is_empty() {
            toast.error("请填写所有字段。");
            return;
        }
        if new_password.get() != re_new_password.get() {
            toast.error("两次输入的密码不一致。");
            return;
        }
        let uid = uid.clone();
        let token = token.clone();

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = ResetPasswordConfirmRequest {
                uid,
                token,
                new_password: new_password.get_untracked(),
                re_new_password: re_new_password.get_untracked(),
            };
            let ok = store.reset_password_confirm(req).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_auth();
                toast.success("密码已更新，请用新密码登录。");
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
                    <h1 class="text-center font-bold text-xl">"设置新密码"</h1>

                    <div class="form-control">
                        <label class="label" for="new_password">
                            <span class="label-text">"新密码 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="new_password"
                            type="password"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="re_new_password">
                            <span class="label-text">"确认新密码 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="re_new_password"
                            type="password"
                            on:input=move |ev| set_re_new_password.set(event_target_value(&ev))
                            prop:value=re_new_password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                            } else {
                                "更新密码".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
