//! 申请重置密码页面

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::use_router;
use careerfolio_shared::protocol::ResetPasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            toast.error("请填写邮箱。");
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = ResetPasswordRequest {
                email: email.get_untracked(),
            };
            let ok = store.reset_password(req).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_auth();
                toast.success("重置密码的邮件已发送。");
                router.navigate("/");
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
                    <h1 class="text-center font-bold text-xl">"重置密码"</h1>

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"邮箱 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "发送中..." }.into_any()
                            } else {
                                "发送重置邮件".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
