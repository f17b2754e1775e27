//! 登录页面

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::{Link, use_router};
use careerfolio_shared::protocol::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            toast.error("请填写邮箱和密码。");
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let ok = store.login(req).await;
            set_is_submitting.set(false);
            if ok {
                toast.success("登录成功。");
                store.reset_auth();
                router.navigate("/");
                // 登录后立即取一次当前用户信息
                spawn_local(async move {
                    store.get_user_info().await;
                });
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
                    <h1 class="text-center font-bold text-xl mb-2">"登录"</h1>

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

                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"密码 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                            } else {
                                "登录".into_any()
                            }}
                        </button>
                    </div>

                    <div class="text-center py-2">
                        <Link to="/register" class="link link-primary">"新用户注册"</Link>
                    </div>
                    <div class="text-center py-2">
                        <Link to="/reset-password" class="link link-primary">"忘记密码？"</Link>
                    </div>
                </form>
            </div>
        </div>
    }
}
