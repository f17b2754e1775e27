//! 注册页面
//!
//! 学生与招聘者共用一个表单，顶部切换角色。

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::{Link, use_router};
use careerfolio_shared::Role;
use careerfolio_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (role, set_role) = signal(Role::Student);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (re_password, set_re_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty()
            || email.get().is_empty()
            || password.get().is_empty()
            || re_password.get().is_empty()
        {
            toast.error("请填写所有字段。");
            return;
        }
        if password.get() != re_password.get() {
            toast.error("两次输入的密码不一致。");
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = RegisterRequest {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                re_password: re_password.get_untracked(),
                role: role.get_untracked(),
            };
            let ok = store.register(req).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_auth();
                toast.success("确认邮件已发送，请完成账户激活。");
                router.navigate("/");
            } else {
                let message = store.state().get_untracked().auth.message;
                toast.error(&message);
            }
        });
    };

    let role_btn = move |target: Role| {
        if role.get() == target {
            "btn btn-primary"
        } else {
            "btn btn-ghost"
        }
    };

    view! {
        <div class="flex flex-col min-h-screen bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-md mx-auto mt-8">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="text-center font-bold text-xl">
                        {move || match role.get() {
                            Role::Student => "学生注册",
                            Role::Recruiter => "招聘者注册",
                        }}
                    </h1>

                    <div class="flex justify-around mb-2">
                        <button
                            type="button"
                            class=move || role_btn(Role::Student)
                            on:click=move |_| set_role.set(Role::Student)
                        >
                            "学生"
                        </button>
                        <button
                            type="button"
                            class=move || role_btn(Role::Recruiter)
                            on:click=move |_| set_role.set(Role::Recruiter)
                        >
                            "招聘者"
                        </button>
                    </div>

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">"姓名 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="username"
                            type="text"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered"
                            required
                        />
                    </div>

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

                    <div class="form-control">
                        <label class="label" for="re_password">
                            <span class="label-text">"确认密码 "<span class="text-error">"*"</span></span>
                        </label>
                        <input
                            id="re_password"
                            type="password"
                            on:input=move |ev| set_re_password.set(event_target_value(&ev))
                            prop:value=re_password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                            } else {
                                "注册".into_any()
                            }}
                        </button>
                    </div>

                    <div class="text-center py-2">
                        <Link to="/login" class="link link-primary">"已有账户？去登录"</Link>
                    </div>
                </form>
            </div>
        </div>
    }
}
