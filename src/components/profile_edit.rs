//! 资料编辑页面
//!
//! 打开时直接拉取公开资料回填表单；保存走认证的更新接口，
//! 成功与否只通过通知反馈，展示数据以下一次获取为准。

mod form_state;

use crate::api::BackendApi;
use crate::components::file_from_input;
use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::use_router;
use careerfolio_shared::Role;
use form_state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfileEditPage(uid: i64) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let form = FormState::new();
    // 服务端现有头像的 URL（仅展示）
    let (current_avatar, set_current_avatar) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 挂载时回填表单
    Effect::new(move |_| {
        spawn_local(async move {
            match BackendApi::default().fetch_user(uid).await {
                Ok(user) => {
                    set_current_avatar.set(user.avatar_url().map(str::to_string));
                    form.load(&user);
                }
                Err(e) => toast.error(&e),
            }
        });
    });

    let on_avatar_change = move |ev: web_sys::Event| {
        form.avatar.set(file_from_input(&ev));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.username.get().is_empty() {
            toast.error("请填写姓名。");
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = form.to_request(uid);
            let ok = store.update_profile(req, form.avatar.get_untracked()).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_auth();
                toast.success("资料已更新。");
                router.navigate("/");
            } else {
                let message = store.state().get_untracked().auth.message;
                toast.error(&message);
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-5">
            <h1 class="text-2xl font-bold text-center mb-6">"编辑资料"</h1>
            <form class="card bg-base-100 shadow-md px-8 pt-6 pb-8 mb-4" on:submit=on_submit>
                <div class="form-control mb-4">
                    <label class="label" for="username">
                        <span class="label-text">"姓名"</span>
                    </label>
                    <input
                        id="username"
                        type="text"
                        on:input=move |ev| form.username.set(event_target_value(&ev))
                        prop:value=form.username
                        class="input input-bordered w-full"
                    />
                </div>

                // 学生填学校
                <Show when=move || form.role.get() == Role::Student>
                    <div class="form-control mb-4">
                        <label class="label" for="affiliation">
                            <span class="label-text">"学校"</span>
                        </label>
                        <input
                            id="affiliation"
                            type="text"
                            on:input=move |ev| form.affiliation.set(event_target_value(&ev))
                            prop:value=form.affiliation
                            class="input input-bordered w-full"
                        />
                    </div>
                </Show>

                // 招聘者填公司与行业
                <Show when=move || form.role.get() == Role::Recruiter>
                    <div class="form-control mb-4">
                        <label class="label" for="company">
                            <span class="label-text">"公司"</span>
                        </label>
                        <input
                            id="company"
                            type="text"
                            on:input=move |ev| form.company.set(event_target_value(&ev))
                            prop:value=form.company
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control mb-4">
                        <label class="label" for="industry">
                            <span class="label-text">"行业"</span>
                        </label>
                        <input
                            id="industry"
                            type="text"
                            on:input=move |ev| form.industry.set(event_target_value(&ev))
                            prop:value=form.industry
                            class="input input-bordered w-full"
                        />
                    </div>
                </Show>

                <div class="form-control mb-4">
                    <label class="label" for="bio">
                        <span class="label-text">"个人简介"</span>
                    </label>
                    <textarea
                        id="bio"
                        on:input=move |ev| form.bio.set(event_target_value(&ev))
                        prop:value=form.bio
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>

                <div class="form-control mb-4">
                    <label class="label" for="profile_image">
                        <span class="label-text">"头像"</span>
                    </label>
                    <input
                        id="profile_image"
                        type="file"
                        accept="image/*"
                        on:change=on_avatar_change
                        class="file-input file-input-bordered w-full"
                    />
                </div>

                // 服务端现有头像
                {move || current_avatar.get().map(|src| view! {
                    <div class="mb-4">
                        <img src=src alt="头像" class="w-32 h-32 object-cover rounded-full" />
                    </div>
                })}

                <div class="flex items-center justify-between">
                    <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "保存中..." }.into_any()
                        } else {
                            "保存".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
