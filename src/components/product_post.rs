//! 发布作品页面

use crate::components::file_from_input;
use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::router::use_router;
use careerfolio_shared::protocol::ProductCreateRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductPostPage() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let router = use_router();

    let (title, set_title) = signal(String::new());
    let (detail, set_detail) = signal(String::new());
    let (detail_url, set_detail_url) = signal(String::new());
    // File 不是 Send，放本地存储的信号里
    let thumbnail = RwSignal::new_local(None::<web_sys::File>);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        // 选择后又取消时保持为 None
        thumbnail.set(file_from_input(&ev));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().is_empty() {
            toast.error("请填写标题。");
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = ProductCreateRequest {
                title: title.get_untracked(),
                detail: detail.get_untracked(),
                detail_url: detail_url.get_untracked(),
            };
            let ok = store.post_product(req, thumbnail.get_untracked()).await;
            set_is_submitting.set(false);
            if ok {
                store.reset_product();
                toast.success("发布完成！");
                // 列表页下一次获取时自然包含新作品
                router.navigate("/");
            } else {
                let message = store.state().get_untracked().product.message;
                toast.error(&message);
            }
        });
    };

    view! {
        <div class="container mx-auto mt-10 w-full md:w-3/5 px-4">
            <h1 class="text-2xl font-bold mb-5 flex justify-center">"发布作品"</h1>
            <form on:submit=on_submit>
                <div class="form-control mb-6">
                    <label class="label" for="title">
                        <span class="label-text">"标题"</span>
                    </label>
                    <input
                        id="title"
                        type="text"
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=title
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control mb-6">
                    <label class="label" for="detail">
                        <span class="label-text">"详细介绍"</span>
                    </label>
                    <textarea
                        id="detail"
                        rows="5"
                        on:input=move |ev| set_detail.set(event_target_value(&ev))
                        prop:value=detail
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>
                <div class="form-control mb-6">
                    <label class="label" for="thumbnail">
                        <span class="label-text">"缩略图"</span>
                    </label>
                    <input
                        id="thumbnail"
                        type="file"
                        accept="image/*"
                        on:change=on_file_change
                        class="file-input file-input-bordered w-full"
                    />
                </div>
                <div class="form-control mb-6">
                    <label class="label" for="detail_url">
                        <span class="label-text">"详情链接"</span>
                    </label>
                    <input
                        id="detail_url"
                        type="text"
                        on:input=move |ev| set_detail_url.set(event_target_value(&ev))
                        prop:value=detail_url
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="flex justify-center">
                    <button class="btn btn-primary px-8" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "发布中..." }.into_any()
                        } else {
                            "发布".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
