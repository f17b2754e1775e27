//! 作品详情页面
//!
//! 作品 + 所有者卡片。招聘者可以从这里直接给作品所有者发送邀约
//! （走聊天的发送通道，成功后对方的会话列表里出现这条消息）。

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::now_timestamp;
use careerfolio_shared::date;
use careerfolio_shared::{Role, UserData};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductDetailPage(id: i64) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let state = store.state();

    let (scout_modal_open, set_scout_modal_open) = signal(false);
    let (scout_message, set_scout_message) = signal(String::new());

    // 挂载时获取作品与自己的公开资料（角色判定用）
    Effect::new(move |_| {
        spawn_local(async move {
            store.fetch_product(id).await;
        });
        if let Some(my_id) = store.my_user_id() {
            spawn_local(async move {
                store.fetch_my_data(my_id).await;
            });
        }
    });

    // 作品到位后再取所有者资料；Memo 去重避免重复拉取
    let owner_id = Memo::new(move |_| {
        state
            .get()
            .product
            .product_data
            .as_ref()
            .filter(|p| p.id == id)
            .map(|p| p.user)
    });
    Effect::new(move |_| {
        if let Some(owner) = owner_id.get() {
            spawn_local(async move {
                store.fetch_product_user(owner).await;
            });
        }
    });

    let product = Signal::derive(move || {
        state
            .get()
            .product
            .product_data
            .filter(|p| p.id == id)
    });
    let owner = Signal::derive(move || state.get().product.product_user);
    let i_am_recruiter = Signal::derive(move || {
        state
            .get()
            .product
            .my_info
            .map(|me| me.role == Role::Recruiter)
            .unwrap_or(false)
    });

    let on_send_scout = move |_| {
        let Some(receiver) = owner_id.get_untracked() else {
            toast.error("未找到对方用户。");
            return;
        };
        let message = scout_message.get_untracked();
        if message.trim().is_empty() {
            toast.error("请输入邀约内容。");
            return;
        }
        spawn_local(async move {
            if store.send_message(receiver, message).await {
                toast.success("邀约已发送。");
                set_scout_message.set(String::new());
                set_scout_modal_open.set(false);
            } else {
                toast.error("邀约发送失败。");
            }
        });
    };

    let owner_card = move |user: UserData| {
        view! {
            <div class="card bg-base-100 rounded-lg p-12 shadow-lg flex flex-col items-center w-full md:w-1/3 md:ml-20">
                {user.avatar_url().map(|src| view! {
                    <img src=src.to_string() alt=user.username.clone()
                        class="w-40 h-40 object-cover rounded-full border-2 border-base-300" />
                })}
                <h3 class="mt-4 font-bold text-lg">{user.username.clone()}</h3>
                <p class="text-base-content/60 text-sm text-center mt-2">
                    {user.profile.as_ref().and_then(|p| p.bio.clone()).unwrap_or_default()}
                </p>
                <Show when=move || i_am_recruiter.get()>
                    <button
                        class="btn btn-primary w-full mt-4"
                        on:click=move |_| set_scout_modal_open.set(true)
                    >
                        "发送邀约"
                    </button>
                </Show>
            </div>
        }
    };

    view! {
        <div class="flex justify-center min-h-screen bg-base-100">
            <div class="container px-4 mt-8">
                <div class="flex flex-col md:flex-row items-start">
                    {move || product.get().map(|p| {
                        let dates = format!(
                            "发布: {}  更新: {}",
                            date::parse_timestamp(&p.created_at).map(date::format_date).unwrap_or_default(),
                            date::parse_timestamp(&p.updated_at).map(date::format_date).unwrap_or_default(),
                        );
                        let thumbnail = p.thumbnail.clone().map(|src| view! {
                            <img src=src alt=p.title.clone() class="w-3/4" />
                        });
                        // 有详情链接时缩略图作为外链，否则纯展示
                        let figure = match p.detail_url.clone() {
                            Some(url) => view! {
                                <a href=url target="_blank" rel="noopener noreferrer"
                                    class="w-full flex justify-center hover:scale-105 transition-transform duration-200">
                                    {thumbnail}
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <div class="w-full flex justify-center">{thumbnail}</div>
                            }
                            .into_any(),
                        };
                        view! {
                            <div class="card bg-base-100 rounded-lg p-4 shadow-lg flex flex-col items-center w-full md:w-2/3 mb-8 md:mb-0">
                                {figure}
                                <h3 class="mt-4 font-bold text-lg">{p.title.clone()}</h3>
                                <div class="text-base-content/60 text-sm mt-2">{dates}</div>
                                <p class="mt-2 text-sm">{p.detail.clone()}</p>
                            </div>
                        }
                    })}
                    {move || owner.get().map(owner_card)}
                </div>
            </div>

            // 招聘者 -> 学生的邀约弹窗
            <Show when=move || scout_modal_open.get()>
                <div class="fixed inset-0 bg-black/50 flex justify-center items-center z-40">
                    <div class="bg-base-100 p-8 rounded shadow-lg md:w-2/3 w-full flex flex-col items-center">
                        <h2 class="text-lg font-bold mb-4">"发送邀约"</h2>
                        <textarea
                            class="textarea textarea-bordered w-full h-80"
                            placeholder="输入邀约内容"
                            prop:value=scout_message
                            on:input=move |ev| set_scout_message.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn-primary w-full mt-6" on:click=on_send_scout>
                            "发送"
                        </button>
                        <button
                            class="btn btn-ghost mt-4"
                            on:click=move |_| set_scout_modal_open.set(false)
                        >
                            "关闭"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
