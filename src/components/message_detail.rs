//! 对话页面
//!
//! 挂载时拉取会话列表、对话线程与对方资料。发送成功后整体重取
//! 线程与列表（不做乐观插入）；发送失败时线程保持原样，只冒一条
//! 通用错误。URL 里的对方 id 非数字时在发出任何请求之前拒绝。

use crate::components::icons::{SendIcon, UserCircle};
use crate::components::messages::ConversationList;
use crate::components::toast::use_toast;
use crate::store::chat::parse_counterpart_id;
use crate::store::use_store;
use crate::web::now_timestamp;
use careerfolio_shared::date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MessageDetailPage(uid: String) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let state = store.state();
    let my_id = store.my_user_id().unwrap_or(0);

    // 对方 id 校验一次，整页共用
    let counterpart_id = parse_counterpart_id(&uid);
    let (new_message, set_new_message) = signal(String::new());

    // 挂载时：列表总是取；线程与对方资料只在 id 有效时取
    {
        let valid_counterpart = counterpart_id.as_ref().ok().copied();
        Effect::new(move |_| {
            spawn_local(async move {
                store.fetch_message_list().await;
            });
            if let Some(other) = valid_counterpart {
                spawn_local(async move {
                    store.fetch_message_detail(other).await;
                });
                spawn_local(async move {
                    store.fetch_chat_user(other).await;
                });
            }
        });
    }

    let thread = Signal::derive(move || state.get().chat.message_detail);
    let counterpart = Signal::derive(move || state.get().chat.user_data);

    let on_send = {
        let counterpart_id = counterpart_id.clone();
        move |_| {
            // 非数字的对方 id：在发出任何网络请求之前拒绝
            let other = match &counterpart_id {
                Ok(other) => *other,
                Err(e) => {
                    toast.error(e);
                    return;
                }
            };
            let body = new_message.get_untracked();
            if body.trim().is_empty() {
                return;
            }
            spawn_local(async move {
                if store.send_message(other, body).await {
                    set_new_message.set(String::new());
                    // 发送成功后重取线程与会话列表
                    store.fetch_message_detail(other).await;
                    store.fetch_message_list().await;
                } else {
                    let message = store.state().get_untracked().chat.message;
                    toast.error(&message);
                }
            });
        }
    };

    view! {
        <div class="container mx-auto">
            <div class="py-6" style="height: 92vh">
                <div class="flex border border-base-300 rounded shadow-lg h-full">
                    // 左侧：会话列表
                    <div class="w-1/3 border-r flex flex-col">
                        <ConversationList />
                    </div>

                    // 右侧：对话
                    <div class="w-2/3 flex flex-col">
                        // 对方信息头
                        <div class="py-2 px-3 bg-base-200 flex items-center">
                            {move || match counterpart.get() {
                                Some(user) => view! {
                                    <div class="flex items-center">
                                        {match user.avatar_url() {
                                            Some(src) => view! {
                                                <img src=src.to_string() alt="头像" class="w-10 h-10 rounded-full object-cover" />
                                            }.into_any(),
                                            None => view! {
                                                <UserCircle class="w-10 h-10 text-base-content/40" />
                                            }.into_any(),
                                        }}
                                        <div class="ml-4">
                                            <p>{user.username.clone()}</p>
                                            <p class="text-xs text-base-content/60 mt-1">
                                                {user.headline().unwrap_or_default().to_string()}
                                            </p>
                                        </div>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <p class="text-base-content/50">"加载对方信息中..."</p>
                                }.into_any(),
                            }}
                        </div>

                        // 消息气泡
                        <div class="flex-1 overflow-auto bg-base-200/50">
                            <div class="py-2 px-3">
                                <For
                                    each=move || thread.get()
                                    key=|m| m.id
                                    children=move |message| {
                                        let mine = message.sender == my_id;
                                        let when = date::time_ago_str(&message.created_at, now_timestamp());
                                        let wrapper = if mine { "flex justify-end mb-2" } else { "flex mb-2" };
                                        let bubble = if mine {
                                            "rounded py-2 px-3 bg-success/30"
                                        } else {
                                            "rounded py-2 px-3 bg-base-100"
                                        };
                                        view! {
                                            <div class=wrapper>
                                                <div class=bubble>
                                                    <p class="text-sm mt-1">{message.message.clone()}</p>
                                                    <p class="text-right text-xs text-base-content/50 mt-1">{when}</p>
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        // 输入框
                        <div class="bg-base-200 px-4 py-4 flex items-center gap-4">
                            <input
                                type="text"
                                class="input input-bordered flex-1"
                                placeholder="输入消息"
                                prop:value=new_message
                                on:input=move |ev| set_new_message.set(event_target_value(&ev))
                            />
                            <button class="btn btn-primary gap-2" on:click=on_send>
                                <SendIcon class="h-4 w-4" /> "发送"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
