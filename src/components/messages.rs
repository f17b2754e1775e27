//! 会话列表页面
//!
//! 列表项是每个对话的最新一条消息，点击进入与对方的完整对话。
//! 列表在挂载时获取一次，发送消息成功后由对话页触发重取。

use crate::components::icons::UserCircle;
use crate::store::use_store;
use crate::web::now_timestamp;
use crate::web::router::Link;
use careerfolio_shared::date;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 左侧会话列表（会话页与对话页共用）
#[component]
pub fn ConversationList() -> impl IntoView {
    let store = use_store();
    let state = store.state();
    let my_id = store.my_user_id().unwrap_or(0);

    let conversations = Signal::derive(move || state.get().chat.message_list);

    view! {
        <div class="flex-1 overflow-auto">
            <For
                each=move || conversations.get()
                key=|m| m.id
                children=move |message| {
                    let counterpart = message.counterpart(my_id).clone();
                    let target = format!("/messages/{}", message.counterpart_id(my_id));
                    let when = date::time_ago_str(&message.created_at, now_timestamp());
                    view! {
                        <Link to=target class="px-3 flex items-center cursor-pointer hover:bg-base-200">
                            {match counterpart.avatar_url() {
                                Some(src) => view! {
                                    <img src=src.to_string() alt="头像" class="h-12 w-12 rounded-full object-cover" />
                                }.into_any(),
                                None => view! {
                                    <UserCircle class="h-12 w-12 text-base-content/40" />
                                }.into_any(),
                            }}
                            <div class="ml-4 flex-1 border-b border-base-200 py-4">
                                <div class="flex items-end justify-between">
                                    <p class="font-medium">{counterpart.username.clone()}</p>
                                    <p class="text-xs text-base-content/50">{when}</p>
                                </div>
                                <p class="text-base-content/70 mt-1 text-sm truncate">
                                    {message.message.clone()}
                                </p>
                            </div>
                        </Link>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let store = use_store();
    let state = store.state();

    // 挂载时获取会话列表
    Effect::new(move |_| {
        spawn_local(async move {
            store.fetch_message_list().await;
        });
    });

    let is_empty = move || {
        let chat = state.get().chat;
        !chat.flags.is_loading && chat.message_list.is_empty()
    };

    view! {
        <div class="container mx-auto">
            <div class="py-6" style="height: 92vh">
                <div class="flex border border-base-300 rounded shadow-lg h-full">
                    <div class="w-1/3 border-r flex flex-col">
                        <ConversationList />
                        <Show when=is_empty>
                            <p class="text-center text-base-content/50 py-8">"还没有任何会话。"</p>
                        </Show>
                    </div>
                    <div class="w-2/3 flex flex-col items-center justify-center text-base-content/50">
                        "选择一个会话开始聊天"
                    </div>
                </div>
            </div>
        </div>
    }
}
