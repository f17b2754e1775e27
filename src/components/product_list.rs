//! 作品列表页面（默认路由，匿名可浏览）
//!
//! 匿名用户点击卡片不进入详情，而是弹出登录引导。

use crate::components::toast::use_toast;
use crate::store::use_store;
use crate::web::now_timestamp;
use crate::web::router::Link;
use careerfolio_shared::date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let state = store.state();
    let is_authenticated = store.is_authenticated_signal();

    let (login_modal_open, set_login_modal_open) = signal(false);

    // 挂载时获取一次列表
    Effect::new(move |_| {
        spawn_local(async move {
            store.fetch_product_list().await;
            let st = store.state().get_untracked();
            if st.product.flags.is_error {
                toast.error(&st.product.message);
            }
        });
    });

    let products = Signal::derive(move || state.get().product.product_list);
    let is_loading = move || state.get().product.flags.is_loading;

    view! {
        <div class="min-h-screen bg-base-100">
            <div class="text-center my-8">
                <h2 class="text-4xl font-bold">"作品广场"</h2>
            </div>
            <div class="container mx-auto px-4 pb-8">
                <Show when=move || is_loading() && products.get().is_empty()>
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-8">
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |product| {
                            let card = view! {
                                <div class="card bg-base-100 border shadow-sm overflow-hidden hover:scale-105 transition-transform duration-200">
                                    {product.thumbnail.clone().map(|src| view! {
                                        <figure>
                                            <img src=src alt=product.title.clone() class="w-full h-48 object-cover" />
                                        </figure>
                                    })}
                                    <div class="card-body p-4">
                                        <h3 class="card-title text-base">{product.title.clone()}</h3>
                                        <p class="text-sm text-base-content/60">
                                            "发布于 " {date::time_ago_str(&product.created_at, now_timestamp())}
                                        </p>
                                    </div>
                                </div>
                            };
                            if is_authenticated.get_untracked() {
                                view! {
                                    <Link to=format!("/products/{}", product.id)>{card}</Link>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="cursor-pointer" on:click=move |_| set_login_modal_open.set(true)>
                                        {card}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    />
                </div>

                <Show when=move || !is_loading() && products.get().is_empty()>
                    <p class="text-center py-8 text-base-content/50">"还没有作品，来发布第一个吧。"</p>
                </Show>
            </div>

            // 匿名用户的登录引导弹窗
            <Show when=move || login_modal_open.get()>
                <div class="fixed inset-0 bg-black/50 flex justify-center items-center z-40">
                    <div class="bg-base-100 p-8 rounded shadow-lg md:w-1/2 w-full flex flex-col items-center">
                        <h2 class="font-bold mb-4">"登录后即可查看作品详情。"</h2>
                        <div class="py-2">
                            <Link to="/login" class="link link-primary">"去登录"</Link>
                        </div>
                        <div class="py-2">
                            <Link to="/register" class="link link-primary">"注册新账户"</Link>
                        </div>
                        <button
                            class="btn btn-ghost mt-4"
                            on:click=move |_| set_login_modal_open.set(false)
                        >
                            "关闭"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
