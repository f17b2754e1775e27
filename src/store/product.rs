//! 作品切片
//!
//! 列表与详情都是只读副本：发布成功后不在本地插入，
//! 下一次列表获取自然包含新条目（最终一致，靠重取不靠推送）。

use super::{Action, StatusFlags, Store};
use crate::api::BackendApi;
use careerfolio_shared::protocol::ProductCreateRequest;
use careerfolio_shared::{MSG_MISSING_TOKEN, Product, UserData};
use web_sys::File;

/// 作品切片状态
#[derive(Debug, Clone, Default)]
pub struct ProductState {
    pub product_list: Vec<Product>,
    /// 详情页当前展示的作品
    pub product_data: Option<Product>,
    /// 作品所有者的公开资料
    pub product_user: Option<UserData>,
    /// 当前登录用户的公开资料（详情页的角色判定）
    pub my_info: Option<UserData>,
    pub flags: StatusFlags,
    pub message: String,
}

/// 作品动作
#[derive(Debug, Clone)]
pub enum ProductAction {
    Pending,
    ListLoaded(Vec<Product>),
    ProductLoaded(Product),
    UserLoaded(UserData),
    MyDataLoaded(UserData),
    Posted(Product),
    Failed(String),
    Reset,
}

pub fn reduce(state: &mut ProductState, action: ProductAction) {
    match action {
        ProductAction::Pending => {
            state.flags.begin();
            state.message.clear();
        }
        ProductAction::ListLoaded(list) => {
            state.flags.succeed();
            // 整体替换，不做合并
            state.product_list = list;
        }
        ProductAction::ProductLoaded(product) => {
            state.flags.succeed();
            state.product_data = Some(product);
        }
        ProductAction::UserLoaded(user) => {
            state.flags.succeed();
            state.product_user = Some(user);
        }
        ProductAction::MyDataLoaded(user) => {
            state.flags.succeed();
            state.my_info = Some(user);
        }
        ProductAction::Posted(_) => {
            state.flags.succeed();
        }
        ProductAction::Failed(message) => {
            state.flags.fail();
            state.message = message;
        }
        ProductAction::Reset => {
            state.flags.reset();
            state.message.clear();
        }
    }
}

// =========================================================
// 异步操作
// =========================================================

impl Store {
    fn dispatch_product(&self, action: ProductAction) {
        self.dispatch(Action::Product(action));
    }

    /// 获取作品列表（匿名可用）
    pub async fn fetch_product_list(&self) {
        self.dispatch_product(ProductAction::Pending);
        match BackendApi::default().list_products().await {
            Ok(list) => self.dispatch_product(ProductAction::ListLoaded(list)),
            Err(e) => self.dispatch_product(ProductAction::Failed(e)),
        }
    }

    /// 获取单个作品
    pub async fn fetch_product(&self, id: i64) {
        self.dispatch_product(ProductAction::Pending);
        match BackendApi::default().fetch_product(id).await {
            Ok(product) => self.dispatch_product(ProductAction::ProductLoaded(product)),
            Err(e) => self.dispatch_product(ProductAction::Failed(e)),
        }
    }

    /// 获取作品所有者的公开资料
    pub async fn fetch_product_user(&self, id: i64) {
        self.dispatch_product(ProductAction::Pending);
        match BackendApi::default().fetch_user(id).await {
            Ok(user) => self.dispatch_product(ProductAction::UserLoaded(user)),
            Err(e) => self.dispatch_product(ProductAction::Failed(e)),
        }
    }

    /// 获取自己的公开资料（详情页判断是否展示"发送邀约"）
    pub async fn fetch_my_data(&self, id: i64) {
        self.dispatch_product(ProductAction::Pending);
        match BackendApi::default().fetch_user(id).await {
            Ok(user) => self.dispatch_product(ProductAction::MyDataLoaded(user)),
            Err(e) => self.dispatch_product(ProductAction::Failed(e)),
        }
    }

    /// 发布作品
    ///
    /// 前置条件：会话存在。缺少令牌时直接失败，不发网络请求。
    pub async fn post_product(&self, req: ProductCreateRequest, thumbnail: Option<File>) -> bool {
        self.dispatch_product(ProductAction::Pending);
        let Some(token) = self.access_token() else {
            self.dispatch_product(ProductAction::Failed(MSG_MISSING_TOKEN.to_string()));
            return false;
        };
        match BackendApi::default()
            .create_product(&token, &req, thumbnail.as_ref())
            .await
        {
            Ok(product) => {
                self.dispatch_product(ProductAction::Posted(product));
                true
            }
            Err(e) => {
                self.dispatch_product(ProductAction::Failed(e));
                false
            }
        }
    }

    /// 清空作品切片的标志与消息
    pub fn reset_product(&self) {
        self.dispatch_product(ProductAction::Reset);
    }
}
