//! 资料编辑表单状态
//!
//! 将零散的 signal 整合为 `FormState` 结构体：持有数据、
//! 从已获取的资料回填、再转换为按角色区分的更新请求。

use careerfolio_shared::protocol::ProfileUpdateRequest;
use careerfolio_shared::{Role, RoleProfile, UserData};
use leptos::prelude::*;

/// 表单状态结构体
///
/// 全部字段是 `RwSignal`，实现 `Copy`，适合作为 Props 传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub role: RwSignal<Role>,

    // 角色相关字段：学生用 affiliation，招聘者用 company / industry
    pub affiliation: RwSignal<String>,
    pub company: RwSignal<String>,
    pub industry: RwSignal<String>,

    pub bio: RwSignal<String>,
    /// 新选择的头像文件（未选择时沿用服务端现有头像）
    ///
    /// File 不是 Send，使用本地存储的信号。
    pub avatar: RwSignal<Option<web_sys::File>, LocalStorage>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Student),
            affiliation: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            industry: RwSignal::new(String::new()),
            bio: RwSignal::new(String::new()),
            avatar: RwSignal::new_local(None),
        }
    }

    /// 用服务端返回的资料回填表单
    pub fn load(&self, user: &UserData) {
        self.username.set(user.username.clone());
        self.email.set(user.email.clone());
        self.role.set(user.role);
        if let Some(profile) = &user.profile {
            self.affiliation
                .set(profile.affiliation.clone().unwrap_or_default());
            self.company.set(profile.company.clone().unwrap_or_default());
            self.industry
                .set(profile.industry.clone().unwrap_or_default());
            self.bio.set(profile.bio.clone().unwrap_or_default());
        }
        self.avatar.set(None);
    }

    /// 将表单状态转换为更新请求
    ///
    /// 角色决定载荷里带哪些资料字段。
    pub fn to_request(&self, uid: i64) -> ProfileUpdateRequest {
        let role_profile = match self.role.get() {
            Role::Student => RoleProfile::Student {
                affiliation: self.affiliation.get(),
            },
            Role::Recruiter => RoleProfile::Recruiter {
                company: self.company.get(),
                industry: self.industry.get(),
            },
        };
        ProfileUpdateRequest {
            uid,
            username: self.username.get(),
            email: self.email.get(),
            role_profile,
            bio: self.bio.get(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
