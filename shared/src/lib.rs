use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod token;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中持久化会话的固定键
pub const SESSION_STORAGE_KEY: &str = "careerfolio_session";

/// 认证请求缺少访问令牌时的固定错误消息
pub const MSG_MISSING_TOKEN: &str = "缺少访问令牌，请重新登录。";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
///
/// 学生发布作品，招聘者浏览并发起沟通。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
        }
    }
}

/// 会话凭证对
///
/// 登录成功后由后端签发，序列化后整体存入 LocalStorage。
/// 后端字段名为 access / refresh，与 JWT 签发接口一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
}

/// 用户资料（后端返回的可选字段集合）
///
/// 学生填写 affiliation（学校），招聘者填写 company / industry。
/// 更新时客户端使用按角色区分的 [`RoleProfile`]，此结构只承载读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// 公开的用户数据（/api/profile/{id}/ 返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl UserData {
    /// 头像 URL，不存在时返回 None
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.profile_image.as_deref())
    }

    /// 列表中展示的副标题：招聘者显示公司，学生显示学校
    pub fn headline(&self) -> Option<&str> {
        let profile = self.profile.as_ref()?;
        match self.role {
            Role::Recruiter => profile.company.as_deref(),
            Role::Student => profile.affiliation.as_deref(),
        }
    }
}

/// 当前登录用户信息（/api/v1/auth/users/me/ 返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// 作品（portfolio 条目）
///
/// 列表获取后不可变，详情按 id 单独获取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub detail: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub detail_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// 作品所有者的用户 id
    pub user: i64,
}

/// 聊天消息
///
/// 客户端视角只追加，不可编辑或删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender: i64,
    pub sender_user: UserData,
    pub receiver: i64,
    pub receiver_user: UserData,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl ChatMessage {
    /// 以 `me` 的视角返回对话的另一方
    pub fn counterpart(&self, me: i64) -> &UserData {
        if self.sender == me {
            &self.receiver_user
        } else {
            &self.sender_user
        }
    }

    /// 以 `me` 的视角返回另一方的用户 id
    pub fn counterpart_id(&self, me: i64) -> i64 {
        if self.sender == me {
            self.receiver
        } else {
            self.sender
        }
    }
}

/// 按角色区分的资料更新内容
///
/// 更新载荷不再是一包可选字段：角色决定哪些字段有意义，
/// 类型上就排除了"学生填公司"这类无效组合。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Student { affiliation: String },
    Recruiter { company: String, industry: String },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Student { .. } => Role::Student,
            RoleProfile::Recruiter { .. } => Role::Recruiter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"recruiter\"").unwrap(),
            Role::Recruiter
        );
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            access: "a.b.c".to_string(),
            refresh: "d.e.f".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let user: UserData =
            serde_json::from_str(r#"{"username":"mei","role":"student"}"#).unwrap();
        assert_eq!(user.username, "mei");
        assert!(user.profile.is_none());
        assert!(user.avatar_url().is_none());
    }

    #[test]
    fn headline_depends_on_role() {
        let profile = Profile {
            affiliation: Some("东都大学".to_string()),
            company: Some("星河科技".to_string()),
            ..Profile::default()
        };
        let mut user = UserData {
            username: "mei".to_string(),
            email: String::new(),
            role: Role::Student,
            profile: Some(profile),
        };
        assert_eq!(user.headline(), Some("东都大学"));
        user.role = Role::Recruiter;
        assert_eq!(user.headline(), Some("星河科技"));
    }

    #[test]
    fn role_profile_is_tagged_by_role() {
        let update = RoleProfile::Recruiter {
            company: "星河科技".to_string(),
            industry: "软件".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["role"], "recruiter");
        assert_eq!(json["company"], "星河科技");

        let student: RoleProfile =
            serde_json::from_str(r#"{"role":"student","affiliation":"东都大学"}"#).unwrap();
        assert_eq!(student.role(), Role::Student);
    }

    #[test]
    fn counterpart_follows_viewer() {
        let mk_user = |name: &str| UserData {
            username: name.to_string(),
            email: String::new(),
            role: Role::Student,
            profile: None,
        };
        let msg = ChatMessage {
            id: 1,
            sender: 10,
            sender_user: mk_user("sender"),
            receiver: 20,
            receiver_user: mk_user("receiver"),
            message: "hi".to_string(),
            is_read: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(msg.counterpart(10).username, "receiver");
        assert_eq!(msg.counterpart(20).username, "sender");
        assert_eq!(msg.counterpart_id(10), 20);
        assert_eq!(msg.counterpart_id(20), 10);
    }
}
