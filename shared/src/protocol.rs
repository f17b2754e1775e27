use crate::{ChatMessage, Product, Role, RoleProfile, Session, UserData, UserInfo};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// `PATH` is the static path (or its prefix for parameterised endpoints);
/// `path()` yields the concrete path and defaults to `PATH`.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or prefix for parameterised endpoints).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry a bearer token.
    const AUTHENTICATED: bool = false;

    /// Concrete request path, including any path parameters.
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// Auth Requests
// =========================================================

/// Register a new account (student or recruiter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub role: Role,
}

impl ApiRequest for RegisterRequest {
    type Response = UserInfo;
    const PATH: &'static str = "/api/v1/auth/users/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Issue a token pair from credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = Session;
    const PATH: &'static str = "/api/v1/auth/jwt/create/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Activate an account from the uid/token pair mailed to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateRequest {
    pub uid: String,
    pub token: String,
}

impl ApiRequest for ActivateRequest {
    type Response = ();
    const PATH: &'static str = "/api/v1/auth/users/activation/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Request a password-reset mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = ();
    const PATH: &'static str = "/api/v1/auth/users/reset_password/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Confirm a password reset with the mailed uid/token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordConfirmRequest {
    pub uid: String,
    pub token: String,
    pub new_password: String,
    pub re_new_password: String,
}

impl ApiRequest for ResetPasswordConfirmRequest {
    type Response = ();
    const PATH: &'static str = "/api/v1/auth/users/reset_password_confirm/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Fetch the logged-in user (GET carries no body; the struct is a marker).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoRequest;

impl ApiRequest for UserInfoRequest {
    type Response = UserInfo;
    const PATH: &'static str = "/api/v1/auth/users/me/";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;
}

/// Update the profile of user `uid`.
///
/// The role-tagged [`RoleProfile`] replaces the optional-field bag: which
/// profile fields are sent is decided by the variant, not by the caller
/// remembering which combination is valid. The shared `bio` rides along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub uid: i64,
    pub username: String,
    pub email: String,
    #[serde(flatten)]
    pub role_profile: RoleProfile,
    pub bio: String,
}

impl ApiRequest for ProfileUpdateRequest {
    type Response = UserInfo;
    const PATH: &'static str = "/api/profile/";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("{}{}/update/", Self::PATH, self.uid)
    }
}

// =========================================================
// Product Requests
// =========================================================

/// List all products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const PATH: &'static str = "/api/products/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Create a product. The thumbnail file is attached at the transport
/// layer (multipart), so only the text fields live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub title: String,
    pub detail: String,
    pub detail_url: String,
}

impl ApiRequest for ProductCreateRequest {
    type Response = Product;
    const PATH: &'static str = "/api/products/";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;
}

/// Fetch one product by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchProductRequest {
    pub id: i64,
}

impl ApiRequest for FetchProductRequest {
    type Response = Product;
    const PATH: &'static str = "/api/products/";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}{}/", Self::PATH, self.id)
    }
}

/// Fetch a user's public profile by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchUserRequest {
    pub id: i64,
}

impl ApiRequest for FetchUserRequest {
    type Response = UserData;
    const PATH: &'static str = "/api/profile/";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}{}/", Self::PATH, self.id)
    }
}

// =========================================================
// Chat Requests
// =========================================================

/// List the latest message per conversation of `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListRequest {
    pub user_id: i64,
}

impl ApiRequest for MessageListRequest {
    type Response = Vec<ChatMessage>;
    const PATH: &'static str = "/api/messages/";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("{}{}", Self::PATH, self.user_id)
    }
}

/// Fetch the full thread between `user_id` and `other_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDetailRequest {
    pub user_id: i64,
    pub other_id: i64,
}

impl ApiRequest for MessageDetailRequest {
    type Response = Vec<ChatMessage>;
    const PATH: &'static str = "/api/get-messages/";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("{}{}/{}", Self::PATH, self.user_id, self.other_id)
    }
}

/// Send a message. The backend echoes the accepted body back, so the
/// response type is the request itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub user: i64,
    pub sender: i64,
    pub receiver: i64,
    pub message: String,
    pub is_read: bool,
}

impl SendMessageRequest {
    /// A scout / chat message from `sender` to `receiver`, unread.
    pub fn new(sender: i64, receiver: i64, message: String) -> Self {
        Self {
            user: sender,
            sender,
            receiver,
            message,
            is_read: false,
        }
    }
}

impl ApiRequest for SendMessageRequest {
    type Response = SendMessageRequest;
    const PATH: &'static str = "/api/send-message/";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_paths_embed_their_ids() {
        assert_eq!(FetchProductRequest { id: 7 }.path(), "/api/products/7/");
        assert_eq!(FetchUserRequest { id: 3 }.path(), "/api/profile/3/");
        assert_eq!(
            MessageDetailRequest {
                user_id: 1,
                other_id: 2
            }
            .path(),
            "/api/get-messages/1/2"
        );
        assert_eq!(MessageListRequest { user_id: 9 }.path(), "/api/messages/9");
    }

    #[test]
    fn static_paths_fall_back_to_const() {
        assert_eq!(LoginRequest::PATH, "/api/v1/auth/jwt/create/");
        let login = LoginRequest {
            email: "a@b.jp".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(login.path(), LoginRequest::PATH);
    }

    #[test]
    fn profile_update_flattens_role_fields() {
        let req = ProfileUpdateRequest {
            uid: 5,
            username: "mei".to_string(),
            email: "mei@example.jp".to_string(),
            role_profile: RoleProfile::Student {
                affiliation: "东都大学".to_string(),
            },
            bio: "你好".to_string(),
        };
        assert_eq!(req.path(), "/api/profile/5/update/");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["affiliation"], "东都大学");
        assert!(json.get("company").is_none());
    }

    #[test]
    fn authenticated_endpoints_are_marked() {
        // 需要 Bearer 令牌的端点
        assert!(UserInfoRequest::AUTHENTICATED);
        assert!(ProfileUpdateRequest::AUTHENTICATED);
        assert!(ProductCreateRequest::AUTHENTICATED);
        assert!(MessageListRequest::AUTHENTICATED);
        assert!(MessageDetailRequest::AUTHENTICATED);
        assert!(SendMessageRequest::AUTHENTICATED);
        // 匿名可用的端点
        assert!(!RegisterRequest::AUTHENTICATED);
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(!ListProductsRequest::AUTHENTICATED);
        assert!(!FetchProductRequest::AUTHENTICATED);
        assert!(!FetchUserRequest::AUTHENTICATED);
    }

    #[test]
    fn send_message_defaults_to_unread() {
        let req = SendMessageRequest::new(1, 2, "scout".to_string());
        assert!(!req.is_read);
        assert_eq!(req.user, 1);
        assert_eq!(req.sender, 1);
        assert_eq!(req.receiver, 2);
    }
}
