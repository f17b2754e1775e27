//! 访问令牌解码模块
//!
//! 客户端不验证签名，只读取 JWT 载荷中的 user_id / exp 两个声明，
//! 其余部分一律当作不透明字符串转发给后端。

use crate::Session;
use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// 访问令牌载荷中客户端关心的声明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: i64,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// 解码访问令牌的载荷段
///
/// 令牌格式为 `header.payload.signature`，载荷是 base64url 编码的
/// JSON。任何一步失败都返回 None：格式错误的令牌和缺失的令牌在
/// 客户端是同一种状态（未登录）。
pub fn decode_access_claims(token: &str) -> Option<AccessClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

impl Session {
    /// 当前会话对应的用户 id，令牌不可解析时返回 None
    pub fn user_id(&self) -> Option<i64> {
        decode_access_claims(&self.access).map(|c| c.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.sig",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_user_id_and_exp() {
        let token = token_with_payload(r#"{"user_id":42,"exp":1700000000}"#);
        let claims = decode_access_claims(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn exp_is_optional() {
        let token = token_with_payload(r#"{"user_id":7}"#);
        let claims = decode_access_claims(&token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn accepts_padded_payloads() {
        let payload = URL_SAFE.encode(r#"{"user_id":9}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_access_claims(&token).unwrap().user_id, 9);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_access_claims("").is_none());
        assert!(decode_access_claims("only-one-segment").is_none());
        assert!(decode_access_claims("a.%%%.c").is_none());
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(decode_access_claims(&not_json).is_none());
    }

    #[test]
    fn session_exposes_user_id() {
        let session = Session {
            access: token_with_payload(r#"{"user_id":12}"#),
            refresh: "r".to_string(),
        };
        assert_eq!(session.user_id(), Some(12));

        let broken = Session {
            access: "garbage".to_string(),
            refresh: "r".to_string(),
        };
        assert_eq!(broken.user_id(), None);
    }
}
