use super::*;

#[test]
fn parses_public_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::ProductList);
    assert_eq!(AppRoute::from_path(""), AppRoute::ProductList);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/reset-password"), AppRoute::ResetPassword);
}

#[test]
fn parses_mailed_link_routes() {
    assert_eq!(
        AppRoute::from_path("/activate/MQ/abc-123"),
        AppRoute::Activate {
            uid: "MQ".to_string(),
            token: "abc-123".to_string()
        }
    );
    assert_eq!(
        AppRoute::from_path("/password/reset/confirm/MQ/tok"),
        AppRoute::ResetPasswordConfirm {
            uid: "MQ".to_string(),
            token: "tok".to_string()
        }
    );
}

#[test]
fn post_route_wins_over_detail() {
    assert_eq!(AppRoute::from_path("/products/post"), AppRoute::ProductPost);
    assert_eq!(
        AppRoute::from_path("/products/12"),
        AppRoute::ProductDetail { id: 12 }
    );
}

#[test]
fn numeric_params_reject_garbage() {
    assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/profile/xyz/edit"), AppRoute::NotFound);
}

#[test]
fn message_counterpart_stays_a_string() {
    // 非数字的对方 id 仍然进入页面，数字校验在发送前进行
    assert_eq!(
        AppRoute::from_path("/messages/abc"),
        AppRoute::MessageDetail {
            uid: "abc".to_string()
        }
    );
}

#[test]
fn tolerates_trailing_slash_and_query() {
    assert_eq!(
        AppRoute::from_path("/messages/7/"),
        AppRoute::MessageDetail {
            uid: "7".to_string()
        }
    );
    assert_eq!(
        AppRoute::from_path("/products/3?from=list"),
        AppRoute::ProductDetail { id: 3 }
    );
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/profile/1"), AppRoute::NotFound);
}

#[test]
fn guard_table_matches_private_pages() {
    // 需要会话的页面
    assert!(AppRoute::ProductPost.requires_auth());
    assert!(AppRoute::ProductDetail { id: 1 }.requires_auth());
    assert!(AppRoute::ProfileEdit { uid: 1 }.requires_auth());
    assert!(AppRoute::Messages.requires_auth());
    assert!(
        AppRoute::MessageDetail {
            uid: "1".to_string()
        }
        .requires_auth()
    );
    // 匿名可达的页面
    assert!(!AppRoute::ProductList.requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Register.requires_auth());
    assert!(!AppRoute::ResetPassword.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn path_round_trip() {
    let routes = [
        AppRoute::ProductList,
        AppRoute::Login,
        AppRoute::ProductPost,
        AppRoute::ProductDetail { id: 42 },
        AppRoute::ProfileEdit { uid: 8 },
        AppRoute::Messages,
        AppRoute::MessageDetail {
            uid: "15".to_string(),
        },
    ];
    for route in routes {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn auth_failure_redirects_to_login() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
}
