#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end authorization scenarios using the static metadata and rank
//! plugins.

use std::sync::Arc;

use account_security::OperatorIdentity;
use password_reset::{PasswordResetLocalClient, Service};
use password_reset_sdk::{
    AnalyzedStatement, ErrorKind, PasswordResetClient, PasswordResetError, ResetPassword,
    Statement,
};
use secrecy::ExposeSecret;
use static_metadata_plugin::StaticMetadataPluginConfig;
use static_metadata_plugin::config::{TenantConfig, UserConfig};
use static_rank_plugin::StaticRankPluginConfig;

fn tenant(id: &str, name: &str) -> TenantConfig {
    TenantConfig {
        id: id.to_owned(),
        name: Some(name.to_owned()),
    }
}

fn user(username: &str, tenant_id: &str) -> UserConfig {
    UserConfig {
        username: username.to_owned(),
        tenant_id: tenant_id.to_owned(),
    }
}

fn client() -> PasswordResetLocalClient {
    let metadata = StaticMetadataPluginConfig {
        tenants: vec![
            tenant("sys", "system"),
            tenant("t1", "acme"),
            tenant("t2", "globex"),
        ],
        users: vec![
            user("root", "sys"),
            user("alice", "t1"),
            user("carol", "t1"),
            user("admin", "t1"),
            user("bob", "t2"),
        ],
    };
    let ranking = StaticRankPluginConfig {
        tenant_admins: vec!["admin".to_owned()],
    };

    let svc = Service::new(
        Arc::new(static_metadata_plugin::Service::from_config(&metadata)),
        Arc::new(static_rank_plugin::Service::from_config(&ranking)),
    );
    PasswordResetLocalClient::new(Arc::new(svc))
}

fn operator(bare_username: &str, tenant_id: &str) -> OperatorIdentity {
    OperatorIdentity::builder()
        .bare_username(bare_username)
        .tenant_id(tenant_id)
        .build()
}

fn reset(username: &str, password: &str) -> ResetPassword {
    ResetPassword::new(username, password.to_owned())
}

#[test]
fn non_root_cannot_address_foreign_tenant() {
    let err = client()
        .process(&operator("alice", "t1"), reset("bob@t2", "pw"))
        .unwrap_err();

    assert!(matches!(err, PasswordResetError::IllegalCrossTenantAddressing));
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[test]
fn tenant_admin_cannot_address_any_tenant_explicitly() {
    let client = client();
    for target in ["bob@t2", "carol@t1", "carol@acme", "nobody@nowhere"] {
        let err = client
            .process(&operator("admin", "t1"), reset(target, "pw"))
            .unwrap_err();
        assert!(
            matches!(err, PasswordResetError::IllegalCrossTenantAddressing),
            "{target} should be rejected, got: {err:?}"
        );
    }
}

#[test]
fn root_resets_user_in_foreign_tenant() {
    let request = client()
        .process(&operator("root", "sys"), reset("bob@t2", "s3cr3t"))
        .unwrap();

    assert_eq!(request.target().as_str(), "bob@t2");
    assert_eq!(request.new_password().expose_secret(), "s3cr3t");
}

#[test]
fn root_addresses_tenant_by_name() {
    let request = client()
        .process(&operator("root", "sys"), reset("bob@globex", "pw"))
        .unwrap();

    assert_eq!(request.target().as_str(), "bob@t2");
}

#[test]
fn root_lookup_miss_is_not_found() {
    let client = client();
    for target in ["bob@t1", "dave@t2", "bob@unknown"] {
        let err = client
            .process(&operator("root", "sys"), reset(target, "pw"))
            .unwrap_err();
        match err {
            PasswordResetError::TargetNotFound { ref username } => assert_eq!(username, target),
            other => panic!("Expected TargetNotFound for {target}, got: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

#[test]
fn bare_target_is_qualified_with_operator_tenant() {
    let client = client();
    let admin = operator("admin", "t1");

    let first = client.process(&admin, reset("carol", "pw")).unwrap();
    let second = client.process(&admin, reset("carol", "pw")).unwrap();

    assert_eq!(first.target().as_str(), "carol@t1");
    assert_eq!(first.target(), second.target());
}

#[test]
fn self_service_is_always_allowed() {
    let request = client()
        .process(&operator("alice", "t1"), reset("alice", "pw"))
        .unwrap();

    assert_eq!(request.target().as_str(), "alice@t1");
}

#[test]
fn peer_reset_is_denied_with_requested_name() {
    let err = client()
        .process(&operator("alice", "t1"), reset("carol", "pw"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let message = err.to_string();
    assert!(message.contains("alice"));
    assert!(message.contains("[carol]"));
    assert!(!message.contains("carol@t1"));
}

#[test]
fn member_cannot_reset_tenant_admin() {
    let err = client()
        .process(&operator("carol", "t1"), reset("admin", "pw"))
        .unwrap_err();

    assert!(matches!(
        err,
        PasswordResetError::InsufficientPrivilege { .. }
    ));
}

#[test]
fn password_is_passed_through_unchanged() {
    let password = "  p\u{e4}ss w\u{f6}rd\t\u{1f511} ";
    let request = client()
        .process(&operator("admin", "t1"), reset("alice", password))
        .unwrap();

    assert_eq!(
        request.new_password().expose_secret().as_bytes(),
        password.as_bytes()
    );
}

#[test]
fn analyze_marks_statement_as_row_affecting() {
    let analyzed = client()
        .analyze(
            &operator("root", "sys"),
            Statement::ResetPassword(reset("bob@t2", "pw")),
        )
        .unwrap();

    assert!(analyzed.expects_affected_rows());
    let AnalyzedStatement::ResetPassword(request) = analyzed;
    assert_eq!(request.target().as_str(), "bob@t2");
}

#[test]
fn client_is_shareable_across_threads() {
    let client = Arc::new(client());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            std::thread::spawn(move || {
                client
                    .process(&operator("root", "sys"), reset("bob@t2", "pw"))
                    .map(|r| r.target().as_str().to_owned())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "bob@t2");
    }
}
