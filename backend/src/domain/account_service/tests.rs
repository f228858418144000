//! Tests for the account service using mocked driven ports.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockAccessTokenIssuer, MockPasswordHasher, MockUserRepository};
use crate::domain::{ErrorCode, UserId, UserRecord};

type Service = AccountService<MockUserRepository, MockPasswordHasher, MockAccessTokenIssuer>;

fn service(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockAccessTokenIssuer,
) -> Service {
    AccountService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

#[fixture]
fn registration() -> UserRegistration {
    UserRegistration::try_from_parts(
        "usuario1",
        "51992413404",
        "usuario1@gmail.com",
        "usuario1",
        "senha123",
    )
    .expect("valid registration")
}

fn stored_record(registration: UserRegistration) -> UserRecord {
    registration.into_record(PasswordHash::new("$argon2id$stored"))
}

fn matching_hasher() -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .returning(|password, _| Ok(password == "senha123"));
    hasher
}

#[rstest]
#[tokio::test]
async fn register_hashes_password_before_storing(registration: UserRegistration) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "senha123")
        .times(1)
        .returning(|_| Ok(PasswordHash::new("$argon2id$fresh")));
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .withf(|record| record.password_hash().as_str() == "$argon2id$fresh")
        .times(1)
        .returning(|record| Ok(record.into_user()));

    let user = service(users, hasher, MockAccessTokenIssuer::new())
        .register(registration)
        .await
        .expect("registration succeeds");

    assert_eq!(user.login(), "usuario1");
    assert_eq!(user.email(), "usuario1@gmail.com");
}

#[rstest]
#[case("login")]
#[case("email")]
#[tokio::test]
async fn register_reports_duplicates(registration: UserRegistration, #[case] field: &'static str) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new("$argon2id$fresh")));
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .returning(move |_| Err(UserPersistenceError::duplicate(field)));

    let err = service(users, hasher, MockAccessTokenIssuer::new())
        .register(registration)
        .await
        .expect_err("duplicates are rejected");

    assert_eq!(err.code(), ErrorCode::Duplicate);
    assert_eq!(err.message(), "Usuário já cadastrado.");
    assert_eq!(
        err.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!(field))
    );
}

#[rstest]
#[tokio::test]
async fn register_surfaces_hash_failures_as_internal(registration: UserRegistration) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(PasswordHashError::hashing("bad params")));
    let mut users = MockUserRepository::new();
    users.expect_insert().never();

    let err = service(users, hasher, MockAccessTokenIssuer::new())
        .register(registration)
        .await
        .expect_err("hash failure propagates");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn authenticate_issues_token_for_matching_user(registration: UserRegistration) {
    let record = stored_record(registration);
    let expected_id = record.user().id().clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_login()
        .withf(|login| login == "usuario1")
        .returning(move |_| Ok(Some(record.clone())));
    let mut tokens = MockAccessTokenIssuer::new();
    tokens
        .expect_issue()
        .withf(move |user: &UserId| user == &expected_id)
        .times(1)
        .returning(|_| {
            Ok(AccessToken::new(
                "signed.token.value",
                Utc.with_ymd_and_hms(2026, 1, 1, 1, 0, 0).single().expect("valid instant"),
            ))
        });

    let creds = LoginCredentials::try_from_parts("usuario1", "senha123").expect("creds");
    let token = service(users, matching_hasher(), tokens)
        .authenticate(&creds)
        .await
        .expect("login succeeds");

    assert_eq!(token.as_str(), "signed.token.value");
}

#[rstest]
#[case("usuario1", "wrong-password")]
#[case("unknown", "senha123")]
#[case("USUARIO1", "senha123")]
#[tokio::test]
async fn authenticate_rejects_bad_credentials(
    registration: UserRegistration,
    #[case] login: &str,
    #[case] password: &str,
) {
    let record = stored_record(registration);
    let mut users = MockUserRepository::new();
    users.expect_find_by_login().returning(move |login| {
        Ok((login == record.user().login()).then(|| record.clone()))
    });
    let mut tokens = MockAccessTokenIssuer::new();
    tokens.expect_issue().never();

    let creds = LoginCredentials::try_from_parts(login, password).expect("creds");
    let err = service(users, matching_hasher(), tokens)
        .authenticate(&creds)
        .await
        .expect_err("login fails");

    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    assert_eq!(err.message(), "Login ou senha inválidos.");
}

#[rstest]
#[tokio::test]
async fn authenticate_maps_store_outage_to_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_login()
        .returning(|_| Err(UserPersistenceError::unavailable("lock poisoned")));

    let creds = LoginCredentials::try_from_parts("usuario1", "senha123").expect("creds");
    let err = service(users, MockPasswordHasher::new(), MockAccessTokenIssuer::new())
        .authenticate(&creds)
        .await
        .expect_err("outage propagates");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn list_users_returns_store_order(registration: UserRegistration) {
    let first = stored_record(registration).into_user();
    let second = stored_record(
        UserRegistration::try_from_parts("Bia", "1", "bia@x", "bia", "pw").expect("valid"),
    )
    .into_user();
    let expected = vec![first, second];
    let returned = expected.clone();
    let mut users = MockUserRepository::new();
    users.expect_list().returning(move || Ok(returned.clone()));

    let listed = service(users, MockPasswordHasher::new(), MockAccessTokenIssuer::new())
        .list_users()
        .await
        .expect("list succeeds");

    assert_eq!(listed, expected);
}
