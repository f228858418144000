//! Tests for the contact service using a mocked contact store.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockContactRepository;

fn input(name: &str, phone: &str, email: &str) -> ContactInput {
    ContactInput {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
    }
}

#[fixture]
fn owner() -> UserId {
    UserId::random()
}

fn existing(owner: &UserId) -> Contact {
    Contact::create(
        owner.clone(),
        input("Bob", "5551", "bob@example.com")
            .validate()
            .expect("valid contact"),
    )
}

#[rstest]
#[tokio::test]
async fn create_stores_contact_for_owner(owner: UserId) {
    let expected_owner = owner.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_insert()
        .withf(move |contact| contact.is_owned_by(&expected_owner) && contact.name() == "Bob")
        .times(1)
        .returning(|_| Ok(()));

    let contact = ContactService::new(Arc::new(repo))
        .create(&owner, input("Bob", "5551", "bob@example.com"))
        .await
        .expect("create succeeds");

    assert_eq!(contact.owner(), &owner);
    assert_eq!(contact.email(), "bob@example.com");
}

#[rstest]
#[case(input("", "1", "a@b"), "nome")]
#[case(input("Bob", "", "a@b"), "telefone")]
#[case(input("Bob", "1", ""), "email")]
#[tokio::test]
async fn create_rejects_empty_fields(
    owner: UserId,
    #[case] raw: ContactInput,
    #[case] field: &str,
) {
    let mut repo = MockContactRepository::new();
    repo.expect_insert().never();

    let err = ContactService::new(Arc::new(repo))
        .create(&owner, raw)
        .await
        .expect_err("empty fields fail");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Todos os campos devem ser preenchidos.");
    assert_eq!(
        err.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!(field))
    );
}

#[rstest]
#[tokio::test]
async fn update_checks_ownership_before_fields(owner: UserId) {
    let id = ContactId::random();
    let mut repo = MockContactRepository::new();
    repo.expect_find_owned()
        .with(eq(owner.clone()), eq(id))
        .returning(|_, _| Ok(None));
    repo.expect_update_owned().never();

    let err = ContactService::new(Arc::new(repo))
        .update(&owner, id, ContactInput::default())
        .await
        .expect_err("missing contact fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Contato não encontrado.");
}

#[rstest]
#[tokio::test]
async fn update_validates_fields_of_owned_contact(owner: UserId) {
    let contact = existing(&owner);
    let id = contact.id();
    let mut repo = MockContactRepository::new();
    repo.expect_find_owned()
        .returning(move |_, _| Ok(Some(contact.clone())));
    repo.expect_update_owned().never();

    let err = ContactService::new(Arc::new(repo))
        .update(&owner, id, input("Bob", "", "bob@example.com"))
        .await
        .expect_err("empty phone fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_owned_contact(owner: UserId) {
    let contact = existing(&owner);
    let id = contact.id();
    let found = contact.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_find_owned()
        .returning(move |_, _| Ok(Some(found.clone())));
    repo.expect_update_owned()
        .times(1)
        .returning(move |_, _, details| {
            let mut updated = contact.clone();
            updated.apply(details);
            Ok(Some(updated))
        });

    let updated = ContactService::new(Arc::new(repo))
        .update(&owner, id, input("Robert", "5552", "rob@example.com"))
        .await
        .expect("update succeeds");

    assert_eq!(updated.id(), id);
    assert_eq!(updated.name(), "Robert");
    assert_eq!(updated.phone(), "5552");
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_reports_missing_contacts(
    owner: UserId,
    #[case] removed: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockContactRepository::new();
    repo.expect_delete_owned()
        .times(1)
        .returning(move |_, _| Ok(removed));

    let result = ContactService::new(Arc::new(repo))
        .delete(&owner, ContactId::random())
        .await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[rstest]
#[tokio::test]
async fn list_is_scoped_to_owner(owner: UserId) {
    let contacts = vec![existing(&owner), existing(&owner)];
    let returned = contacts.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_list_by_owner()
        .with(eq(owner.clone()))
        .returning(move |_| Ok(returned.clone()));

    let listed = ContactService::new(Arc::new(repo))
        .list(&owner)
        .await
        .expect("list succeeds");

    assert_eq!(listed, contacts);
}

#[rstest]
#[tokio::test]
async fn store_outage_is_internal(owner: UserId) {
    let mut repo = MockContactRepository::new();
    repo.expect_list_by_owner()
        .returning(|_| Err(ContactPersistenceError::unavailable("lock poisoned")));

    let err = ContactService::new(Arc::new(repo))
        .list(&owner)
        .await
        .expect_err("outage propagates");

    assert_eq!(err.code(), ErrorCode::InternalError);
}
