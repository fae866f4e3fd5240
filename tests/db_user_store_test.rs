//! `DbUserStore` against an in-memory SQLite database.
//!
//! Runs the real migrations, so the schema, transaction and cascade
//! behavior are the ones Postgres gets.

use std::sync::Arc;

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, EntityTrait, Statement};
use sea_orm_migration::MigratorTrait;

use bookshelf::domain::{NewProfile, NewUser, Password, SignupForm, SignupRejection};
use bookshelf::errors::AppError;
use bookshelf::infra::repositories::entities::user;
use bookshelf::infra::{Database, DbUserStore, Migrator, Persistence, UserStore};
use bookshelf::services::{Registrar, SignupService};

async fn setup() -> (Database, Arc<DbUserStore>) {
    // One connection, so every query sees the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let connection = SeaDatabase::connect(options).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();

    let db = Database::from_connection(connection);
    let store = Arc::new(DbUserStore::new(Arc::new(Persistence::new(db.get_connection()))));
    (db, store)
}

fn records(username: &str, email: &str) -> (NewUser, NewProfile) {
    (
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: Password::new("secret1").unwrap(),
            first_name: "Alice".to_string(),
        },
        NewProfile {
            name: "Alice".to_string(),
            password: "secret1".to_string(),
            email: email.to_string(),
        },
    )
}

#[tokio::test]
async fn test_migrations_are_all_applied() {
    let (db, _) = setup().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_register_persists_user_and_profile() {
    let (_, store) = setup().await;
    let (new_user, new_profile) = records("alice1", "a@example.com");

    let registration = store.register(new_user, new_profile).await.unwrap();

    let user = store.find_by_username("alice1").await.unwrap().unwrap();
    assert_eq!(user.id, registration.user.id);
    assert!(user.check_password("secret1"));

    let profile = store.find_profile(user.id).await.unwrap().unwrap();
    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.name, "Alice");

    assert!(store.email_taken("a@example.com").await.unwrap());
    assert!(store.username_taken("alice1").await.unwrap());
    assert!(!store.email_taken("b@example.com").await.unwrap());
    tokio_test::assert_ok!(store.ping().await);
}

#[tokio::test]
async fn test_duplicate_insert_is_conflict() {
    let (_, store) = setup().await;
    let (new_user, new_profile) = records("alice1", "a@example.com");
    store.register(new_user, new_profile).await.unwrap();

    // Skips the lookups, as a request losing the check-then-insert race would
    let (new_user, new_profile) = records("alice1", "other@example.com");
    let result = store.register(new_user, new_profile).await;

    let err = tokio_test::assert_err!(result);
    assert!(matches!(err, AppError::Conflict(_)));
    assert!(!store.email_taken("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_failed_profile_insert_rolls_back_user() {
    let (db, store) = setup().await;
    let backend = db.connection().get_database_backend();
    db.connection()
        .execute(Statement::from_string(backend, "DROP TABLE profiles".to_string()))
        .await
        .unwrap();

    let (new_user, new_profile) = records("alice1", "a@example.com");
    let result = store.register(new_user, new_profile).await;

    assert!(result.is_err());
    assert!(store.find_by_username("alice1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_user_cascades_to_profile() {
    let (db, store) = setup().await;
    let (new_user, new_profile) = records("alice1", "a@example.com");
    let registration = store.register(new_user, new_profile).await.unwrap();

    user::Entity::delete_by_id(registration.user.id)
        .exec(db.connection())
        .await
        .unwrap();

    assert!(store
        .find_profile(registration.user.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_signup_scenario_end_to_end() {
    let (_, store) = setup().await;
    let service = Registrar::new(store.clone());
    let form = SignupForm {
        name: "Alice".to_string(),
        username: "alice1".to_string(),
        email: "a@example.com".to_string(),
        password: "secret1".to_string(),
        password_confirmation: "secret1".to_string(),
    };

    let first = service.signup(form.clone()).await.unwrap();
    assert!(first.rejection().is_none());

    let second = service.signup(form).await.unwrap();
    assert_eq!(second.rejection(), Some(SignupRejection::EmailTaken));
}
