use rand::RngCore;
use tracing::{info, warn};

use crate::error::AppError;
use crate::users::{
    dto::{LoginRequest, RegisterRequest},
    repo::UserRepository,
    repo_types::{NewUser, User},
};

/// 8 random bytes, lowercase hex.
pub fn generate_user_id() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub async fn register_user(
    repo: &dyn UserRepository,
    req: RegisterRequest,
) -> Result<User, AppError> {
    if repo.find_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    // A concurrent registration can still win between the check and the
    // insert; the unique constraint turns that into DuplicateEmail too.
    let user = repo
        .create(NewUser {
            id: generate_user_id(),
            email: req.email,
            password: req.password,
            name: req.name,
            role: req.role,
            department: req.department,
            gender: req.gender,
            birth_date: req.birth_date,
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

pub async fn login_user(repo: &dyn UserRepository, req: LoginRequest) -> Result<User, AppError> {
    match repo.find_by_credentials(&req.email, &req.password).await? {
        Some(user) => {
            info!(user_id = %user.id, email = %user.email, "user logged in");
            Ok(user)
        }
        None => {
            warn!(email = %req.email, "login invalid credentials");
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::memory::InMemoryUserRepository;
    use std::collections::HashSet;

    fn register_req(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
            name: "A".into(),
            role: "user".into(),
            department: None,
            gender: "f".into(),
            birth_date: "2000-01-01".into(),
        }
    }

    fn login_req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn generated_ids_are_hex_and_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_user_id()).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            assert_eq!(id.len(), 16);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[tokio::test]
    async fn register_stores_every_field() {
        let repo = InMemoryUserRepository::new();
        let mut req = register_req("a@x.com", "p1");
        req.department = Some("IT".into());

        let user = register_user(&repo, req).await.expect("register");
        assert!(!user.id.is_empty());
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p1");
        assert_eq!(user.department.as_deref(), Some("IT"));
        assert_eq!(repo.find_by_email("a@x.com").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn second_registration_is_rejected_without_new_row() {
        let repo = InMemoryUserRepository::new();
        register_user(&repo, register_req("a@x.com", "p1")).await.unwrap();

        let err = register_user(&repo, register_req("a@x.com", "other"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn login_returns_registered_record() {
        let repo = InMemoryUserRepository::new();
        let created = register_user(&repo, register_req("a@x.com", "p1")).await.unwrap();

        let user = login_user(&repo, login_req("a@x.com", "p1")).await.unwrap();
        assert_eq!(user, created);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_alike() {
        let repo = InMemoryUserRepository::new();
        register_user(&repo, register_req("a@x.com", "p1")).await.unwrap();

        for req in [
            login_req("a@x.com", "wrong"),
            login_req("a@x.com", "P1"),
            login_req("A@x.com", "p1"),
            login_req("nobody@x.com", "p1"),
        ] {
            let err = login_user(&repo, req).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
        }
    }
}
