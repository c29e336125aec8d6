use chrono::{Duration, Utc};
use sea_orm::EntityTrait;

use crate::{
    model::auth::{LoginDto, RegisterDto, ResetPasswordConfirmDto, ResetPasswordDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        service::{
            auth::{AuthService, PasswordResetService},
            mail::MailService,
        },
        util::token::hash_token,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod password_reset;
mod register;

fn registration(email: &str) -> RegisterDto {
    RegisterDto {
        nom: Some("Martin".to_string()),
        prenom: Some("Alice".to_string()),
        email: Some(email.to_string()),
        password: Some("s3cret-pass".to_string()),
        pseudo: Some("alice".to_string()),
        role: None,
    }
}

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}
