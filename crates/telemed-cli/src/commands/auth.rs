use anyhow::Result;

use telemed_client::{ApiClient, SessionStore};
use telemed_common::models::auth::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use telemed_common::validation;

use super::submit_error;

pub async fn cmd_login(
    client: &ApiClient,
    store: &SessionStore,
    email: String,
    password: String,
) -> Result<()> {
    let auth = client
        .login(&LoginRequest { email, password })
        .await
        .map_err(|e| submit_error(e, "Login failed", "An error occurred during Login"))?;

    store.save_auth_data(&auth.token, &auth.roles)?;

    println!("Login successful. Roles: {}", auth.roles.join(", "));
    if store.load().is_doctor() {
        println!("Run `telemed doctor appointments` to see your schedule.");
    } else {
        println!("Run `telemed profile` to see your profile.");
    }
    Ok(())
}

pub async fn cmd_register(
    client: &ApiClient,
    name: String,
    email: String,
    password: String,
) -> Result<()> {
    validation::validate_registration_password(&password)?;

    client
        .register(&RegisterRequest::patient(name, email, password))
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Registration failed",
                "An error occurred during registration",
            )
        })?;

    println!("Registration successful! You can now login.");
    Ok(())
}

pub async fn cmd_register_doctor(
    client: &ApiClient,
    name: String,
    email: String,
    password: String,
    license_number: Option<String>,
    specialization: Option<String>,
) -> Result<()> {
    validation::validate_registration_password(&password)?;
    validation::validate_doctor_registration(specialization.as_deref(), license_number.as_deref())?;
    let specialization = specialization.unwrap_or_default();
    let license_number = license_number.unwrap_or_default();

    // The chosen value must come from the server's own enumeration.
    let known = client
        .get_specializations()
        .await
        .map_err(|_| anyhow::anyhow!("Failed to load specializations"))?;
    validation::validate_choice("specialization", &specialization, &known)?;

    client
        .register(&RegisterRequest::doctor(
            name,
            email,
            password,
            license_number,
            specialization,
        ))
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Registration failed",
                "An error occurred during registration",
            )
        })?;

    println!("Registration successful! You can now login.");
    Ok(())
}

pub async fn cmd_forgot_password(client: &ApiClient, email: String) -> Result<()> {
    client
        .forgot_password(&ForgotPasswordRequest { email })
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to send reset instructions",
                "An error occurred while requesting the password reset",
            )
        })?;

    println!("Password reset instructions have been sent to your email!");
    Ok(())
}

pub async fn cmd_reset_password(
    client: &ApiClient,
    code: Option<String>,
    new_password: String,
    confirm_password: String,
) -> Result<()> {
    validation::validate_reset_code(code.as_deref())?;
    validation::validate_new_password(&new_password, &confirm_password)?;

    client
        .reset_password(&ResetPasswordRequest {
            new_password,
            code: code.unwrap_or_default(),
        })
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to reset password",
                "An error occurred while resetting your password",
            )
        })?;

    println!("Password reset successfully! You can now login with your new password.");
    Ok(())
}

pub fn cmd_logout(store: &SessionStore) -> Result<()> {
    store.logout()?;
    println!("Logged out.");
    Ok(())
}
