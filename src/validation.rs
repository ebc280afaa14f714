use colored::Colorize;
use inquire::Text;
use validator::ValidateEmail;

use crate::error::AppError;

/// Maximum length for Git username
const MAX_USERNAME_LENGTH: usize = 30;
/// Maximum length for Git email address
const MAX_EMAIL_LENGTH: usize = 100;

/// Prompts user for input until valid input is provided
pub fn prompt_until_valid<F>(prompt_message: &str, input_validation: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

// Validate input helper functions

/// Validates username input
pub fn validate_input_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        Err(AppError::Validation("Username cannot be empty".to_string()))
    } else if name.len() > MAX_USERNAME_LENGTH {
        Err(AppError::Validation(format!(
            "username too long, max {} characters",
            MAX_USERNAME_LENGTH
        )))
    } else {
        Ok(())
    }
}

/// Validates email input
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        Err(AppError::Validation("Email cannot be empty".to_string()))
    } else if email.len() > MAX_EMAIL_LENGTH {
        Err(AppError::Validation(format!(
            "email too long, max {} characters",
            MAX_EMAIL_LENGTH
        )))
    } else if !email.validate_email() {
        Err(AppError::Validation("Invalid email format".to_string()))
    } else {
        Ok(())
    }
}

/// Validates commit message input
pub fn validate_input_message(message: &str) -> Result<(), AppError> {
    if message.trim().is_empty() {
        Err(AppError::Validation("Commit message cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates remote URL input. Both SSH and HTTPS forms are accepted;
/// the URL shape itself is not validated.
pub fn validate_input_url(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        Err(AppError::Validation("Remote URL cannot be empty".to_string()))
    } else {
        Ok(())
    }
}
