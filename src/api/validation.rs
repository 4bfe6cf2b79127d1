use chrono::Datelike;

use super::ApiError;
use super::types::{CharacterRequest, FranchiseRequest, MovieRequest};

/// Earliest year a motion picture can have been released.
pub const FIRST_RELEASE_YEAR: i32 = 1888;

/// How far past the current year a release may be announced.
const RELEASE_YEAR_LOOKAHEAD: i32 = 10;

pub fn validate_id(resource: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            resource, id
        )));
    }
    Ok(id)
}

pub fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} cannot be empty", field)));
    }
    validate_length(field, value, max_len)
}

pub fn validate_optional(field: &str, value: Option<&str>, max_len: usize) -> Result<(), ApiError> {
    match value {
        Some(v) => validate_length(field, v, max_len),
        None => Ok(()),
    }
}

fn validate_length(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.chars().count() > max_len {
        return Err(ApiError::validation(format!(
            "{} must be {} characters or less",
            field, max_len
        )));
    }
    Ok(())
}

pub fn validate_release_year(year: i32) -> Result<i32, ApiError> {
    let latest = chrono::Utc::now().year() + RELEASE_YEAR_LOOKAHEAD;
    if !(FIRST_RELEASE_YEAR..=latest).contains(&year) {
        return Err(ApiError::validation(format!(
            "Invalid release year: {}. Year must be between {} and {}",
            year, FIRST_RELEASE_YEAR, latest
        )));
    }
    Ok(year)
}

pub fn validate_character(req: &CharacterRequest) -> Result<(), ApiError> {
    validate_required("full_name", &req.full_name, 100)?;
    validate_optional("alias", req.alias.as_deref(), 50)?;
    validate_required("gender", &req.gender, 20)?;
    validate_optional("picture_url", req.picture_url.as_deref(), 200)
}

pub fn validate_movie(req: &MovieRequest) -> Result<(), ApiError> {
    validate_required("title", &req.title, 200)?;
    validate_required("genre", &req.genre, 100)?;
    validate_release_year(req.release_year)?;
    validate_required("director", &req.director, 100)?;
    validate_optional("picture_url", req.picture_url.as_deref(), 200)?;
    validate_optional("trailer_url", req.trailer_url.as_deref(), 200)?;
    if let Some(franchise_id) = req.franchise_id {
        validate_id("franchise", franchise_id)?;
    }
    Ok(())
}

pub fn validate_franchise(req: &FranchiseRequest) -> Result<(), ApiError> {
    validate_required("name", &req.name, 100)?;
    validate_optional("description", req.description.as_deref(), 1000)
}
