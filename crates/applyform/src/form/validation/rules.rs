use chrono::NaiveDateTime;

use super::super::domain::Position;

const DATETIME_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

pub(crate) fn check_full_name(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Full Name is required");
    }
    Ok(trimmed.to_string())
}

pub(crate) fn check_email(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Email is required");
    }
    if !is_email_shaped(trimmed) {
        return Err("Invalid email format");
    }
    Ok(trimmed.to_string())
}

pub(crate) fn check_phone_number(raw: &str) -> Result<u64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Phone Number is required");
    }
    let number: i64 = trimmed.parse().map_err(|_| "Phone Number must be a number")?;
    if number <= 0 {
        return Err("Phone Number is invalid");
    }
    Ok(number as u64)
}

pub(crate) fn check_position(raw: &str) -> Result<Position, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Position is required");
    }
    trimmed
        .parse()
        .map_err(|_| "Position must be one of Developer, Designer, or Manager")
}

pub(crate) fn check_relevant_experience(raw: &str) -> Result<f64, &'static str> {
    check_years(
        raw,
        "Relevant Experience is required",
        "Relevant Experience must be a number",
        "Experience must be greater than 0",
    )
}

pub(crate) fn check_management_experience(raw: &str) -> Result<f64, &'static str> {
    check_years(
        raw,
        "Management Experience is required",
        "Management Experience must be a number",
        "Experience must be greater than 0",
    )
}

pub(crate) fn check_portfolio_url(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Portfolio URL is required");
    }
    if !is_url_shaped(trimmed) {
        return Err("Invalid URL format");
    }
    Ok(trimmed.to_string())
}

pub(crate) fn check_skills(skills: &[String]) -> Result<Vec<String>, &'static str> {
    if skills.is_empty() {
        return Err("At least one skill must be selected");
    }
    Ok(skills.to_vec())
}

pub(crate) fn check_interview_time(raw: &str) -> Result<NaiveDateTime, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Preferred Interview Time is required");
    }
    parse_datetime_local(trimmed).ok_or("Preferred Interview Time must be a valid date and time")
}

fn check_years(
    raw: &str,
    missing: &'static str,
    not_numeric: &'static str,
    not_positive: &'static str,
) -> Result<f64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    let years: f64 = trimmed.parse().map_err(|_| not_numeric)?;
    // "NaN" and "inf" parse as f64 but are not usable year counts.
    if !years.is_finite() {
        return Err(not_numeric);
    }
    if years <= 0.0 {
        return Err(not_positive);
    }
    Ok(years)
}

/// Shape check matching what a browser email input accepts: one `@`, a
/// non-empty local part, and a dotted domain with non-empty labels.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

/// Shape check for portfolio links: an http or https scheme followed by a
/// dotted host.
fn is_url_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let lowered = value.to_ascii_lowercase();
    let scheme_len = if lowered.starts_with("https://") {
        "https://".len()
    } else if lowered.starts_with("http://") {
        "http://".len()
    } else {
        return false;
    };
    let host = value[scheme_len..]
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    !host.is_empty() && host.contains('.') && host.split('.').all(|part| !part.is_empty())
}

fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
