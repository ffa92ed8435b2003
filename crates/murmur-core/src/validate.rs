//! Shape checks for everything a client can send.
//!
//! Lengths are counted in characters, not bytes.

use murmur_types::api::{NewPostRequest, RegisterRequest, UpdateProfileRequest};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {field}")]
pub struct InvalidField {
    pub field: &'static str,
}

fn check(ok: bool, field: &'static str) -> Result<(), InvalidField> {
    if ok { Ok(()) } else { Err(InvalidField { field }) }
}

fn len_between(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

pub fn login(login: &str) -> bool {
    len_between(login, 1, 30)
        && login
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// 6..=100 chars with at least one ASCII lowercase, uppercase and digit.
pub fn password(password: &str) -> bool {
    len_between(password, 6, 100)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn email(email: &str) -> bool {
    len_between(email, 1, 50)
}

pub fn country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// `+` followed by digits, at most 20 chars overall.
pub fn phone(phone: &str) -> bool {
    match phone.strip_prefix('+') {
        Some(digits) => {
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) && phone.len() <= 20
        }
        None => false,
    }
}

pub const REGIONS: [&str; 5] = ["Europe", "Africa", "Americas", "Oceania", "Asia"];

pub fn region(region: &str) -> bool {
    REGIONS.contains(&region)
}

pub fn image(image: &str) -> bool {
    len_between(image, 1, 200)
}

pub fn content(content: &str) -> bool {
    len_between(content, 1, 1000)
}

pub fn tag(tag: &str) -> bool {
    len_between(tag, 1, 20)
}

/// Empty `phone`/`image` count as not given.
pub fn registration(req: &RegisterRequest) -> Result<(), InvalidField> {
    check(login(&req.login), "login")?;
    check(email(&req.email), "email")?;
    check(password(&req.password), "password")?;
    check(country_code(&req.country_code), "countryCode")?;
    if let Some(p) = req.phone.as_deref().filter(|p| !p.is_empty()) {
        check(phone(p), "phone")?;
    }
    if let Some(i) = req.image.as_deref().filter(|i| !i.is_empty()) {
        check(image(i), "image")?;
    }
    Ok(())
}

/// Empty `phone`/`image` are allowed here: they mean "clear it".
pub fn profile_update(req: &UpdateProfileRequest) -> Result<(), InvalidField> {
    if let Some(code) = &req.country_code {
        check(country_code(code), "countryCode")?;
    }
    if let Some(p) = req.phone.as_deref().filter(|p| !p.is_empty()) {
        check(phone(p), "phone")?;
    }
    if let Some(i) = req.image.as_deref().filter(|i| !i.is_empty()) {
        check(image(i), "image")?;
    }
    Ok(())
}

pub fn new_post(req: &NewPostRequest) -> Result<(), InvalidField> {
    check(content(&req.content), "content")?;
    check(req.tags.iter().all(|t| tag(t)), "tags")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rules() {
        assert!(login("alice-01"));
        assert!(!login(""));
        assert!(!login("has space"));
        assert!(!login("under_score"));
        assert!(!login(&"a".repeat(31)));
        assert!(login(&"a".repeat(30)));
    }

    #[test]
    fn password_rules() {
        assert!(password("Secret1"));
        assert!(!password("Sec1"));
        assert!(!password("secret1"));
        assert!(!password("SECRET1"));
        assert!(!password("Secrets"));
        assert!(!password(&format!("Aa1{}", "x".repeat(98))));
    }

    #[test]
    fn phone_rules() {
        assert!(phone("+79991234567"));
        assert!(!phone("79991234567"));
        assert!(!phone("+"));
        assert!(!phone("+7999-123"));
        assert!(!phone(&format!("+{}", "1".repeat(20))));
    }

    #[test]
    fn country_code_rules() {
        assert!(country_code("RU"));
        assert!(country_code("us"));
        assert!(!country_code("R1"));
        assert!(!country_code("RUS"));
    }

    #[test]
    fn post_rules() {
        let ok = NewPostRequest {
            content: "hello".into(),
            tags: vec!["rust".into(), "web".into()],
        };
        assert!(new_post(&ok).is_ok());

        let empty = NewPostRequest {
            content: String::new(),
            tags: vec![],
        };
        assert_eq!(new_post(&empty), Err(InvalidField { field: "content" }));

        let long_tag = NewPostRequest {
            content: "hi".into(),
            tags: vec!["t".repeat(21)],
        };
        assert_eq!(new_post(&long_tag), Err(InvalidField { field: "tags" }));
    }

    fn registration_request(phone: Option<&str>, image: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            login: "alice".into(),
            password: "Secret1".into(),
            email: "alice@example.com".into(),
            country_code: "PL".into(),
            is_public: true,
            phone: phone.map(Into::into),
            image: image.map(Into::into),
        }
    }

    #[test]
    fn registration_treats_empty_optionals_as_absent() {
        assert!(registration(&registration_request(None, None)).is_ok());
        assert!(registration(&registration_request(Some(""), Some(""))).is_ok());
        assert!(registration(&registration_request(Some("+48123456"), None)).is_ok());
        assert_eq!(
            registration(&registration_request(Some("48123456"), None)),
            Err(InvalidField { field: "phone" })
        );
        assert_eq!(
            registration(&registration_request(None, Some(&"i".repeat(201)))),
            Err(InvalidField { field: "image" })
        );
    }

    #[test]
    fn profile_update_allows_clearing() {
        let req = UpdateProfileRequest {
            phone: Some(String::new()),
            image: Some(String::new()),
            ..Default::default()
        };
        assert!(profile_update(&req).is_ok());

        let req = UpdateProfileRequest {
            country_code: Some("R".into()),
            ..Default::default()
        };
        assert_eq!(profile_update(&req), Err(InvalidField { field: "countryCode" }));
    }
}
