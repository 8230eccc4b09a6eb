//! Display names and avatars synthesized from an email address.

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Derive a display name from the local part of an email.
///
/// Every character that is not ASCII alphanumeric becomes a space and the
/// first character of each word is upper-cased; the rest keep their case.
///
/// ```rust
/// assert_eq!(auth_store::display_name_from_email("jane.doe@x.com"), "Jane Doe");
/// ```
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split_once('@').map_or(email, |(local, _)| local);

    let mut name = String::with_capacity(local.len());
    let mut word_start = true;
    for c in local.chars() {
        if c.is_ascii_alphanumeric() {
            if word_start {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push(c);
            }
            word_start = false;
        } else {
            name.push(' ');
            word_start = true;
        }
    }
    name
}

/// Deterministic placeholder avatar keyed by the email.
pub fn avatar_url(email: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE_URL, email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_local_part() {
        assert_eq!(display_name_from_email("jane.doe@x.com"), "Jane Doe");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(display_name_from_email("john_smith-99@x.com"), "John Smith 99");
        assert_eq!(display_name_from_email("a..b@x.com"), "A  B");
    }

    #[test]
    fn test_inner_case_is_kept() {
        assert_eq!(display_name_from_email("mcDonald@x.com"), "McDonald");
    }

    #[test]
    fn test_without_at_sign() {
        assert_eq!(display_name_from_email("solo"), "Solo");
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url("jane.doe@x.com"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=jane.doe@x.com"
        );
    }
}
