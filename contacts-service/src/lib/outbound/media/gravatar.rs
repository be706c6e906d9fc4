use sha2::Digest;
use sha2::Sha256;

/// Gravatar-style avatar URL derived from the email address.
///
/// Gravatar keys images on a digest of the trimmed, lowercased address;
/// unknown addresses resolve to a generated identicon, so the URL is
/// always usable as a default avatar.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?d=identicon",
        hex::encode(digest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravatar_url_normalizes_address() {
        let url = gravatar_url(" Alice@Example.COM ");
        assert_eq!(url, gravatar_url("alice@example.com"));
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
    }

    #[test]
    fn test_gravatar_url_differs_per_address() {
        assert_ne!(
            gravatar_url("alice@example.com"),
            gravatar_url("bob@example.com")
        );
    }
}
