//! Input validation for submitted video URLs.
//!
//! The metadata provider is only ever pointed at YouTube hosts; anything
//! else is rejected before a subprocess is spawned.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

/// Maximum URL length to prevent DoS attacks.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum characters of a URL echoed into logs.
const MAX_LOGGED_URL_CHARS: usize = 200;

/// Allowed video URL domains.
static ALLOWED_DOMAINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "youtube.com",
        "www.youtube.com",
        "m.youtube.com",
        "music.youtube.com",
        "youtu.be",
        "youtube-nocookie.com",
        "www.youtube-nocookie.com",
    ])
});

const BLOCKED_PATTERN_SOURCES: &[&str] = &[
    // Internal IP ranges
    r"^https?://127\.",
    r"^https?://localhost",
    r"^https?://10\.",
    r"^https?://172\.(1[6-9]|2[0-9]|3[0-1])\.",
    r"^https?://192\.168\.",
    r"^https?://169\.254\.",
    r"^https?://\[::1\]",
    r"^https?://\[fd",
    r"^https?://\[fe80",
    // Cloud metadata endpoints
    r"^https?://metadata\.",
];

/// Blocked URL patterns (internal and metadata endpoints).
static BLOCKED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BLOCKED_PATTERN_SOURCES
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

/// Result of URL validation.
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationResult {
    /// URL is valid and allowed.
    Valid(String),
    /// URL is malformed or uses an unsupported protocol.
    Invalid(String),
    /// URL domain is not in the allowlist.
    DomainNotAllowed(String),
    /// URL matches a blocked pattern (e.g., internal IPs).
    Blocked(String),
    /// URL exceeds maximum length.
    TooLong,
}

impl UrlValidationResult {
    /// Convert to Result for easy error handling.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Valid(url) => Ok(url),
            Self::Invalid(msg) | Self::Blocked(msg) => Err(msg),
            Self::DomainNotAllowed(domain) => {
                Err(format!("Domínio '{}' não permitido. Use uma URL do YouTube válida.", domain))
            }
            Self::TooLong => Err(format!(
                "URL excede o tamanho máximo de {} caracteres",
                MAX_URL_LENGTH
            )),
        }
    }
}

/// Validate a video URL for length, protocol, blocked hosts and the domain
/// allowlist.
pub fn validate_video_url(url: &str) -> UrlValidationResult {
    if url.len() > MAX_URL_LENGTH {
        return UrlValidationResult::TooLong;
    }

    let url = url.trim();
    if url.is_empty() {
        return UrlValidationResult::Invalid("URL não pode ser vazia".to_string());
    }

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => return UrlValidationResult::Invalid(format!("Formato de URL inválido: {}", e)),
    };

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return UrlValidationResult::Invalid(format!(
                "Protocolo '{}' inválido. Apenas HTTP e HTTPS são permitidos.",
                scheme
            ))
        }
    }

    if BLOCKED_PATTERNS.iter().any(|p| p.is_match(url)) {
        warn!(url = %sanitize_for_log(url), "Blocked URL pattern detected");
        return UrlValidationResult::Blocked(
            "URL aponta para um endereço interno ou restrito".to_string(),
        );
    }

    let domain = match parsed.host_str() {
        Some(d) => d.to_lowercase(),
        None => return UrlValidationResult::Invalid("URL deve ter um domínio válido".to_string()),
    };

    if !is_domain_allowed(&domain) {
        return UrlValidationResult::DomainNotAllowed(domain);
    }

    UrlValidationResult::Valid(url.to_string())
}

/// Check if a domain or its registrable parent is in the allowlist.
fn is_domain_allowed(domain: &str) -> bool {
    if ALLOWED_DOMAINS.contains(domain) {
        return true;
    }

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() >= 2 {
        let parent = format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1]);
        return ALLOWED_DOMAINS.contains(parent.as_str());
    }

    false
}

/// Strip control characters and bound the length of user input before
/// it reaches the logs.
pub fn sanitize_for_log(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_LOGGED_URL_CHARS)
        .collect()
}
