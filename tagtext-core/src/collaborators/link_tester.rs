//! Regex based "linkify" style link detection

use super::LinkTester;
use crate::error::{Result, TagTextError};
use regex::Regex;

/// Generic top-level domains accepted for scheme-less links
const GENERIC_TLDS: &[&str] = &[
    "aero", "app", "art", "asia", "biz", "blog", "cat", "cloud", "com", "coop", "design", "dev",
    "edu", "email", "fun", "gov", "group", "info", "int", "jobs", "life", "link", "live", "media",
    "mil", "mobi", "museum", "name", "net", "news", "online", "org", "page", "pro", "shop", "site",
    "social", "space", "store", "studio", "team", "tech", "tel", "today", "tools", "travel",
    "website", "wiki", "world", "xyz", "zone",
];

/// Country-code top-level domains, sorted
const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw", "ax",
    "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs", "bt",
    "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn", "co", "cr",
    "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee", "eg", "er",
    "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gd", "ge", "gf", "gg", "gh", "gi",
    "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht",
    "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke",
    "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr",
    "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo",
    "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng",
    "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm",
    "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd",
    "se", "sg", "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy",
    "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
    "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws",
    "ye", "yt", "za", "zm", "zw",
];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Default [`LinkTester`]
///
/// Recognizes `http`, `https` and `ftp` URLs, `mailto:` links, e-mail
/// addresses and bare domains such as `example.com/path`. A token with
/// trailing sentence punctuation is not a link on its own.
#[derive(Debug)]
pub struct UrlLinkTester {
    scheme_url: Regex,
    mailto: Regex,
    email: Regex,
    bare_domain: Regex,
}

impl UrlLinkTester {
    /// Compile the link patterns
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| TagTextError::collaborator("link tester", e))
        };

        Ok(Self {
            scheme_url: compile(
                r"^(?i:https?|ftp)://(?:[^\s/?#@]+@)?[\p{L}\p{N}](?:[\p{L}\p{N}.-]*[\p{L}\p{N}])?(?::\d{1,5})?(?:[/?#]\S*)?$",
            )?,
            mailto: compile(r"^(?i:mailto):[^\s@]+@[^\s@]+$")?,
            email: compile(
                r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+([A-Za-z]{2,63})$",
            )?,
            bare_domain: compile(
                r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+([A-Za-z]{2,63})(?::\d{1,5})?(?:[/?#]\S*)?$",
            )?,
        })
    }

    fn known_tld(tld: &str) -> bool {
        let tld = tld.to_ascii_lowercase();
        COUNTRY_TLDS.binary_search(&tld.as_str()).is_ok() || GENERIC_TLDS.contains(&tld.as_str())
    }

    fn has_dangling_punctuation(token: &str) -> bool {
        match token.chars().last() {
            Some(last) if TRAILING_PUNCTUATION.contains(&last) => true,
            Some(')') => !token.contains('('),
            _ => false,
        }
    }

    fn tld_matches(pattern: &Regex, token: &str) -> bool {
        pattern
            .captures(token)
            .and_then(|caps| caps.get(1))
            .is_some_and(|tld| Self::known_tld(tld.as_str()))
    }
}

impl LinkTester for UrlLinkTester {
    fn is_link(&self, token: &str) -> bool {
        if token.is_empty() || Self::has_dangling_punctuation(token) {
            return false;
        }

        self.scheme_url.is_match(token)
            || self.mailto.is_match(token)
            || Self::tld_matches(&self.email, token)
            || Self::tld_matches(&self.bare_domain, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tester() -> UrlLinkTester {
        UrlLinkTester::new().unwrap()
    }

    #[test]
    fn test_scheme_urls() {
        let t = tester();
        assert!(t.is_link("http://t.co"));
        assert!(t.is_link("https://example.com/path?q=1#frag"));
        assert!(t.is_link("HTTPS://EXAMPLE.COM"));
        assert!(t.is_link("http://localhost:8080/"));
        assert!(t.is_link("http://example.com#hash"));
        assert!(t.is_link("ftp://files.example.org/pub"));
    }

    #[test]
    fn test_bare_domains_need_known_tld() {
        let t = tester();
        assert!(t.is_link("example.com"));
        assert!(t.is_link("www.example.co.uk/page"));
        assert!(t.is_link("t.co"));
        assert!(!t.is_link("file.txt"));
        assert!(!t.is_link("node.js"));
        assert!(!t.is_link("index.ts"));
        assert!(!t.is_link("example.zz"));
        assert!(t.is_link("example.de"));
        assert!(t.is_link("crates.io"));
        assert!(!t.is_link("e.g"));
        assert!(!t.is_link("hello"));
    }

    #[test]
    fn test_country_tlds_sorted() {
        assert!(COUNTRY_TLDS.windows(2).all(|w| w[0] < w[1]));
        assert!(COUNTRY_TLDS.iter().all(|tld| tld.len() == 2));
    }

    #[test]
    fn test_email_and_mailto() {
        let t = tester();
        assert!(t.is_link("someone@example.com"));
        assert!(t.is_link("mailto:someone@example.com"));
        assert!(!t.is_link("foo@bar"));
        assert!(!t.is_link("@alice"));
    }

    #[test]
    fn test_trailing_punctuation() {
        let t = tester();
        assert!(!t.is_link("http://t.co."));
        assert!(!t.is_link("example.com,"));
        assert!(!t.is_link("example.com)"));
        assert!(t.is_link("https://en.wikipedia.org/wiki/Rust_(programming_language)"));
    }

    #[test]
    fn test_non_links() {
        let t = tester();
        assert!(!t.is_link(""));
        assert!(!t.is_link("#topic"));
        assert!(!t.is_link("?prop"));
        assert!(!t.is_link("http://"));
        assert!(!t.is_link("😀"));
    }
}
