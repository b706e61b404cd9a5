//! Local email signals
//!
//! Cheap heuristics computed on the pasted text while the user types. They are
//! shown next to the check button and reported by headless mode; the verdict
//! itself always comes from the remote classifier.
//!
//! Pasted text may start with a raw RFC 5322 header block (`From:`, `To:`, ...)
//! followed by a blank line. Text that does not start with a header line is
//! treated as a bare body.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Full URLs: scheme up to the next whitespace, quote or angle bracket
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"']+"#).expect("URL regex pattern is valid")
});

/// Bare domain mentions such as `example.com` or `mail.example.co.uk`
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,6}\b").expect("Domain regex pattern is valid")
});

/// `Name: value` at the start of a header line
static HEADER_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9-]+):\s*(.*)$").expect("Header regex pattern is valid")
});

/// MIME attachment file names (`filename="x.pdf"`, `filename*=...`)
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bfilename\*?\s*=\s*"?([^";\r\n]+)"?"#)
        .expect("Filename regex pattern is valid")
});

/// Sender address domain
static SENDER_DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([\w.-]+)").expect("Sender domain regex pattern is valid"));

/// Hosts of common link shorteners
const SHORTENER_HOSTS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
];

/// Extensions that can carry executable payloads
const RISKY_EXTENSIONS: &[&str] = &[".exe", ".zip", ".rar", ".scr", ".iso", ".js", ".bat"];

/// Words that mark a sender domain as a throwaway
const FAKE_DOMAIN_WORDS: &[&str] = &["free", "money", "offer", "lottery", "deal", "promo", "cheap"];

/// Phrases common in spam and phishing copy, matched case-insensitively on
/// word boundaries
pub const SPAM_KEYWORDS: &[&str] = &[
    "free", "win", "winner", "winnings", "money", "cash", "earn", "easy money",
    "make money", "fast cash", "quick cash", "extra cash", "double your income",
    "get rich", "financial freedom", "increase sales", "investment",
    "passive income", "work from home", "no experience needed", "limited time",
    "instant cash", "credit", "debt relief", "bank transfer", "wire transfer",
    "fast loan", "no credit check", "lowest rate", "instant approval",
    "offer", "discount", "prize", "reward", "bonus", "gift", "apply now",
    "special deal", "hot deal", "lowest price", "save big", "best deal",
    "bargain", "buy now", "order now", "cheap", "affordable", "best price",
    "exclusive", "promo", "promotion", "limited offer", "free trial",
    "new customer", "subscription", "membership", "act fast", "expires soon",
    "urgent", "hurry", "act now", "last chance", "final notice", "important",
    "as soon as possible", "time-sensitive", "one-time", "today only",
    "do it now", "limited stock", "once in a lifetime",
    "click", "click here", "click below", "open now", "access now",
    "view online", "sign up", "register now", "confirm your details",
    "log in", "update your account", "verify your identity",
    "secure your account", "your account is at risk", "security alert",
    "reset password", "your payment failed", "billing issue", "invoice attached",
    "guarantee", "risk-free", "no risk", "money-back",
    "satisfaction guaranteed", "no obligation", "hidden charges",
    "secret formula", "miracle", "exclusive deal", "instant cure",
    "congratulations", "you have been selected", "you are a winner",
    "unsubscribe", "remove me", "opt-out", "this is not spam",
    "why are you receiving this", "you received this email because",
    "spam-free guarantee", "no more emails",
    "bitcoin", "crypto", "blockchain", "ethereum", "trading", "forex",
    "broker", "binary options", "wallet", "crypto exchange", "payout",
    "account verification", "account update", "account locked", "secure login",
    "miracle cure", "cure", "no prescription", "pharmacy", "drugs",
    "weight loss", "diet pill", "anti-aging", "instant results", "clinically proven",
    "lottery", "jackpot", "lucky draw", "winning ticket", "unclaimed prize",
    "claim your reward", "sweepstakes", "mega millions", "powerball",
    "your lucky number", "your check is waiting",
    "earn at home", "home-based business", "be your own boss", "online income",
    "startup funding", "government grant", "high-paying job", "no skills required",
    "mortgage rates", "real estate", "home loan", "house for sale",
    "foreclosure", "cheap property", "investment property", "flipping houses",
    "identity verification", "social security number", "ssn", "bank account",
    "routing number", "password reset", "security question", "personal details",
    "your computer is infected", "tech support", "fix your pc", "remote access",
    "download now", "install this update", "your system is at risk",
    "trojan detected", "virus warning", "malware detected", "spyware removal",
    "help us", "donate now", "urgent donation needed", "support our cause",
    "charity request", "nonprofit", "disaster relief", "emergency appeal",
    "as seen on tv", "elon musk recommends", "celebrity approved",
    "doctor recommended", "scientifically proven",
];

/// One word-boundary pattern per keyword. Phrases overlap on purpose:
/// "free trial" counts for both "free" and "free trial".
static SPAM_KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SPAM_KEYWORDS
        .iter()
        .map(|word| {
            Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                .expect("Escaped keyword regex pattern is valid")
        })
        .collect()
});

/// Headers found at the top of the pasted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailHeaders {
    pub from: Option<String>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    /// Number of header fields parsed, known or not
    pub field_count: usize,
}

impl EmailHeaders {
    /// Parse the leading header block.
    ///
    /// Parsing stops at the first blank line or the first line that is neither
    /// a `Name: value` field nor a folded continuation. Repeated fields keep
    /// their first value.
    pub fn parse(text: &str) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                break;
            }
            if line.starts_with(|c: char| c == ' ' || c == '\t') {
                match fields.last_mut() {
                    Some((_, value)) => {
                        value.push(' ');
                        value.push_str(line.trim());
                        continue;
                    }
                    None => break,
                }
            }
            match HEADER_LINE_PATTERN.captures(line) {
                Some(caps) => {
                    fields.push((caps[1].to_ascii_lowercase(), caps[2].trim().to_string()))
                }
                None => break,
            }
        }

        let field = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        Self {
            from: field("from"),
            to: field("to"),
            subject: field("subject"),
            date: field("date"),
            field_count: fields.len(),
        }
    }

    /// No `From`, `To`, `Subject` or `Date` field was found
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none() && self.subject.is_none() && self.date.is_none()
    }

    /// Comma-separated addresses in `To`
    pub fn recipient_count(&self) -> usize {
        self.to
            .as_deref()
            .map(|to| to.split(',').filter(|a| !a.trim().is_empty()).count())
            .unwrap_or(0)
    }

    /// Domain of the `From` address, lowercased
    pub fn sender_domain(&self) -> Option<String> {
        let from = self.from.as_deref()?;
        SENDER_DOMAIN_PATTERN
            .captures(from)
            .map(|caps| caps[1].trim_end_matches('.').to_lowercase())
    }
}

/// Heuristic counters for one email
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmailSignals {
    /// Whitespace-separated words in the whole text
    pub words: usize,
    /// Distinct URLs and bare domain mentions
    pub links: usize,
    /// URLs pointing at a link shortener
    pub shortened_links: usize,
    /// Spam keyword hits, counted per keyword
    pub spam_keywords: usize,
    /// MIME parts declaring a file name
    pub attachments: usize,
    /// Attachments with an executable or archive extension
    pub risky_attachments: usize,
    /// Addresses in the `To` header
    pub recipients: usize,
    /// Words in the `Subject` header
    pub subject_words: usize,
    /// A header block is present but has no `To`
    pub missing_to: bool,
    /// Sender domain contains a throwaway word ("free", "promo", ...)
    pub suspicious_sender: bool,
    /// The text declares an HTML part
    pub has_html: bool,
}

impl EmailSignals {
    pub fn analyze(text: &str) -> Self {
        let headers = EmailHeaders::parse(text);

        let suspicious_sender = headers
            .sender_domain()
            .is_some_and(|domain| FAKE_DOMAIN_WORDS.iter().any(|w| domain.contains(w)));

        let filenames: Vec<&str> = FILENAME_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim()))
            .collect();
        let risky_attachments = filenames
            .iter()
            .filter(|name| {
                let name = name.to_lowercase();
                RISKY_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
            })
            .count();

        Self {
            words: text.split_whitespace().count(),
            links: count_links(text),
            shortened_links: count_shortened_links(text),
            spam_keywords: count_spam_keywords(text),
            attachments: filenames.len(),
            risky_attachments,
            recipients: headers.recipient_count(),
            subject_words: headers
                .subject
                .as_deref()
                .map(|s| s.split_whitespace().count())
                .unwrap_or(0),
            missing_to: !headers.is_empty() && headers.to.is_none(),
            suspicious_sender,
            has_html: text.to_ascii_lowercase().contains("content-type: text/html"),
        }
    }

    /// At least one counter points at spam or phishing
    pub fn has_warnings(&self) -> bool {
        self.shortened_links > 0
            || self.spam_keywords > 0
            || self.risky_attachments > 0
            || self.missing_to
            || self.suspicious_sender
    }
}

fn count_links(text: &str) -> usize {
    URL_PATTERN
        .find_iter(text)
        .chain(DOMAIN_PATTERN.find_iter(text))
        .map(|m| m.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn count_shortened_links(text: &str) -> usize {
    URL_PATTERN
        .find_iter(text)
        .filter(|m| {
            let host = url_host(m.as_str());
            SHORTENER_HOSTS.contains(&host.as_str())
        })
        .count()
}

/// Lowercased host of a matched URL, without `www.` or a port
fn url_host(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest.split(|c: char| matches!(c, '/' | '?' | '#')).next().unwrap_or(rest);
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host).to_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

fn count_spam_keywords(text: &str) -> usize {
    let lower = text.to_lowercase();
    SPAM_KEYWORD_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(&lower).count())
        .sum()
}
