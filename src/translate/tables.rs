//! Header lookup tables.
//!
//! # Responsibilities
//! - Hold the canonical known-header identifiers (hyphen-free, case-sensitive)
//! - Hold the excluded header names (raw names, case-sensitive)
//! - Provide the built-in pair as a process-wide immutable value
//!
//! # Design Decisions
//! - Tables keep definition order; duplicates collapse to the first occurrence
//! - Lookups are exact string matches, no case folding

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Canonical identifiers recognised as symbolic header constants.
pub const KNOWN_HEADERS: [&str; 46] = [
    "Accept",
    "AcceptCharset",
    "AcceptLanguage",
    "AcceptDatetime",
    "CacheControl",
    "ContentType",
    "Date",
    "Expect",
    "From",
    "IfMatch",
    "IfModifiedSince",
    "IfNoneMatch",
    "IfRange",
    "IfUnmodifiedSince",
    "MaxForwards",
    "Pragma",
    "Range",
    "Referer",
    "Origin",
    "Upgrade",
    "UpgradeInsecureRequests",
    "UserAgent",
    "Via",
    "Warning",
    "DNT",
    "AccessControlAllowOrigin",
    "AcceptRanges",
    "Age",
    "Allow",
    "ContentEncoding",
    "ContentLanguage",
    "ContentLength",
    "ContentLocation",
    "ContentMD5",
    "ContentDisposition",
    "ContentRange",
    "ETag",
    "Expires",
    "LastModified",
    "Link",
    "Location",
    "P3P",
    "Refresh",
    "RetryAfter",
    "Server",
    "TransferEncoding",
];

/// Header names that never produce a statement.
pub const EXCLUDED_HEADERS: [&str; 3] = ["Cookie", "Content-Length", "Host"];

static BUILTIN: Lazy<HeaderTables> =
    Lazy::new(|| HeaderTables::new(KNOWN_HEADERS, EXCLUDED_HEADERS));

/// An ordered set of header names with constant-time membership.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl NameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if set.lookup.insert(name.clone()) {
                set.ordered.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Names in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// The known-header table and excluded-header set used by one translator.
#[derive(Debug, Clone)]
pub struct HeaderTables {
    known: NameSet,
    excluded: NameSet,
}

impl HeaderTables {
    /// Build tables from arbitrary name lists.
    pub fn new<K, E, S, T>(known: K, excluded: E) -> Self
    where
        K: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            known: NameSet::new(known),
            excluded: NameSet::new(excluded),
        }
    }

    /// The shared built-in tables.
    pub fn builtin() -> &'static HeaderTables {
        &BUILTIN
    }

    /// True if the hyphen-stripped name is a canonical identifier.
    pub fn is_known(&self, stripped_name: &str) -> bool {
        self.known.contains(stripped_name)
    }

    /// True if the raw header name is always dropped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn known(&self) -> &NameSet {
        &self.known
    }

    pub fn excluded(&self) -> &NameSet {
        &self.excluded
    }
}

impl Default for HeaderTables {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
