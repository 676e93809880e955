use crate::domain::version::leading_number;
use crate::error::{Result, VersionError};

/// Tag text used when the repository has no tag yet
pub const DEFAULT_TAG: &str = "v0.0.0#0-None";

/// Largest build number handed out; output formats store integers as `i64`
pub const MAX_BUILD_NUMBER: u64 = i64::MAX as u64;

/// A release tag of the form `v<major>.<minor>.<patch>#<build>-<anything>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
}

impl VersionTag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        VersionTag { name: name.into() }
    }

    /// Wrap an optional last tag, falling back to [`DEFAULT_TAG`]
    pub fn or_default(tag: Option<&str>) -> Self {
        VersionTag::new(tag.unwrap_or(DEFAULT_TAG))
    }

    /// Text between the first `#` and the next `-`, if both exist
    pub fn build_part(&self) -> Option<&str> {
        let (_, after_hash) = self.name.split_once('#')?;
        let (build, _) = after_hash.split_once('-')?;
        Some(build)
    }

    /// Text between the first `v` and the next `#` or `(`, if both exist
    pub fn version_part(&self) -> Option<&str> {
        let (_, after_v) = self.name.split_once('v')?;
        let end = after_v.find(['#', '('])?;
        Some(&after_v[..end])
    }

    /// Build number written in the tag, if the build section starts with digits
    pub fn recorded_build_number(&self) -> Option<u64> {
        let build = self.build_part()?.trim_start();
        let digits = build.strip_prefix('+').unwrap_or(build);
        if digits.starts_with(|c: char| c.is_ascii_digit()) {
            Some(leading_number(digits))
        } else {
            None
        }
    }

    /// Build number recorded in the tag plus one, capped at [`MAX_BUILD_NUMBER`]
    pub fn next_build_number(&self) -> u64 {
        self.recorded_build_number()
            .unwrap_or(0)
            .saturating_add(1)
            .min(MAX_BUILD_NUMBER)
    }
}

/// Build number for the next build, derived from the last tag.
///
/// A missing tag reads as [`DEFAULT_TAG`], and a tag without a `#<n>-`
/// section reads as build 0, so the result is always at least 1.
pub fn extract_build_number(tag: Option<&str>) -> u64 {
    VersionTag::or_default(tag).next_build_number()
}

/// Short version recorded in the last tag, verbatim and unvalidated.
///
/// Returns `None` when the tag has no `v...#` or `v...(` section.
pub fn extract_short_version(tag: Option<&str>) -> Option<String> {
    VersionTag::or_default(tag)
        .version_part()
        .map(str::to_string)
}

/// Glob pattern restricting which tags are considered.
///
/// Supports `*`, `?` and bracket classes (`[01]`, `[a-z]`, `[!x]`), the
/// subset of fnmatch that git applies to tag names.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Check whether a tag name matches the whole pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        regex::Regex::new(&format!("^{}$", self.to_regex()))
            .map(|re| re.is_match(tag))
            .map_err(|e| {
                VersionError::config(format!("Invalid tag pattern '{}': {}", self.pattern, e))
            })
    }

    fn to_regex(&self) -> String {
        let chars: Vec<char> = self.pattern.chars().collect();
        let mut out = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => out.push_str(".*"),
                '?' => out.push('.'),
                '[' => match bracket_class(&chars[i..]) {
                    Some((class, consumed)) => {
                        out.push_str(&class);
                        i += consumed;
                        continue;
                    }
                    None => out.push_str(r"\["),
                },
                c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
            }
            i += 1;
        }

        out
    }
}

/// Translate a bracket class starting at `chars[0] == '['`.
/// Returns the regex class and the number of pattern chars consumed, or
/// `None` when the bracket is never closed (it is then a literal `[`).
fn bracket_class(chars: &[char]) -> Option<(String, usize)> {
    let mut i = 1;
    let mut class = String::from("[");

    if matches!(chars.get(i), Some('!') | Some('^')) {
        class.push('^');
        i += 1;
    }

    // A `]` right after the opening is part of the set
    let mut first = true;
    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            class.push(']');
            return Some((class, i + 1));
        }
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' => {
                class.push('\\');
                class.push(c);
            }
            _ => class.push(c),
        }
        first = false;
        i += 1;
    }
}
