/// Build metadata shown on the landing page.
///
/// Captured at compile time from `PGME_RELEASE`, `PGME_COMMIT` and
/// `PGME_BUILD_TIME`; unset values read as `"unset"` (release falls back to
/// the crate version).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub release: &'static str,
    pub commit: &'static str,
    pub build_time: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            release: match option_env!("PGME_RELEASE") {
                Some(release) => release,
                None => env!("CARGO_PKG_VERSION"),
            },
            commit: match option_env!("PGME_COMMIT") {
                Some(commit) => commit,
                None => "unset",
            },
            build_time: match option_env!("PGME_BUILD_TIME") {
                Some(time) => time,
                None => "unset",
            },
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Buildtime", self.build_time),
            ("Commit", self.commit),
            ("Release", self.release),
        ]
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_never_yields_empty_release() {
        let info = BuildInfo::current();
        assert!(!info.release.is_empty());
        assert!(!info.commit.is_empty());
        assert!(!info.build_time.is_empty());
    }

    #[test]
    fn entries_are_sorted_by_label() {
        let info = BuildInfo {
            release: "1.2.3",
            commit: "abc123",
            build_time: "2026-01-01T00:00:00Z",
        };
        let entries = info.entries();
        assert_eq!(entries[0], ("Buildtime", "2026-01-01T00:00:00Z"));
        assert_eq!(entries[1], ("Commit", "abc123"));
        assert_eq!(entries[2], ("Release", "1.2.3"));
    }
}
