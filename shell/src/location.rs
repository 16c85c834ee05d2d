//! Address-bar query state: the `reportId` parameter and the location seam.
//!
//! The browser implementation lives in the `fleet-shell-wasm` crate; the
//! in-memory [`MemoryLocation`] here backs SSR rendering and tests, and
//! models history entries so in-place updates can be told apart from
//! navigations.

use thiserror::Error;
use url::form_urlencoded;

/// Query parameter carrying the active report id.
pub const REPORT_PARAM: &str = "reportId";

/// The location refused an in-place update.
///
/// Browsers throttle `history.replaceState` and may throw; callers keep the
/// previous location as ground truth when this happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("location update rejected: {0}")]
pub struct LocationError(pub String);

/// Read/write access to the location's query string.
pub trait Location {
    /// Current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Replace the query of the current history entry in place.
    ///
    /// Must not create a new navigable history entry.
    fn replace_query(&mut self, query: &str) -> Result<(), LocationError>;
}

/// Extract the report id from a query string (leading `?` optional).
///
/// An empty value counts as absent.
pub fn report_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REPORT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Set `reportId` in `query`, keeping every other parameter in place.
///
/// An existing `reportId` keeps its position; duplicates are dropped.
pub fn with_report_id(query: &str, id: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut out = form_urlencoded::Serializer::new(String::new());
    let mut written = false;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == REPORT_PARAM {
            if !written {
                out.append_pair(REPORT_PARAM, id);
                written = true;
            }
        } else {
            out.append_pair(&key, &value);
        }
    }
    if !written {
        out.append_pair(REPORT_PARAM, id);
    }
    out.finish()
}

/// In-memory location with a history stack.
#[derive(Clone, Debug)]
pub struct MemoryLocation {
    entries: Vec<String>,
    cursor: usize,
    reject_writes: bool,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    /// Start with a single history entry.
    pub fn new(query: &str) -> Self {
        Self {
            entries: vec![query.strip_prefix('?').unwrap_or(query).to_string()],
            cursor: 0,
            reject_writes: false,
        }
    }

    /// Make [`Location::replace_query`] fail, like a throttled browser.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Navigate to a new entry (user edits the address bar or follows a link).
    ///
    /// Drops any forward entries, like a browser does.
    pub fn push(&mut self, query: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries
            .push(query.strip_prefix('?').unwrap_or(query).to_string());
        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns `false` at the first entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward; returns `false` at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_query(&mut self, query: &str) -> Result<(), LocationError> {
        if self.reject_writes {
            return Err(LocationError("writes rejected".into()));
        }
        self.entries[self.cursor] = query.strip_prefix('?').unwrap_or(query).to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_report_id() {
        assert_eq!(report_id_from_query("?reportId=r1"), Some("r1".into()));
        assert_eq!(report_id_from_query("a=1&reportId=r%202"), Some("r 2".into()));
        assert_eq!(report_id_from_query("reportId="), None);
        assert_eq!(report_id_from_query(""), None);
        assert_eq!(report_id_from_query("reportid=r1"), None);
    }

    #[test]
    fn first_report_id_wins() {
        assert_eq!(report_id_from_query("reportId=a&reportId=b"), Some("a".into()));
    }

    #[test]
    fn sets_report_id_preserving_other_params() {
        assert_eq!(with_report_id("", "r1"), "reportId=r1");
        assert_eq!(with_report_id("?tab=x", "r1"), "tab=x&reportId=r1");
        assert_eq!(
            with_report_id("a=1&reportId=old&b=2&reportId=dup", "new"),
            "a=1&reportId=new&b=2"
        );
    }

    #[test]
    fn encodes_ids() {
        let query = with_report_id("", "fuel & idle");
        assert_eq!(report_id_from_query(&query), Some("fuel & idle".into()));
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut loc = MemoryLocation::new("?reportId=a");
        loc.replace_query("reportId=b").unwrap();
        assert_eq!(loc.history_len(), 1);
        assert_eq!(loc.query(), "reportId=b");
    }

    #[test]
    fn rejected_write_keeps_query() {
        let mut loc = MemoryLocation::new("reportId=a");
        loc.reject_writes(true);
        assert!(loc.replace_query("reportId=b").is_err());
        assert_eq!(loc.query(), "reportId=a");
    }

    #[test]
    fn push_back_forward() {
        let mut loc = MemoryLocation::new("");
        loc.push("reportId=a");
        loc.push("reportId=b");
        assert!(loc.back());
        assert_eq!(loc.query(), "reportId=a");
        assert!(loc.forward());
        assert_eq!(loc.query(), "reportId=b");
        assert!(!loc.forward());

        loc.back();
        loc.back();
        assert!(!loc.back());
        loc.push("reportId=c");
        assert_eq!(loc.history_len(), 2);
    }
}
