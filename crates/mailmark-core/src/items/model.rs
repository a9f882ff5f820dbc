//! Query item model.

use serde::Serialize;

/// A definition joined with its live counts and their change since the
/// baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the definition flags
pub struct QueryItem {
    /// Display name, if the definition provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical query string.
    pub query: String,
    /// Shortcut key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<char>,
    /// Number of matching messages.
    pub count: u32,
    /// Number of matching unread messages.
    pub unread: u32,
    /// Change in `count` since the baseline.
    pub delta_count: i64,
    /// Change in `unread` since the baseline.
    pub delta_unread: i64,
    /// Primary bookmark.
    #[serde(skip_serializing_if = "is_false")]
    pub favorite: bool,
    /// Hidden from listings.
    #[serde(skip_serializing_if = "is_false")]
    pub hide: bool,
    /// Unread count is not displayed.
    #[serde(skip_serializing_if = "is_false")]
    pub hide_unread: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde skip_serializing_if signature
const fn is_false(value: &bool) -> bool {
    !*value
}

impl QueryItem {
    /// Unread/total counts as shown next to the item name.
    ///
    /// Empty when the unread count is hidden. Otherwise `unread`, then the
    /// signed unread delta in parentheses when it is nonzero, then `/count`:
    /// `5(+2)/12`.
    #[must_use]
    pub fn display_counts(&self) -> String {
        if self.hide_unread {
            return String::new();
        }

        if self.delta_unread == 0 {
            format!("{}/{}", self.unread, self.count)
        } else {
            format!("{}({:+})/{}", self.unread, self.delta_unread, self.count)
        }
    }
}

/// Free-function form of [`QueryItem::display_counts`].
#[must_use]
pub fn display_counts(item: &QueryItem) -> String {
    item.display_counts()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(unread: u32, count: u32, delta_unread: i64) -> QueryItem {
        QueryItem {
            name: Some("Inbox".to_string()),
            query: "flag:unread".to_string(),
            key: Some('i'),
            count,
            unread,
            delta_count: 0,
            delta_unread,
            favorite: false,
            hide: false,
            hide_unread: false,
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn no_delta() {
            assert_eq!(display_counts(&item(3, 10, 0)), "3/10");
        }

        #[test]
        fn positive_delta() {
            assert_eq!(display_counts(&item(5, 12, 2)), "5(+2)/12");
        }

        #[test]
        fn negative_delta() {
            assert_eq!(display_counts(&item(1, 12, -2)), "1(-2)/12");
        }

        #[test]
        fn hidden_unread_is_empty() {
            let mut hidden = item(7, 20, 4);
            hidden.hide_unread = true;
            assert_eq!(hidden.display_counts(), "");
            assert_eq!(hidden.unread, 7);
        }
    }

    mod serialize_tests {
        use super::*;

        #[test]
        fn false_flags_are_omitted() {
            let json = serde_json::to_value(item(3, 10, 0)).unwrap();
            let object = json.as_object().unwrap();
            assert!(!object.contains_key("favorite"));
            assert!(!object.contains_key("hide"));
            assert!(!object.contains_key("hide_unread"));
            assert_eq!(object["unread"], 3);
        }

        #[test]
        fn true_flags_are_present() {
            let mut favorite = item(3, 10, 0);
            favorite.favorite = true;
            let json = serde_json::to_value(favorite).unwrap();
            assert_eq!(json["favorite"], true);
        }

        #[test]
        fn absent_name_is_omitted() {
            let mut unnamed = item(0, 0, 0);
            unnamed.name = None;
            let json = serde_json::to_value(unnamed).unwrap();
            assert!(json.get("name").is_none());
        }
    }
}
