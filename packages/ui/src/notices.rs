use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaXmark;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Short-lived messages shown above the page content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Oldest entries are dropped beyond this many.
    pub const MAX_ENTRIES: usize = 5;

    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        if self.entries.len() > Self::MAX_ENTRIES {
            let excess = self.entries.len() - Self::MAX_ENTRIES;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    notices.write().push(level, message);
}

/// Local wall-clock time, `HH:MM:SS`.
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[component]
pub fn NoticeList() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries;

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-list",
            role: "status",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: entry.level.class(),
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { class: "notice-message", "{entry.message}" }
                    button {
                        class: "notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeLevel::Error, "Could not save sheet");
        let second = notices.push(NoticeLevel::Success, "Saved");
        assert_ne!(first, second);
        assert_eq!(notices.entries.len(), 2);

        notices.dismiss(first);
        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].message, "Saved");
        assert_eq!(notices.entries[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_notice_timestamp_is_wall_clock() {
        let mut notices = Notices::default();
        notices.push(NoticeLevel::Info, "Sheet deleted");
        let stamp = &notices.entries[0].timestamp;
        assert!(
            chrono::NaiveTime::parse_from_str(stamp, "%H:%M:%S").is_ok(),
            "unexpected timestamp {stamp}"
        );
    }

    #[test]
    fn test_oldest_entries_are_dropped() {
        let mut notices = Notices::default();
        for i in 0..Notices::MAX_ENTRIES + 2 {
            notices.push(NoticeLevel::Info, &format!("notice {i}"));
        }
        assert_eq!(notices.entries.len(), Notices::MAX_ENTRIES);
        assert_eq!(notices.entries[0].message, "notice 2");
    }
}
