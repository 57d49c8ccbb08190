//! Application state: societies, events, notifications, feedback and the report
//!
//! [`Registry`] owns exactly one of each container and exposes the actions
//! the admin and student screens perform. None of them can fail; a delete
//! with no matching name simply changes nothing.
//!
//! The report counts creations and joins. Deleting a society or event does
//! not lower its count.

use tracing::debug;

use crate::config::DEFAULT_REMINDER;
use crate::containers::{LinkedList, Queue, Stack};
use crate::report::ReportCounter;

#[derive(Debug)]
pub struct Registry {
    societies: LinkedList<String>,
    events: LinkedList<String>,
    notifications: Stack<String>,
    feedback: Queue<String>,
    report: ReportCounter,
    reminder: String,
}

impl Registry {
    /// Create an empty registry that pushes `reminder` on each notification view
    pub fn new(reminder: impl Into<String>) -> Self {
        Registry {
            societies: LinkedList::new(),
            events: LinkedList::new(),
            notifications: Stack::new(),
            feedback: Queue::new(),
            report: ReportCounter::new(),
            reminder: reminder.into(),
        }
    }

    // Admin actions

    pub fn add_society(&mut self, name: &str) {
        self.societies.add(name.to_string());
        self.report.record(name);
        debug!(society = name, "society added");
    }

    pub fn delete_society(&mut self, name: &str) {
        let before = self.societies.len();
        self.societies.delete(name);
        debug!(
            society = name,
            removed = before != self.societies.len(),
            "society delete"
        );
    }

    pub fn add_event(&mut self, title: &str) {
        self.events.add(title.to_string());
        self.report.record(title);
        debug!(event = title, "event added");
    }

    pub fn delete_event(&mut self, title: &str) {
        let before = self.events.len();
        self.events.delete(title);
        debug!(
            event = title,
            removed = before != self.events.len(),
            "event delete"
        );
    }

    /// Feedback in the order it was given
    pub fn feedback_entries(&self) -> Vec<String> {
        self.feedback.to_list()
    }

    pub fn report(&self) -> &ReportCounter {
        &self.report
    }

    // Student actions

    pub fn join_society(&mut self, name: &str) {
        self.report.record(name);
        debug!(society = name, "society joined");
    }

    pub fn join_event(&mut self, title: &str) {
        self.report.record(title);
        debug!(event = title, "event joined");
    }

    pub fn give_feedback(&mut self, text: &str) {
        self.feedback.enqueue(text.to_string());
        debug!(queued = self.feedback.len(), "feedback received");
    }

    /// Push the reminder, then list every notification newest first
    pub fn view_notifications(&mut self) -> Vec<String> {
        self.notifications.push(self.reminder.clone());
        self.notifications()
    }

    /// Remove the newest notification, if any
    pub fn dismiss_notification(&mut self) -> Option<String> {
        let dismissed = self.notifications.pop();
        debug!(dismissed = dismissed.is_some(), "notification dismiss");
        dismissed
    }

    // Snapshots

    /// Society names, most recently added first
    pub fn society_names(&self) -> Vec<String> {
        self.societies.all_names()
    }

    /// Event titles, most recently added first
    pub fn event_names(&self) -> Vec<String> {
        self.events.all_names()
    }

    /// Notifications newest first, without pushing a reminder
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.to_list()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback.len()
    }

    pub fn reminder(&self) -> &str {
        &self.reminder
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(DEFAULT_REMINDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_society_counts() {
        let mut registry = Registry::default();
        registry.add_society("Chess Club");
        registry.add_society("Chess Club");
        assert_eq!(registry.society_names(), vec!["Chess Club", "Chess Club"]);
        assert_eq!(registry.report().count("Chess Club"), 2);
    }

    #[test]
    fn test_delete_keeps_report() {
        let mut registry = Registry::default();
        registry.add_event("Hackathon");
        registry.delete_event("Hackathon");
        assert!(registry.event_names().is_empty());
        assert_eq!(registry.report().count("Hackathon"), 1);
    }

    #[test]
    fn test_societies_and_events_are_separate() {
        let mut registry = Registry::default();
        registry.add_society("Drama");
        registry.add_event("Drama");
        registry.delete_society("Drama");
        assert!(registry.society_names().is_empty());
        assert_eq!(registry.event_names(), vec!["Drama"]);
        assert_eq!(registry.report().count("Drama"), 2);
    }

    #[test]
    fn test_notifications_accumulate_per_view() {
        let mut registry = Registry::new("ping");
        assert_eq!(registry.view_notifications(), vec!["ping"]);
        assert_eq!(registry.view_notifications(), vec!["ping", "ping"]);
        assert_eq!(registry.dismiss_notification().as_deref(), Some("ping"));
        assert_eq!(registry.notification_count(), 1);
    }

    #[test]
    fn test_dismiss_on_empty() {
        let mut registry = Registry::default();
        assert_eq!(registry.dismiss_notification(), None);
        assert_eq!(registry.notification_count(), 0);
    }

    #[test]
    fn test_feedback_in_order() {
        let mut registry = Registry::default();
        registry.give_feedback("f1");
        registry.give_feedback("f2");
        assert_eq!(registry.feedback_entries(), vec!["f1", "f2"]);
    }
}
