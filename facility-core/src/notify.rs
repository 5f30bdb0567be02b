//! Success notifications emitted by the store.
//!
//! The store never talks to a UI directly. It hands a [`Notification`] to
//! whatever [`Notifier`] it was built with after each mutation that changed
//! something.

use serde::{Deserialize, Serialize};

/// Which mutation produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    PrisonerAdded,
    PrisonerUpdated,
    PrisonerDeleted,
    StaffAdded,
    StaffUpdated,
    StaffDeleted,
    PrisonerAssigned,
    OccupancyReconciled,
}

impl NotificationKind {
    /// Confirmation text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            NotificationKind::PrisonerAdded => "Prisoner added successfully",
            NotificationKind::PrisonerUpdated => "Prisoner updated successfully",
            NotificationKind::PrisonerDeleted => "Prisoner deleted successfully",
            NotificationKind::StaffAdded => "Staff member added successfully",
            NotificationKind::StaffUpdated => "Staff member updated successfully",
            NotificationKind::StaffDeleted => "Staff member deleted successfully",
            NotificationKind::PrisonerAssigned => "Prisoner assigned to cell successfully",
            NotificationKind::OccupancyReconciled => "Cell occupancy reconciled successfully",
        }
    }
}

/// A transient success notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Id of the record the mutation touched, if any.
    pub record_id: Option<u32>,
    /// Sequence number within the session, starting at 1.
    pub sequence: u64,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Receives success notifications from the store.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _notification: &Notification) {}
}

/// Keeps every notification it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    /// Messages of all notifications received so far.
    pub fn messages(&self) -> Vec<&'static str> {
        self.received.iter().map(Notification::message).collect()
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }

    pub fn clear(&mut self) {
        self.received.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.received.push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: NotificationKind, sequence: u64) -> Notification {
        Notification {
            kind,
            record_id: Some(1),
            sequence,
        }
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify(&sample(NotificationKind::PrisonerAdded, 1));
        notifier.notify(&sample(NotificationKind::StaffDeleted, 2));

        assert_eq!(
            notifier.messages(),
            vec!["Prisoner added successfully", "Staff member deleted successfully"]
        );
        assert_eq!(notifier.last().map(|n| n.sequence), Some(2));

        notifier.clear();
        assert!(notifier.received().is_empty());
    }

    #[test]
    fn test_closure_notifier() {
        let mut seen = Vec::new();
        {
            let mut notifier = |n: &Notification| seen.push(n.kind);
            notifier.notify(&sample(NotificationKind::PrisonerAssigned, 1));
        }
        assert_eq!(seen, vec![NotificationKind::PrisonerAssigned]);
    }
}
