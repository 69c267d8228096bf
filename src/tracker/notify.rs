//! Notification intents and the delivery seam.

use crate::geo::Region;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Placeholder in a message template replaced by the region radius.
pub const RADIUS_PLACEHOLDER: &str = "{radius}";

pub const DEFAULT_TITLE: &str = "T-Fence";
pub const DEFAULT_BODY: &str = "You are within {radius} m of the target.";

/// Request to show an alert right away: no trigger, no repeat, default
/// sound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationIntent {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

impl NotificationIntent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The notification subsystem. Called once per entry event.
pub trait Notifier: Send + Sync {
    fn deliver(&self, intent: NotificationIntent);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn deliver(&self, intent: NotificationIntent) {
        (**self).deliver(intent)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn deliver(&self, intent: NotificationIntent) {
        (**self).deliver(intent)
    }
}

/// Notifier that writes intents to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn deliver(&self, intent: NotificationIntent) {
        info!(
            id = %intent.id,
            title = %intent.title,
            body = %intent.body,
            "notification"
        );
    }
}

/// Title and body of the entry alert. `{radius}` in either is replaced by
/// the monitored radius in whole meters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub title: String,
    pub body: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}

impl MessageTemplate {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn render(&self, region: &Region) -> NotificationIntent {
        let radius = format!("{:.0}", region.radius_meters());
        NotificationIntent::new(
            self.title.replace(RADIUS_PLACEHOLDER, &radius),
            self.body.replace(RADIUS_PLACEHOLDER, &radius),
        )
    }
}
