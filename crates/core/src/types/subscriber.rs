//! Newsletter subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::SubscriberId;

/// A stored newsletter subscriber. `email` is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: SubscriberId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
