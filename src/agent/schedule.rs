// Schedule input taxonomy for the task tools

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a task should run, as the model supplies it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScheduleWhen {
    /// Fire once at an absolute time
    Scheduled { date: DateTime<Utc> },

    /// Fire once after a relative delay
    Delayed {
        #[serde(rename = "delayInSeconds")]
        delay_in_seconds: u64,
    },

    /// Fire repeatedly on a cron expression
    Cron { cron: String },

    /// The model could not produce a usable trigger
    NoSchedule,
}

impl ScheduleWhen {
    /// Wire name of the variant tag
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleWhen::Scheduled { .. } => "scheduled",
            ScheduleWhen::Delayed { .. } => "delayed",
            ScheduleWhen::Cron { .. } => "cron",
            ScheduleWhen::NoSchedule => "no-schedule",
        }
    }

    /// True when the input names an actual trigger
    pub fn is_schedulable(&self) -> bool {
        !matches!(self, ScheduleWhen::NoSchedule)
    }
}

/// One recorded task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: String,
    pub when: ScheduleWhen,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ScheduledTask {
    pub fn new(when: ScheduleWhen, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            when,
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
