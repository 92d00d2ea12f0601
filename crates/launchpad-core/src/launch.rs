//! The [`Launch`] record and its partial-update counterpart [`LaunchPatch`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::LaunchId;

/// A scheduled or historical rocket launch.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub id: LaunchId,
    pub mission_name: String,
    #[serde(with = "crate::time::rfc3339")]
    pub launch_time: DateTime<Utc>,
    pub vehicle_name: String,
    pub launch_site: String,
    /// Free-form status such as "scheduled"; omitted from JSON when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl Launch {
    /// Creates a record with an unassigned id and no status.
    pub fn new(
        mission_name: impl Into<String>,
        launch_time: DateTime<Utc>,
        vehicle_name: impl Into<String>,
        launch_site: impl Into<String>,
    ) -> Self {
        Launch {
            id: LaunchId::default(),
            mission_name: mission_name.into(),
            launch_time,
            vehicle_name: vehicle_name.into(),
            launch_site: launch_site.into(),
            status: String::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Fields to overwrite on an existing [`Launch`].
///
/// `None` leaves the stored value untouched; there is no way to clear a
/// field through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchPatch {
    pub mission_name: Option<String>,
    pub launch_time: Option<DateTime<Utc>>,
    pub vehicle_name: Option<String>,
    pub launch_site: Option<String>,
    pub status: Option<String>,
}

impl LaunchPatch {
    /// `true` when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.mission_name.is_none()
            && self.launch_time.is_none()
            && self.vehicle_name.is_none()
            && self.launch_site.is_none()
            && self.status.is_none()
    }

    /// Overwrites the present fields of `launch`. The id is never touched.
    pub fn apply_to(&self, launch: &mut Launch) {
        if let Some(mission_name) = &self.mission_name {
            launch.mission_name.clone_from(mission_name);
        }
        if let Some(launch_time) = self.launch_time {
            launch.launch_time = launch_time;
        }
        if let Some(vehicle_name) = &self.vehicle_name {
            launch.vehicle_name.clone_from(vehicle_name);
        }
        if let Some(launch_site) = &self.launch_site {
            launch.launch_site.clone_from(launch_site);
        }
        if let Some(status) = &self.status {
            launch.status.clone_from(status);
        }
    }
}
