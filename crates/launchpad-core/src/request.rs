//! Wire-level creation request and its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::launch::{Launch, LaunchPatch};
use crate::time::parse_rfc3339;

/// Body of `POST /launches` and `PUT /launches/{id}`.
///
/// Missing fields decode as empty strings so that absence surfaces as a
/// validation error rather than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchCreateRequest {
    pub mission_name: String,
    /// RFC3339, e.g. `2021-09-01T10:00:00Z`.
    pub launch_time: String,
    pub vehicle_name: String,
    pub launch_site: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl LaunchCreateRequest {
    /// Checks the request and returns the parsed launch time.
    ///
    /// Required-field emptiness is checked before the timestamp is parsed.
    /// `status` is optional and unchecked.
    pub fn validate(&self) -> Result<DateTime<Utc>, CoreError> {
        if self.mission_name.is_empty()
            || self.launch_time.is_empty()
            || self.vehicle_name.is_empty()
            || self.launch_site.is_empty()
        {
            return Err(CoreError::InvalidInput);
        }
        parse_rfc3339(&self.launch_time)
    }

    /// Validates and converts into a [`Launch`] with an unassigned id.
    pub fn into_launch(self) -> Result<Launch, CoreError> {
        let launch_time = self.validate()?;
        Ok(Launch {
            id: Default::default(),
            mission_name: self.mission_name,
            launch_time,
            vehicle_name: self.vehicle_name,
            launch_site: self.launch_site,
            status: self.status,
        })
    }

    /// Converts into a partial update. Empty fields are left out of the patch.
    pub fn into_patch(self) -> Result<LaunchPatch, CoreError> {
        let launch_time = match self.launch_time.as_str() {
            "" => None,
            raw => Some(parse_rfc3339(raw)?),
        };
        Ok(LaunchPatch {
            mission_name: non_empty(self.mission_name),
            launch_time,
            vehicle_name: non_empty(self.vehicle_name),
            launch_site: non_empty(self.launch_site),
            status: non_empty(self.status),
        })
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn valid() -> LaunchCreateRequest {
        LaunchCreateRequest {
            mission_name: "Test Mission".into(),
            launch_time: "2021-09-01T10:00:00Z".into(),
            vehicle_name: "Falcon 9".into(),
            launch_site: "LC-39A".into(),
            status: String::new(),
        }
    }

    #[test]
    fn valid_request_passes() {
        let t = valid().validate().unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2021, 9, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn each_required_field_is_checked() {
        let blankers: [fn(&mut LaunchCreateRequest); 4] = [
            |r| r.mission_name.clear(),
            |r| r.launch_time.clear(),
            |r| r.vehicle_name.clear(),
            |r| r.launch_site.clear(),
        ];
        for blank in blankers {
            let mut req = valid();
            blank(&mut req);
            assert_eq!(req.validate(), Err(CoreError::InvalidInput));
        }
    }

    #[test]
    fn empty_fields_win_over_bad_time() {
        let req = LaunchCreateRequest {
            mission_name: String::new(),
            launch_time: "not a time".into(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(CoreError::InvalidInput));
    }

    #[test]
    fn bad_time_is_rejected() {
        let req = LaunchCreateRequest {
            launch_time: "09/01/2021 10:00".into(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(CoreError::InvalidTimeFormat));
    }

    #[test]
    fn missing_json_fields_decode_as_empty() {
        let req: LaunchCreateRequest =
            serde_json::from_str(r#"{"mission_name":"Only a name"}"#).unwrap();
        assert_eq!(req.mission_name, "Only a name");
        assert!(req.launch_time.is_empty());
        assert_eq!(req.validate(), Err(CoreError::InvalidInput));
    }

    #[test]
    fn into_launch_carries_status_and_leaves_id_unassigned() {
        let launch = LaunchCreateRequest {
            status: "scheduled".into(),
            ..valid()
        }
        .into_launch()
        .unwrap();
        assert!(launch.id.is_unassigned());
        assert_eq!(launch.status, "scheduled");
        assert_eq!(launch.vehicle_name, "Falcon 9");
    }

    #[test]
    fn into_patch_skips_empty_fields() {
        let patch = LaunchCreateRequest {
            mission_name: "Updated".into(),
            ..LaunchCreateRequest::default()
        }
        .into_patch()
        .unwrap();
        assert_eq!(patch.mission_name.as_deref(), Some("Updated"));
        assert!(patch.launch_time.is_none());
        assert!(patch.vehicle_name.is_none());
        assert!(patch.launch_site.is_none());
        assert!(patch.status.is_none());
    }

    #[test]
    fn into_patch_rejects_bad_time() {
        let req = LaunchCreateRequest {
            launch_time: "yesterday".into(),
            ..LaunchCreateRequest::default()
        };
        assert_eq!(req.into_patch(), Err(CoreError::InvalidTimeFormat));
    }

    proptest! {
        #[test]
        fn non_empty_fields_with_valid_time_always_validate(
            mission in "[A-Za-z0-9 ]{1,32}",
            vehicle in "[A-Za-z0-9 ]{1,32}",
            site in "[A-Za-z0-9 -]{1,32}",
            secs in 0i64..4_102_444_800,
        ) {
            let t = Utc.timestamp_opt(secs, 0).unwrap();
            let req = LaunchCreateRequest {
                mission_name: mission,
                launch_time: crate::time::format_rfc3339(&t),
                vehicle_name: vehicle,
                launch_site: site,
                status: String::new(),
            };
            prop_assert_eq!(req.validate(), Ok(t));
        }

        #[test]
        fn free_text_times_never_panic(raw in "\\PC{0,40}") {
            let req = LaunchCreateRequest { launch_time: raw, ..valid() };
            let _ = req.validate();
        }
    }
}
