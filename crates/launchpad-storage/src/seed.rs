//! Example records loaded into a fresh store at server startup.

use chrono::{DateTime, Duration, TimeZone, Utc};
use launchpad_core::Launch;

use crate::error::StorageError;
use crate::traits::LaunchStore;

/// 2024-05-20T14:00:00Z in nanoseconds since the Unix epoch.
const MISSION_A_LAUNCH_NANOS: i64 = 1_716_213_600_000_000_000;

/// The two demo launches: one fixed in the past, one a day after `now`.
pub fn seed_launches(now: DateTime<Utc>) -> Vec<Launch> {
    vec![
        Launch::new(
            "Test Mission A",
            Utc.timestamp_nanos(MISSION_A_LAUNCH_NANOS),
            "Falcon 9",
            "LC-39A",
        )
        .with_status("scheduled"),
        Launch::new("Test Mission B", now + Duration::hours(24), "Starship", "Boca Chica")
            .with_status("pending"),
    ]
}

/// Creates every seed launch through `store`, so ids come from the store's
/// own counter. Returns how many records were added.
pub fn seed_store(store: &mut dyn LaunchStore, now: DateTime<Utc>) -> Result<usize, StorageError> {
    let launches = seed_launches(now);
    let count = launches.len();
    for launch in launches {
        store.create(launch)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use launchpad_core::LaunchId;

    #[test]
    fn fresh_store_gets_ids_one_and_two() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut store = InMemoryStore::new();
        assert_eq!(seed_store(&mut store, now).unwrap(), 2);

        let a = store.get(&LaunchId::from("1")).unwrap();
        assert_eq!(a.mission_name, "Test Mission A");
        assert_eq!(a.status, "scheduled");
        assert_eq!(
            a.launch_time,
            Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap()
        );

        let b = store.get(&LaunchId::from("2")).unwrap();
        assert_eq!(b.vehicle_name, "Starship");
        assert_eq!(b.launch_time, now + Duration::hours(24));
    }
}
