use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::state::AppState;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting background sweeper...");

    let interval = Duration::from_secs(state.config.sweep_interval_secs.max(1));

    loop {
        run_sweep(&state)
            .instrument(info_span!("background_sweep"))
            .await;
        sleep(interval).await;
    }
}

/// One pass: unpaid bookings past their TTL are failed, releasing their
/// seats, and idle sessions are dropped.
pub async fn run_sweep(state: &AppState) {
    let now = Utc::now();

    let ttl_secs = state.config.pending_booking_ttl_secs;
    match cutoff(now, chrono::Duration::try_seconds(ttl_secs)) {
        Some(booking_cutoff) => match state.booking_service.expire_pending(booking_cutoff).await {
            Ok(0) => {}
            Ok(n) => info!("Expired {} unpaid bookings", n),
            Err(e) => error!("Failed to expire pending bookings: {:?}", e),
        },
        None => error!("Pending booking TTL of {}s is out of range, skipping expiry", ttl_secs),
    }

    let ttl_hours = state.config.session_ttl_hours;
    match cutoff(now, chrono::Duration::try_hours(ttl_hours)) {
        Some(session_cutoff) => match state.session_repo.delete_idle_before(session_cutoff).await {
            Ok(0) => {}
            Ok(n) => info!("Pruned {} idle sessions", n),
            Err(e) => error!("Failed to prune idle sessions: {:?}", e),
        },
        None => error!("Session TTL of {}h is out of range, skipping pruning", ttl_hours),
    }
}

fn cutoff(now: DateTime<Utc>, ttl: Option<chrono::Duration>) -> Option<DateTime<Utc>> {
    now.checked_sub_signed(ttl?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_in_range() {
        let now = Utc::now();
        assert_eq!(cutoff(now, chrono::Duration::try_seconds(900)), Some(now - chrono::Duration::seconds(900)));
        assert!(cutoff(now, chrono::Duration::try_seconds(-60)).unwrap() > now);
    }

    #[test]
    fn test_cutoff_out_of_range_is_none() {
        let now = Utc::now();
        assert!(cutoff(now, chrono::Duration::try_seconds(i64::MAX)).is_none());
        assert!(cutoff(now, chrono::Duration::try_hours(i64::MAX / 2)).is_none());
        // Representable as a duration but not as a date.
        assert!(cutoff(now, chrono::Duration::try_days(100_000_000)).is_none());
    }
}
