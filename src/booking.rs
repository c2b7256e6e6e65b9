//! Appointment search and booking-form logic.
//!
//! The list screen offers three filters (reference date, doctor, room) but
//! the backend exposes one lookup per combination; [`AppointmentQuery`]
//! decides which single call to issue. [`AppointmentListState`] owns what the
//! table shows, replacing it wholesale per fetch and discarding stale
//! responses by request token. The booking form collects date and time in two
//! pickers; [`compose_schedule`] merges them into one instant before anything
//! crosses the wire.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::{Appointment, AppointmentInput};

// ─── Query resolution ─────────────────────────────────────────────────────────

/// Date-scoped appointment lookups the list screen can issue. Implemented by
/// `HospitalClient`; one search maps to exactly one of these calls.
pub trait AppointmentLookup {
    fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>, ApiError>;

    fn appointments_for_doctor(
        &self,
        doctor_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ApiError>;

    fn appointments_for_room(
        &self,
        room_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ApiError>;
}

/// Filter selections on the appointment list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentQuery {
    /// Reference date every lookup is scoped to.
    pub date: NaiveDate,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
}

impl AppointmentQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            doctor_id: None,
            room_id: None,
        }
    }

    /// Issues exactly one backend lookup. A doctor filter takes precedence
    /// over a room filter; with neither, the lookup is by date alone. Rows
    /// come back in backend order, never re-sorted here.
    pub fn run(&self, api: &impl AppointmentLookup) -> Result<Vec<Appointment>, ApiError> {
        if let Some(doctor_id) = self.doctor_id {
            api.appointments_for_doctor(doctor_id, self.date)
        } else if let Some(room_id) = self.room_id {
            api.appointments_for_room(room_id, self.date)
        } else {
            api.appointments_on(self.date)
        }
    }
}

// ─── List screen state ────────────────────────────────────────────────────────

/// What the appointment table shows. Empty results are a valid outcome,
/// distinct from both the in-flight and the failed state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TableState {
    /// A fetch is in flight; the webview disables the triggering control.
    Loading,
    /// Rows in backend order.
    Loaded { rows: Vec<Appointment> },
    /// The backend answered with zero rows.
    NoResults,
    /// The fetch failed; rows are cleared, filters kept for retry.
    Failed { notice: String },
}

/// Source of truth for the appointment list screen, mirrored by the webview.
///
/// Each fetch gets a monotonically increasing token from [`begin`]; a result
/// arriving with an older token is discarded in [`apply`], so a slow response
/// can never overwrite a newer one.
///
/// [`begin`]: AppointmentListState::begin
/// [`apply`]: AppointmentListState::apply
#[derive(Debug)]
pub struct AppointmentListState {
    pub filters: AppointmentQuery,
    pub table: TableState,
    latest_token: u64,
}

impl AppointmentListState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            filters: AppointmentQuery::for_date(today),
            table: TableState::Loading,
            latest_token: 0,
        }
    }

    /// Record the filters being searched and mark the table in flight.
    /// Returns the token the eventual result must present to [`apply`].
    ///
    /// [`apply`]: AppointmentListState::apply
    pub fn begin(&mut self, filters: AppointmentQuery) -> u64 {
        self.filters = filters;
        self.table = TableState::Loading;
        self.latest_token += 1;
        self.latest_token
    }

    /// The "show all appointments" reset: clears both the doctor and the
    /// room filter (the reference date is left untouched) and marks the
    /// table in flight for the dateless list fetch.
    pub fn begin_show_all(&mut self) -> u64 {
        self.filters.doctor_id = None;
        self.filters.room_id = None;
        self.table = TableState::Loading;
        self.latest_token += 1;
        self.latest_token
    }

    /// Commit a fetch outcome. Returns `false` when `token` is stale and the
    /// result was discarded without touching the table.
    ///
    /// On failure the table becomes [`TableState::Failed`] — the previous
    /// rows are gone, the notice is generic, and `filters` stays exactly as
    /// selected so a retry reuses it.
    pub fn apply(&mut self, token: u64, outcome: Result<Vec<Appointment>, ApiError>) -> bool {
        if token != self.latest_token {
            tracing::debug!(
                token,
                latest = self.latest_token,
                "Discarding stale appointment fetch result"
            );
            return false;
        }

        self.table = match outcome {
            Ok(rows) if rows.is_empty() => TableState::NoResults,
            Ok(rows) => TableState::Loaded { rows },
            Err(err) => {
                tracing::warn!(error = %err, "Appointment fetch failed");
                TableState::Failed {
                    notice: err.user_notice().to_string(),
                }
            }
        };
        true
    }
}

// ─── Date/time composition ────────────────────────────────────────────────────

/// Overlay the hour/minute of `time` onto `date`, yielding the consultation
/// instant. Seconds and sub-seconds are zeroed. The combined value is
/// interpreted in the machine's local timezone and converted to UTC for
/// transmission; `None` only for local times skipped by a DST transition.
pub fn compose_schedule(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    let time = time.with_second(0).unwrap_or(time);
    let time = time.with_nanosecond(0).unwrap_or(time);
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Inverse of [`compose_schedule`], used by the edit screen to seed the two
/// pickers from a stored instant.
pub fn split_schedule(at: DateTime<Utc>) -> (NaiveDate, NaiveTime) {
    let local = at.with_timezone(&Local);
    (local.date_naive(), local.time())
}

// ─── Booking form ─────────────────────────────────────────────────────────────

/// A validation failure on one form field, shown inline next to that input.
/// Raised before any network call; nothing invalid crosses the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

const fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

/// Raw state of the booking form's date and time pickers. Time values are
/// `HH:MM:SS` strings on the wire.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScheduleDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl ScheduleDraft {
    /// Both pickers are mandatory. A missing one rejects the submit locally
    /// with a field-level message; composition happens only when both are
    /// present.
    pub fn resolve(&self) -> Result<DateTime<Utc>, FieldError> {
        let date = self
            .date
            .ok_or(field_error("date", "Date is required"))?;
        let time = self
            .time
            .ok_or(field_error("time", "Time is required"))?;
        compose_schedule(date, time).ok_or(field_error(
            "time",
            "This time does not exist on the selected date",
        ))
    }
}

/// Everything the booking form collects. Validated locally into an
/// [`AppointmentInput`]; on any error the submit stops before the network.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub doctor_id: Option<i64>,
    pub room_id: Option<i64>,
    pub patient_id: Option<i64>,
    #[serde(flatten)]
    pub schedule: ScheduleDraft,
}

impl AppointmentDraft {
    pub fn validate(&self) -> Result<AppointmentInput, FieldError> {
        let doctor_id = self
            .doctor_id
            .ok_or(field_error("doctorId", "Doctor is required"))?;
        let room_id = self
            .room_id
            .ok_or(field_error("roomId", "Room is required"))?;
        let patient_id = self
            .patient_id
            .ok_or(field_error("patientId", "Patient is required"))?;
        let scheduled_at = self.schedule.resolve()?;

        Ok(AppointmentInput {
            doctor_id,
            room_id,
            patient_id,
            scheduled_at,
        })
    }
}
