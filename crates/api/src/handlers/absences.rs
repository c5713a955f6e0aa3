//! Absence list handler with the big-screen calendar-day filter.
//!
//! Mutations go through the generic board handlers; only the list is
//! bespoke, because the dashboard's TV view shows today's absences only.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use dispatch_core::absence::is_on_day;
use dispatch_db::models::absence::Absence;
use dispatch_db::resource::BoardResource;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the absence list.
#[derive(Debug, Deserialize)]
pub struct AbsenceListParams {
    /// Restrict the list to a single calendar day. The client passes its
    /// own local day, so the filter is independent of the server's UTC
    /// offset.
    pub on: Option<NaiveDate>,
}

/// GET /api/absences?on=YYYY-MM-DD
///
/// Full absence list, newest first, optionally filtered to one calendar
/// day for the big-screen view.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AbsenceListParams>,
) -> AppResult<Json<Vec<Absence>>> {
    let mut rows = Absence::list(&state.pool).await?;
    if let Some(day) = params.on {
        rows.retain(|r| is_on_day(r.absence_date, day));
    }
    Ok(Json(rows))
}
