//! Stage-activity classification.
//!
//! Routers insert short "interaction" activities between the legs of one trip
//! to represent mode transfers; those must not count as trip boundaries.  The
//! convention is purely lexical: a stage activity's type label ends with
//! `" interaction"` (`"pt interaction"`, `"drt interaction"`, …).
//!
//! Any other label ends the trip, including labels this code has never seen:
//! trip trackers reset on every non-stage activity start.

/// Suffix marking transfer activities inserted by the router.
pub const STAGE_ACTIVITY_SUFFIX: &str = " interaction";

/// `true` iff `activity_type` is a transfer activity rather than a genuine
/// trip-ending activity.
#[inline]
pub fn is_stage_activity(activity_type: &str) -> bool {
    activity_type.ends_with(STAGE_ACTIVITY_SUFFIX)
}
