//! Core types and logic for the planner ecosystem.
//!
//! This crate provides everything the CLI front-end needs besides the HTTP
//! plumbing itself:
//! - `calendar` for the date-range selection used when picking trip dates
//! - `i18n` for the locale text table (en/pt)
//! - `trip` for the wire data model of the trip server
//! - `planner` / `planner_config` for the local configuration store

pub mod calendar;
pub mod error;
pub mod i18n;
pub mod planner;
pub mod planner_config;
pub mod trip;

pub use calendar::{CalendarDay, DateRangeSelector, DatesSelected, DayMarking, MarkedDates};
pub use error::{PlannerError, PlannerResult};
pub use i18n::{Locale, LocaleLookup, TextKey, Translations};
pub use trip::{Activity, DayActivities, Participant, Trip, TripLink};
