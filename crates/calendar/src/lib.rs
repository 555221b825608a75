//! # selene-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, built on
//! `chrono`'s checked date APIs.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     B -->|".days_since_unix_epoch()"| C["day number (i64)"]
//!     C -->|"CalendarDate::from_days_since_unix_epoch()"| B
//!     B -->|".next()"| F["Option of CalendarDate"]
//!     D["year"] -->|"year_sequence()"| E["Vec of CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use selene_calendar::{CalendarDate, days_in_year, year_sequence};
//!
//! let date = CalendarDate::new(2000, 1, 6).unwrap();
//! assert_eq!(date.days_since_unix_epoch(), 10_962);
//! assert_eq!(date.to_string(), "2000-01-06");
//!
//! let days = year_sequence(2024);
//! assert_eq!(days.len(), 366);
//! assert_eq!(days_in_year(2023), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap-year rules and month lengths |
//! | `date` | Validated calendar date |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod sequence;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use gregorian::{days_in_month, days_in_year, is_leap_year};
pub use sequence::{date_sequence, year_sequence};
