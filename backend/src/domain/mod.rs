//! Domain entities, services, and ports.
//!
//! Types here are transport and storage agnostic. Inbound adapters map
//! them onto HTTP payloads; outbound adapters persist them. Invariants are
//! enforced by validated constructors and documented on each type.

pub mod error;
pub mod movement;
pub mod ports;
pub mod report;
pub mod trace_id;

mod movements_service;
mod reports_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::movement::{
    AMOUNT_MAX_SCALE, DESCRIPTION_MAX, Movement, MovementRecord, MovementType,
    MovementValidationError, NewMovement, Totals,
};
pub use self::movements_service::MovementsService;
pub use self::report::{
    AvailablePeriod, MonthlyReport, REPORT_MIN_YEAR, ReportPeriod, ReportPeriodError, format_eur,
};
pub use self::reports_service::ReportsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
