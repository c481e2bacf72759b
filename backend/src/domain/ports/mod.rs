//! Domain ports for the hexagonal boundary.

mod movement_repository;
mod movements_command;
mod movements_query;
mod report_repository;
mod reports_query;

#[cfg(test)]
pub use movement_repository::MockMovementRepository;
pub use movement_repository::{
    FixtureMovementRepository, MovementRepository, MovementRepositoryError,
};
#[cfg(test)]
pub use movements_command::MockMovementsCommand;
pub use movements_command::{CreateMovementRequest, FixtureMovementsCommand, MovementsCommand};
#[cfg(test)]
pub use movements_query::MockMovementsQuery;
pub use movements_query::{FixtureMovementsQuery, MovementsQuery};
#[cfg(test)]
pub use report_repository::MockReportRepository;
pub use report_repository::{
    FixtureReportRepository, MonthlySummary, MovementCounts, ReportRepository,
    ReportRepositoryError,
};
#[cfg(test)]
pub use reports_query::MockReportsQuery;
pub use reports_query::{FixtureReportsQuery, ReportDocument, ReportsQuery};
