//! Driving port for movement reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Movement, Totals};

/// Driving port for movement read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovementsQuery: Send + Sync {
    /// All movements, most recent date first, then most recent creation.
    async fn list_movements(&self) -> Result<Vec<Movement>, Error>;

    /// One movement by id; absent rows surface as a not-found error.
    async fn get_movement(&self, id: Uuid) -> Result<Movement, Error>;

    /// Running aggregate over the whole movement set.
    async fn totals(&self) -> Result<Totals, Error>;
}

/// Fixture query reporting an empty movement set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMovementsQuery;

#[async_trait]
impl MovementsQuery for FixtureMovementsQuery {
    async fn list_movements(&self) -> Result<Vec<Movement>, Error> {
        Ok(Vec::new())
    }

    async fn get_movement(&self, id: Uuid) -> Result<Movement, Error> {
        Err(Error::not_found(format!(
            "Movimiento con ID {id} no encontrado"
        )))
    }

    async fn totals(&self) -> Result<Totals, Error> {
        Ok(Totals::empty())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_list_is_empty() {
        let listed = FixtureMovementsQuery
            .list_movements()
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_get_reports_not_found() {
        let err = FixtureMovementsQuery
            .get_movement(Uuid::new_v4())
            .await
            .expect_err("fixture lookup misses");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
