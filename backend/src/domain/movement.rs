//! Movement entity and sign normalization.
//!
//! A movement is a single dated ledger entry. The stored amount always
//! carries the sign of its type: credits are positive, debits negative.
//! [`MovementType::normalized`] enforces that convention and every
//! constructor routes through it, so the invariant holds for any
//! [`Movement`] or [`NewMovement`] that exists.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of fractional digits accepted for an amount.
pub const AMOUNT_MAX_SCALE: u32 = 2;
/// Maximum length of the free-text description in characters.
pub const DESCRIPTION_MAX: usize = 255;

/// Validation errors raised while building a [`NewMovement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementValidationError {
    /// The amount is zero; a movement must move something.
    AmountZero,
    /// The amount carries more fractional digits than the column stores.
    AmountPrecision {
        /// Maximum accepted fractional digits.
        max: u32,
    },
    /// The description exceeds the column width.
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
    /// The type label is not CREDITO or DEBITO.
    InvalidType,
}

impl fmt::Display for MovementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountZero => write!(f, "El monto debe ser mayor a 0"),
            Self::AmountPrecision { max } => {
                write!(f, "El monto debe tener como máximo {max} decimales")
            }
            Self::DescriptionTooLong { max } => {
                write!(f, "La descripción no debe exceder {max} caracteres")
            }
            Self::InvalidType => write!(f, "El tipo debe ser CREDITO o DEBITO"),
        }
    }
}

impl std::error::Error for MovementValidationError {}

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    /// Inflow; stored amounts are positive.
    Credito,
    /// Outflow; stored amounts are negative.
    Debito,
}

impl MovementType {
    /// Stable wire and storage label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credito => "CREDITO",
            Self::Debito => "DEBITO",
        }
    }

    /// Return `amount` with the sign this type mandates.
    ///
    /// Total over every non-zero decimal and idempotent: applying it to an
    /// already-normalized amount is a no-op.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::MovementType;
    /// use rust_decimal::Decimal;
    ///
    /// let fifty = Decimal::new(5000, 2);
    /// assert_eq!(MovementType::Debito.normalized(fifty), -fifty);
    /// assert_eq!(MovementType::Credito.normalized(-fifty), fifty);
    /// ```
    pub fn normalized(self, amount: Decimal) -> Decimal {
        match self {
            Self::Credito => amount.abs(),
            Self::Debito => -amount.abs(),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = MovementValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREDITO" => Ok(Self::Credito),
            "DEBITO" => Ok(Self::Debito),
            _ => Err(MovementValidationError::InvalidType),
        }
    }
}

/// Validated movement ready for insertion.
///
/// ## Invariants
/// - `monto` is non-zero, has at most [`AMOUNT_MAX_SCALE`] fractional
///   digits, and its sign matches `tipo`.
/// - `descripcion`, when present, is trimmed, non-empty, and at most
///   [`DESCRIPTION_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    fecha: NaiveDate,
    tipo: MovementType,
    monto: Decimal,
    descripcion: Option<String>,
}

impl NewMovement {
    /// Validate the parts and normalize the amount sign.
    ///
    /// The caller may pass the amount with either sign; only its magnitude
    /// is kept and the sign is derived from `tipo`.
    pub fn try_new(
        fecha: NaiveDate,
        tipo: MovementType,
        monto: Decimal,
        descripcion: Option<String>,
    ) -> Result<Self, MovementValidationError> {
        if monto.is_zero() {
            return Err(MovementValidationError::AmountZero);
        }
        if monto.normalize().scale() > AMOUNT_MAX_SCALE {
            return Err(MovementValidationError::AmountPrecision {
                max: AMOUNT_MAX_SCALE,
            });
        }

        let descripcion = match descripcion {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.chars().count() > DESCRIPTION_MAX {
                    return Err(MovementValidationError::DescriptionTooLong {
                        max: DESCRIPTION_MAX,
                    });
                } else {
                    Some(trimmed.to_owned())
                }
            }
            None => None,
        };

        Ok(Self {
            fecha,
            tipo,
            monto: tipo.normalized(monto),
            descripcion,
        })
    }

    /// Movement date.
    pub fn fecha(&self) -> NaiveDate {
        self.fecha
    }

    /// Movement direction.
    pub fn tipo(&self) -> MovementType {
        self.tipo
    }

    /// Sign-normalized amount.
    pub fn monto(&self) -> Decimal {
        self.monto
    }

    /// Optional trimmed description.
    pub fn descripcion(&self) -> Option<&str> {
        self.descripcion.as_deref()
    }
}

/// Raw parts of a stored movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRecord {
    /// Stable identifier assigned by the store.
    pub id: Uuid,
    /// Movement date.
    pub fecha: NaiveDate,
    /// Movement direction.
    pub tipo: MovementType,
    /// Amount; re-normalized on construction.
    pub monto: Decimal,
    /// Optional description.
    pub descripcion: Option<String>,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp maintained by the store.
    pub updated_at: DateTime<Utc>,
}

/// Stored movement.
///
/// Immutable after creation; there is no update or delete surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    id: Uuid,
    fecha: NaiveDate,
    tipo: MovementType,
    monto: Decimal,
    descripcion: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Movement {
    /// Build a movement from stored parts, re-asserting the sign invariant.
    pub fn new(record: MovementRecord) -> Self {
        let MovementRecord {
            id,
            fecha,
            tipo,
            monto,
            descripcion,
            created_at,
            updated_at,
        } = record;
        Self {
            id,
            fecha,
            tipo,
            monto: tipo.normalized(monto),
            descripcion,
            created_at,
            updated_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Movement date.
    pub fn fecha(&self) -> NaiveDate {
        self.fecha
    }

    /// Movement direction.
    pub fn tipo(&self) -> MovementType {
        self.tipo
    }

    /// Signed amount; positive for credits, negative for debits.
    pub fn monto(&self) -> Decimal {
        self.monto
    }

    /// Optional description.
    pub fn descripcion(&self) -> Option<&str> {
        self.descripcion.as_deref()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Running aggregate over the whole movement set.
///
/// `total_debitos` is reported as a positive magnitude, so
/// `balance == total_creditos - total_debitos` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Sum of credit amounts.
    pub total_creditos: Decimal,
    /// Sum of debit magnitudes.
    pub total_debitos: Decimal,
    /// Sum of all signed amounts.
    pub balance: Decimal,
    /// Number of movements.
    pub total_movimientos: i64,
}

impl Totals {
    /// Zeroed totals for an empty movement set.
    pub const fn empty() -> Self {
        Self {
            total_creditos: Decimal::ZERO,
            total_debitos: Decimal::ZERO,
            balance: Decimal::ZERO,
            total_movimientos: 0,
        }
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).expect("valid fixture date")
    }

    #[rstest]
    #[case(dec!(50.00), dec!(-50.00))]
    #[case(dec!(-50.00), dec!(-50.00))]
    #[case(dec!(0.01), dec!(-0.01))]
    fn debits_normalize_negative(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(MovementType::Debito.normalized(input), expected);
    }

    #[rstest]
    #[case(dec!(30.00), dec!(30.00))]
    #[case(dec!(-30.00), dec!(30.00))]
    fn credits_normalize_positive(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(MovementType::Credito.normalized(input), expected);
    }

    #[rstest]
    #[case(MovementType::Credito, dec!(12.34))]
    #[case(MovementType::Debito, dec!(12.34))]
    #[case(MovementType::Debito, dec!(-7.00))]
    fn normalization_is_idempotent(#[case] tipo: MovementType, #[case] amount: Decimal) {
        let once = tipo.normalized(amount);
        assert_eq!(tipo.normalized(once), once);
    }

    #[rstest]
    fn new_movement_stores_debit_negative() {
        let movement = NewMovement::try_new(march(1), MovementType::Debito, dec!(50.00), None)
            .expect("valid movement");
        assert_eq!(movement.monto(), dec!(-50.00));
    }

    #[rstest]
    fn new_movement_corrects_credit_sign() {
        let movement = NewMovement::try_new(march(2), MovementType::Credito, dec!(-30.00), None)
            .expect("valid movement");
        assert_eq!(movement.monto(), dec!(30.00));
    }

    #[rstest]
    fn new_movement_rejects_zero_amount() {
        let err = NewMovement::try_new(march(1), MovementType::Credito, Decimal::ZERO, None)
            .expect_err("zero amount should fail");
        assert_eq!(err, MovementValidationError::AmountZero);
    }

    #[rstest]
    fn new_movement_rejects_excess_precision() {
        let err = NewMovement::try_new(march(1), MovementType::Credito, dec!(10.123), None)
            .expect_err("three decimals should fail");
        assert_eq!(err, MovementValidationError::AmountPrecision { max: 2 });
    }

    #[rstest]
    fn new_movement_accepts_trailing_zero_scale() {
        let movement =
            NewMovement::try_new(march(1), MovementType::Credito, dec!(10.100), None)
                .expect("trailing zeros do not add precision");
        assert_eq!(movement.monto(), dec!(10.100));
    }

    #[rstest]
    fn new_movement_trims_description_and_drops_empty() {
        let movement = NewMovement::try_new(
            march(1),
            MovementType::Credito,
            dec!(1.00),
            Some("  pago luz  ".to_owned()),
        )
        .expect("valid movement");
        assert_eq!(movement.descripcion(), Some("pago luz"));

        let blank = NewMovement::try_new(
            march(1),
            MovementType::Credito,
            dec!(1.00),
            Some("   ".to_owned()),
        )
        .expect("valid movement");
        assert_eq!(blank.descripcion(), None);
    }

    #[rstest]
    fn new_movement_rejects_long_description() {
        let err = NewMovement::try_new(
            march(1),
            MovementType::Credito,
            dec!(1.00),
            Some("x".repeat(DESCRIPTION_MAX + 1)),
        )
        .expect_err("oversized description should fail");
        assert_eq!(
            err,
            MovementValidationError::DescriptionTooLong { max: DESCRIPTION_MAX }
        );
    }

    #[rstest]
    fn movement_constructor_reasserts_invariant() {
        let movement = Movement::new(MovementRecord {
            id: Uuid::new_v4(),
            fecha: march(3),
            tipo: MovementType::Debito,
            monto: dec!(40.00),
            descripcion: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        assert_eq!(movement.monto(), dec!(-40.00));
    }

    #[rstest]
    #[case("CREDITO", MovementType::Credito)]
    #[case("DEBITO", MovementType::Debito)]
    fn movement_type_parses_labels(#[case] label: &str, #[case] expected: MovementType) {
        assert_eq!(label.parse::<MovementType>().expect("valid label"), expected);
        assert_eq!(expected.as_str(), label);
    }

    #[rstest]
    fn movement_type_rejects_unknown_label() {
        let err = "TRANSFER".parse::<MovementType>().expect_err("unknown label");
        assert_eq!(err, MovementValidationError::InvalidType);
    }

    #[rstest]
    fn empty_totals_are_zero() {
        let totals = Totals::empty();
        assert_eq!(totals.total_creditos, Decimal::ZERO);
        assert_eq!(totals.total_debitos, Decimal::ZERO);
        assert_eq!(totals.balance, Decimal::ZERO);
        assert_eq!(totals.total_movimientos, 0);
    }

    #[rstest]
    fn totals_balance_matches_credit_minus_debit() {
        // {CREDITO 100, DEBITO -40} aggregates to 100 / 40 / 60.
        let totals = Totals {
            total_creditos: dec!(100.00),
            total_debitos: dec!(40.00),
            balance: dec!(60.00),
            total_movimientos: 2,
        };
        assert_eq!(totals.balance, totals.total_creditos - totals.total_debitos);
    }
}
