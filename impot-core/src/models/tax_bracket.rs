use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One half-open slice `(min_income, max_income]` of a progressive schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    /// `None` for the top bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }
}

/// Errors reported when assembling a [`TaxSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("a schedule needs at least one bracket")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    #[error("bracket {index} starts at {found} but the previous one ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} is empty or inverted ({min} .. {max})")]
    EmptyBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last one")]
    UnboundedBeforeEnd(usize),

    #[error("the last bracket must be unbounded")]
    BoundedEnd,

    #[error("bracket {index} has rate {rate}, expected a fraction between 0 and 1")]
    InvalidRate { index: usize, rate: Decimal },
}

/// Contiguous, ascending list of brackets ending with an unbounded one.
///
/// Used for the main progressive schedule and for both CEHR schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule, checking that brackets start at zero, chain without
    /// gaps and end with the only unbounded bracket.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found, scanning brackets in order.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let first = brackets.first().ok_or(ScheduleError::Empty)?;
        if !first.min_income.is_zero() {
            return Err(ScheduleError::NonZeroStart(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut previous_max = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.tax_rate,
                });
            }

            if bracket.min_income != previous_max {
                return Err(ScheduleError::NotContiguous {
                    index,
                    expected: previous_max,
                    found: bracket.min_income,
                });
            }

            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(ScheduleError::EmptyBracket {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                Some(_) if index == last_index => return Err(ScheduleError::BoundedEnd),
                Some(max) => previous_max = max,
                None if index != last_index => {
                    return Err(ScheduleError::UnboundedBeforeEnd(index));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Builds one of the statutory schedules from `(min, max, rate)` rows
    /// without re-checking them; the tests of `IncomeTaxParameters` run the
    /// built-in schedules through [`TaxSchedule::new`].
    pub(crate) fn from_statutory(rows: &[(Decimal, Option<Decimal>, Decimal)]) -> Self {
        Self {
            brackets: rows
                .iter()
                .map(|&(min, max, rate)| TaxBracket::new(min, max, rate))
                .collect(),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}
