//! Statutory constants of the 2024 income tax (2023 income).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::{DeclarantBase, FamilySituation, TaxSchedule};

/// Flat-rate rebate ("abattement de 10 %") applied per declarant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RebateRule {
    pub rate: Decimal,
    pub floor: Decimal,
    pub ceiling: Decimal,
}

/// Décote parameters for one declarant base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoteBand {
    /// Décote applies only when the tax is strictly below this amount.
    pub threshold: Decimal,
    /// Décote granted on a zero tax; decreases by `decote_rate` per euro.
    pub max_decote: Decimal,
}

/// Every constant the engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeTaxParameters {
    /// Progressive schedule applied per part.
    pub schedule: TaxSchedule,

    pub rebate: RebateRule,

    /// Maximum tax reduction per extra half-part (plafonnement du quotient familial).
    pub half_part_cap: Decimal,

    pub decote_single: DecoteBand,
    pub decote_couple: DecoteBand,
    pub decote_rate: Decimal,

    /// CEHR schedule for single, divorced and widowed declarants.
    pub surtax_single: TaxSchedule,
    /// CEHR schedule for jointly-taxed couples.
    pub surtax_couple: TaxSchedule,

    /// Largest number of dependent children the simulator supports.
    pub max_children: i32,
}

impl IncomeTaxParameters {
    /// Rules of the 2024 return on 2023 income.
    pub fn impots_2024() -> Self {
        Self {
            schedule: TaxSchedule::from_statutory(&[
                (dec!(0), Some(dec!(11294)), dec!(0)),
                (dec!(11294), Some(dec!(28797)), dec!(0.11)),
                (dec!(28797), Some(dec!(82341)), dec!(0.30)),
                (dec!(82341), Some(dec!(177106)), dec!(0.41)),
                (dec!(177106), None, dec!(0.45)),
            ]),
            rebate: RebateRule {
                rate: dec!(0.10),
                floor: dec!(495),
                ceiling: dec!(14171),
            },
            half_part_cap: dec!(1759),
            decote_single: DecoteBand {
                threshold: dec!(1929),
                max_decote: dec!(873),
            },
            decote_couple: DecoteBand {
                threshold: dec!(3191),
                max_decote: dec!(1444),
            },
            decote_rate: dec!(0.4525),
            surtax_single: TaxSchedule::from_statutory(&[
                (dec!(0), Some(dec!(250000)), dec!(0)),
                (dec!(250000), Some(dec!(500000)), dec!(0.03)),
                (dec!(500000), Some(dec!(1000000)), dec!(0.04)),
                (dec!(1000000), None, dec!(0.04)),
            ]),
            surtax_couple: TaxSchedule::from_statutory(&[
                (dec!(0), Some(dec!(250000)), dec!(0)),
                (dec!(250000), Some(dec!(500000)), dec!(0)),
                (dec!(500000), Some(dec!(1000000)), dec!(0.03)),
                (dec!(1000000), None, dec!(0.04)),
            ]),
            max_children: 7,
        }
    }

    pub fn decote_band(
        &self,
        base: DeclarantBase,
    ) -> &DecoteBand {
        match base {
            DeclarantBase::Single => &self.decote_single,
            DeclarantBase::Couple => &self.decote_couple,
        }
    }

    pub fn surtax_schedule(
        &self,
        situation: FamilySituation,
    ) -> &TaxSchedule {
        if situation.is_single_for_surtax() {
            &self.surtax_single
        } else {
            &self.surtax_couple
        }
    }
}

impl Default for IncomeTaxParameters {
    fn default() -> Self {
        Self::impots_2024()
    }
}
