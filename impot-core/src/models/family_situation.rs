use serde::{Deserialize, Serialize};

/// Marital situation declared on the return.
///
/// The serialized form is the code used by the tax forms and by the scenario
/// fixtures (`CELIBATAIRE`, `PACSE`, `MARIE`, `DIVORCE`, `VEUF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilySituation {
    #[serde(rename = "CELIBATAIRE")]
    Single,
    #[serde(rename = "PACSE")]
    RegisteredPartnership,
    #[serde(rename = "MARIE")]
    Married,
    #[serde(rename = "DIVORCE")]
    Divorced,
    #[serde(rename = "VEUF")]
    Widowed,
}

impl FamilySituation {
    pub const ALL: [FamilySituation; 5] = [
        Self::Single,
        Self::RegisteredPartnership,
        Self::Married,
        Self::Divorced,
        Self::Widowed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "CELIBATAIRE",
            Self::RegisteredPartnership => "PACSE",
            Self::Married => "MARIE",
            Self::Divorced => "DIVORCE",
            Self::Widowed => "VEUF",
        }
    }

    /// Parses a situation code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|situation| situation.as_str().eq_ignore_ascii_case(code))
    }

    /// Married and PACS couples file one joint return: two base parts and
    /// a second declarant income.
    pub fn is_couple_taxed_jointly(&self) -> bool {
        matches!(self, Self::Married | Self::RegisteredPartnership)
    }

    /// Selects the single-person CEHR schedule.
    pub fn is_single_for_surtax(&self) -> bool {
        matches!(self, Self::Single | Self::Divorced | Self::Widowed)
    }

    pub fn is_widowed(&self) -> bool {
        matches!(self, Self::Widowed)
    }
}

impl std::fmt::Display for FamilySituation {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
