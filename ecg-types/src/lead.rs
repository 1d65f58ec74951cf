use std::fmt;
use std::str::FromStr;

use crate::error::EcgError;

/// One of the 12 standard electrocardiogram leads.
///
/// `aVR`, `aVL`, and `aVF` each get their own variant. An earlier
/// implementation of this mapping collapsed all three augmented limb leads
/// onto lead III; that was a bug in the source this crate was distilled
/// from, not an intentional simplification, and is not reproduced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lead {
    I,
    Ii,
    Iii,
    Avr,
    Avl,
    Avf,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl Lead {
    /// The canonical display name, matching standard ECG nomenclature.
    pub fn name(self) -> &'static str {
        match self {
            Lead::I => "I",
            Lead::Ii => "II",
            Lead::Iii => "III",
            Lead::Avr => "aVR",
            Lead::Avl => "aVL",
            Lead::Avf => "aVF",
            Lead::V1 => "V1",
            Lead::V2 => "V2",
            Lead::V3 => "V3",
            Lead::V4 => "V4",
            Lead::V5 => "V5",
            Lead::V6 => "V6",
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lead {
    type Err = EcgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(Lead::I),
            "ii" => Ok(Lead::Ii),
            "iii" => Ok(Lead::Iii),
            "avr" => Ok(Lead::Avr),
            "avl" => Ok(Lead::Avl),
            "avf" => Ok(Lead::Avf),
            "v1" => Ok(Lead::V1),
            "v2" => Ok(Lead::V2),
            "v3" => Ok(Lead::V3),
            "v4" => Ok(Lead::V4),
            "v5" => Ok(Lead::V5),
            "v6" => Ok(Lead::V6),
            _ => Err(EcgError::UnknownLead(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_canonical_names() {
        for lead in [
            Lead::I,
            Lead::Ii,
            Lead::Iii,
            Lead::Avr,
            Lead::Avl,
            Lead::Avf,
            Lead::V1,
            Lead::V2,
            Lead::V3,
            Lead::V4,
            Lead::V5,
            Lead::V6,
        ] {
            let parsed: Lead = lead.name().parse().unwrap();
            assert_eq!(parsed, lead);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("avr".parse::<Lead>().unwrap(), Lead::Avr);
        assert_eq!("AVR".parse::<Lead>().unwrap(), Lead::Avr);
        assert_eq!("aVr".parse::<Lead>().unwrap(), Lead::Avr);
    }

    #[test]
    fn augmented_leads_stay_distinct() {
        // Regression guard: the source this was distilled from mapped
        // avr/avl/avf all onto lead III.
        let avr: Lead = "avr".parse().unwrap();
        let avl: Lead = "avl".parse().unwrap();
        let avf: Lead = "avf".parse().unwrap();
        assert_ne!(avr, avl);
        assert_ne!(avl, avf);
        assert_ne!(avr, avf);
        assert_ne!(avr, Lead::Iii);
    }

    #[test]
    fn rejects_unknown_lead() {
        let err = "xyz".parse::<Lead>().unwrap_err();
        assert_eq!(err, EcgError::UnknownLead("xyz".to_string()));
    }
}
