use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variant order is the declaration order, so `Ord` follows it.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CatalogError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Urgency {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
});

str_enum!(AgeGroup {
    Child => "child",
    Adult => "adult",
    Elderly => "elderly",
});

impl Urgency {
    /// One step up the `Low < Medium < High` scale. `High` is the ceiling.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// Capitalized word shown on the result card ("High Urgency").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Below this age a patient is a child, and urgency escalates.
pub const CHILD_AGE_LIMIT: u32 = 12;
/// From this age on a patient is in the elderly group.
pub const ELDERLY_AGE_FLOOR: u32 = 65;

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        if age < CHILD_AGE_LIMIT {
            Self::Child
        } else if age >= ELDERLY_AGE_FLOOR {
            Self::Elderly
        } else {
            Self::Adult
        }
    }
}
