// ============================================================
// Layer 3 — Customer Input Domain Types
// ============================================================
// The raw selections a user makes on the Predict form, before
// any encoding happens.
//
// Numeric fields carry the widget ranges as constants so the
// web form and the CLI advertise the same bounds. Nothing here
// rejects an out-of-range value: the widgets are the only guard.
//
// Categorical fields are enums rather than strings so a typo
// like "germany " can never silently encode as "neither".
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const CREDIT_SCORE_RANGE: (u32, u32) = (300, 850);
pub const AGE_RANGE:          (u32, u32) = (18, 100);
pub const TENURE_RANGE:       (u32, u32) = (0, 10);
pub const MIN_SALARY:         f64        = 0.0;

// ─── Geography ────────────────────────────────────────────────────────────────
/// Customer country. Only Germany and Spain have their own indicator
/// column; `Other` encodes as both indicators off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geography {
    Germany,
    Spain,
    Other,
}

impl Geography {
    /// Choices offered by the web form.
    pub const FORM_CHOICES: [Geography; 2] = [Geography::Germany, Geography::Spain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::Germany => "Germany",
            Geography::Spain   => "Spain",
            Geography::Other   => "Other",
        }
    }
}

// ─── Gender ───────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const FORM_CHOICES: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male   => "Male",
            Gender::Female => "Female",
        }
    }
}

// ─── YesNo ────────────────────────────────────────────────────────────────────
/// A yes/no dropdown answer (HasCrCard, IsActiveMember).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const FORM_CHOICES: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No  => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

// ─── String parsing ───────────────────────────────────────────────────────────
// FromStr lets clap parse these directly from flags without the
// domain layer knowing anything about clap.

impl FromStr for Geography {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "germany" => Ok(Geography::Germany),
            "spain"   => Ok(Geography::Spain),
            "other"   => Ok(Geography::Other),
            other     => bail!("unknown geography '{other}' (expected germany, spain or other)"),
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male"   => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other    => bail!("unknown gender '{other}' (expected male or female)"),
        }
    }
}

impl FromStr for YesNo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true"  => Ok(YesNo::Yes),
            "no"  | "n" | "false" => Ok(YesNo::No),
            other                 => bail!("expected yes or no, got '{other}'"),
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── CustomerInput ────────────────────────────────────────────────────────────
/// Everything the user picks on the Predict form.
///
/// Balance and number of products are deliberately absent: the
/// encoder fills them with placeholder constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub credit_score:     u32,
    pub age:              u32,
    pub tenure:           u32,
    pub estimated_salary: f64,
    pub geography:        Geography,
    pub gender:           Gender,
    pub has_cr_card:      YesNo,
    pub is_active_member: YesNo,
}

/// The values the form shows before the user touches anything.
impl Default for CustomerInput {
    fn default() -> Self {
        Self {
            credit_score:     600,
            age:              30,
            tenure:           2,
            estimated_salary: 50_000.0,
            geography:        Geography::Germany,
            gender:           Gender::Male,
            has_cr_card:      YesNo::Yes,
            is_active_member: YesNo::Yes,
        }
    }
}
