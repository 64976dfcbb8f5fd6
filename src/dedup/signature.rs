//! Skill signatures.

use std::fmt;

/// The `(unitCd, topicCd, skillCd)` triple that identifies a skill across subjects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    pub unit_cd: String,
    pub topic_cd: String,
    pub skill_cd: String,
}

impl Signature {
    /// Build a signature from the three codes.
    ///
    /// Returns `None` if any code is absent or empty. Such a skill never
    /// contributes to the index and never matches it.
    pub fn from_codes(
        unit_cd: Option<&str>,
        topic_cd: Option<&str>,
        skill_cd: Option<&str>,
    ) -> Option<Self> {
        let unit_cd = unit_cd.filter(|c| !c.is_empty())?;
        let topic_cd = topic_cd.filter(|c| !c.is_empty())?;
        let skill_cd = skill_cd.filter(|c| !c.is_empty())?;

        Some(Self {
            unit_cd: unit_cd.to_string(),
            topic_cd: topic_cd.to_string(),
            skill_cd: skill_cd.to_string(),
        })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.unit_cd, self.topic_cd, self.skill_cd)
    }
}
