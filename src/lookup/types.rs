//! Topic lookup document type definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNIT_CD: &str = "unitCd";
pub const TOPIC_CD: &str = "topicCd";
pub const SKILL_CD: &str = "skillCd";
pub const TOPICS: &str = "topics";
pub const SKILLS: &str = "skills";

/// A topic lookup document.
///
/// Only `lookupData.units` is modelled; other top-level fields are not
/// carried and are therefore absent when the document is written back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicLookupDocument {
    #[serde(default)]
    pub lookup_data: LookupData,
}

/// The `lookupData` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LookupData {
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// A curriculum unit, kept as the JSON value it was read from.
///
/// Only the `topics` entry is ever replaced, in place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Unit(Value);

/// A topic within a unit. Only the `skills` entry is ever replaced, in place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Topic(Value);

/// A skill within a topic, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Skill(Value);

/// The three codes of one skill occurrence, as found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCodes<'a> {
    pub unit_cd: Option<&'a str>,
    pub topic_cd: Option<&'a str>,
    pub skill_cd: Option<&'a str>,
}

/// A string code. Anything that is not a JSON string counts as absent.
fn code<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// A child sequence. A missing or non-array entry counts as empty.
fn children<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Move a child sequence out, leaving an empty array in its slot.
fn take_children(value: &mut Value, key: &str) -> Vec<Value> {
    match value.get_mut(key) {
        Some(Value::Array(items)) => std::mem::take(items),
        _ => Vec::new(),
    }
}

/// Replace a child sequence; an existing key keeps its position.
fn set_children(value: &mut Value, key: &str, items: Vec<Value>) {
    if let Value::Object(fields) = value {
        fields.insert(key.to_string(), Value::Array(items));
    }
}

impl Unit {
    pub fn unit_cd(&self) -> Option<&str> {
        code(&self.0, UNIT_CD)
    }

    pub fn topic_count(&self) -> usize {
        children(&self.0, TOPICS).len()
    }

    pub fn skill_count(&self) -> usize {
        children(&self.0, TOPICS)
            .iter()
            .map(|topic| children(topic, SKILLS).len())
            .sum()
    }

    /// Take the topics out for filtering.
    pub fn take_topics(&mut self) -> Vec<Topic> {
        take_children(&mut self.0, TOPICS)
            .into_iter()
            .map(Topic)
            .collect()
    }

    /// Put filtered topics back.
    pub fn set_topics(&mut self, topics: Vec<Topic>) {
        set_children(&mut self.0, TOPICS, topics.into_iter().map(|t| t.0).collect());
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Topic {
    pub fn topic_cd(&self) -> Option<&str> {
        code(&self.0, TOPIC_CD)
    }

    pub fn skill_count(&self) -> usize {
        children(&self.0, SKILLS).len()
    }

    /// Take the skills out for filtering.
    pub fn take_skills(&mut self) -> Vec<Skill> {
        take_children(&mut self.0, SKILLS)
            .into_iter()
            .map(Skill)
            .collect()
    }

    /// Put filtered skills back.
    pub fn set_skills(&mut self, skills: Vec<Skill>) {
        set_children(&mut self.0, SKILLS, skills.into_iter().map(|s| s.0).collect());
    }
}

impl Skill {
    pub fn skill_cd(&self) -> Option<&str> {
        code(&self.0, SKILL_CD)
    }
}

impl From<Value> for Unit {
    fn from(value: Value) -> Self {
        Unit(value)
    }
}

impl From<Value> for Topic {
    fn from(value: Value) -> Self {
        Topic(value)
    }
}

impl From<Value> for Skill {
    fn from(value: Value) -> Self {
        Skill(value)
    }
}

impl TopicLookupDocument {
    /// Build a document around a list of units.
    pub fn from_units(units: Vec<Unit>) -> Self {
        Self {
            lookup_data: LookupData { units },
        }
    }

    /// The units of this document.
    pub fn units(&self) -> &[Unit] {
        &self.lookup_data.units
    }

    /// Number of units.
    pub fn unit_count(&self) -> usize {
        self.lookup_data.units.len()
    }

    /// Number of topics across all units.
    pub fn topic_count(&self) -> usize {
        self.lookup_data.units.iter().map(Unit::topic_count).sum()
    }

    /// Number of skills across all topics.
    pub fn skill_count(&self) -> usize {
        self.lookup_data.units.iter().map(Unit::skill_count).sum()
    }

    /// Walk every skill with the codes of its unit and topic.
    pub fn skill_codes(&self) -> impl Iterator<Item = SkillCodes<'_>> + '_ {
        self.lookup_data.units.iter().flat_map(|unit| {
            let unit_cd = unit.unit_cd();
            children(&unit.0, TOPICS).iter().flat_map(move |topic| {
                let topic_cd = code(topic, TOPIC_CD);
                children(topic, SKILLS).iter().map(move |skill| SkillCodes {
                    unit_cd,
                    topic_cd,
                    skill_cd: code(skill, SKILL_CD),
                })
            })
        })
    }
}
