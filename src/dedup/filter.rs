//! Removal of already-covered skills from the base document.

use crate::dedup::index::SignatureIndex;
use crate::dedup::signature::Signature;
use crate::lookup::{Topic, TopicLookupDocument, Unit};

/// Before/after counts for a filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub units_before: usize,
    pub units_after: usize,
    pub topics_before: usize,
    pub topics_after: usize,
    pub skills_before: usize,
    pub skills_after: usize,
    pub removed_skills: usize,
}

/// Drop every skill whose signature is in `index`.
///
/// Topics left without skills and units left without topics are dropped.
/// Order and all other fields of what remains are preserved. The returned
/// document carries only `lookupData.units`.
pub fn filter_document(
    document: TopicLookupDocument,
    index: &SignatureIndex,
) -> (TopicLookupDocument, FilterStats) {
    let mut stats = FilterStats {
        units_before: document.unit_count(),
        topics_before: document.topic_count(),
        skills_before: document.skill_count(),
        ..Default::default()
    };

    let units: Vec<Unit> = document
        .lookup_data
        .units
        .into_iter()
        .filter_map(|unit| filter_unit(unit, index, &mut stats))
        .collect();

    let filtered = TopicLookupDocument::from_units(units);
    stats.units_after = filtered.unit_count();
    stats.topics_after = filtered.topic_count();
    stats.skills_after = filtered.skill_count();

    (filtered, stats)
}

fn filter_unit(mut unit: Unit, index: &SignatureIndex, stats: &mut FilterStats) -> Option<Unit> {
    let topics = unit.take_topics();

    let kept: Vec<Topic> = topics
        .into_iter()
        .filter_map(|topic| filter_topic(topic, unit.unit_cd(), index, stats))
        .collect();

    if kept.is_empty() {
        return None;
    }
    unit.set_topics(kept);
    Some(unit)
}

fn filter_topic(
    mut topic: Topic,
    unit_cd: Option<&str>,
    index: &SignatureIndex,
    stats: &mut FilterStats,
) -> Option<Topic> {
    let skills = topic.take_skills();
    let topic_cd = topic.topic_cd();

    let mut kept = Vec::with_capacity(skills.len());
    for skill in skills {
        match Signature::from_codes(unit_cd, topic_cd, skill.skill_cd()) {
            Some(signature) if index.contains(&signature) => {
                tracing::debug!("Removing duplicate skill {}", signature);
                stats.removed_skills += 1;
            }
            _ => kept.push(skill),
        }
    }

    if kept.is_empty() {
        return None;
    }
    topic.set_skills(kept);
    Some(topic)
}
