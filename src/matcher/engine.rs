use std::time::Instant;

use crate::catalog::Catalog;
use crate::models::enums::{CHILD_AGE_LIMIT, ELDERLY_AGE_FLOOR};
use crate::models::{AgeGroup, Condition, Urgency};

use super::types::{ConditionMatch, Query};

/// Symptoms lasting longer than this many days escalate urgency.
pub const PROLONGED_DURATION_DAYS: u32 = 7;

/// Rank catalog conditions by overlap with the selected symptoms.
///
/// Conditions with no overlap are dropped. The rest are ordered by match
/// percentage, highest first; equal percentages keep catalog order.
pub fn match_conditions(query: &Query, catalog: &Catalog) -> Vec<ConditionMatch> {
    if query.selected_symptom_ids.is_empty() {
        return Vec::new();
    }

    let start = Instant::now();
    let age_group = query.age.map(AgeGroup::from_age);
    let escalate = escalation_triggered(query);

    let mut matches: Vec<ConditionMatch> = catalog
        .conditions()
        .iter()
        .map(|condition| annotate(condition, query, age_group, escalate))
        .filter(|m| m.match_percentage > 0)
        .collect();

    // Vec::sort_by is stable.
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    tracing::debug!(
        selected = query.selected_symptom_ids.len(),
        matched = matches.len(),
        escalated = escalate,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Condition matching complete"
    );

    matches
}

fn annotate(
    condition: &Condition,
    query: &Query,
    age_group: Option<AgeGroup>,
    escalate: bool,
) -> ConditionMatch {
    let match_percentage = match_percentage(
        condition.overlap(&query.selected_symptom_ids),
        condition.symptom_ids.len(),
    );

    let adjusted_urgency = adjusted_urgency(condition.base_urgency, escalate);

    let gender_specific_advice = query
        .gender
        .and_then(|g| condition.advice_for_gender(g))
        .map(<[String]>::to_vec);
    let age_specific_advice = age_group
        .and_then(|g| condition.advice_for_age_group(g))
        .map(<[String]>::to_vec);

    ConditionMatch {
        condition: condition.clone(),
        match_percentage,
        adjusted_urgency,
        gender_specific_advice,
        age_specific_advice,
    }
}

/// `round(100 * matched / total)`, halves rounded up.
///
/// `total` is never zero for a validated catalog; zero yields 0 here.
pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    ((200 * matched + total) / (2 * total)) as u8
}

/// Prolonged duration or an age outside the adult band.
/// Several triggers together still mean a single step.
pub fn escalation_triggered(query: &Query) -> bool {
    let prolonged = query
        .duration_days
        .is_some_and(|d| d > PROLONGED_DURATION_DAYS);
    let age_risk = query
        .age
        .is_some_and(|a| a > ELDERLY_AGE_FLOOR || a < CHILD_AGE_LIMIT);
    prolonged || age_risk
}

fn adjusted_urgency(base: Urgency, escalate: bool) -> Urgency {
    if escalate {
        base.escalate()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::models::{Gender, Symptom};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn flu_selection() -> Query {
        Query::new([1, 2, 3, 5, 6])
    }

    fn names(matches: &[ConditionMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.condition.name.as_str()).collect()
    }

    fn find<'a>(matches: &'a [ConditionMatch], name: &str) -> &'a ConditionMatch {
        matches
            .iter()
            .find(|m| m.condition.name == name)
            .unwrap()
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let q = Query::default().with_age(30).with_duration_days(3);
        assert!(match_conditions(&q, &catalog()).is_empty());
    }

    #[test]
    fn no_overlap_yields_nothing() {
        let c = Catalog::new(
            vec![
                Symptom { id: 1, name: "A".into() },
                Symptom { id: 2, name: "B".into() },
            ],
            vec![Condition {
                id: 1,
                name: "Only A".into(),
                symptom_ids: BTreeSet::from([1]),
                description: String::new(),
                recommendations: vec![],
                base_urgency: Urgency::Low,
                when_to_seek_help: vec![],
                gender_advice: BTreeMap::new(),
                age_advice: BTreeMap::new(),
            }],
        )
        .unwrap();
        assert!(match_conditions(&Query::new([2]), &c).is_empty());
    }

    #[test]
    fn unknown_ids_do_not_match() {
        assert!(match_conditions(&Query::new([42, 99]), &catalog()).is_empty());
    }

    #[test]
    fn adult_male_selection_ranks_every_overlapping_condition() {
        let q = flu_selection()
            .with_age(30)
            .with_gender(Gender::Male)
            .with_duration_days(3);
        let matches = match_conditions(&q, &catalog());

        // Fever also belongs to Gastroenteritis, which ties Common Cold at 33%.
        assert_eq!(
            names(&matches),
            ["Flu", "COVID-19", "Common Cold", "Gastroenteritis"]
        );

        let flu = find(&matches, "Flu");
        assert_eq!(flu.match_percentage, 100);
        assert_eq!(flu.adjusted_urgency, Urgency::Medium);

        let covid = find(&matches, "COVID-19");
        assert_eq!(covid.match_percentage, 60);
        assert_eq!(covid.adjusted_urgency, Urgency::High);

        let cold = find(&matches, "Common Cold");
        assert_eq!(cold.match_percentage, 33);
        assert_eq!(cold.adjusted_urgency, Urgency::Low);
        assert!(!cold.was_escalated());

        let gastro = find(&matches, "Gastroenteritis");
        assert_eq!(gastro.match_percentage, 33);
        assert_eq!(
            gastro.gender_specific_advice.as_deref().unwrap(),
            ["Watch for signs of prostate inflammation"]
        );
    }

    #[test]
    fn adult_gets_adult_advice_only_where_defined() {
        let q = flu_selection().with_age(30).with_duration_days(3);
        let matches = match_conditions(&q, &catalog());

        let covid = find(&matches, "COVID-19");
        assert_eq!(
            covid.age_specific_advice.as_deref().unwrap()[0],
            "Monitor for long COVID symptoms"
        );
        assert!(find(&matches, "Flu").age_specific_advice.is_none());
        assert!(find(&matches, "Common Cold").age_specific_advice.is_none());
    }

    #[test]
    fn child_escalates_one_step_and_gets_child_advice() {
        let q = flu_selection().with_age(10).with_duration_days(3);
        let matches = match_conditions(&q, &catalog());

        assert_eq!(find(&matches, "Flu").adjusted_urgency, Urgency::High);
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Medium);
        assert_eq!(find(&matches, "COVID-19").adjusted_urgency, Urgency::High);
        assert_eq!(find(&matches, "Gastroenteritis").adjusted_urgency, Urgency::High);

        for m in &matches {
            let expected = m.condition.advice_for_age_group(AgeGroup::Child).unwrap();
            assert_eq!(m.age_specific_advice.as_deref(), Some(expected));
        }
    }

    #[test]
    fn simultaneous_triggers_escalate_once() {
        let q = flu_selection().with_age(70).with_duration_days(10);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Medium);
        assert_eq!(find(&matches, "Flu").adjusted_urgency, Urgency::High);
    }

    #[test]
    fn prolonged_duration_alone_escalates() {
        let q = flu_selection().with_age(30).with_duration_days(8);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Medium);

        let q = flu_selection().with_age(30).with_duration_days(7);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Low);
    }

    #[test]
    fn age_sixty_five_is_elderly_but_not_escalated() {
        let q = flu_selection().with_age(65).with_duration_days(2);
        let matches = match_conditions(&q, &catalog());
        let cold = find(&matches, "Common Cold");
        assert_eq!(cold.adjusted_urgency, Urgency::Low);
        assert_eq!(
            cold.age_specific_advice.as_deref().unwrap()[0],
            "Monitor for signs of pneumonia"
        );

        let q = flu_selection().with_age(66);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Medium);
    }

    #[test]
    fn age_eleven_escalates_but_twelve_does_not() {
        assert!(escalation_triggered(&Query::new([1]).with_age(11)));
        assert!(!escalation_triggered(&Query::new([1]).with_age(12)));

        let q = flu_selection().with_age(12).with_duration_days(2);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(find(&matches, "Common Cold").adjusted_urgency, Urgency::Low);
    }

    #[test]
    fn missing_demographics_skip_adjustments() {
        let matches = match_conditions(&flu_selection(), &catalog());
        assert_eq!(matches.len(), 4);
        for m in &matches {
            assert!(!m.was_escalated());
            assert!(m.gender_specific_advice.is_none());
            assert!(m.age_specific_advice.is_none());
        }
    }

    #[test]
    fn female_covid_advice_is_verbatim() {
        let q = Query::new([4]).with_gender(Gender::Female);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(names(&matches), ["COVID-19"]);
        assert_eq!(
            matches[0].gender_specific_advice.as_deref().unwrap(),
            [
                "If pregnant, monitor fetal movement and contact healthcare provider",
                "Report any unusual menstrual changes",
            ]
        );
    }

    #[test]
    fn gender_without_advice_entry_is_absent() {
        let q = Query::new([8]).with_gender(Gender::Female);
        let matches = match_conditions(&q, &catalog());
        assert_eq!(names(&matches), ["Common Cold"]);
        assert!(matches[0].gender_specific_advice.is_none());
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Fever: Flu 1/5, COVID-19 1/5 (both 20%), Gastroenteritis 1/3.
        let matches = match_conditions(&Query::new([1]), &catalog());
        assert_eq!(names(&matches), ["Gastroenteritis", "Flu", "COVID-19"]);
        assert_eq!(matches[1].match_percentage, 20);
        assert_eq!(matches[2].match_percentage, 20);
    }

    #[test]
    fn full_selection_caps_at_one_hundred() {
        let all: Vec<u32> = (1..=10).collect();
        let matches = match_conditions(&Query::new(all), &catalog());
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|m| m.match_percentage == 100));
    }

    #[test]
    fn catalog_is_not_mutated() {
        let c = catalog();
        let before = c.conditions().to_vec();
        let _ = match_conditions(&flu_selection().with_age(5), &c);
        assert_eq!(c.conditions(), before.as_slice());
    }

    #[test]
    fn match_percentage_rounding() {
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(match_percentage(3, 5), 60);
        assert_eq!(match_percentage(0, 5), 0);
        assert_eq!(match_percentage(5, 5), 100);
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn labels_for_card() {
        let q = flu_selection().with_age(10);
        let matches = match_conditions(&q, &catalog());
        let flu = find(&matches, "Flu");
        assert_eq!(flu.match_label(), "100% Match");
        assert_eq!(flu.urgency_label(), "High Urgency");
    }
}
