//! Bundled HealthGuide table: ten symptoms, four conditions.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{AgeGroup, Condition, Gender, Symptom, Urgency};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn ids(items: &[u32]) -> BTreeSet<u32> {
    items.iter().copied().collect()
}

pub(super) fn symptoms() -> Vec<Symptom> {
    [
        (1, "Fever"),
        (2, "Cough"),
        (3, "Fatigue"),
        (4, "Shortness of breath"),
        (5, "Headache"),
        (6, "Body aches"),
        (7, "Sore throat"),
        (8, "Runny nose"),
        (9, "Nausea"),
        (10, "Diarrhea"),
    ]
    .into_iter()
    .map(|(id, name)| Symptom {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub(super) fn conditions() -> Vec<Condition> {
    vec![common_cold(), flu(), covid_19(), gastroenteritis()]
}

fn common_cold() -> Condition {
    Condition {
        id: 1,
        name: "Common Cold".into(),
        symptom_ids: ids(&[2, 7, 8]),
        description: "A viral infection of the upper respiratory tract".into(),
        recommendations: lines(&[
            "Rest well and get at least 8 hours of sleep",
            "Stay hydrated with water, herbal tea, or warm soup",
            "Use over-the-counter cold medications for symptom relief",
            "Try saline nasal drops to relieve congestion",
            "Gargle with warm salt water for sore throat relief",
        ]),
        base_urgency: Urgency::Low,
        when_to_seek_help: lines(&[
            "Symptoms last more than 10 days",
            "Fever above 101.3°F (38.5°C)",
            "Severe sinus pain or headache",
            "Difficulty breathing",
        ]),
        gender_advice: BTreeMap::new(),
        age_advice: BTreeMap::from([
            (
                AgeGroup::Child,
                lines(&[
                    "Use pediatric-formulated medications only",
                    "Monitor temperature more frequently",
                    "Ensure extra rest and fluids",
                ]),
            ),
            (
                AgeGroup::Elderly,
                lines(&[
                    "Monitor for signs of pneumonia",
                    "Stay warm and avoid temperature changes",
                    "Consider checking with doctor earlier than usual",
                ]),
            ),
        ]),
    }
}

fn flu() -> Condition {
    Condition {
        id: 2,
        name: "Flu".into(),
        symptom_ids: ids(&[1, 2, 3, 5, 6]),
        description: "A contagious respiratory illness caused by influenza viruses".into(),
        recommendations: lines(&[
            "Get plenty of rest and avoid physical exertion",
            "Take acetaminophen or ibuprofen for fever and body aches",
            "Stay hydrated with clear fluids and electrolyte solutions",
            "Consider antiviral medications if within 48 hours of symptoms",
            "Isolate yourself to prevent spreading to others",
        ]),
        base_urgency: Urgency::Medium,
        when_to_seek_help: lines(&[
            "Difficulty breathing or shortness of breath",
            "Chest pain or severe abdominal pain",
            "Severe muscle pain or weakness",
            "Signs of dehydration",
            "Fever or cough that improve but then return or worsen",
        ]),
        gender_advice: BTreeMap::from([
            (
                Gender::Female,
                lines(&[
                    "If pregnant, contact healthcare provider immediately",
                    "Monitor menstrual changes if applicable",
                ]),
            ),
            (
                Gender::Male,
                lines(&["Monitor for testicular pain which may indicate complications"]),
            ),
        ]),
        age_advice: BTreeMap::from([
            (
                AgeGroup::Child,
                lines(&[
                    "Watch for signs of dehydration more closely",
                    "Use children's formulation of medications",
                    "Monitor breathing rate carefully",
                ]),
            ),
            (
                AgeGroup::Elderly,
                lines(&[
                    "Higher risk of complications - seek medical attention earlier",
                    "Monitor temperature and breathing more frequently",
                    "Ensure proper hydration and nutrition",
                ]),
            ),
        ]),
    }
}

fn covid_19() -> Condition {
    Condition {
        id: 3,
        name: "COVID-19".into(),
        symptom_ids: ids(&[1, 2, 3, 4, 7]),
        description: "A respiratory illness caused by the SARS-CoV-2 virus".into(),
        recommendations: lines(&[
            "Isolate immediately in a well-ventilated room",
            "Monitor oxygen levels with a pulse oximeter",
            "Rest and stay hydrated with clear fluids",
            "Take acetaminophen for fever and body aches",
            "Use prone positioning if experiencing breathing difficulties",
        ]),
        base_urgency: Urgency::High,
        when_to_seek_help: lines(&[
            "Oxygen levels below 94%",
            "Persistent chest pain or pressure",
            "Difficulty breathing or shortness of breath",
            "New confusion or inability to wake/stay awake",
            "Bluish lips or face",
        ]),
        gender_advice: BTreeMap::from([
            (
                Gender::Female,
                lines(&[
                    "If pregnant, monitor fetal movement and contact healthcare provider",
                    "Report any unusual menstrual changes",
                ]),
            ),
            (
                Gender::Male,
                lines(&[
                    "Monitor cardiovascular symptoms more closely",
                    "Report any chest pain immediately",
                ]),
            ),
        ]),
        age_advice: BTreeMap::from([
            (
                AgeGroup::Child,
                lines(&[
                    "Watch for Multisystem Inflammatory Syndrome (MIS-C)",
                    "Monitor for rash or gastrointestinal symptoms",
                    "Ensure proper mask fitting for children over 2",
                ]),
            ),
            (
                AgeGroup::Adult,
                lines(&[
                    "Monitor for long COVID symptoms",
                    "Watch for blood clot symptoms",
                    "Consider vitamin D supplementation",
                ]),
            ),
            (
                AgeGroup::Elderly,
                lines(&[
                    "Extremely high risk - seek medical attention early",
                    "Monitor cognitive changes carefully",
                    "Watch for silent hypoxia",
                ]),
            ),
        ]),
    }
}

fn gastroenteritis() -> Condition {
    Condition {
        id: 4,
        name: "Gastroenteritis".into(),
        symptom_ids: ids(&[1, 9, 10]),
        description: "An intestinal infection marked by diarrhea, nausea, and vomiting".into(),
        recommendations: lines(&[
            "Stay hydrated with clear fluids and oral rehydration solutions",
            "Start with small sips of water and gradually increase intake",
            "Follow the BRAT diet (Bananas, Rice, Applesauce, Toast)",
            "Avoid dairy products, caffeine, and fatty foods",
            "Get plenty of rest and avoid physical activity",
        ]),
        base_urgency: Urgency::Medium,
        when_to_seek_help: lines(&[
            "Signs of severe dehydration (dark urine, dizziness, dry mouth)",
            "Blood in stool or vomit",
            "Fever above 102°F (39°C)",
            "Severe abdominal pain",
            "Symptoms lasting more than 3 days",
        ]),
        gender_advice: BTreeMap::from([
            (
                Gender::Female,
                lines(&[
                    "If pregnant, seek immediate medical attention",
                    "Monitor menstrual changes if applicable",
                ]),
            ),
            (Gender::Male, lines(&["Watch for signs of prostate inflammation"])),
        ]),
        age_advice: BTreeMap::from([
            (
                AgeGroup::Child,
                lines(&[
                    "Use pediatric electrolyte solutions",
                    "Monitor diaper changes/bathroom visits",
                    "Watch closely for dehydration signs",
                ]),
            ),
            (
                AgeGroup::Elderly,
                lines(&[
                    "Higher risk of dehydration - seek help earlier",
                    "Monitor kidney function through urine color",
                    "Consider hospital evaluation sooner",
                ]),
            ),
        ]),
    }
}
