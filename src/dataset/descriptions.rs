//! Field descriptions for the maternal health risk dataset

const FIELD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Age", "Age of the patient in years."),
    ("Systolic BP", "Systolic Blood Pressure (upper value of BP)."),
    ("Diastolic", "Diastolic Blood Pressure (lower value of BP)."),
    ("BS", "Blood Sugar level of the patient."),
    ("Body Temp", "Body Temperature in Celsius."),
    (
        "BMI",
        "Body Mass Index, indicator of body fat based on weight and height.",
    ),
    (
        "Previous Complications",
        "History of previous medical complications.",
    ),
    (
        "Preexisting Diabetes",
        "Whether the patient has diabetes before pregnancy (Yes/No).",
    ),
    (
        "Gestational Diabetes",
        "Presence of gestational diabetes (Yes/No).",
    ),
    ("Mental Health", "Mental health condition of the patient."),
    ("Heart Rate", "Patient's heart rate (beats per minute)."),
    ("Risk Level", "Predicted medical risk level (Low, Mid, High)."),
];

/// Description shown next to the column picker, with a fallback for
/// columns outside the known schema.
pub fn describe_field(column: &str) -> &'static str {
    FIELD_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, description)| *description)
        .unwrap_or("No description available")
}
