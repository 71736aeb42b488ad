use super::*;

fn filled() -> GenerateForm {
    GenerateForm {
        age_range: "5-7".to_owned(),
        topic: "space".to_owned(),
        ..GenerateForm::default()
    }
}

#[test]
fn required_fields_only() {
    let request = validate_generate_input(&filled()).unwrap();
    assert_eq!(request.age_range, "5-7");
    assert_eq!(request.topic, "space");
    assert_eq!(request.main_character, None);
    assert_eq!(request.setting, None);
    assert_eq!(request.additional_details, None);
}

#[test]
fn optional_fields_are_trimmed_and_blank_ones_dropped() {
    let form = GenerateForm {
        main_character: "  Max the fox ".to_owned(),
        setting: "   ".to_owned(),
        additional_details: "Rhymes, please".to_owned(),
        ..filled()
    };
    let request = validate_generate_input(&form).unwrap();
    assert_eq!(request.main_character.as_deref(), Some("Max the fox"));
    assert_eq!(request.setting, None);
    assert_eq!(request.additional_details.as_deref(), Some("Rhymes, please"));
}

#[test]
fn missing_selects_are_reported() {
    assert_eq!(
        validate_generate_input(&GenerateForm::default()),
        Err(GenerateErrors { age_range: Some("Age range is required"), topic: Some("Topic is required") })
    );
}

#[test]
fn unknown_catalog_values_are_rejected() {
    let form = GenerateForm { age_range: "14-16".to_owned(), topic: "pirates".to_owned(), ..GenerateForm::default() };
    let errors = validate_generate_input(&form).unwrap_err();
    assert_eq!(errors.age_range, Some("Select one of the listed age ranges"));
    assert_eq!(errors.topic, Some("Select one of the listed topics"));
}
