use outing_api::models::weather::WeatherConditions;
use outing_api::services::weather_service::describe_weather;

#[test]
fn default_conditions_are_clear() {
    let conditions = WeatherConditions::default();
    assert!(!conditions.is_raining);
    assert!(!conditions.is_too_sunny);
}

#[test]
fn every_flag_combination_has_its_own_descriptor() {
    let cases = [
        (false, false, "The weather conditions are normal."),
        (true, false, "It is currently raining."),
        (false, true, "It is too sunny right now."),
        (true, true, "It is raining even though it is too sunny."),
    ];

    for (is_raining, is_too_sunny, expected) in cases {
        let conditions = WeatherConditions {
            is_raining,
            is_too_sunny,
        };
        assert_eq!(describe_weather(&conditions), expected);
    }
}
