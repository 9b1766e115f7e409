#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::parsing::paste_parser::{parse_paste_json, parse_paste_json_str};

    const SAC305_JSON: &str = r#"{
        "name": "SAC305",
        "liquidus_temperature_c": 217.0,
        "peak_temperature_range": [235.0, 250.0],
        "preheat_target_c": 150.0,
        "soak_temperature_range": [160.0, 180.0],
        "soak_duration_range_s": [60.0, 120.0],
        "time_above_liquidus_range_s": [45.0, 90.0],
        "max_ramp_rate_c_per_s": 3.0,
        "cooling_rate_range_c_per_s": [2.0, 4.0]
    }"#;

    #[test]
    fn test_parse_paste_basic() {
        let paste = parse_paste_json_str(SAC305_JSON).unwrap();

        assert_eq!(paste.name, "SAC305");
        assert_eq!(paste.liquidus_temperature_c, 217.0);
        assert_eq!(paste.peak_temperature_range.low, 235.0);
        assert_eq!(paste.peak_temperature_range.high, 250.0);
        assert_eq!(paste.soak_duration_range_s.midpoint(), 90.0);
    }

    #[test]
    fn test_parse_paste_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", SAC305_JSON).unwrap();

        let paste = parse_paste_json(temp_file.path()).unwrap();
        assert_eq!(paste.name, "SAC305");
    }

    #[test]
    fn test_parse_paste_missing_field_names_path() {
        let err = parse_paste_json_str(r#"{"name": "incomplete"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid paste specification JSON"));
    }

    #[test]
    fn test_parse_paste_band_must_be_a_pair() {
        let bad = SAC305_JSON.replace("[235.0, 250.0]", "[235.0]");
        let err = parse_paste_json_str(&bad).unwrap_err();
        assert!(
            format!("{err:#}").contains("peak_temperature_range"),
            "err = {err:#}"
        );
    }
}
