use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn accepts_positive_counts() {
    assert_eq!(parse_participant_count("1").unwrap(), 1);
    assert_eq!(parse_participant_count("12").unwrap(), 12);
    assert_eq!(parse_participant_count("2147483647").unwrap(), 2147483647);
}

#[test]
fn rejects_invalid_counts() {
    for bad in ["abc", "-5", "0", "", "3.5", "12abc", "2147483648", "99999999999999999999"] {
        let err = parse_participant_count(bad).unwrap_err();
        assert!(
            matches!(err, TournamentError::InvalidArgument { .. }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn error_message_names_the_input() {
    let err = parse_participant_count("abc").unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument `abc`: not a whole number");
}

#[test]
fn missing_count_is_invalid() {
    assert!(matches!(
        parse_args(&[]),
        Err(TournamentError::InvalidArgument { .. })
    ));
}

#[test]
fn help_flag() {
    assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
    assert!(usage().contains("round_robin <participants>"));
}

#[test]
fn defaults_without_options() {
    let Command::Run(options) = parse_args(&args(&["4"])).unwrap() else {
        panic!("expected run command");
    };
    assert_eq!(options.participants, 4);
    assert_eq!(options.config, TournamentConfig::default());
    assert!(options.json_path.is_none());
}

#[test]
fn options_override_config() {
    let Command::Run(options) = parse_args(&args(&[
        "6", "--quiet", "--seed", "42", "--fast", "--pace-ms", "5", "--json", "out.json",
    ]))
    .unwrap() else {
        panic!("expected run command");
    };

    assert_eq!(options.participants, 6);
    assert_eq!(options.config.seed, Some(42));
    assert_eq!(options.config.pace_ms, 5);
    assert_eq!(options.config.match_duration_ms, 0);
    assert_eq!(options.config.spawn_stagger_ms, 0);
    assert!(!options.config.verbose);
    assert_eq!(options.json_path, Some(PathBuf::from("out.json")));
}

#[test]
fn unknown_option_and_missing_value_fail() {
    assert!(parse_args(&args(&["3", "--bogus"])).is_err());
    assert!(parse_args(&args(&["3", "--seed"])).is_err());
    assert!(parse_args(&args(&["3", "--seed", "x"])).is_err());
}

#[test]
fn invalid_count_fails_before_options() {
    let err = parse_args(&args(&["0", "--fast"])).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidArgument { .. }));
}
