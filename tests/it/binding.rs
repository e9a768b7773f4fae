use argbind::{Arity, Error, Kind, Param, Parsed, Registry};

#[test]
fn quoted_value_keeps_inner_space() {
    let mut name = String::new();
    let mut registry = Registry::new();
    registry.register(Param::new(&mut name, "--name", "Who.")).unwrap();
    registry.parse(["--name", "\"Jane", "Q\""]).unwrap();
    drop(registry);
    assert_eq!(name, "Jane Q");
}

#[test]
fn equals_and_space_bind_the_same() {
    let bind = |args: &[&str]| {
        let (mut seed, mut ratio) = (0u32, 0.0f64);
        let mut registry = Registry::new();
        registry.register(Param::new(&mut seed, "--seed", "Seed.")).unwrap();
        registry.register(Param::new(&mut ratio, "--ratio", "Ratio.")).unwrap();
        registry.parse(args).unwrap();
        drop(registry);
        (seed, ratio)
    };
    assert_eq!(bind(&["--seed=3", "--ratio=0.25"]), (3, 0.25));
    assert_eq!(bind(&["--seed=3", "--ratio=0.25"]), bind(&["--seed", "3", "--ratio", "0.25"]));
}

#[test]
fn phrases_need_no_dashes() {
    let mut seed = 0i64;
    let mut registry = Registry::new();
    registry.register(Param::new(&mut seed, "seed", "Seed.")).unwrap();
    registry.parse(["seed=-9000000000"]).unwrap();
    drop(registry);
    assert_eq!(seed, -9_000_000_000);
}

#[test]
fn unbounded_swallows_the_rest() {
    let mut files: Vec<String> = Vec::new();
    let mut verbose = false;
    let mut registry = Registry::new();
    registry.register(Param::new(&mut verbose, "--verbose", "Chatty.")).unwrap();
    registry.register(Param::unbounded(&mut files, "--files", "Inputs.")).unwrap();
    let parsed = registry.parse(["--files", "a.txt", "--verbose", "b.txt"]).unwrap();
    assert_eq!(parsed, Parsed::Complete);
    assert!(registry.get("--files").unwrap().is_set());
    drop(registry);
    assert_eq!(files, ["a.txt", "--verbose", "b.txt"]);
    assert!(!verbose);
}

#[test]
fn unbounded_is_satisfied_by_one_value() {
    let mut ids: Vec<u32> = Vec::new();
    let mut registry = Registry::new();
    registry.register(Param::unbounded(&mut ids, "--ids", "Ids.")).unwrap();
    assert_eq!(
        registry.parse(Vec::<String>::new()),
        Err(Error::MissingRequiredOption { long_phrase: "--ids".to_string() })
    );

    let mut ids: Vec<u32> = Vec::new();
    let mut registry = Registry::new();
    registry.register(Param::unbounded(&mut ids, "--ids", "Ids.")).unwrap();
    assert_eq!(registry.parse(["--ids", "7"]), Ok(Parsed::Complete));
    drop(registry);
    assert_eq!(ids, [7]);
}

#[test]
fn fixed_arity_must_be_complete() {
    let mut pair: Vec<i32> = Vec::new();
    let mut registry = Registry::new();
    registry.register(Param::list(&mut pair, 2, "--pair", "Two numbers.")).unwrap();
    assert_eq!(
        registry.parse(["--pair", "1"]),
        Err(Error::MissingRequiredOption { long_phrase: "--pair".to_string() })
    );
    drop(registry);
    assert_eq!(pair, [1]);
}

#[test]
fn defaults_are_bound_at_registration() {
    let mut rate = 0.0f64;
    let mut sep = ' ';
    let mut registry = Registry::new();
    registry.register(Param::new(&mut rate, "--rate", "Rate.").default_value("0.5")).unwrap();
    registry.register(Param::new(&mut sep, "--sep", "Separator.").default_value(",")).unwrap();
    assert!(!registry.get("--rate").unwrap().is_required());
    assert_eq!(registry.parse(["--sep", ";;"]), Ok(Parsed::Complete));
    assert!(!registry.get("--rate").unwrap().is_set());
    drop(registry);
    assert_eq!(rate, 0.5);
    assert_eq!(sep, ';');
}

#[test]
fn flags() {
    let (mut quiet, mut color) = (true, false);
    let mut registry = Registry::new();
    registry.register(Param::new(&mut quiet, "--quiet", "Less output.").required(true)).unwrap();
    registry.register(Param::new(&mut color, "--color", "Colors.").default_value("TRUE")).unwrap();
    let quiet_flag = registry.get("--quiet").unwrap();
    assert_eq!(quiet_flag.kind(), Kind::Bool);
    assert_eq!(quiet_flag.arity(), Arity::Exactly(1));
    assert!(!quiet_flag.is_required());
    assert_eq!(registry.parse(Vec::<&str>::new()), Ok(Parsed::Complete));
    drop(registry);
    assert!(!quiet);
    assert!(color);

    let mut quiet = false;
    let mut registry = Registry::new();
    registry.register(Param::new(&mut quiet, "--quiet", "Less output.")).unwrap();
    registry.parse(["--quiet"]).unwrap();
    drop(registry);
    assert!(quiet);
}

#[test]
fn explicit_required_overrides_default() {
    let mut mode = String::new();
    let mut registry = Registry::new();
    registry
        .register(Param::new(&mut mode, "--mode", "Mode.").default_value("fast").required(true))
        .unwrap();
    assert_eq!(
        registry.parse(Vec::<&str>::new()),
        Err(Error::MissingRequiredOption { long_phrase: "--mode".to_string() })
    );
    drop(registry);
    assert_eq!(mode, "fast");

    let mut level = 3u32;
    let mut registry = Registry::new();
    registry.register(Param::new(&mut level, "--level", "Level.").required(false)).unwrap();
    assert_eq!(registry.parse(Vec::<&str>::new()), Ok(Parsed::Complete));
    drop(registry);
    assert_eq!(level, 3);
}

#[test]
fn bad_defaults_are_config_errors() {
    let (mut color, mut level) = (false, 0u32);
    let mut none: Vec<char> = Vec::new();
    let mut registry = Registry::new();
    let err = registry
        .register(Param::new(&mut color, "--color", "Colors.").default_value("maybe"))
        .unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.to_string(), "Unrecognized default value for option '--color': 'maybe'");

    let err = registry
        .register(Param::new(&mut level, "--level", "Level.").default_value("-1"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDefaultValue { long_phrase: "--level".to_string(), value: "-1".to_string() }
    );

    let err = registry.register(Param::list(&mut none, 0, "--none", "Nothing.")).unwrap_err();
    assert!(err.is_config());
    assert!(registry.is_empty());
}

#[test]
fn empty_char_is_rejected() {
    let mut sep = ' ';
    let mut registry = Registry::new();
    registry.register(Param::new(&mut sep, "--sep", "Separator.")).unwrap();
    let err = registry.parse(["--sep", "\"\""]).unwrap_err();
    assert!(!err.is_config());
    assert_eq!(err, Error::ValueConversionFailure { expected: Kind::Char, text: String::new() });
}

#[test]
fn last_registration_wins() {
    let (mut first, mut second) = (0i32, 0i32);
    let mut registry = Registry::new();
    registry.register(Param::new(&mut first, "--n", "First.")).unwrap();
    registry.register(Param::new(&mut second, "--n", "Second.").default_value("1")).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("--n").unwrap().help_phrase(), "Second.");
    registry.parse(["--n", "42"]).unwrap();
    drop(registry);
    assert_eq!((first, second), (0, 42));
}

#[test]
fn list_destinations_are_appended_to() {
    let mut names = vec!["kept".to_string()];
    let mut registry = Registry::new();
    registry.register(Param::list(&mut names, 2, "--names", "Names.")).unwrap();
    registry.parse(["--names", "a", "\"b c\""]).unwrap();
    drop(registry);
    assert_eq!(names, ["kept", "a", "b c"]);
}

#[test]
fn single_value_lists_behave_like_scalars() {
    let mut ids: Vec<u32> = vec![1];
    let mut registry = Registry::new();
    registry.register(Param::list(&mut ids, 1, "--id", "Id.").default_value("7")).unwrap();
    assert!(!registry.get("--id").unwrap().is_required());
    assert_eq!(registry.parse(Vec::<&str>::new()), Ok(Parsed::Complete));
    drop(registry);
    assert_eq!(ids, [7]);

    let mut ids: Vec<u32> = Vec::new();
    let mut registry = Registry::new();
    registry.register(Param::list(&mut ids, 1, "--id", "Id.").default_value("7")).unwrap();
    registry.parse(["--id", "3"]).unwrap();
    drop(registry);
    assert_eq!(ids, [3]);
}
