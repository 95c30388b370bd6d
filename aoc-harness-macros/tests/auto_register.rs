use aoc_harness::{
    AutoRegisterPuzzle, Day, InputFormat, ItemFormat, PartSelection, Puzzle, RegistryBuilder,
    RunOptions, SolveError, Terse,
};
use std::fmt::Display;
use std::fs;

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 11)]
struct Totals;

impl Puzzle for Totals {
    type Input = Vec<i32>;

    fn input_format() -> InputFormat<Self::Input> {
        ItemFormat::split(",").parse_items::<i32>().into_input()
    }

    fn part1(input: Self::Input) -> Result<impl Display, SolveError> {
        Ok(input.iter().sum::<i32>())
    }

    fn part2(input: Self::Input) -> Result<impl Display, SolveError> {
        Ok(input.iter().product::<i32>())
    }
}

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 12)]
struct Shout;

impl Puzzle for Shout {
    type Input = String;

    fn input_format() -> InputFormat<Self::Input> {
        InputFormat::whole()
    }

    fn part1(input: Self::Input) -> Result<impl Display, SolveError> {
        Ok(input.to_uppercase())
    }

    fn part2(input: Self::Input) -> Result<impl Display, SolveError> {
        Ok(input.chars().rev().collect::<String>())
    }
}

fn day(n: u8) -> Day {
    Day::new(n).unwrap()
}

#[test]
fn test_derived_puzzles_are_collected() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert_eq!(
        registry.days().map(Day::get).collect::<Vec<_>>(),
        vec![11, 12]
    );
    assert!(registry.get(day(11)).unwrap().name().ends_with("Totals"));
    assert!(registry.get(day(12)).unwrap().name().ends_with("Shout"));
}

#[test]
fn test_plugin_filter() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.day == 12)
        .unwrap()
        .build();

    assert!(!registry.contains(day(11)));
    assert!(registry.contains(day(12)));
}

#[test]
fn test_manual_registration_conflicts_with_plugin() {
    let result = RegistryBuilder::new()
        .register(11, &Shout)
        .unwrap()
        .register_all_plugins();
    assert!(result.is_err());
}

#[test]
fn test_registered_puzzle_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("day11")).unwrap();
    fs::write(dir.path().join("day11/input"), "2, 3,4\n").unwrap();

    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let options = RunOptions {
        inputs_dir: dir.path().to_path_buf(),
        sample: false,
        parts: PartSelection::Both,
    };
    let mut reporter = Terse::new(Vec::new());
    registry
        .get(day(11))
        .unwrap()
        .run(day(11), &options, &mut reporter)
        .unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(out.contains("Raw input: 3 items"));
    assert!(out.contains("Part 1... 9 ["));
    assert!(out.contains("Part 2... 24 ["));
}
