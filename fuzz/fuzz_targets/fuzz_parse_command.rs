#![no_main]

use arbitrary::Arbitrary;
use groundops_workorders::WorkOrderParser;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ParseInput {
    segments: Vec<String>,
    raw: String,
}

fuzz_target!(|input: ParseInput| {
    // Arbitrary text must never panic the parser
    let parsed = WorkOrderParser::parse_command(&input.raw);
    if parsed.is_valid {
        assert!(parsed.errors.is_empty());
        assert!(parsed.commands.iter().all(|c| c.is_valid));
    }

    // Joined segments exercise the delimiter handling
    let joined = input.segments.join("|");
    let parsed = WorkOrderParser::parse_command(&joined);
    let expected = joined
        .trim()
        .split('|')
        .filter(|s| !s.trim().is_empty())
        .count();
    assert_eq!(parsed.commands.len(), expected);

    let summary = WorkOrderParser::validate_command_string(&joined);
    assert_eq!(summary.is_valid, parsed.is_valid);
});
