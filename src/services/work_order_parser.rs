//! Work order command parser
//!
//! Turns operator input like `CHK15|BAG25|CLEAN10|PBB90` into a
//! [`ParsedWorkOrder`]. Parsing is advisory: the result drives the live
//! preview and the submit gate, while the backend validates the raw string
//! again on submission.
//!
//! Grammar: `SEGMENT ('|' SEGMENT)*` where each trimmed, non-empty segment
//! must be `[A-Z]+[0-9]+`. Values are unsigned; a sign character is a format
//! error.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::work_order_command::{
    CommandKind, CommandType, CommandUnit, ParsedWorkOrder, ValidationSummary,
    WorkOrderCommand, VALID_PBB_ANGLES,
};

pub const COMMAND_DELIMITER: char = '|';

const EMPTY_COMMAND_ERROR: &str = "Command string cannot be empty";
const NO_COMMANDS_ERROR: &str = "No valid commands found";

// ASCII digits only; `\d` also matches non-ASCII digits.
static SEGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]+)([0-9]+)$").expect("segment pattern is a valid regex")
});

const COMMAND_EXAMPLES: [&str; 5] = [
    "CHK15|BAG25|CLEAN10|PBB90",
    "CHK20|BAG30|CLEAN15",
    "PBB180|CLEAN5",
    "CHK10|BAG20|CLEAN8|PBB0",
    "BAG15|CLEAN12|PBB270",
];

/// Stateless parser for work order command strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkOrderParser;

impl WorkOrderParser {
    /// Parses a full command string.
    ///
    /// Never fails: every problem is reported on the returned value, either
    /// in `errors` (empty input, no segments, duplicate types) or on the
    /// offending command. All segments are parsed even after one is invalid.
    pub fn parse_command(input: &str) -> ParsedWorkOrder {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ParsedWorkOrder::rejected(trimmed, EMPTY_COMMAND_ERROR);
        }

        let commands: Vec<WorkOrderCommand> = trimmed
            .split(COMMAND_DELIMITER)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Self::parse_segment)
            .collect();

        if commands.is_empty() {
            return ParsedWorkOrder::rejected(trimmed, NO_COMMANDS_ERROR);
        }

        let mut is_valid = commands.iter().all(|command| command.is_valid);
        let mut errors = Vec::new();

        let duplicates = Self::duplicate_types(&commands);
        if !duplicates.is_empty() {
            is_valid = false;
            let codes: Vec<&str> = duplicates.iter().map(CommandType::code).collect();
            errors.push(format!("Duplicate command types found: {}", codes.join(", ")));
        }

        debug!(
            segments = commands.len(),
            is_valid, "parsed work order command"
        );

        ParsedWorkOrder {
            original_command: trimmed.to_string(),
            commands,
            is_valid,
            errors,
        }
    }

    /// Validity and string-level errors only.
    pub fn validate_command_string(input: &str) -> ValidationSummary {
        Self::parse_command(input).summary()
    }

    pub fn get_command_examples() -> &'static [&'static str] {
        &COMMAND_EXAMPLES
    }

    pub fn get_command_help() -> BTreeMap<CommandType, &'static str> {
        BTreeMap::from([
            (
                CommandType::Chk,
                "Check-in minutes (CHKn) - Time allocated for passenger check-in",
            ),
            (
                CommandType::Bag,
                "Baggage minutes (BAGn) - Time allocated for baggage handling",
            ),
            (
                CommandType::Clean,
                "Cleaning minutes (CLEANn) - Time allocated for aircraft cleaning",
            ),
            (
                CommandType::Pbb,
                "Jet-bridge angle (PBBx) - Angle for jet-bridge positioning (0, 90, 180, or 270 degrees only)",
            ),
        ])
    }

    /// Parses one trimmed, non-empty segment.
    fn parse_segment(segment: &str) -> WorkOrderCommand {
        let Some(captures) = SEGMENT_PATTERN.captures(segment) else {
            return WorkOrderCommand::invalid(
                CommandKind::Unrecognized,
                0,
                format!("Invalid command format: {}", segment),
            );
        };
        let type_str = &captures[1];
        let digits = &captures[2];
        let value = digits.parse::<u64>().ok();

        let Ok(command_type) = CommandType::from_str(type_str) else {
            return WorkOrderCommand::invalid(
                CommandKind::Unrecognized,
                value.unwrap_or(0),
                format!("Unknown command type: {}", type_str),
            );
        };

        // Only digit strings past u64::MAX land here
        let Some(value) = value else {
            let significant = digits.trim_start_matches('0');
            let description = match command_type.unit() {
                CommandUnit::Degrees => invalid_angle_message(significant),
                CommandUnit::Minutes => {
                    format!("Value out of range for {}: {}", command_type.label(), significant)
                }
            };
            return WorkOrderCommand::invalid(command_type.into(), 0, description);
        };

        if !command_type.accepts(value) {
            return WorkOrderCommand::invalid(
                command_type.into(),
                value,
                invalid_angle_message(value),
            );
        }

        WorkOrderCommand::valid(command_type, value)
    }

    /// Recognized types seen more than once, each listed once, in the order
    /// their first repeat occurs.
    fn duplicate_types(commands: &[WorkOrderCommand]) -> Vec<CommandType> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for command_type in commands.iter().filter_map(|c| c.kind.command_type()) {
            if !seen.insert(command_type) && !duplicates.contains(&command_type) {
                duplicates.push(command_type);
            }
        }
        duplicates
    }
}

fn invalid_angle_message(angle: impl std::fmt::Display) -> String {
    format!(
        "Invalid jet-bridge angle: {}° (must be {})",
        angle,
        allowed_angles()
    )
}

fn allowed_angles() -> String {
    VALID_PBB_ANGLES
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
