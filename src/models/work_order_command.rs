//! Work order command model
//!
//! Types produced by [`crate::services::work_order_parser::WorkOrderParser`].
//! A raw command string such as `CHK15|BAG25|CLEAN10|PBB90` becomes one
//! [`ParsedWorkOrder`] holding a [`WorkOrderCommand`] per `|`-delimited
//! segment. Field names serialize in camelCase to match the dashboard payloads.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Jet-bridge positions accepted for `PBB` commands, in degrees.
pub const VALID_PBB_ANGLES: [u64; 4] = [0, 90, 180, 270];

/// Wire value used for segments whose type could not be recognized.
pub const UNRECOGNIZED_TYPE: &str = "unrecognized";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum CommandType {
    #[strum(serialize = "CHK")]
    #[serde(rename = "CHK")]
    Chk,
    #[strum(serialize = "BAG")]
    #[serde(rename = "BAG")]
    Bag,
    #[strum(serialize = "CLEAN")]
    #[serde(rename = "CLEAN")]
    Clean,
    #[strum(serialize = "PBB")]
    #[serde(rename = "PBB")]
    Pbb,
}

/// Unit a command's numeric value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandUnit {
    #[strum(serialize = "minutes")]
    Minutes,
    #[strum(serialize = "degrees")]
    Degrees,
}

impl CommandType {
    /// Short code as typed by operators (`CHK`, `BAG`, ...).
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Human-readable label used in descriptions and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chk => "Check-in",
            Self::Bag => "Baggage handling",
            Self::Clean => "Cleaning",
            Self::Pbb => "Jet-bridge angle",
        }
    }

    pub fn unit(&self) -> CommandUnit {
        match self {
            Self::Chk | Self::Bag | Self::Clean => CommandUnit::Minutes,
            Self::Pbb => CommandUnit::Degrees,
        }
    }

    /// Checks a value against the type's domain.
    pub fn accepts(&self, value: u64) -> bool {
        match self {
            Self::Pbb => VALID_PBB_ANGLES.contains(&value),
            Self::Chk | Self::Bag | Self::Clean => true,
        }
    }

    /// Description of a command of this type that passed validation.
    pub fn describe(&self, value: u64) -> String {
        match self.unit() {
            CommandUnit::Minutes => format!("{}: {} minutes", self.label(), value),
            CommandUnit::Degrees => format!("{}: {}°", self.label(), value),
        }
    }
}

/// Type slot of a parsed command: one of the known codes, or the fallback
/// used for malformed and unknown segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Known(CommandType),
    Unrecognized,
}

impl CommandKind {
    pub fn command_type(&self) -> Option<CommandType> {
        match self {
            Self::Known(command_type) => Some(*command_type),
            Self::Unrecognized => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Known(command_type) => command_type.code(),
            Self::Unrecognized => UNRECOGNIZED_TYPE,
        }
    }
}

impl From<CommandType> for CommandKind {
    fn from(command_type: CommandType) -> Self {
        Self::Known(command_type)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for CommandKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommandKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == UNRECOGNIZED_TYPE {
            return Ok(Self::Unrecognized);
        }
        CommandType::from_str(&raw)
            .map(Self::Known)
            .map_err(|_| de::Error::custom(format!("unknown command type: {}", raw)))
    }
}

/// One parsed `|`-delimited segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderCommand {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub value: u64,
    pub description: String,
    pub is_valid: bool,
}

impl WorkOrderCommand {
    pub fn valid(command_type: CommandType, value: u64) -> Self {
        Self {
            kind: CommandKind::Known(command_type),
            value,
            description: command_type.describe(value),
            is_valid: true,
        }
    }

    pub fn invalid(kind: CommandKind, value: u64, description: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            description: description.into(),
            is_valid: false,
        }
    }
}

/// Result of parsing a whole command string.
///
/// `is_valid` holds only when the trimmed input was non-empty, produced at
/// least one segment, every command is valid and no recognized type repeats.
/// `errors` carries string-level problems; per-segment problems live in each
/// command's `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWorkOrder {
    pub original_command: String,
    pub commands: Vec<WorkOrderCommand>,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ParsedWorkOrder {
    pub(crate) fn rejected(original_command: &str, error: impl Into<String>) -> Self {
        Self {
            original_command: original_command.to_string(),
            commands: Vec::new(),
            is_valid: false,
            errors: vec![error.into()],
        }
    }

    /// Descriptions of all commands joined for history listings.
    pub fn human_readable_commands(&self) -> String {
        self.commands
            .iter()
            .map(|command| command.description.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Recognized command types in input order.
    pub fn recognized_types(&self) -> Vec<CommandType> {
        self.commands
            .iter()
            .filter_map(|command| command.kind.command_type())
            .collect()
    }

    pub fn invalid_commands(&self) -> impl Iterator<Item = &WorkOrderCommand> {
        self.commands.iter().filter(|command| !command.is_valid)
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            is_valid: self.is_valid,
            errors: self.errors.clone(),
        }
    }
}

/// Validity-only view of a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub errors: Vec<String>,
}
