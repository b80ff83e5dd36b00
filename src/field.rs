use crate::{series::SeriesWithStep, utils, CronError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::{collections::BTreeSet, fmt::Display};

/// Type of every value the field expands to.
pub type FieldValue = u32;

const LIST_SEPARATOR: char = ',';
const INCREMENT_SEPARATOR: char = '/';

// Single item of the comma-separated field list.
// `ignore`, `last`, `meta` and `#` are captured only to be rejected with a clear message.
static FIELD_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"(?P<all>\*)|(?P<ignore>\?)|(?P<last>L)",
        r"|(?P<start>[0-9]{1,2}|[a-z]{3})(?:(?P<meta>[LW])|-(?P<end>[0-9]{1,2}|[a-z]{3}))?",
        r")(?:(?P<inc_meta>[/#])(?P<inc>[0-9]{1,7}))?$",
    ))
    .expect("field item pattern should be valid")
});

/// Kind of the cron expression field.
///
/// Each kind carries its own bounds and, optionally, the table of mnemonic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    /// Minutes: `0-59`.
    Minute,
    /// Hours: `0-23`.
    Hour,
    /// Days of month: `1-31`.
    DayOfMonth,
    /// Months: `1-12` or `JAN-DEC`.
    Month,
    /// Days of week: `1-7` or `MON-SUN`, `0` is an alias of `7` (Sunday).
    DayOfWeek,
}

impl FieldType {
    /// All field kinds in the order they appear in the expression.
    pub const ALL: [FieldType; 5] = [
        FieldType::Minute,
        FieldType::Hour,
        FieldType::DayOfMonth,
        FieldType::Month,
        FieldType::DayOfWeek,
    ];

    const MONTHS: [&'static str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    const DAYS_OF_WEEK: [&'static str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

    /// Returns inclusive lower and upper bounds of the field.
    pub fn min_max(&self) -> (FieldValue, FieldValue) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (1, 7),
        }
    }

    /// Returns mnemonic names of the field values, starting from the lower bound.
    ///
    /// Empty for fields without names.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Self::Month => &Self::MONTHS,
            Self::DayOfWeek => &Self::DAYS_OF_WEEK,
            Self::Minute | Self::Hour | Self::DayOfMonth => &[],
        }
    }

    /// Returns human-readable field name used in descriptions and error messages.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        }
    }

    /// Converts single number or mnemonic name into the field value.
    ///
    /// Bounds aren't checked here, it's a part of the [`FieldPart`] validation.
    fn parse_value(&self, input: &str) -> Result<FieldValue> {
        // 0 and 7 are both Sunday
        if *self == Self::DayOfWeek && input == "0" {
            return Ok(7);
        }

        let (min, _max) = self.min_max();
        if let Some(position) = utils::parse_string_value(input, self.names()) {
            Ok(position + min)
        } else if let Some(value) = utils::parse_digital_value(input) {
            Ok(value)
        } else {
            Err(CronError::InvalidExpression(format!(
                "invalid value '{input}' for field [{self}]"
            )))
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Single comma-separated clause of the field expression.
///
/// Every part is validated during parsing, so `from` and `to` are always set
/// and lie within the field bounds once the part is a member of [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPart {
    from: Option<FieldValue>,
    to: Option<FieldValue>,
    step: Option<FieldValue>,
    wildcard: bool,
    meta_char: Option<char>,
    step_meta_char: Option<char>,
}

impl FieldPart {
    fn parse(type_: FieldType, input: &str) -> Result<Self> {
        let Some(captures) = FIELD_ITEM_REGEX.captures(input) else {
            return Err(CronError::InvalidExpression(format!(
                "invalid input '{input}' for field [{type_}]"
            )));
        };

        let part = Self::from_captures(type_, input, &captures)?;
        part.validate(type_)?;

        tracing::trace!(field = %type_, input, ?part, "field part parsed");
        Ok(part)
    }

    fn from_captures(type_: FieldType, input: &str, captures: &Captures<'_>) -> Result<Self> {
        let (min, max) = type_.min_max();
        let first_char = |name: &str| captures.name(name).and_then(|m| m.as_str().chars().next());

        let step = match captures.name("inc") {
            Some(inc) => Some(utils::parse_digital_value(inc.as_str()).ok_or_else(|| {
                CronError::InvalidExpression(format!("invalid increment in '{input}' for field [{type_}]"))
            })?),
            None => None,
        };

        let mut part = Self {
            step,
            step_meta_char: first_char("inc_meta"),
            ..Default::default()
        };

        if let Some(start) = captures.name("start") {
            let from = type_.parse_value(start.as_str())?;
            let to = if let Some(end) = captures.name("end") {
                type_.parse_value(end.as_str())?
            } else if step.is_some() {
                max
            } else {
                from
            };

            part.from = Some(from);
            part.to = Some(to);
            part.meta_char = first_char("meta");
        } else if captures.name("all").is_some() {
            part.from = Some(min);
            part.to = Some(max);
            part.wildcard = true;
        } else if let Some(meta_char) = first_char("ignore").or_else(|| first_char("last")) {
            part.meta_char = Some(meta_char);
        } else {
            return Err(CronError::InvalidExpression(format!(
                "invalid expression field part '{input}' for field [{type_}]"
            )));
        }

        Ok(part)
    }

    /// The first failed check wins.
    fn validate(&self, type_: FieldType) -> Result<()> {
        let (min, max) = type_.min_max();
        let display = |value: Option<FieldValue>| value.map_or_else(|| "?".to_owned(), |v| v.to_string());

        if self.from.is_some_and(|from| from < min) || self.to.is_some_and(|to| to > max) {
            return Err(CronError::InvalidExpression(format!(
                "invalid interval [{}-{}], must be [{min}-{max}] for field [{type_}]",
                display(self.from),
                display(self.to)
            )));
        }

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(CronError::InvalidExpression(format!(
                    "invalid interval [{from}-{to}], rolling periods are not supported (ex. 4-1, only 1-4), \
                    must be {min}<=_<={max} for field [{type_}]"
                )));
            }
        }

        if let Some(meta_char) = self.meta_char {
            return Err(CronError::InvalidExpression(format!(
                "invalid meta character [{meta_char}] for field [{type_}]"
            )));
        }

        if let Some(step_meta_char) = self.step_meta_char {
            if step_meta_char != INCREMENT_SEPARATOR {
                return Err(CronError::InvalidExpression(format!(
                    "invalid increment meta character [{step_meta_char}] for field [{type_}]"
                )));
            }
        }

        if self.step == Some(0) {
            return Err(CronError::InvalidExpression(format!(
                "invalid increment value [0] for field [{type_}]"
            )));
        }

        Ok(())
    }

    /// Returns series of values covered by this part.
    ///
    /// Wildcards, single values and ranges are series with step `1`.
    fn series(&self) -> Option<SeriesWithStep> {
        let (from, to) = (self.from?, self.to?);
        Some(SeriesWithStep::new(from, to, self.step.unwrap_or(1)))
    }

    /// First value of the part.
    pub fn from(&self) -> Option<FieldValue> {
        self.from
    }

    /// Last value of the part (inclusive), it isn't guaranteed to be hit if step is present.
    pub fn to(&self) -> Option<FieldValue> {
        self.to
    }

    /// Increment between values, if specified with `/`.
    pub fn step(&self) -> Option<FieldValue> {
        self.step
    }

    /// Returns `true` if part was specified as `*`.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}

/// Parsed and expanded field of the cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    type_: FieldType,
    expression: String,
    parts: Vec<FieldPart>,
    values: BTreeSet<FieldValue>,
}

impl Field {
    /// Parses, validates and expands single field expression of the specified kind.
    ///
    /// Returns [`CronError::InvalidExpression`] if any of the comma-separated parts is invalid.
    pub fn parse(type_: FieldType, input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CronError::InvalidExpression(format!(
                "empty expression for field [{type_}]"
            )));
        }

        let parts = input
            .split(LIST_SEPARATOR)
            .map(|item| FieldPart::parse(type_, item))
            .collect::<Result<Vec<_>>>()?;
        let values = expand(&parts);

        tracing::debug!(field = %type_, input, values = values.len(), "field parsed");

        Ok(Self {
            type_,
            expression: input.to_owned(),
            parts,
            values,
        })
    }

    /// Kind of the field.
    pub fn field_type(&self) -> FieldType {
        self.type_
    }

    /// Parsed parts in the order they were specified.
    pub fn parts(&self) -> &[FieldPart] {
        &self.parts
    }

    /// All values of the field in ascending order, without duplicates.
    pub fn values(&self) -> &BTreeSet<FieldValue> {
        &self.values
    }

    /// Returns `true` if `value` is one of the field's values.
    pub fn contains(&self, value: FieldValue) -> bool {
        self.values.contains(&value)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Unions values of all parts, overlapping parts collapse.
fn expand(parts: &[FieldPart]) -> BTreeSet<FieldValue> {
    parts.iter().filter_map(FieldPart::series).flatten().collect()
}
