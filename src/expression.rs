use crate::{
    field::{Field, FieldType, FieldValue},
    CronError, Result,
};
use std::{fmt::Display, str::FromStr};

const EXPECTED_ELEMENTS: usize = 6;
const COMMAND_IDENTIFIER: &str = "command";
const COLUMN_WIDTH: usize = 14;

/// Represents parsed cron expression: five time fields and the command.
///
/// For expression format clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CronExpression {
    minute: Field,
    hour: Field,
    day_of_month: Field,
    month: Field,
    day_of_week: Field,
    command: String,
    expression: String,
}

impl CronExpression {
    /// Parses and validates provided `expression` and constructs [`CronExpression`] instance.
    ///
    /// Alternative way to construct [`CronExpression`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is blank, hasn't exactly six elements,
    /// or any of the fields is invalid.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        if expression.trim().is_empty() {
            return Err(CronError::InvalidExpression(
                "empty expression is not allowed".to_owned(),
            ));
        }

        let elements: Vec<&str> = expression.split_whitespace().collect();
        if elements.len() != EXPECTED_ELEMENTS {
            return Err(CronError::InvalidExpression(format!(
                "invalid cron expression [{expression}], expected {EXPECTED_ELEMENTS} fields, actual {}",
                elements.len()
            )));
        }

        // Parse each element, the command is kept as is.
        let parsed = Self {
            minute: Field::parse(FieldType::Minute, elements[0])?,
            hour: Field::parse(FieldType::Hour, elements[1])?,
            day_of_month: Field::parse(FieldType::DayOfMonth, elements[2])?,
            month: Field::parse(FieldType::Month, elements[3])?,
            day_of_week: Field::parse(FieldType::DayOfWeek, elements[4])?,
            command: elements[5].to_owned(),
            expression: expression.clone(),
        };

        tracing::debug!(expression = %parsed.expression, command = %parsed.command, "cron expression parsed");
        Ok(parsed)
    }

    /// Minutes field.
    #[inline]
    pub fn minute(&self) -> &Field {
        &self.minute
    }

    /// Hours field.
    #[inline]
    pub fn hour(&self) -> &Field {
        &self.hour
    }

    /// Days of month field.
    #[inline]
    pub fn day_of_month(&self) -> &Field {
        &self.day_of_month
    }

    /// Months field.
    #[inline]
    pub fn month(&self) -> &Field {
        &self.month
    }

    /// Days of week field.
    #[inline]
    pub fn day_of_week(&self) -> &Field {
        &self.day_of_week
    }

    /// Returns field of the specified kind.
    pub fn field(&self, type_: FieldType) -> &Field {
        match type_ {
            FieldType::Minute => &self.minute,
            FieldType::Hour => &self.hour,
            FieldType::DayOfMonth => &self.day_of_month,
            FieldType::Month => &self.month,
            FieldType::DayOfWeek => &self.day_of_week,
        }
    }

    /// Returns all fields in the expression order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        FieldType::ALL.into_iter().map(move |type_| self.field(type_))
    }

    /// Verbatim command string (the last element of the expression).
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Renders expanded fields as a table, one line per field plus the command line:
    ///
    /// ```text
    /// minute         0 15 30 45
    /// hour           0
    /// day of month   1 15
    /// month          1 2 3 4 5 6 7 8 9 10 11 12
    /// day of week    1 2 3 4 5
    /// command        /usr/bin/find
    /// ```
    pub fn describe(&self) -> String {
        self.fields()
            .map(|field| describe_line(field.field_type().identifier(), &join_values(field.values())))
            .chain(std::iter::once(describe_line(COMMAND_IDENTIFIER, &self.command)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn describe_line(identifier: &str, content: &str) -> String {
    format!("{identifier:<width$} {content}", width = COLUMN_WIDTH)
}

fn join_values<'a>(values: impl IntoIterator<Item = &'a FieldValue>) -> String {
    values.into_iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

impl From<CronExpression> for String {
    fn from(value: CronExpression) -> Self {
        value.expression
    }
}

impl From<&CronExpression> for String {
    fn from(value: &CronExpression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for CronExpression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CronExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
