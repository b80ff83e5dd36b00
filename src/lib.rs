//! Unix cron expression parser which expands every time field into the set of its values.
#![deny(unsafe_code, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse and validate classic five-field cron expressions followed by a command;
//! - expand every field into the ascending set of integer values it denotes;
//! - render a human-readable table of the expanded expression.
//!
//! _This is not a cron jobs scheduler or runner._ It computes admissible values per field only,
//! there is no calendar evaluation, time zones or next-fire-time calculation.
//!
//! ## Cron expression format
//!
//! Expression consists of exactly six whitespace-separated elements:
//! `<minute> <hour> <day of month> <month> <day of week> <command>`.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - /                    |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 1-7 or MON-SUN  | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`; a single value with step runs to the end of the field.
//!
//! Additional rules:
//! - names are case-insensitive;
//! - in the day of week field both `0` and `7` mean Sunday (`7`);
//! - rolling ranges like `5-1` or `FRI-MON` aren't supported, use lists instead: `FRI-SUN,MON`;
//! - `L`, `W`, `#` and `?` modifiers are recognized but rejected with a descriptive error;
//! - the command element is stored verbatim and never parsed.
//!
//! ## How to use
//!
//! The main entity of the crate is a [`CronExpression`] structure:
//! - [new()](CronExpression::new): constructor to parse and validate provided expression;
//! - [minute()](CronExpression::minute), [hour()](CronExpression::hour), etc.: access to the parsed [`Field`]s
//!   and their [values](Field::values);
//! - [describe()](CronExpression::describe): renders the expanded expression as a table.
//!
//! ### Example
//! ```rust
//! use cron_describe::{CronExpression, Result};
//!
//! fn describe() -> Result<()> {
//!     let expression = CronExpression::new("*/15 0 1,15 * 1-5 /usr/bin/find")?;
//!
//!     assert_eq!(expression.minute().values().iter().copied().collect::<Vec<_>>(), vec![0, 15, 30, 45]);
//!     assert_eq!(expression.command(), "/usr/bin/find");
//!
//!     println!("{}", expression.describe());
//!
//!     Ok(())
//! }
//! # describe().unwrap();
//! ```
//!
//! Single field may be parsed separately:
//! ```rust
//! use cron_describe::{Field, FieldType};
//!
//! let field = Field::parse(FieldType::DayOfWeek, "MON,FRI,0").unwrap();
//! assert_eq!(field.values().iter().copied().collect::<Vec<_>>(), vec![1, 5, 7]);
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`CronExpression`].
//! * `cli`: builds `cron-describe` binary which prints description of the expression passed as an argument.

/// Crate specific Error implementation.
pub mod error;
/// Cron expression parser and describer.
pub mod expression;
/// Single field parser and values expander.
pub mod field;
mod series;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use expression::CronExpression;
pub use field::{Field, FieldPart, FieldType, FieldValue};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
