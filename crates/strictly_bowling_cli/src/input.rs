//! Roll parsing for command-line and file input.
//!
//! Accepts plain pin counts plus the marks written on a scorecard:
//! `X` for a strike, `/` for a spare, `-` for a miss.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Input that cannot be turned into a roll.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Token is neither a number nor a card mark.
    #[display("Unrecognized roll {_0:?}")]
    Unrecognized(#[error(not(source))] String),

    /// A spare mark with nothing before it to complete.
    #[display("Spare mark at roll {_0} has no roll before it")]
    DanglingSpare(#[error(not(source))] usize),

    /// A spare mark after a roll that leaves no rack to complete.
    #[display("Spare mark at roll {roll} cannot follow {previous}")]
    MisplacedSpare {
        /// Position of the spare mark (1-based).
        roll: usize,
        /// The roll before it.
        previous: i32,
    },
}

/// Splits text into roll tokens on whitespace and commas.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts tokens into raw pin counts.
///
/// Numbers are passed through unchecked so the game reports range errors.
/// A `/` completes the rack left by the roll before it, which must be a
/// count in `0..=9`.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn parse_rolls<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i32>, InputError> {
    let mut rolls: Vec<i32> = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref().trim();
        let pins = match token {
            "X" | "x" => 10,
            "-" => 0,
            "/" => {
                let previous = *rolls.last().ok_or(InputError::DanglingSpare(index + 1))?;
                if !(0..=9).contains(&previous) {
                    return Err(InputError::MisplacedSpare {
                        roll: index + 1,
                        previous,
                    });
                }
                10 - previous
            }
            _ => token
                .parse::<i32>()
                .map_err(|_| InputError::Unrecognized(token.to_string()))?,
        };
        rolls.push(pins);
    }

    debug!(?rolls, "Parsed rolls");
    Ok(rolls)
}
