//! Set line parsing for pending steps
//!
//! Two line formats are accepted:
//!
//! - new exercise: `<name> <reps> <weight>+`, e.g. `Bench 3 80 85 90`
//! - existing exercise: `<reps> <weight>+`, e.g. `3 82 87 92`
//!
//! Weights may use a comma or a dot as decimal separator.

use thiserror::Error;
use crate::models::SetEntry;

/// Why a set line was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("expected at least {expected} values, got {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("reps must be a whole number: {0}")]
    InvalidReps(String),

    #[error("reps must be greater than zero: {0}")]
    NonPositiveReps(i64),

    #[error("weight must be a number: {0}")]
    InvalidWeight(String),

    #[error("weight cannot be negative: {0}")]
    NegativeWeight(String),
}

/// One submission: a shared rep count and one weight per set
#[derive(Debug, Clone, PartialEq)]
pub struct SetBatch {
    pub reps: i64,
    pub weights: Vec<f64>,
}

impl SetBatch {
    /// One entry per resulting log row
    pub fn sets(&self) -> Vec<SetEntry> {
        self.weights
            .iter()
            .map(|&weight| SetEntry::new(self.reps, weight))
            .collect()
    }
}

/// A new exercise line
#[derive(Debug, Clone, PartialEq)]
pub struct NewExerciseInput {
    pub name: String,
    pub batch: SetBatch,
}

/// Parse `<name> <reps> <weight>+`
pub fn parse_new_exercise_line(text: &str) -> Result<NewExerciseInput, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(InputError::TooFewTokens { expected: 3, found: tokens.len() });
    }

    let batch = parse_batch(&tokens[1..])?;
    Ok(NewExerciseInput {
        name: tokens[0].to_string(),
        batch,
    })
}

/// Parse `<reps> <weight>+`
pub fn parse_existing_exercise_line(text: &str) -> Result<SetBatch, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(InputError::TooFewTokens { expected: 2, found: tokens.len() });
    }

    parse_batch(&tokens)
}

fn parse_batch(tokens: &[&str]) -> Result<SetBatch, InputError> {
    let (reps_token, weight_tokens) = tokens
        .split_first()
        .ok_or(InputError::TooFewTokens { expected: 2, found: 0 })?;

    let reps = parse_reps(reps_token)?;
    let weights = weight_tokens
        .iter()
        .map(|token| parse_weight(token))
        .collect::<Result<Vec<_>, _>>()?;

    if weights.is_empty() {
        return Err(InputError::TooFewTokens { expected: 2, found: 1 });
    }

    Ok(SetBatch { reps, weights })
}

fn parse_reps(token: &str) -> Result<i64, InputError> {
    let reps = token
        .parse::<i64>()
        .map_err(|_| InputError::InvalidReps(token.to_string()))?;

    if reps <= 0 {
        return Err(InputError::NonPositiveReps(reps));
    }

    Ok(reps)
}

fn parse_weight(token: &str) -> Result<f64, InputError> {
    let weight = token
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| InputError::InvalidWeight(token.to_string()))?;

    if weight < 0.0 {
        return Err(InputError::NegativeWeight(token.to_string()));
    }

    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_new_exercise_line() {
        let input = parse_new_exercise_line("Bench 3 80 85 90").unwrap();
        assert_eq!(input.name, "Bench");
        assert_eq!(input.batch.reps, 3);
        assert_eq!(input.batch.weights, vec![80.0, 85.0, 90.0]);
        assert_eq!(input.batch.sets().len(), 3);
        assert!(input.batch.sets().iter().all(|set| set.reps == 3));
    }

    #[test]
    fn test_existing_exercise_line() {
        let batch = parse_existing_exercise_line("  3   82 87,5\t92 ").unwrap();
        assert_eq!(batch.reps, 3);
        assert_eq!(batch.weights, vec![82.0, 87.5, 92.0]);
    }

    #[test]
    fn test_zero_weight_accepted() {
        let batch = parse_existing_exercise_line("12 0 0,0").unwrap();
        assert_eq!(batch.weights, vec![0.0, 0.0]);
    }

    #[test]
    fn test_token_count() {
        assert_matches!(
            parse_new_exercise_line("Bench 3"),
            Err(InputError::TooFewTokens { expected: 3, found: 2 })
        );
        assert_matches!(
            parse_existing_exercise_line("3"),
            Err(InputError::TooFewTokens { expected: 2, found: 1 })
        );
        assert_matches!(
            parse_existing_exercise_line("   "),
            Err(InputError::TooFewTokens { expected: 2, found: 0 })
        );
    }

    #[test]
    fn test_reps_validation() {
        assert_matches!(parse_existing_exercise_line("0 80"), Err(InputError::NonPositiveReps(0)));
        assert_matches!(parse_existing_exercise_line("-2 80"), Err(InputError::NonPositiveReps(-2)));
        assert_matches!(parse_existing_exercise_line("3.5 80"), Err(InputError::InvalidReps(_)));
        assert_matches!(parse_new_exercise_line("Bench Press 3 80"), Err(InputError::InvalidReps(_)));
    }

    #[test]
    fn test_weight_validation() {
        assert_matches!(parse_existing_exercise_line("3 80 -5"), Err(InputError::NegativeWeight(_)));
        assert_matches!(parse_existing_exercise_line("3 80 kg"), Err(InputError::InvalidWeight(_)));
        assert_matches!(parse_existing_exercise_line("3 inf"), Err(InputError::InvalidWeight(_)));
        assert_matches!(parse_existing_exercise_line("3 NaN"), Err(InputError::InvalidWeight(_)));
    }
}
