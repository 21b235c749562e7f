//! Scorecard type and randomized generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::phrases::PhrasePool;
use crate::errors::domain::DomainError;

/// Marker value occupying the reserved center cell of every scorecard.
pub const FREE_SPACE: &str = "FREE SPACE";

/// Cards are square 5x5 grids.
pub const GRID_SIZE: usize = 5;

/// Distinct phrases per card: 25 cells minus the free space.
pub const PHRASES_PER_CARD: usize = GRID_SIZE * GRID_SIZE - 1;

const FREE_ROW: usize = 2;
const FREE_COL: usize = 2;

/// Immutable 5x5 grid of phrases around the fixed free-space center.
///
/// Cards are stateless artifacts: they carry no session coupling and stay
/// valid across rounds until the player holding them is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    id: Uuid,
    rows: Vec<Vec<String>>,
}

impl Scorecard {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    pub fn value(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Content fingerprint used to de-duplicate offered cards.
    pub fn fingerprint(&self) -> String {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("-")
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rows,
        }
    }
}

/// Whether a cell value is the reserved free-space marker.
pub fn is_free_space(value: &str) -> bool {
    value == FREE_SPACE
}

/// Generate one card: a uniform selection of 24 distinct phrases from the
/// pool, placed in row-major order around the free-space center.
pub fn generate<R: Rng + ?Sized>(
    pool: &PhrasePool,
    rng: &mut R,
) -> Result<Scorecard, DomainError> {
    if pool.len() < PHRASES_PER_CARD {
        return Err(DomainError::InsufficientPool {
            available: pool.len(),
        });
    }

    let mut selection: Vec<&str> = pool.phrases().iter().map(String::as_str).collect();
    selection.shuffle(rng);
    selection.truncate(PHRASES_PER_CARD);

    let mut next = 0;
    let mut rows = Vec::with_capacity(GRID_SIZE);
    for row in 0..GRID_SIZE {
        let mut values = Vec::with_capacity(GRID_SIZE);
        for col in 0..GRID_SIZE {
            if row == FREE_ROW && col == FREE_COL {
                values.push(FREE_SPACE.to_string());
            } else {
                values.push(selection[next].to_string());
                next += 1;
            }
        }
        rows.push(values);
    }

    Ok(Scorecard {
        id: Uuid::new_v4(),
        rows,
    })
}
