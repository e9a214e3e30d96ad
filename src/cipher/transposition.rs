// src/cipher/transposition.rs
//! Columnar transposition cipher — permutes positions, never characters
//!
//! The key is a digit string forming a permutation of `1..=N`; its length
//! sets the column count. Encoding writes the text down the columns of a
//! `rows × N` grid (each original column lands in the slot given by its
//! digit's rank in the sorted key) and reads the grid back row-major.
//! When the text does not fill the grid the trailing cells stay blank and
//! are skipped on both sides, so ciphertext length always equals
//! plaintext length and no padding characters are ever introduced.

use crate::error::{CipherError, Result};

/// Encode by column-major write, row-major read.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let ranks = column_ranks(key)?;
    let chars: Vec<char> = text.chars().collect();
    let grid = fill_grid(&chars, &ranks);

    Ok(grid.into_iter().flatten().flatten().collect())
}

/// Decode by reversing [`encrypt`] exactly: restore the grid from the
/// row-major ciphertext, then read the columns back in their original
/// fill order.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let ranks = column_ranks(key)?;
    let chars: Vec<char> = text.chars().collect();

    // Rebuild the blank-cell layout the encoder produced for this length,
    // then drop the ciphertext into the occupied cells row by row.
    let mut grid = fill_grid(&chars, &ranks);
    let mut next = chars.iter();
    for cell in grid.iter_mut().flatten() {
        if cell.is_some() {
            *cell = next.next().copied();
        }
    }

    let cols = ranks.len();
    let rows = grid.len();
    let mut plain = String::with_capacity(chars.len());
    for col in 0..cols {
        let slot = ranks[col];
        for row in 0..rows {
            if let Some(c) = grid[row][slot] {
                plain.push(c);
            }
        }
    }
    Ok(plain)
}

/// Lay `chars` into the grid column-major: column `col` is written into
/// slot `ranks[col]`, and cells past the end of the text stay `None`.
fn fill_grid(chars: &[char], ranks: &[usize]) -> Vec<Vec<Option<char>>> {
    let cols = ranks.len();
    let rows = chars.len().div_ceil(cols);
    let mut grid = vec![vec![None; cols]; rows];

    let mut idx = 0;
    for &slot in ranks {
        for row in grid.iter_mut() {
            row[slot] = chars.get(idx).copied();
            idx += 1;
        }
    }
    grid
}

/// `ranks[col]` is the position of digit `col + 1` in the sorted key, i.e.
/// the grid slot column `col` is written into.
fn column_ranks(key: &str) -> Result<Vec<usize>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let digits: Vec<usize> = key
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or(CipherError::InvalidTranspositionKey)
        })
        .collect::<Result<_>>()?;

    let cols = digits.len();
    let mut seen = vec![false; cols];
    for &d in &digits {
        if d == 0 || d > cols || seen[d - 1] {
            return Err(CipherError::InvalidTranspositionKey);
        }
        seen[d - 1] = true;
    }

    let mut sorted = digits;
    sorted.sort_unstable();
    Ok((0..cols)
        .map(|col| {
            sorted
                .iter()
                .position(|&d| d == col + 1)
                .unwrap_or_default()
        })
        .collect())
}
