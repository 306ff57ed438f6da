//! Solution registry mapping day numbers to linked solutions

use crate::error::{RegistrationError, SolverError};
use crate::solution::{FnSolution, PartFn, Solution};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// First day number
pub const FIRST_DAY: u8 = 1;
/// Last day number accepted anywhere in the tool
pub const LAST_DAY: u8 = 31;
/// Total capacity of the flat storage
pub const CAPACITY: usize = LAST_DAY as usize;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if !(FIRST_DAY..=LAST_DAY).contains(&day) {
        return None;
    }
    Some((day - FIRST_DAY) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + FIRST_DAY
}

/// Builder for constructing a SolutionRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, RegistryBuilder};
/// use std::io::BufRead;
///
/// fn p_1(_input: &mut dyn BufRead, _debug: bool) -> Answer {
///     Answer::Int(1)
/// }
///
/// fn p_2(_input: &mut dyn BufRead, _debug: bool) -> Answer {
///     Answer::Int(2)
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_fns(1, p_1, p_2)
///     .unwrap()
///     .build();
/// assert!(registry.contains(1));
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Box<dyn Solution>>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solution for a specific day
    ///
    /// Returns an error if the day is out of bounds or already registered.
    pub fn register<S>(mut self, day: u8, solution: S) -> Result<Self, RegistrationError>
    where
        S: Solution + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolution(day));
        }

        self.entries[index] = Some(Box::new(solution));
        Ok(self)
    }

    /// Register a day's `p_1` and `p_2` functions
    pub fn register_fns(self, day: u8, p_1: PartFn, p_2: PartFn) -> Result<Self, RegistrationError> {
        self.register(day, FnSolution::new(p_1, p_2))
    }

    /// Register every `(day, p_1, p_2)` row of a table
    ///
    /// Generated projects keep their day list in such a table.
    pub fn register_table(
        mut self,
        table: &[(u8, PartFn, PartFn)],
    ) -> Result<Self, RegistrationError> {
        for &(day, p_1, p_2) in table {
            self = self.register_fns(day, p_1, p_2)?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up solutions by day
///
/// Uses a flat Vec indexed by `day - 1` for O(1) lookup.
pub struct SolutionRegistry {
    entries: Vec<Option<Box<dyn Solution>>>,
}

impl SolutionRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up the solution registered for `day`
    ///
    /// # Returns
    /// * `Ok(&dyn Solution)` - The registered solution
    /// * `Err(SolverError::InvalidDay)` - Day outside 1..=31
    /// * `Err(SolverError::NotFound)` - Nothing registered for the day
    pub fn get(&self, day: u8) -> Result<&dyn Solution, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        self.entries
            .get(index)
            .and_then(|e| e.as_deref())
            .ok_or(SolverError::NotFound(day))
    }

    /// Check if a solution exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.get(day).is_ok()
    }

    /// Iterate over registered days in ascending order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_some())
            .map(|(i, _)| from_index(i))
    }

    /// Get the number of registered solutions
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if no solution is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}
