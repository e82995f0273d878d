use crate::utilities::io::file_finder::{PART_FILE_EXTENSION, PART_FILE_PREFIX};
use core::num::NonZeroU64;
use serde::Serialize;

/// How many lines go into each part.
///
/// # Remarks
///
/// Parts are numbered from 1. With `base = total_lines / parts` and
/// `remainder = total_lines % parts`, parts `1..=remainder` receive `base + 1` lines and
/// the rest receive `base`, so the capacities always add up to `total_lines` exactly.
///
/// The number of parts never exceeds the number of lines; no part is ever empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionPlan {
    total_lines: u64,
    requested_parts: u64,
    parts: u64,
    base: u64,
    remainder: u64,
}

impl PartitionPlan {
    /// Plans the split of `total_lines` lines into `target_parts` parts.
    ///
    /// If there are fewer lines than requested parts, one part per line is planned.
    /// A plan for zero lines has zero parts.
    pub fn new(total_lines: u64, target_parts: NonZeroU64) -> Self {
        let parts = target_parts.get().min(total_lines);
        let (base, remainder) = match parts {
            0 => (0, 0),
            _ => (total_lines / parts, total_lines % parts),
        };

        Self {
            total_lines,
            requested_parts: target_parts.get(),
            parts,
            base,
            remainder,
        }
    }

    /// Number of lines being split.
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Number of parts that will be written.
    pub fn parts(&self) -> u64 {
        self.parts
    }

    /// Number of parts originally asked for.
    pub fn requested_parts(&self) -> u64 {
        self.requested_parts
    }

    /// Whether the part count was lowered to the line count.
    pub fn was_reduced(&self) -> bool {
        self.parts < self.requested_parts
    }

    /// Lines in every part past the first [`Self::remainder`] parts.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of leading parts holding one extra line.
    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Number of lines planned for the 1-based `part`, 0 if the part does not exist.
    pub fn capacity(&self, part: u64) -> u64 {
        match part {
            0 => 0,
            part if part > self.parts => 0,
            part if part <= self.remainder => self.base + 1,
            _ => self.base,
        }
    }

    /// Capacities of all parts, in order.
    pub fn capacities(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.parts).map(|part| self.capacity(part))
    }

    /// Number of digits part indices are padded to.
    pub fn digits(&self) -> usize {
        self.parts.checked_ilog10().map_or(1, |log| log as usize + 1)
    }

    /// File name of the 1-based `part`, e.g. `part_007.jsonl` when there are 100+ parts.
    ///
    /// Zero-padding makes the lexicographic order of names match the numeric order.
    pub fn file_name(&self, part: u64) -> String {
        format!(
            "{}{:0width$}{}",
            PART_FILE_PREFIX,
            part,
            PART_FILE_EXTENSION,
            width = self.digits()
        )
    }
}
