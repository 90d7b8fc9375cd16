//! Known relocations that cannot be resolved by basename.
//!
//! Applied as literal substring replacement before any pattern matching,
//! in table order.

/// Where a moved path went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    To(&'static str),
    /// Removed without replacement; occurrences are only reported
    Removed,
}

pub const HARDCODED_MOVES: &[(&str, MoveTarget)] = &[
    (
        "res://blocks/mesher.tres",
        MoveTarget::To("res://VoxelToolFiles/voxel_mesher_blocky.tres"),
    ),
    (
        "res://blocks/voxel_library.tres",
        MoveTarget::To("res://VoxelToolFiles/voxel_blocky_library.tres"),
    ),
    ("res://blocky_game/save", MoveTarget::Removed),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_are_unique() {
        for (i, (a, _)) in HARDCODED_MOVES.iter().enumerate() {
            for (b, _) in &HARDCODED_MOVES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_targets_are_canonical() {
        for (old, target) in HARDCODED_MOVES {
            assert!(old.starts_with("res://"));
            if let MoveTarget::To(new) = target {
                assert!(new.starts_with("res://"));
            }
        }
    }
}
