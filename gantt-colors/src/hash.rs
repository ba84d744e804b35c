//! Deterministic palette slot assignment for color-giver ids.
//!
//! Each id hashes to a preferred slot. Ids are then placed in ascending hash
//! order, so the result depends only on the set of ids, never on the order
//! the caller's task list happens to be in.

use std::collections::{HashMap, HashSet};

/// FNV-1a (32-bit) hash of an identifier.
///
/// Stable across runs and platforms; not cryptographic.
pub fn stable_hash(id: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in id.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Preferred palette slot for `id`.
pub fn preferred_index(id: &str, palette_size: usize) -> usize {
    if palette_size == 0 {
        return 0;
    }
    stable_hash(id) as usize % palette_size
}

/// Assign every id a slot in `[0, palette_size)`.
///
/// Ids first claim their preferred slot in ascending hash order; ids that lost
/// a collision then probe forward (wrapping) for the next free slot. Only when
/// there are more ids than slots do the leftovers share their preferred slot.
/// With `palette_size == 0` the map is empty.
pub fn assign_palette_indices<'a, I>(ids: I, palette_size: usize) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assignment = HashMap::new();
    if palette_size == 0 {
        return assignment;
    }

    let unique: HashSet<&str> = ids.into_iter().collect();
    let mut ordered: Vec<(u32, &str)> = unique.into_iter().map(|id| (stable_hash(id), id)).collect();
    // id breaks hash ties so equal hashes still order deterministically
    ordered.sort_unstable();

    let mut taken = vec![false; palette_size];
    let mut pending = Vec::new();

    for &(hash, id) in &ordered {
        let pref = hash as usize % palette_size;
        if taken[pref] {
            pending.push((pref, id));
        } else {
            taken[pref] = true;
            assignment.insert(id.to_string(), pref);
        }
    }

    for (pref, id) in pending {
        let free = (1..palette_size)
            .map(|offset| (pref + offset) % palette_size)
            .find(|&idx| !taken[idx]);
        let idx = match free {
            Some(idx) => {
                taken[idx] = true;
                idx
            }
            // palette exhausted
            None => pref,
        };
        assignment.insert(id.to_string(), idx);
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn uuid_like(i: u32) -> String {
        let h = stable_hash(&i.to_string());
        format!("{:08x}-{:04x}-4{:03x}-a{:03x}-{:012x}", h, i & 0xffff, i % 0xfff, (h >> 4) & 0xfff, u64::from(h) * 7919 + u64::from(i))
    }

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(stable_hash("task-1"), stable_hash("task-1"));
        assert_ne!(stable_hash("task-1"), stable_hash("task-2"));
    }

    #[test]
    fn test_hash_known_values() {
        // FNV-1a reference vectors
        assert_eq!(stable_hash(""), 0x811c_9dc5);
        assert_eq!(stable_hash("a"), 0xe40c_292c);
        assert_eq!(stable_hash("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hash_distribution() {
        let mut buckets = [0usize; 5];
        for i in 0..100 {
            buckets[stable_hash(&uuid_like(i)) as usize % 5] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 0), "empty bucket: {buckets:?}");
    }

    #[test]
    fn test_colliding_ids_get_distinct_slots() {
        // find five ids sharing one preferred slot
        let palette_size = 10;
        let mut by_slot: HashMap<usize, Vec<String>> = HashMap::new();
        let colliding = (0..10_000)
            .map(uuid_like)
            .find_map(|id| {
                let group = by_slot.entry(preferred_index(&id, palette_size)).or_default();
                group.push(id);
                (group.len() == 5).then(|| group.clone())
            })
            .unwrap();

        let assignment = assign_palette_indices(colliding.iter().map(String::as_str), palette_size);
        let slots: HashSet<usize> = assignment.values().copied().collect();
        assert_eq!(assignment.len(), 5);
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn test_overflow_reuses_preferred_slot() {
        let ids: Vec<String> = (0..7).map(|i| format!("group-{i}")).collect();
        let assignment = assign_palette_indices(ids.iter().map(String::as_str), 3);
        assert_eq!(assignment.len(), 7);
        assert!(assignment.values().all(|&idx| idx < 3));
        let slots: HashSet<usize> = assignment.values().copied().collect();
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn test_empty_palette() {
        assert!(assign_palette_indices(["a", "b"], 0).is_empty());
        assert_eq!(preferred_index("a", 0), 0);
    }

    #[test]
    fn test_uncontested_slot_is_preferred() {
        let assignment = assign_palette_indices(["solo"], 10);
        assert_eq!(assignment["solo"], preferred_index("solo", 10));
    }

    proptest! {
        #[test]
        fn prop_distinct_when_fits(ids in prop::collection::hash_set("[a-z0-9-]{1,16}", 1..10), size in 10usize..16) {
            let assignment = assign_palette_indices(ids.iter().map(String::as_str), size);
            let slots: HashSet<usize> = assignment.values().copied().collect();
            prop_assert_eq!(slots.len(), ids.len());
            prop_assert!(slots.iter().all(|&s| s < size));
        }

        #[test]
        fn prop_order_independent(ids in prop::collection::vec("[a-z0-9-]{1,16}", 1..12), size in 1usize..12) {
            let forward = assign_palette_indices(ids.iter().map(String::as_str), size);
            let backward = assign_palette_indices(ids.iter().rev().map(String::as_str), size);
            prop_assert_eq!(forward, backward);
        }
    }
}
