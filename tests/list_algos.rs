// Linked list algorithm integration suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Shape: every algorithm produces the documented value sequence.
// - Liveness: destructive operations release exactly the nodes they
//   remove (checked through the arena's live-node count), and
//   non-destructive two-list algorithms leave their inputs untouched.
// - Identity: intersection and cycle detection compare node handles, not
//   values.
use intchain::{ListArena, NodeRef};

fn tail_of(arena: &ListArena, head: Option<NodeRef>) -> NodeRef {
    let mut cur = head.expect("non-empty list");
    while let Some(next) = cur.next(arena) {
        cur = next;
    }
    cur
}

// Test: reversal round-trip.
// Verifies: reversing twice restores the original value sequence; reverse
// of the empty list is empty; no nodes are allocated or released.
#[test]
fn reverse_twice_is_identity() {
    let mut arena = ListArena::new();
    assert_eq!(arena.reverse(None), None);

    let head = arena.from_values(&[1, 2, 3, 4, 5]);
    let live = arena.len();

    let reversed = arena.reverse(head);
    assert_eq!(arena.values(reversed), vec![5, 4, 3, 2, 1]);

    let restored = arena.reverse(reversed);
    assert_eq!(arena.values(restored), vec![1, 2, 3, 4, 5]);
    assert_eq!(restored, head);
    assert_eq!(arena.len(), live);
}

// Test: copies are independent.
// Verifies: copy and copy_reversed share no nodes with the source;
// clearing the copy leaves the source intact.
#[test]
fn copies_share_no_nodes() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[1, 2, 3]);

    let copy = arena.copy(head);
    let reversed = arena.copy_reversed(head);
    assert_eq!(arena.values(copy), vec![1, 2, 3]);
    assert_eq!(arena.values(reversed), vec![3, 2, 1]);
    assert_eq!(arena.len(), 9);

    arena.clear(copy);
    arena.clear(reversed);
    assert_eq!(arena.values(head), vec![1, 2, 3]);
    assert_eq!(arena.len(), 3);
}

// Test: duplicate removal keeps first occurrences in order.
// Verifies: [1,2,2,3,1] -> [1,2,3]; removed nodes are released.
#[test]
fn remove_duplicates_keeps_first_occurrences() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[1, 2, 2, 3, 1]);

    arena.remove_duplicates(head);
    assert_eq!(arena.values(head), vec![1, 2, 3]);
    assert_eq!(arena.len(), 3);

    // Already-unique list is untouched.
    arena.remove_duplicates(head);
    assert_eq!(arena.values(head), vec![1, 2, 3]);
}

// Test: removal by value handles the head and consecutive matches.
// Verifies: removing 3 from [3,1,3,2,3] yields [1,2]; removing an absent
// value is a no-op; removing from [3,3] yields the empty list.
#[test]
fn remove_by_value_handles_head_and_runs() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[3, 1, 3, 2, 3]);

    let head = arena.remove_by_value(head, 3);
    assert_eq!(arena.values(head), vec![1, 2]);
    assert_eq!(arena.len(), 2);

    let head = arena.remove_by_value(head, 9);
    assert_eq!(arena.values(head), vec![1, 2]);

    let pair = arena.from_values(&[3, 3]);
    assert_eq!(arena.remove_by_value(pair, 3), None);
    assert_eq!(arena.len(), 2);
}

// Test: the three k-th-from-end variants agree.
// Verifies: k=2 on [1,2,3,4,5] is 4; k=0 normalizes to the last element;
// k == length is the head; k > length is None (and writes nothing).
#[test]
fn last_kth_variants_agree() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[1, 2, 3, 4, 5]);

    for k in 0..=6 {
        let iterative = arena.last_kth(head, k);
        let recursive = arena.last_kth_recursive(head, k);
        assert_eq!(iterative, recursive, "variants disagree at k={}", k);

        let mut out = String::new();
        arena.write_last_kth(head, k, &mut out).unwrap();
        match iterative {
            Some(n) => {
                let expected =
                    format!("{}th last element: {}\n", k.max(1), n.value(&arena).unwrap());
                assert_eq!(out, expected);
            }
            None => assert!(out.is_empty()),
        }
    }

    assert_eq!(arena.last_kth(head, 2).unwrap().value(&arena), Some(4));
    assert_eq!(arena.last_kth(head, 0).unwrap().value(&arena), Some(5));
    assert_eq!(arena.last_kth(head, 5), head);
    assert_eq!(arena.last_kth(head, 6), None);
    assert_eq!(arena.last_kth(None, 1), None);
}

// Test: both palindrome strategies agree across shapes.
// Verifies: true for [1,2,3,2,1] and [7,7], false for [1,2,3]; the
// reversed-copy strategy releases its copy on both outcomes.
#[test]
fn palindrome_strategies_agree() {
    let cases: &[(&[i64], bool)] = &[
        (&[], true),
        (&[1], true),
        (&[7, 7], true),
        (&[1, 2, 3, 2, 1], true),
        (&[1, 2, 2, 1], true),
        (&[1, 2, 3], false),
        (&[1, 2, 2, 3], false),
    ];

    for &(values, expected) in cases {
        let mut arena = ListArena::new();
        let head = arena.from_values(values);
        let live = arena.len();

        assert_eq!(arena.is_palindrome(head), expected, "copy: {:?}", values);
        assert_eq!(arena.len(), live, "copy leaked: {:?}", values);
        assert_eq!(
            arena.is_palindrome_recursive(head),
            expected,
            "recursive: {:?}",
            values
        );
        assert_eq!(arena.values(head), values, "input mutated: {:?}", values);
    }
}

// Test: reversed-digit addition with carry propagation.
// Verifies: 342 + 465 = 807 in reversed-digit form; a final carry appends
// a digit (99 + 1 = 100); inputs are not mutated.
#[test]
fn sum_reversed_digits_carries() {
    let mut arena = ListArena::new();
    let a = arena.from_values(&[2, 4, 3]); // 342
    let b = arena.from_values(&[5, 6, 4]); // 465
    let sum = arena.sum_reversed_digits(a, b);
    assert_eq!(arena.values(sum), vec![7, 0, 8]); // 807

    let c = arena.from_values(&[9, 9]); // 99
    let d = arena.from_values(&[1]); // 1
    let sum = arena.sum_reversed_digits(c, d);
    assert_eq!(arena.values(sum), vec![0, 0, 1]); // 100
    assert_eq!(arena.values(c), vec![9, 9]);
    assert_eq!(arena.values(d), vec![1]);

    // Unequal lengths without a final carry.
    let e = arena.from_values(&[5]); // 5
    let f = arena.from_values(&[1, 1]); // 11
    let sum = arena.sum_reversed_digits(e, f);
    assert_eq!(arena.values(sum), vec![6, 1]); // 16

    assert_eq!(arena.sum_reversed_digits(None, None), None);
}

// Test: intersection is by node identity.
// Verifies: two lists spliced onto a shared tail intersect at the first
// shared node; equal values alone do not intersect.
#[test]
fn intersection_by_identity() {
    let mut arena = ListArena::new();
    let shared = arena.from_values(&[8, 9]);
    let a = arena.from_values(&[1, 2, 3]);
    let b = arena.from_values(&[4]);
    arena.set_next(tail_of(&arena, a), shared);
    arena.set_next(tail_of(&arena, b), shared);

    assert_eq!(arena.values(a), vec![1, 2, 3, 8, 9]);
    assert_eq!(arena.values(b), vec![4, 8, 9]);

    let meet = arena.intersection_node(a, b);
    assert_eq!(meet, shared);
    assert_eq!(arena.intersection_node(b, a), shared);

    // Same values, disjoint nodes: no intersection.
    let x = arena.from_values(&[8, 9]);
    assert_eq!(arena.intersection_node(a, x), None);
    assert_eq!(arena.intersection_node(None, a), None);
}

// Test: Floyd cycle detection.
// Verifies: acyclic lists yield None; a tail linked back into the list
// yields a node inside the cycle.
#[test]
fn detect_cycle_finds_meeting_node() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[1, 2, 3, 4, 5]);
    assert_eq!(arena.detect_cycle(head), None);
    assert_eq!(arena.detect_cycle(None), None);

    // Link the tail back to the third node: cycle 3 -> 4 -> 5 -> 3.
    let third = arena.last_kth(head, 3).unwrap();
    arena.set_next(tail_of(&arena, head), Some(third));

    let meet = arena.detect_cycle(head).expect("cycle present");
    let cycle_values = [3, 4, 5];
    assert!(cycle_values.contains(&meet.value(&arena).unwrap()));

    // Self-loop on a single node.
    let solo = arena.push_back(None, 42);
    arena.set_next(solo, Some(solo));
    assert_eq!(arena.detect_cycle(Some(solo)), Some(solo));
}

// Test: odd/even index partition.
// Verifies: [1,2,3,4,5] -> [1,3,5,2,4]; even length and short lists; the
// operation relinks in place (no allocation, no release).
#[test]
fn odd_even_partition_interleaves() {
    let mut arena = ListArena::new();

    let head = arena.from_values(&[1, 2, 3, 4, 5]);
    let live = arena.len();
    let head = arena.odd_even_partition(head);
    assert_eq!(arena.values(head), vec![1, 3, 5, 2, 4]);
    assert_eq!(arena.len(), live);

    let head = arena.from_values(&[1, 2, 3, 4, 5, 6]);
    let head = arena.odd_even_partition(head);
    assert_eq!(arena.values(head), vec![1, 3, 5, 2, 4, 6]);

    let single = arena.from_values(&[9]);
    assert_eq!(arena.odd_even_partition(single), single);
    assert_eq!(arena.odd_even_partition(None), None);

    let pair = arena.from_values(&[1, 2]);
    let pair = arena.odd_even_partition(pair);
    assert_eq!(arena.values(pair), vec![1, 2]);
}

// Test: the dedup collaborator map does not leak into list state.
// Verifies: a long mixed workload of algorithms ends with exactly the
// expected live nodes.
#[test]
fn mixed_workload_node_accounting() {
    let mut arena = ListArena::new();
    let head = arena.from_values(&[5, 1, 5, 2, 1, 3, 5]);
    arena.remove_duplicates(head);
    assert_eq!(arena.values(head), vec![5, 1, 2, 3]);

    let head = arena.remove_by_value(head, 5);
    assert_eq!(arena.values(head), vec![1, 2, 3]);

    let head = arena.reverse(head);
    assert!(!arena.is_palindrome(head));
    assert_eq!(arena.values(head), vec![3, 2, 1]);
    assert_eq!(arena.len(), 3);

    arena.clear(head);
    assert_eq!(arena.len(), 0);
}
