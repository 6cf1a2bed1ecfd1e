//! Structural algorithms over lists in a [`ListArena`].
//!
//! Everything here manipulates the pointer graph through slot-key links, so
//! unlinked nodes are released exactly once and never left dangling. Unless
//! a method says otherwise, inputs must be acyclic and lists passed as two
//! arguments must not share nodes.

use crate::int_map::IntHashMap;
use crate::list::{ListArena, NodeRef};
use core::fmt;

impl ListArena {
    fn next_of(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes[node.0].next
    }

    fn link(&mut self, node: NodeRef, next: Option<NodeRef>) {
        self.nodes[node.0].next = next;
    }

    /// Reverse the list in place and return the new head. O(n) time, O(1)
    /// auxiliary space. The empty list reverses to itself.
    pub fn reverse(&mut self, head: Option<NodeRef>) -> Option<NodeRef> {
        let mut prev = None;
        let mut cur = head;
        while let Some(n) = cur {
            let next = self.next_of(n);
            self.link(n, prev);
            prev = Some(n);
            cur = next;
        }
        prev
    }

    /// Independent copy of the list: same values, fresh nodes, no sharing
    /// with the source.
    pub fn copy(&mut self, head: Option<NodeRef>) -> Option<NodeRef> {
        let mut copy_head = None;
        let mut copy_tail: Option<NodeRef> = None;
        let mut cur = head;
        while let Some(n) = cur {
            let fresh = self.alloc(self.value_of(n));
            match copy_tail {
                None => copy_head = Some(fresh),
                Some(t) => self.link(t, Some(fresh)),
            }
            copy_tail = Some(fresh);
            cur = self.next_of(n);
        }
        copy_head
    }

    /// Independent copy with the values in reverse order.
    pub fn copy_reversed(&mut self, head: Option<NodeRef>) -> Option<NodeRef> {
        let copied = self.copy(head);
        self.reverse(copied)
    }

    /// Remove every node whose value was already seen earlier in the list,
    /// keeping first occurrences in order. Single forward pass; an
    /// [`IntHashMap`] tracks seen values for O(1) membership. The head node
    /// is by definition a first occurrence, so the head does not change.
    pub fn remove_duplicates(&mut self, head: Option<NodeRef>) {
        let mut seen = IntHashMap::new();
        let mut prev: Option<NodeRef> = None;
        let mut cur = head;
        while let Some(n) = cur {
            let value = self.value_of(n);
            if seen.contains_key(value) {
                let next = self.next_of(n);
                if let Some(p) = prev {
                    self.link(p, next);
                }
                self.nodes.remove(n.0);
                cur = next;
            } else {
                seen.increment(value);
                prev = Some(n);
                cur = self.next_of(n);
            }
        }
    }

    /// Remove every node holding `value`, returning the new head (which
    /// changes when the old head matches). Handles consecutive matches;
    /// removing a value that never occurs is a no-op.
    pub fn remove_by_value(&mut self, head: Option<NodeRef>, value: i64) -> Option<NodeRef> {
        let mut head = head;
        let mut prev: Option<NodeRef> = None;
        let mut cur = head;
        while let Some(n) = cur {
            let next = self.next_of(n);
            if self.value_of(n) == value {
                match prev {
                    Some(p) => self.link(p, next),
                    None => head = next,
                }
                self.nodes.remove(n.0);
            } else {
                prev = Some(n);
            }
            cur = next;
        }
        head
    }

    /// k-th node from the end, iterative two-pointer form: the lead pointer
    /// advances `k` steps, then lead and trail advance together until the
    /// lead falls off the end. `k == 0` is normalized to 1 (the last node);
    /// `k` beyond the list length yields `None`. Preferred variant for
    /// unbounded inputs (no recursion).
    pub fn last_kth(&self, head: Option<NodeRef>, k: usize) -> Option<NodeRef> {
        let k = k.max(1);
        let mut lead = head;
        for _ in 0..k {
            lead = self.next_of(lead?);
        }
        let mut trail = head;
        while let (Some(l), Some(t)) = (lead, trail) {
            lead = self.next_of(l);
            trail = self.next_of(t);
        }
        trail
    }

    /// k-th node from the end by tail-first recursion. Same results as
    /// [`last_kth`](Self::last_kth); call-stack depth is the list length.
    pub fn last_kth_recursive(&self, head: Option<NodeRef>, k: usize) -> Option<NodeRef> {
        self.kth_from_tail(head, k.max(1)).1
    }

    fn kth_from_tail(&self, node: Option<NodeRef>, k: usize) -> (usize, Option<NodeRef>) {
        let Some(n) = node else {
            return (0, None);
        };
        let (below, found) = self.kth_from_tail(self.next_of(n), k);
        let index = below + 1;
        if index == k {
            (index, Some(n))
        } else {
            (index, found)
        }
    }

    /// Recursive k-th-from-end variant whose observable effect is a line
    /// written to `out`: `{k}th last element: {value}`. Writes nothing when
    /// `k` exceeds the list length. `k == 0` is normalized to 1.
    pub fn write_last_kth<W: fmt::Write>(
        &self,
        head: Option<NodeRef>,
        k: usize,
        out: &mut W,
    ) -> fmt::Result {
        self.write_kth_from_tail(head, k.max(1), out).map(|_| ())
    }

    fn write_kth_from_tail<W: fmt::Write>(
        &self,
        node: Option<NodeRef>,
        k: usize,
        out: &mut W,
    ) -> Result<usize, fmt::Error> {
        let Some(n) = node else {
            return Ok(0);
        };
        let index = self.write_kth_from_tail(self.next_of(n), k, out)? + 1;
        if index == k {
            writeln!(out, "{}th last element: {}", k, self.value_of(n))?;
        }
        Ok(index)
    }

    /// Palindrome check by reversed-copy comparison: build a reversed copy,
    /// walk both lists in lockstep, and release the copy on every exit
    /// path, including an early mismatch.
    pub fn is_palindrome(&mut self, head: Option<NodeRef>) -> bool {
        let copy = self.copy_reversed(head);
        let mut forward = head;
        let mut backward = copy;
        let mut result = true;
        while let (Some(f), Some(b)) = (forward, backward) {
            if self.value_of(f) != self.value_of(b) {
                result = false;
                break;
            }
            forward = self.next_of(f);
            backward = self.next_of(b);
        }
        self.clear(copy);
        result
    }

    /// Palindrome check by recursion: descend to the tail on the call
    /// stack, then compare outward against a head cursor that advances one
    /// node per unwind step. Agrees with
    /// [`is_palindrome`](Self::is_palindrome) on all inputs.
    pub fn is_palindrome_recursive(&self, head: Option<NodeRef>) -> bool {
        let mut front = head;
        self.palindrome_from_tail(&mut front, head)
    }

    fn palindrome_from_tail(&self, front: &mut Option<NodeRef>, tail: Option<NodeRef>) -> bool {
        let Some(t) = tail else {
            return true;
        };
        if !self.palindrome_from_tail(front, self.next_of(t)) {
            return false;
        }
        // The front cursor has advanced once per completed unwind step, so
        // it cannot pass the tail cursor while frames remain.
        let f = front.expect("front cursor lags the unwinding tail");
        let equal = self.value_of(f) == self.value_of(t);
        *front = self.next_of(f);
        equal
    }

    /// Add two numbers stored as reversed-digit lists (least significant
    /// digit first), producing a new list in the same representation.
    /// Neither input is mutated. A final nonzero carry appends one more
    /// digit node.
    pub fn sum_reversed_digits(
        &mut self,
        mut a: Option<NodeRef>,
        mut b: Option<NodeRef>,
    ) -> Option<NodeRef> {
        let mut head = None;
        let mut tail: Option<NodeRef> = None;
        let mut carry = 0;
        while a.is_some() || b.is_some() {
            let mut total = carry;
            if let Some(n) = a {
                total += self.value_of(n);
                a = self.next_of(n);
            }
            if let Some(n) = b {
                total += self.value_of(n);
                b = self.next_of(n);
            }
            carry = total / 10;
            let digit = self.alloc(total % 10);
            match tail {
                None => head = Some(digit),
                Some(t) => self.link(t, Some(digit)),
            }
            tail = Some(digit);
        }
        if carry != 0 {
            let digit = self.alloc(carry);
            match tail {
                None => head = Some(digit),
                Some(t) => self.link(t, Some(digit)),
            }
        }
        head
    }

    /// First node shared by both lists, by identity rather than value:
    /// align the longer list by the length difference, then walk both in
    /// lockstep until the handles compare equal. `None` for disjoint
    /// lists. Neither input is mutated.
    pub fn intersection_node(
        &self,
        a: Option<NodeRef>,
        b: Option<NodeRef>,
    ) -> Option<NodeRef> {
        let len_a = self.len_of(a);
        let len_b = self.len_of(b);
        let (mut long, mut short) = if len_a >= len_b { (a, b) } else { (b, a) };
        for _ in 0..len_a.abs_diff(len_b) {
            long = self.next_of(long?);
        }
        while let (Some(l), Some(s)) = (long, short) {
            if l == s {
                return Some(l);
            }
            long = self.next_of(l);
            short = self.next_of(s);
        }
        None
    }

    /// Floyd tortoise-and-hare cycle detection: returns the node where the
    /// two pointers meet inside the cycle, or `None` for an acyclic list.
    /// This is the one traversal defined for cycle-bearing lists.
    pub fn detect_cycle(&self, head: Option<NodeRef>) -> Option<NodeRef> {
        let mut slow = head;
        let mut fast = head;
        loop {
            let s = slow?;
            let f = self.next_of(fast?)?;
            slow = self.next_of(s);
            fast = self.next_of(f);
            if slow.is_some() && slow == fast {
                return slow;
            }
        }
    }

    /// Partition by 1-based position parity: odd-position nodes first (in
    /// order), then even-position nodes, as one relinked list. Positions 1
    /// and 2 seed the odd/even sublists; the loop walks from position 3.
    /// Consumes the input list: the surgery invalidates the old head as an
    /// entry point, and the returned head replaces it.
    pub fn odd_even_partition(&mut self, head: Option<NodeRef>) -> Option<NodeRef> {
        let odd_head = head?;
        let Some(even_head) = self.next_of(odd_head) else {
            return Some(odd_head);
        };

        let mut odd_tail = odd_head;
        let mut even_tail = even_head;
        let mut cur = self.next_of(even_head);
        let mut position = 3;
        while let Some(n) = cur {
            let next = self.next_of(n);
            self.link(n, None);
            if position % 2 == 0 {
                self.link(even_tail, Some(n));
                even_tail = n;
            } else {
                self.link(odd_tail, Some(n));
                odd_tail = n;
            }
            position += 1;
            cur = next;
        }
        self.link(even_tail, None);
        self.link(odd_tail, Some(even_head));
        Some(odd_head)
    }
}
