use serde::Serialize;
use std::collections::VecDeque;

/// Half-open minute interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start_min: u32,
    pub end_min: u32,
}

impl Interval {
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }
}

/// Lane geometry for one interval: its slot index and the width of its
/// overlap group. Recomputed from scratch on every packing call.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LaneAssignment {
    pub lane: usize,
    pub lanes_in_group: usize,
}

/// Intervals that merely touch at an endpoint do not overlap.
pub fn overlaps(a: Interval, b: Interval) -> bool {
    a.start_min < b.end_min && b.start_min < a.end_min
}

/// Assign a lane to every interval such that no two overlapping intervals
/// share one. Intervals connected through a chain of pairwise overlaps form
/// one group and report that group's final lane count; unrelated groups
/// number their lanes independently, each starting at zero.
pub fn assign_lanes(intervals: &[Interval]) -> Vec<LaneAssignment> {
    let count = intervals.len();
    let mut adjacency = vec![Vec::new(); count];
    for left in 0..count {
        for right in left + 1..count {
            if overlaps(intervals[left], intervals[right]) {
                adjacency[left].push(right);
                adjacency[right].push(left);
            }
        }
    }

    // Overlap components via breadth-first traversal over dense indices.
    const UNASSIGNED: usize = usize::MAX;
    let mut component = vec![UNASSIGNED; count];
    let mut component_count = 0;
    for index in 0..count {
        if component[index] != UNASSIGNED {
            continue;
        }
        component[index] = component_count;
        let mut queue = VecDeque::from([index]);
        while let Some(current) = queue.pop_front() {
            for &neighbor in &adjacency[current] {
                if component[neighbor] == UNASSIGNED {
                    component[neighbor] = component_count;
                    queue.push_back(neighbor);
                }
            }
        }
        component_count += 1;
    }

    let mut assignments = vec![
        LaneAssignment {
            lane: 0,
            lanes_in_group: 1,
        };
        count
    ];
    for group in 0..component_count {
        let mut members: Vec<usize> = (0..count)
            .filter(|&index| component[index] == group)
            .collect();
        members.sort_by_key(|&index| (intervals[index].start_min, intervals[index].end_min));

        // First-fit over lane end times; a lane that ended by this interval's
        // start is reused, so back-to-back intervals share a lane.
        let mut lane_ends: Vec<u32> = Vec::new();
        for &index in &members {
            let interval = intervals[index];
            let lane = match lane_ends
                .iter()
                .position(|&lane_end| lane_end <= interval.start_min)
            {
                Some(free) => {
                    lane_ends[free] = interval.end_min;
                    free
                }
                None => {
                    lane_ends.push(interval.end_min);
                    lane_ends.len() - 1
                }
            };
            assignments[index].lane = lane;
        }

        // The group's width is only known once the whole group is packed.
        for &index in &members {
            assignments[index].lanes_in_group = lane_ends.len();
        }
    }

    assignments
}
