//! Exact shortest tour by depth-first branch-and-bound.
//!
//! # Algorithm
//!
//! Starting at the depot with only the depot visited, branch over every
//! unvisited stop, adding the edge from the current position. Each branch
//! gets its own copy of the visited mask (and, in slow mode, of the path
//! history). When every stop is visited the return edge is added if the
//! vehicle goes back to the depot, the total is rounded, and compared with
//! the best tour of this call. A branch is abandoned as soon as its partial
//! cost can no longer beat that best.
//!
//! Fast mode keeps the first of several equal tours (`<`) and prunes on
//! `>=`; slow mode keeps the last (`<=`) and prunes on `>`. Both report the
//! same cost; only the reported path of tied tours can differ.
//!
//! # Complexity
//!
//! O(n!) worst case in the number of unique stops.

use crate::distance::DistanceMatrix;

use super::problem::{round_to, Tour, TourProblem};

/// Minimum tour cost over the problem's stops (fast mode).
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMatrix;
/// use u_parcel::tour::{shortest_cost, TourProblem};
///
/// let dm = DistanceMatrix::from_lower_triangle(&[
///     vec![0.0],
///     vec![2.0, 0.0],
///     vec![4.0, 3.0, 0.0],
///     vec![5.0, 6.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// let problem = TourProblem::new(&[1, 2, 3], &dm).unwrap();
/// assert_eq!(shortest_cost(&problem, true, 2), 12.0);
/// assert_eq!(shortest_cost(&problem, false, 2), 7.0);
/// ```
pub fn shortest_cost(problem: &TourProblem, returns_to_depot: bool, precision: u32) -> f64 {
    let search = Search::new(problem, returns_to_depot, precision);
    let mut best = f64::INFINITY;
    search.fast(1, 0, 0.0, &mut best);
    best
}

/// Minimum tour with its visiting order and edge distances (slow mode).
///
/// A problem with no stop besides the depot gives the depot-only tour `[0]`,
/// even for a vehicle that returns. Returns `None` only if no tour
/// completes, which cannot happen for a table of finite distances.
pub fn shortest_tour(problem: &TourProblem, returns_to_depot: bool, precision: u32) -> Option<Tour> {
    if problem.is_empty() {
        return Some(Tour {
            sequence: vec![0],
            edges: Vec::new(),
            cost: 0.0,
        });
    }
    let search = Search::new(problem, returns_to_depot, precision);
    let mut best = Tour {
        sequence: Vec::new(),
        edges: Vec::new(),
        cost: f64::INFINITY,
    };
    search.slow(1, 0, 0.0, vec![0], Vec::new(), &mut best);
    if best.sequence.is_empty() {
        None
    } else {
        Some(best)
    }
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    stops: usize,
    all_visited: u64,
    returns_to_depot: bool,
    precision: u32,
}

impl<'a> Search<'a> {
    fn new(problem: &'a TourProblem, returns_to_depot: bool, precision: u32) -> Self {
        let stops = problem.len();
        let all_visited = if stops >= 64 {
            u64::MAX
        } else {
            (1u64 << stops) - 1
        };
        Self {
            distances: problem.distances(),
            stops,
            all_visited,
            returns_to_depot,
            precision,
        }
    }

    fn fast(&self, visited: u64, position: usize, cost: f64, best: &mut f64) {
        if visited == self.all_visited {
            let total = if self.returns_to_depot {
                round_to(cost + self.distances.get(position, 0), self.precision)
            } else {
                round_to(cost, self.precision)
            };
            if total < *best {
                *best = total;
            }
            return;
        }
        if cost >= *best {
            return;
        }
        for next in 1..self.stops {
            let bit = 1u64 << next;
            if visited & bit == 0 {
                let step = self.distances.get(position, next);
                self.fast(visited | bit, next, cost + step, best);
            }
        }
    }

    fn slow(
        &self,
        visited: u64,
        position: usize,
        cost: f64,
        mut sequence: Vec<usize>,
        mut edges: Vec<f64>,
        best: &mut Tour,
    ) {
        if visited == self.all_visited {
            let total = if self.returns_to_depot {
                let back = self.distances.get(position, 0);
                sequence.push(0);
                edges.push(back);
                round_to(cost + back, self.precision)
            } else {
                round_to(cost, self.precision)
            };
            if total <= best.cost {
                *best = Tour {
                    sequence,
                    edges,
                    cost: total,
                };
            }
            return;
        }
        if cost > best.cost {
            return;
        }
        for next in 1..self.stops {
            let bit = 1u64 << next;
            if visited & bit == 0 {
                let step = self.distances.get(position, next);
                let mut branch_sequence = sequence.clone();
                branch_sequence.push(next);
                let mut branch_edges = edges.clone();
                branch_edges.push(step);
                self.slow(
                    visited | bit,
                    next,
                    cost + step,
                    branch_sequence,
                    branch_edges,
                    best,
                );
            }
        }
    }
}
