use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};

use egui::Pos2;
use itertools::Itertools;

use crate::geo;

/// decides when the next edge of a [`Figure`] shows up
pub mod reveal;

/// indices into [`Figure::vertices`], (start, end)
pub type Edge = (usize, usize);

/// rotation of the copy made in `generation`.
/// generation 1 is the initial polygon, thus the first copy is made in generation 2
/// and rotated by half the angle between neighboring corners.
/// every later generation halves the rotation again.
pub fn offset_angle(nr_corners: usize, generation: u32) -> f32 {
    debug_assert!(generation >= 2);
    let exponent = generation as i32 - 2;
    PI / (nr_corners as f32 * 2f32.powi(exponent))
}

/// the whole line pattern, centered around [`Pos2::ZERO`].
/// nothing is ever removed: vertices and edges only grow,
/// edges move from `pending` to `edges` one at a time.
#[derive(Clone, Debug)]
pub struct Figure {
    nr_corners: usize,
    vertices: Vec<Pos2>,
    /// edges currently visible
    edges: Vec<Edge>,
    /// edges already computed, front is revealed next
    pending: VecDeque<Edge>,
}

impl Figure {
    /// regular polygon with `nr_corners` corners on a circle of `radius`.
    /// edges are the perimeter, followed by all diameters if `nr_corners` is even.
    pub fn initial(nr_corners: usize, radius: f32) -> Self {
        let vertices = (0..nr_corners)
            .map(|i| {
                let angle = TAU * i as f32 / nr_corners as f32;
                geo::point_on_circle(Pos2::ZERO, radius, angle)
            })
            .collect_vec();

        let mut edges = (0..nr_corners).map(|i| (i, (i + 1) % nr_corners)).collect_vec();
        if nr_corners % 2 == 0 {
            let half = nr_corners / 2;
            edges.extend((0..half).map(|i| (i, i + half)));
        }

        Self {
            nr_corners,
            vertices,
            edges,
            pending: VecDeque::new(),
        }
    }

    pub fn nr_corners(&self) -> usize {
        self.nr_corners
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn pending(&self) -> &VecDeque<Edge> {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// moves the oldest pending edge to the visible edges.
    pub fn reveal_next(&mut self) -> Option<Edge> {
        let edge = self.pending.pop_front()?;
        self.edges.push(edge);
        Some(edge)
    }

    /// appends a copy of all vertices rotated by `offset` around the center.
    /// queues the visible edges moved onto that copy, then every edge between an old and a new vertex.
    /// returns the number of queued edges.
    pub fn next_generation(&mut self, offset: f32) -> usize {
        let nr_old = self.vertices.len();
        self.vertices.extend_from_within(..);
        for v in &mut self.vertices[nr_old..] {
            *v = geo::rotate_about(*v, Pos2::ZERO, offset);
        }

        let pending_before = self.pending.len();
        let rotated_edges = self.edges.iter().map(|&(a, b)| (a + nr_old, b + nr_old));
        self.pending.extend(rotated_edges);
        let cross_edges = (0..nr_old).cartesian_product(nr_old..self.vertices.len());
        self.pending.extend(cross_edges);

        debug_assert!(self.pending.iter().all(|&(a, b)| a.max(b) < self.vertices.len()));
        self.pending.len() - pending_before
    }

    /// start and end of every visible edge
    pub fn visible_lines(&self) -> impl Iterator<Item = [Pos2; 2]> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| [self.vertices[a], self.vertices[b]])
    }
}
