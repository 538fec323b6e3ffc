//! Quad-tree over node positions used for Barnes-Hut repulsion.

use glam::Vec2;

/// Cells stop splitting at this depth; deeper leaves hold every body that
/// falls into them (e.g. coincident nodes).
const MAX_DEPTH: u8 = 16;

/// Padding added around the bodies so that none of them sits on the
/// outer boundary.
const BOUNDARY_PADDING: f32 = 1.0;

/// Axis-aligned square region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox2D {
    center: Vec2,
    half_size: f32,
}

impl BoundingBox2D {
    /// Smallest square centered on `center` covering `width` x `height`.
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_size: width.max(height) / 2.0,
        }
    }

    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let offset = (point - self.center).abs();
        offset.x <= self.half_size && offset.y <= self.half_size
    }

    /// 0 = north-west, 1 = north-east, 2 = south-west, 3 = south-east
    /// (canvas coordinates, y grows downwards).
    fn quadrant(&self, point: Vec2) -> usize {
        let east = point.x >= self.center.x;
        let south = point.y >= self.center.y;
        usize::from(east) + 2 * usize::from(south)
    }

    fn child(&self, quadrant: usize) -> Self {
        let quarter = self.half_size / 2.0;
        let dx = if quadrant % 2 == 1 { quarter } else { -quarter };
        let dy = if quadrant >= 2 { quarter } else { -quarter };
        Self {
            center: self.center + Vec2::new(dx, dy),
            half_size: quarter,
        }
    }
}

/// Quad-tree storing indices into a position slice plus the aggregated
/// mass (body count) and center of mass of every cell.
#[derive(Debug)]
pub struct QuadTree {
    boundary: BoundingBox2D,
    depth: u8,
    mass: f32,
    center_of_mass: Vec2,
    bodies: Vec<usize>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    fn new(boundary: BoundingBox2D, depth: u8) -> Self {
        Self {
            boundary,
            depth,
            mass: 0.0,
            center_of_mass: Vec2::ZERO,
            bodies: Vec::new(),
            children: None,
        }
    }

    /// Builds a tree whose root covers all `positions`.
    pub fn build(positions: &[Vec2]) -> Self {
        let mut min = Vec2::INFINITY;
        let mut max = Vec2::NEG_INFINITY;
        for position in positions {
            min = min.min(*position);
            max = max.max(*position);
        }
        if positions.is_empty() || !min.is_finite() || !max.is_finite() {
            min = Vec2::ZERO;
            max = Vec2::ZERO;
        }

        let extent = max - min + Vec2::splat(2.0 * BOUNDARY_PADDING);
        let boundary = BoundingBox2D::new((min + max) / 2.0, extent.x, extent.y);

        let mut tree = Self::new(boundary, 0);
        for index in 0..positions.len() {
            tree.insert(index, positions);
        }
        tree
    }

    fn insert(&mut self, index: usize, positions: &[Vec2]) {
        let position = positions[index];
        let mass = self.mass + 1.0;
        self.center_of_mass = (self.center_of_mass * self.mass + position) / mass;
        self.mass = mass;

        if let Some(children) = self.children.as_mut() {
            children[self.boundary.quadrant(position)].insert(index, positions);
            return;
        }

        self.bodies.push(index);
        if self.bodies.len() > 1 && self.depth < MAX_DEPTH {
            self.subdivide(positions);
        }
    }

    fn subdivide(&mut self, positions: &[Vec2]) {
        let depth = self.depth + 1;
        let boundary = self.boundary;
        let mut children = Box::new([0, 1, 2, 3].map(|quadrant| {
            Self::new(boundary.child(quadrant), depth)
        }));
        for index in self.bodies.drain(..) {
            children[boundary.quadrant(positions[index])].insert(index, positions);
        }
        self.children = Some(children);
    }

    /// Sums `contribution(position, source, mass)` over approximations of all
    /// bodies except `index`. Cells farther away than `size / theta` are
    /// collapsed into their center of mass; leaves and cells containing the
    /// query point are always opened.
    pub fn accumulate<F>(
        &self,
        index: usize,
        positions: &[Vec2],
        theta: f32,
        contribution: &F,
    ) -> Vec2
    where
        F: Fn(Vec2, Vec2, f32) -> Vec2,
    {
        if self.mass == 0.0 {
            return Vec2::ZERO;
        }
        let position = positions[index];

        let Some(children) = self.children.as_ref() else {
            return self
                .bodies
                .iter()
                .filter(|&&other| other != index)
                .fold(Vec2::ZERO, |force, &other| {
                    force + contribution(position, positions[other], 1.0)
                });
        };

        let distance = position.distance(self.center_of_mass);
        if !self.boundary.contains(position) && self.boundary.size() < theta * distance {
            return contribution(position, self.center_of_mass, self.mass);
        }

        children.iter().fold(Vec2::ZERO, |force, child| {
            force + child.accumulate(index, positions, theta, contribution)
        })
    }
}
