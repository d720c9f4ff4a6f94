//! Node and position types.

use serde::{Deserialize, Serialize};

/// Identifier of a node, assigned by the caller.
pub type NodeId = u32;

/// A position on the drawing plane.
///
/// # Examples
///
/// ```
/// use u_postman::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A node of the inspection graph.
///
/// The position is only used by callers to derive edge weights, and the
/// label is carried through untouched for display.
///
/// # Examples
///
/// ```
/// use u_postman::models::Node;
///
/// let n = Node::new(7, 10.0, 0.0).with_label("B");
/// assert_eq!(n.id(), 7);
/// assert_eq!(n.label(), "B");
/// assert_eq!(n.position().x, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Point,
    #[serde(default)]
    label: String,
}

impl Node {
    /// Creates an unlabeled node at `(x, y)`.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
            label: String::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Position on the plane.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Display label (may be empty).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Euclidean distance between the positions of two nodes.
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance_to(&other.position)
    }
}

/// Spreadsheet-style label for the `index`-th node: `A`..`Z`, `AA`, `AB`, ...
///
/// # Examples
///
/// ```
/// use u_postman::models::label_for_index;
///
/// assert_eq!(label_for_index(0), "A");
/// assert_eq!(label_for_index(25), "Z");
/// assert_eq!(label_for_index(26), "AA");
/// assert_eq!(label_for_index(701), "ZZ");
/// assert_eq!(label_for_index(702), "AAA");
/// ```
pub fn label_for_index(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}
