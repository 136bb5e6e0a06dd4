//! Outline data for the extruded shapes.
//!
//! Coordinates are flat `x, y, z` triples in boundary order; the face
//! triangles reference them by position.

use super::ShapeDefinition;

pub(super) const QUAD: ShapeDefinition = ShapeDefinition {
    name: "Quad",
    vertices: &[
        -0.5, 0.5, 0.0, //
        -0.5, -0.5, 0.0, //
        0.5, -0.5, 0.0, //
        0.5, 0.5, 0.0,
    ],
    indices: &[0, 1, 2, 0, 2, 3],
    depth: 0.2,
};

pub(super) const TRIANGLE: ShapeDefinition = ShapeDefinition {
    name: "Triangle",
    vertices: &[
        -0.5, 0.0, 0.0, //
        0.5, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    ],
    indices: &[0, 1, 2],
    depth: 0.2,
};

pub(super) const LETTER_F: ShapeDefinition = ShapeDefinition {
    name: "LetterF",
    vertices: &[
        -0.3, -0.8, 0.0, // 0
        0.0, -0.8, 0.0, // 1
        0.0, -0.2, 0.0, // 2
        0.5, -0.2, 0.0, // 3
        0.5, 0.0, 0.0, // 4
        0.0, 0.0, 0.0, // 5
        0.0, 0.2, 0.0, // 6
        0.8, 0.2, 0.0, // 7
        0.8, 0.4, 0.0, // 8
        0.0, 0.4, 0.0, // 9
        -0.3, 0.4, 0.0, // 10
        -0.3, 0.2, 0.0, // 11
        -0.3, 0.0, 0.0, // 12
        -0.3, -0.2, 0.0, // 13
    ],
    indices: &[
        0, 1, 2, 0, 2, 13, //
        2, 3, 4, 2, 4, 5, //
        13, 2, 5, 13, 5, 12, //
        12, 5, 6, 12, 6, 11, //
        11, 6, 9, 11, 9, 10, //
        6, 7, 8, 6, 8, 9,
    ],
    depth: 0.2,
};

pub(super) const SWORD: ShapeDefinition = ShapeDefinition {
    name: "Sword",
    vertices: &[
        -0.2, -0.2, 0.0, // 0
        -0.7, -0.2, 0.0, // 1
        -0.7, -0.5, 0.0, // 2
        -0.2, -0.5, 0.0, // 3
        -0.2, -1.5, 0.0, // 4
        0.2, -1.5, 0.0, // 5
        0.2, -0.5, 0.0, // 6
        0.7, -0.5, 0.0, // 7
        0.7, -0.2, 0.0, // 8
        0.2, -0.2, 0.0, // 9
        0.2, 1.0, 0.0, // 10
        0.0, 1.5, 0.0, // 11
        -0.2, 1.0, 0.0, // 12
    ],
    indices: &[
        0, 1, 2, 0, 2, 3, //
        3, 4, 6, 4, 5, 6, //
        6, 7, 8, 8, 9, 6, //
        9, 3, 6, 9, 0, 3, //
        9, 10, 0, 10, 12, 0, //
        10, 11, 12,
    ],
    depth: 0.2,
};

pub(super) const HOUSE: ShapeDefinition = ShapeDefinition {
    name: "House",
    vertices: &[
        -0.5, 0.0, 0.0, //
        -0.5, -0.5, 0.0, //
        0.5, -0.5, 0.0, //
        0.5, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 0.5, 0.0, //
        -1.0, 0.0, 0.0,
    ],
    indices: &[
        0, 1, 2, 2, 3, 0, //
        3, 4, 5, //
        0, 3, 5, //
        6, 5, 0,
    ],
    depth: 0.8,
};
