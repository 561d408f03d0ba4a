//! Static mesh catalog.
//!
//! Every mesh is a list of vertex positions and a list of triangles indexing into
//! it. The data is defined once at compile time and shared read-only by every
//! sub-model referencing it.

/// Three indices into a mesh's vertex list.
pub type IndexTriangle = [u32; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshType {
    Cube,

    TrainBase,
    TrainBody,
    TrainTop,
    TrainTrim,

    TrainBaseFront,
    TrainBodyFront,
    TrainTopFront,
    TrainTrimFront,

    Coin,

    Invalid,
}

impl MeshType {
    pub const ALL: [MeshType; 10] = [
        MeshType::Cube,
        MeshType::TrainBase,
        MeshType::TrainBody,
        MeshType::TrainTop,
        MeshType::TrainTrim,
        MeshType::TrainBaseFront,
        MeshType::TrainBodyFront,
        MeshType::TrainTopFront,
        MeshType::TrainTrimFront,
        MeshType::Coin,
    ];
}

/// Borrowed view of one catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct Mesh {
    pub vertices: &'static [[f32; 3]],
    pub triangles: &'static [IndexTriangle],
}

impl Mesh {
    const EMPTY: Mesh = Mesh {
        vertices: &[],
        triangles: &[],
    };
}

const CUBE: Mesh = Mesh {
    vertices: &[
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
    ],
    triangles: &[
        // front
        [0, 1, 2],
        [2, 3, 0],
        // back
        [4, 5, 6],
        [6, 7, 4],
        // up
        [2, 3, 6],
        [3, 6, 7],
        // down
        [0, 1, 4],
        [1, 4, 5],
        // left
        [0, 3, 4],
        [3, 4, 7],
        // right
        [1, 2, 5],
        [2, 5, 6],
    ],
};

const TRAIN_BASE: Mesh = Mesh {
    vertices: &[
        [0.5, 0.05, 0.5],
        [-0.5, 0.05, 0.5],
        [-0.5, 0.05, -0.5],
        [0.5, 0.05, -0.5],
    ],
    triangles: &[[0, 1, 2], [2, 3, 0]],
};

const TRAIN_BODY: Mesh = Mesh {
    vertices: &[
        [-0.475, -0.4, 0.5],
        [0.475, -0.4, 0.5],
        [0.45, 0.4, 0.5],
        [-0.45, 0.4, 0.5],
        [-0.475, -0.4, -0.5],
        [0.475, -0.4, -0.5],
        [0.45, 0.4, -0.5],
        [-0.45, 0.4, -0.5],
    ],
    triangles: &[
        // left
        [0, 3, 4],
        [3, 4, 7],
        // right
        [1, 2, 5],
        [2, 5, 6],
    ],
};

const TRAIN_TOP: Mesh = Mesh {
    vertices: &[
        [-0.45, -0.05, 0.5],
        [0.45, -0.05, 0.5],
        [-0.325, 0.05, 0.5],
        [0.325, 0.05, 0.5],
        [0.45, -0.05, -0.5],
        [-0.45, -0.05, -0.5],
        [0.325, 0.05, -0.5],
        [-0.325, 0.05, -0.5],
    ],
    triangles: &[
        // roof
        [2, 3, 6],
        [6, 7, 2],
        // left slope
        [0, 2, 5],
        [5, 7, 2],
        // right slope
        [1, 3, 4],
        [4, 6, 3],
    ],
};

const TRAIN_TRIM: Mesh = Mesh {
    vertices: &[
        [-0.475, -0.4, 0.45],
        [-0.475, -0.4, 0.5],
        [-0.45, 0.4, 0.5],
        [-0.45, 0.4, 0.45],
        [-0.475, -0.4, -0.45],
        [-0.475, -0.4, -0.5],
        [-0.45, 0.4, -0.5],
        [-0.45, 0.4, -0.45],
        [0.475, -0.4, 0.45],
        [0.475, -0.4, 0.5],
        [0.45, 0.4, 0.5],
        [0.45, 0.4, 0.45],
        [0.475, -0.4, -0.45],
        [0.475, -0.4, -0.5],
        [0.45, 0.4, -0.5],
        [0.45, 0.4, -0.45],
    ],
    triangles: &[
        // left front
        [0, 1, 2],
        [2, 3, 0],
        // left back
        [4, 5, 6],
        [6, 7, 4],
        // right front
        [8, 9, 10],
        [10, 11, 8],
        // right back
        [12, 13, 14],
        [14, 15, 12],
    ],
};

const TRAIN_BASE_FRONT: Mesh = Mesh {
    vertices: &[
        [-0.475, -0.05, 0.0],
        [0.475, -0.05, 0.0],
        [0.5, 0.05, 0.0],
        [-0.5, 0.05, 0.0],
    ],
    triangles: &[[0, 1, 2], [2, 3, 0]],
};

const TRAIN_BODY_FRONT: Mesh = Mesh {
    vertices: &[
        [-0.475, -0.4, 0.0],
        [0.475, -0.4, 0.0],
        [0.45, 0.4, 0.0],
        [-0.45, 0.4, 0.0],
    ],
    triangles: &[[0, 1, 2], [2, 3, 0]],
};

const TRAIN_TOP_FRONT: Mesh = Mesh {
    vertices: &[
        [-0.45, -0.05, 0.0],
        [0.45, -0.05, 0.0],
        [0.415, 0.0, 0.0],
        [-0.415, 0.0, 0.0],
        [-0.325, 0.05, 0.0],
        [0.325, 0.05, 0.0],
    ],
    triangles: &[
        // lower
        [0, 1, 2],
        [2, 3, 0],
        // upper
        [2, 3, 4],
        [4, 5, 2],
    ],
};

const TRAIN_TRIM_FRONT: Mesh = Mesh {
    vertices: &[
        [-0.475, -0.4, 0.0],
        [-0.4, -0.4, 0.0],
        [-0.375, 0.4, 0.0],
        [-0.45, 0.4, 0.0],
        [0.475, -0.4, 0.0],
        [0.4, -0.4, 0.0],
        [0.375, 0.4, 0.0],
        [0.45, 0.4, 0.0],
    ],
    triangles: &[
        // left
        [0, 1, 2],
        [2, 3, 0],
        // right
        [4, 5, 6],
        [6, 7, 4],
    ],
};

// Hexagonal disc in the XY plane, centre first.
const COIN: Mesh = Mesh {
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.5, 0.0, 0.0],
        [0.25, 0.433, 0.0],
        [-0.25, 0.433, 0.0],
        [-0.5, 0.0, 0.0],
        [-0.25, -0.433, 0.0],
        [0.25, -0.433, 0.0],
    ],
    triangles: &[
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [0, 4, 5],
        [0, 5, 6],
        [0, 6, 1],
    ],
};

static MESHES: [Mesh; 10] = [
    CUBE,
    TRAIN_BASE,
    TRAIN_BODY,
    TRAIN_TOP,
    TRAIN_TRIM,
    TRAIN_BASE_FRONT,
    TRAIN_BODY_FRONT,
    TRAIN_TOP_FRONT,
    TRAIN_TRIM_FRONT,
    COIN,
];

/// Full catalog entry, or an empty mesh for [`MeshType::Invalid`].
pub fn get_mesh(mesh_type: MeshType) -> Mesh {
    match MESHES.get(mesh_type as usize) {
        Some(mesh) => *mesh,
        None => {
            log::warn!("no mesh data for {:?}", mesh_type);
            Mesh::EMPTY
        }
    }
}

pub fn get_mesh_vertices(mesh_type: MeshType) -> &'static [[f32; 3]] {
    get_mesh(mesh_type).vertices
}

pub fn get_mesh_indices(mesh_type: MeshType) -> &'static [IndexTriangle] {
    get_mesh(mesh_type).triangles
}
