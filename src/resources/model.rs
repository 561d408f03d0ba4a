//! Static model catalog.
//!
//! A model type is an ordered list of [`SubModel`]s, each one a mesh with a
//! colour and a local placement. The local transform of every sub-model is
//! computed once when the catalog is first touched and never changes.

use std::sync::LazyLock;

use cgmath::{Matrix4, Vector3};

use crate::{
    data_structures::{
        color::Color,
        transform::{Rotation, create_transform},
    },
    resources::mesh::MeshType,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelType {
    WhiteCube,
    BlueCube,
    DualCube,
    Coin,
    TrainFront,
    TrainCar,
    TrainRear,
    Invalid,
}

impl ModelType {
    pub const ALL: [ModelType; 7] = [
        ModelType::WhiteCube,
        ModelType::BlueCube,
        ModelType::DualCube,
        ModelType::Coin,
        ModelType::TrainFront,
        ModelType::TrainCar,
        ModelType::TrainRear,
    ];
}

/// One coloured, positioned mesh of a multi-part model.
#[derive(Clone, Debug, PartialEq)]
pub struct SubModel {
    pub mesh: MeshType,
    pub color: Color,
    /// Offset from the model origin, used for depth sorting.
    pub position: Vector3<f32>,
    pub transform: Matrix4<f32>,
}

impl SubModel {
    pub fn new(
        mesh: MeshType,
        color: Color,
        position: Vector3<f32>,
        rotation: Option<Rotation>,
        scale: Option<Vector3<f32>>,
    ) -> Self {
        Self {
            mesh,
            color,
            position,
            transform: create_transform(Some(position), rotation, scale),
        }
    }

    pub fn at(mesh: MeshType, color: Color, position: Vector3<f32>) -> Self {
        Self::new(mesh, color, position, None, None)
    }
}

const TRAIN_BODY_COLOR: Color = Color::rgb(0.2, 0.35, 0.8);

fn train_car() -> Vec<SubModel> {
    vec![
        SubModel::at(MeshType::TrainBase, Color::DARK_GRAY, Vector3::new(0.0, -0.5, 0.0)),
        SubModel::at(MeshType::TrainBody, TRAIN_BODY_COLOR, Vector3::new(0.0, 0.0, 0.0)),
        SubModel::at(MeshType::TrainTrim, Color::WHITE, Vector3::new(0.0, 0.0, 0.0)),
        SubModel::at(MeshType::TrainTop, Color::LIGHT_GRAY, Vector3::new(0.0, 0.45, 0.0)),
    ]
}

// Caps facing +z for the front, -z for the rear.
fn train_caps(z: f32, rotation: Option<Rotation>) -> Vec<SubModel> {
    vec![
        SubModel::new(
            MeshType::TrainBaseFront,
            Color::DARK_GRAY,
            Vector3::new(0.0, -0.45, z),
            rotation,
            None,
        ),
        SubModel::new(
            MeshType::TrainBodyFront,
            TRAIN_BODY_COLOR,
            Vector3::new(0.0, 0.0, z),
            rotation,
            None,
        ),
        SubModel::new(
            MeshType::TrainTrimFront,
            Color::WHITE,
            Vector3::new(0.0, 0.0, z * 1.002),
            rotation,
            None,
        ),
        SubModel::new(
            MeshType::TrainTopFront,
            Color::LIGHT_GRAY,
            Vector3::new(0.0, 0.45, z),
            rotation,
            None,
        ),
    ]
}

fn build_catalog() -> Vec<Vec<SubModel>> {
    ModelType::ALL
        .iter()
        .map(|model_type| match model_type {
            ModelType::WhiteCube => vec![SubModel::at(
                MeshType::Cube,
                Color::WHITE,
                Vector3::new(0.0, 0.0, 0.0),
            )],
            ModelType::BlueCube => vec![SubModel::new(
                MeshType::Cube,
                Color::BLUE,
                Vector3::new(0.0, 0.0, 0.0),
                // pose angles are radians
                Some(Rotation::from_radians(45.0, 90.0, 25.0)),
                None,
            )],
            ModelType::DualCube => vec![
                SubModel::new(
                    MeshType::Cube,
                    Color::WHITE,
                    Vector3::new(-0.5, 0.0, 0.0),
                    None,
                    Some(Vector3::new(0.5, 0.5, 0.5)),
                ),
                SubModel::new(
                    MeshType::Cube,
                    Color::BLUE,
                    Vector3::new(0.5, 0.0, 0.0),
                    None,
                    Some(Vector3::new(0.5, 0.5, 0.5)),
                ),
            ],
            ModelType::Coin => vec![SubModel::new(
                MeshType::Coin,
                Color::GOLD,
                Vector3::new(0.0, 0.0, 0.0),
                None,
                Some(Vector3::new(0.25, 0.25, 0.25)),
            )],
            ModelType::TrainFront => {
                let mut parts = train_car();
                parts.extend(train_caps(0.5, None));
                parts
            }
            ModelType::TrainCar => train_car(),
            ModelType::TrainRear => {
                let mut parts = train_car();
                parts.extend(train_caps(-0.5, Some(Rotation::from_degrees(0.0, 0.0, 180.0))));
                parts
            }
            ModelType::Invalid => Vec::new(),
        })
        .collect()
}

static SUB_MODELS: LazyLock<Vec<Vec<SubModel>>> = LazyLock::new(build_catalog);

/// Ordered sub-models of `model_type`, or an empty slice for [`ModelType::Invalid`].
pub fn get_sub_models(model_type: ModelType) -> &'static [SubModel] {
    match SUB_MODELS.get(model_type as usize) {
        Some(sub_models) => sub_models.as_slice(),
        None => {
            log::warn!("no sub-models for {:?}", model_type);
            &[]
        }
    }
}
