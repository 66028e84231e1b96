use crate::float_types::Real;
use crate::mesh::{Mesh, MeshIdentity, MeshPart};
use nalgebra::{Matrix4, Point3};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MeshJs {
    pub(crate) inner: Mesh,
}

#[wasm_bindgen]
impl MeshJs {
    /// Empty snapshot for the model `name` at `version`, scaled uniformly by `scale`.
    #[wasm_bindgen(constructor)]
    pub fn new(name: String, version: u32, scale: f64) -> MeshJs {
        MeshJs {
            inner: Mesh::new(
                Vec::new(),
                scale as Real,
                MeshIdentity::new(name, u64::from(version)),
            ),
        }
    }

    /// Add one part from interleaved local positions (x,y,z)* and a
    /// column-major 4x4 world matrix, as found in `Object3D.matrixWorld.elements`.
    /// An empty `indices` array means the positions are a triangle soup.
    #[wasm_bindgen(js_name = addPart)]
    pub fn add_part(
        &mut self,
        positions: Vec<f64>,
        indices: Vec<u32>,
        matrix_world: Vec<f64>,
    ) -> Result<(), JsValue> {
        if positions.len() % 3 != 0 {
            return Err(JsValue::from_str("positions must hold x,y,z triples"));
        }
        if indices.len() % 3 != 0 {
            return Err(JsValue::from_str("indices must hold whole triangles"));
        }
        if matrix_world.len() != 16 {
            return Err(JsValue::from_str("matrixWorld must have 16 elements"));
        }

        let points = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0] as Real, c[1] as Real, c[2] as Real))
            .collect();
        let transform =
            Matrix4::from_iterator(matrix_world.iter().map(|&m| m as Real));
        let part = if indices.is_empty() {
            MeshPart::new(points)
        } else {
            let tris = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
            MeshPart::indexed(points, tris)
        };

        self.inner.add_part(part.with_transform(transform));
        Ok(())
    }

    #[wasm_bindgen(js_name = triangleCount)]
    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }
}
