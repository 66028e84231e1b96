use crate::float_types::Real;
use crate::sampling::{RayCast, SamplingStrategy, VertexFilter};
use crate::wasm::{mesh_js::MeshJs, to_js_error};
use crate::zone::{SafetyZone, ZoneParams, ZoneStatus};
use js_sys::{Float64Array, Uint32Array};
use nalgebra::Point2;
use std::num::NonZeroU32;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ZoneParamsJs {
    pub(crate) inner: ZoneParams,
}

#[wasm_bindgen]
impl ZoneParamsJs {
    #[wasm_bindgen(constructor)]
    pub fn new(margin: f64) -> ZoneParamsJs {
        ZoneParamsJs {
            inner: ZoneParams::new(margin as Real),
        }
    }

    #[wasm_bindgen(js_name = setSmoothing)]
    pub fn set_smoothing(&mut self, factor: f64, passes: u32) {
        self.inner = self.inner.with_smoothing(factor as Real, passes as usize);
    }

    #[wasm_bindgen(js_name = setMergeTolerance)]
    pub fn set_merge_tolerance(&mut self, tolerance: f64) {
        self.inner = self.inner.with_merge_tolerance(tolerance as Real);
    }

    #[wasm_bindgen(js_name = useVertexFilter)]
    pub fn use_vertex_filter(&mut self, ground_tolerance: f64, extremal_fraction: f64) {
        self.inner = self.inner.with_strategy(SamplingStrategy::VertexFilter(VertexFilter {
            ground_tolerance: ground_tolerance as Real,
            extremal_fraction: extremal_fraction as Real,
        }));
    }

    #[wasm_bindgen(js_name = useRayCast)]
    pub fn use_ray_cast(&mut self, grid_steps: u32) -> Result<(), JsValue> {
        let steps = NonZeroU32::new(grid_steps)
            .ok_or_else(|| JsValue::from_str("gridSteps must be at least 1"))?;
        self.inner = self
            .inner
            .with_strategy(SamplingStrategy::RayCast(RayCast::new(steps)));
        Ok(())
    }

    #[wasm_bindgen(js_name = useBoundingRect)]
    pub fn use_bounding_rect(&mut self) {
        self.inner = self.inner.with_strategy(SamplingStrategy::BoundingRect);
    }
}

#[wasm_bindgen]
pub struct SafetyZoneJs {
    inner: SafetyZone,
}

#[wasm_bindgen]
impl SafetyZoneJs {
    pub fn compute(mesh: &MeshJs, params: &ZoneParamsJs) -> Result<SafetyZoneJs, JsValue> {
        SafetyZone::compute(&mesh.inner, &params.inner)
            .map(|inner| SafetyZoneJs { inner })
            .map_err(to_js_error)
    }

    /// Recompute if the mesh or parameters changed; returns whether it did.
    pub fn refresh(&mut self, mesh: &MeshJs, params: &ZoneParamsJs) -> Result<bool, JsValue> {
        self.inner
            .refresh(&mesh.inner, &params.inner)
            .map_err(to_js_error)
    }

    /// One of `"complete"`, `"empty"` or `"degenerate"`.
    pub fn status(&self) -> String {
        match self.inner.status() {
            ZoneStatus::Complete => "complete",
            ZoneStatus::EmptyInput => "empty",
            ZoneStatus::DegenerateHull { .. } => "degenerate",
        }
        .to_string()
    }

    #[wasm_bindgen(js_name = isRenderable)]
    pub fn is_renderable(&self) -> bool {
        self.inner.is_renderable()
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    /// `[x, 0, z]` of the vertex at `index`, or an empty array when out of range.
    pub fn vertex(&self, index: u32) -> Float64Array {
        let coords: Vec<f64> = self
            .inner
            .vertex_3d(index as usize)
            .map(|p| vec![p.x as f64, p.y as f64, p.z as f64])
            .unwrap_or_default();
        Float64Array::from(coords.as_slice())
    }

    /// Drop a dragged vertex at ground position `(x, z)`.
    #[wasm_bindgen(js_name = setVertex)]
    pub fn set_vertex(&mut self, index: u32, x: f64, z: f64) -> Result<(), JsValue> {
        self.inner
            .set_vertex(index as usize, Point2::new(x as Real, z as Real))
            .map_err(to_js_error)
    }

    /// Interleaved outline positions (x, 0, z)*, ready for a line loop.
    pub fn outline(&self) -> Float64Array {
        let coords: Vec<f64> = self
            .inner
            .outline_3d()
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64, p.z as f64])
            .collect();
        Float64Array::from(coords.as_slice())
    }

    /// Triangle indices into [`SafetyZoneJs::outline`] for a filled shape.
    #[wasm_bindgen(js_name = fillIndices)]
    pub fn fill_indices(&self) -> Uint32Array {
        let indices: Vec<u32> = self
            .inner
            .polygon()
            .triangle_indices()
            .into_iter()
            .flatten()
            .map(|i| i as u32)
            .collect();
        Uint32Array::from(indices.as_slice())
    }
}
