use cloth_core::config::{ClothConfig, RestLengths};
use cloth_core::{ClothSolver, NormalMode, SphereCollider};
use glam::Vec3;
use wasm_bindgen::prelude::*;

/// GPU-compatible vertex: 32 bytes, matches the WGSL ClothVertex
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    _pad0: f32,         //  4 bytes
    normal: [f32; 3],   // 12 bytes
    _pad1: f32,         //  4 bytes
}

#[wasm_bindgen]
pub struct ClothWorld {
    solver: ClothSolver,
    gpu_buffer: Vec<GpuVertex>,
    indices: Vec<u32>,
}

#[wasm_bindgen]
impl ClothWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, spacing: f32) -> Result<ClothWorld, JsValue> {
        let solver = ClothSolver::new(ClothConfig::new(width, height, spacing))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        web_sys::console::log_1(
            &format!("WASM ClothWorld created: {}x{} particles", width, height).into(),
        );

        let count = solver.grid().len();
        let indices = solver.grid().triangle_indices();
        let mut world = ClothWorld {
            solver,
            gpu_buffer: vec![bytemuck::Zeroable::zeroed(); count],
            indices,
        };
        world.init();
        Ok(world)
    }

    #[wasm_bindgen]
    pub fn init(&mut self) {
        self.solver.init();
        self.write_gpu_output();
    }

    #[wasm_bindgen]
    pub fn step_velocity(&mut self) -> Result<(), JsValue> {
        self.solver
            .step_velocity()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn step_position(&mut self) -> Result<(), JsValue> {
        self.solver
            .step_position()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.write_gpu_output();
        Ok(())
    }

    /// Run `steps` full ticks and return the elapsed milliseconds.
    #[wasm_bindgen]
    pub fn tick(&mut self, steps: u32) -> Result<f32, JsValue> {
        let start = js_sys::Date::now();
        for _ in 0..steps {
            self.solver
                .tick()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        }
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        Ok(elapsed as f32)
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.gpu_buffer).len()
    }

    #[wasm_bindgen]
    pub fn get_index_buffer_ptr(&self) -> *const u32 {
        self.indices.as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_index_count(&self) -> usize {
        self.indices.len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.solver.particles().count
    }

    #[wasm_bindgen]
    pub fn set_stiffness(&mut self, structural: f32, shear: f32, bend: f32) {
        self.solver.config_mut().stiffness = [structural, shear, bend];
    }

    #[wasm_bindgen]
    pub fn set_rest_lengths(&mut self, rest_lengths: &[f32]) {
        if let Ok(lengths) = <[f32; 3]>::try_from(rest_lengths) {
            if lengths.iter().all(|&l| l > 0.0) {
                self.solver.config_mut().rest_lengths = RestLengths(lengths);
            }
        }
    }

    #[wasm_bindgen]
    pub fn set_mass_damping(&mut self, mass: f32, damping: f32) {
        let config = self.solver.config_mut();
        if mass > 0.0 {
            config.mass = mass;
        }
        config.damping = damping;
    }

    #[wasm_bindgen]
    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        self.solver.config_mut().gravity = Vec3::new(x, y, z);
    }

    #[wasm_bindgen]
    pub fn set_wind(&mut self, x: f32, y: f32, z: f32, viscosity: f32) {
        let config = self.solver.config_mut();
        config.wind = Vec3::new(x, y, z);
        config.viscosity = viscosity;
    }

    #[wasm_bindgen]
    pub fn set_time_step(&mut self, dt: f32) {
        if dt > 0.0 {
            self.solver.config_mut().dt = dt;
        }
    }

    #[wasm_bindgen]
    pub fn set_origin(&mut self, x: f32, y: f32, z: f32) {
        self.solver.config_mut().origin = Vec3::new(x, y, z);
    }

    #[wasm_bindgen]
    pub fn set_sphere(&mut self, enabled: bool, x: f32, y: f32, z: f32, radius: f32) {
        let collider = (enabled && radius >= 0.0)
            .then(|| SphereCollider::new(Vec3::new(x, y, z), radius));
        self.solver.set_collider(collider);
    }

    #[wasm_bindgen]
    pub fn set_normal_mode(&mut self, mode: u8) {
        self.solver.config_mut().normal_mode = match mode {
            1 => NormalMode::Averaged,
            _ => NormalMode::FirstValidPair,
        };
    }

    #[wasm_bindgen]
    pub fn kinetic_energy(&self) -> f32 {
        self.solver.diagnostics().kinetic_energy
    }

    #[wasm_bindgen]
    pub fn is_stable(&self) -> bool {
        let dt = self.solver.config().dt;
        self.solver.diagnostics().is_stable(dt)
    }
}

impl ClothWorld {
    fn write_gpu_output(&mut self) {
        let particles = self.solver.particles();
        for (i, vertex) in self.gpu_buffer.iter_mut().enumerate() {
            let pos = particles.position[i];
            let n = particles.normal[i];
            *vertex = GpuVertex {
                position: [pos.x, pos.y, pos.z],
                _pad0: 0.0,
                normal: [n.x, n.y, n.z],
                _pad1: 0.0,
            };
        }
    }
}
