//! Registry of meshes which can be referenced by renderable entities.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier of the mesh in [`MeshRegistry`].
    pub struct MeshKey;
}

/// Geometry description of the mesh.
///
/// Vertex data itself is owned by the renderer backend.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    name: String,
    vertex_count: u32,
    index_count: u32,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertex_count: u32, index_count: u32) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            index_count,
        }
    }

    /// Unit cube with separate vertices for each face.
    pub fn cube() -> Self {
        Self::new("cube", 24, 36)
    }

    /// Unit quad in XY plane.
    pub fn quad() -> Self {
        Self::new("quad", 4, 6)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Storage for all meshes of the scene.
#[derive(Default)]
pub struct MeshRegistry {
    meshes: SlotMap<MeshKey, Mesh>,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: Mesh) -> MeshKey {
        log::debug!("mesh `{}` registered", mesh.name());
        self.meshes.insert(mesh)
    }

    pub fn get(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    /// Removes the mesh. Keys of removed meshes are never reused.
    pub fn remove(&mut self, key: MeshKey) -> Option<Mesh> {
        self.meshes.remove(key)
    }

    pub fn contains(&self, key: MeshKey) -> bool {
        self.meshes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
