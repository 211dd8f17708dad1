pub(crate) mod geo;
pub(crate) mod vec3d;
