pub mod camera;
pub mod integrator;
pub mod materials;
pub mod output;
pub mod ray;
pub mod render;
pub mod scatter;
pub mod scene;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;

pub use integrator::{ray_color, Background, MAX_DEPTH};
pub use materials::Material;
pub use ray::Ray;
pub use sphere::Sphere;
pub use surface::{Surface, SurfaceIntersection, T_MIN};
pub use util::{Color, Point3};
pub use world::World;
