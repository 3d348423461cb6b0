//! Implicit-surface rendering via sphere tracing.
//!
//! A [`Scene`] is a union of signed-distance primitives: the scene distance
//! at a point is the minimum over the primitives' distances. Rays advance by
//! the current distance value each step, which can never overshoot the
//! nearest surface, and stop once they are within a fixed surface threshold
//! or have traveled past the scene.

use tracing::debug;

use crate::colors;
use crate::framebuffer::Framebuffer;
use crate::math::vec3::Vec3;

const MAX_STEPS: usize = 60;
const MAX_DISTANCE: f32 = 15.0;
const SURFACE_THRESHOLD: f32 = 0.02;
const NORMAL_EPSILON: f32 = 0.01;

/// A signed-distance primitive.
///
/// New shape variants only need a `distance` arm; the tracer never inspects
/// the shape itself.
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    /// An axis-aligned box given by its center and half-extents.
    Box { center: Vec3, half_extents: Vec3 },
}

impl Primitive {
    /// Signed distance from `p` to this primitive's surface: negative
    /// inside, zero on the surface, positive outside.
    pub fn distance(&self, p: Vec3) -> f32 {
        match *self {
            Primitive::Box {
                center,
                half_extents,
            } => {
                let d = p - center;
                let q = Vec3::new(d.x.abs(), d.y.abs(), d.z.abs()) - half_extents;
                let outside =
                    Vec3::new(q.x.max(0.0), q.y.max(0.0), q.z.max(0.0)).magnitude();
                let inside = q.x.max(q.y).max(q.z).min(0.0);
                outside + inside
            }
        }
    }
}

/// A union of primitives, optionally evaluated through a fixed
/// world-to-local rotation.
pub struct Scene {
    primitives: Vec<Primitive>,
    /// Rows of the world→local rotation applied to query points before
    /// primitive evaluation.
    orientation: [Vec3; 3],
}

impl Scene {
    /// A scene evaluated directly in world coordinates.
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self::with_orientation(
            primitives,
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
        )
    }

    /// A scene whose composed shape is oriented by the given rotation rows:
    /// a query point `p` becomes `(r0·p, r1·p, r2·p)` before the primitives
    /// see it.
    pub fn with_orientation(primitives: Vec<Primitive>, orientation: [Vec3; 3]) -> Self {
        Self {
            primitives,
            orientation,
        }
    }

    /// Scene distance: the minimum over all primitives at the reoriented
    /// point. An empty scene is infinitely far away everywhere.
    pub fn distance(&self, p: Vec3) -> f32 {
        let q = Vec3::new(
            self.orientation[0].dot(p),
            self.orientation[1].dot(p),
            self.orientation[2].dot(p),
        );
        self.primitives
            .iter()
            .map(|prim| prim.distance(q))
            .fold(f32::INFINITY, f32::min)
    }

    /// Surface normal at `p`, estimated by central finite differences of
    /// the distance field along each axis.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        let e = NORMAL_EPSILON;
        let dx = self.distance(Vec3::new(p.x + e, p.y, p.z))
            - self.distance(Vec3::new(p.x - e, p.y, p.z));
        let dy = self.distance(Vec3::new(p.x, p.y + e, p.z))
            - self.distance(Vec3::new(p.x, p.y - e, p.z));
        let dz = self.distance(Vec3::new(p.x, p.y, p.z + e))
            - self.distance(Vec3::new(p.x, p.y, p.z - e));
        Vec3::new(dx, dy, dz).normalize()
    }
}

/// Marches a ray from `origin` along `dir` (unit length) through the scene.
///
/// Returns the traveled distance on a hit, or `None` once the ray exceeds
/// the maximum distance or the step limit without reaching a surface.
pub fn sphere_trace(scene: &Scene, origin: Vec3, dir: Vec3) -> Option<f32> {
    let mut traveled = 0.0;
    for _ in 0..MAX_STEPS {
        let d = scene.distance(origin + dir * traveled);
        if d < SURFACE_THRESHOLD {
            return Some(traveled);
        }
        traveled += d;
        if traveled > MAX_DISTANCE {
            break;
        }
    }
    None
}

/// The tank test scene: hull, turret, and gun boxes, rotated so the gun
/// points along world +x.
pub fn tank_scene() -> Scene {
    Scene::with_orientation(
        vec![
            Primitive::Box {
                center: Vec3::new(0.0, 0.3, 0.0),
                half_extents: Vec3::new(0.7, 0.2, 0.5),
            },
            Primitive::Box {
                center: Vec3::new(0.0, 0.7, 0.0),
                half_extents: Vec3::new(0.4, 0.2, 0.3),
            },
            Primitive::Box {
                center: Vec3::new(0.0, 0.7, 0.7),
                half_extents: Vec3::new(0.05, 0.05, 0.5),
            },
        ],
        [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ],
    )
}

/// Traces `scene` into a `size`×`size` sub-rectangle of the framebuffer
/// anchored at `offset`.
///
/// Each pixel shoots one ray with direction `(u, v, 1)` normalized, where
/// u and v span [-1, 1] across the rectangle. Hits are shaded by the
/// surface normal's upward component into the green channel; misses leave
/// the background untouched.
pub fn render_scene(
    scene: &Scene,
    fb: &mut Framebuffer,
    camera_pos: Vec3,
    offset: (i32, i32),
    size: u32,
) {
    let mut hits = 0usize;
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let ix = x + offset.0;
            let iy = y + offset.1;

            let u = (x as f32 / size as f32) * 2.0 - 1.0;
            let v = (y as f32 / size as f32) * 2.0 - 1.0;
            let dir = Vec3::new(u, v, 1.0).normalize();

            if let Some(t) = sphere_trace(scene, camera_pos, dir) {
                let normal = scene.normal(camera_pos + dir * t);
                let shade = 0.5 * (normal.y + 1.0);
                fb.set_pixel(ix, iy, colors::rgb(0, (shade * 200.0) as u8, 0));
                hits += 1;
            }
        }
    }
    debug!(hits, rays = (size * size) as usize, "implicit pass complete");
}

/// Region of the framebuffer the tank demo renders into.
const TANK_REGION_OFFSET: (i32, i32) = (0, 400);
const TANK_REGION_SIZE: u32 = 600;

/// Renders the tank scene into a fresh framebuffer, writing only the demo's
/// fixed sub-rectangle; the rest stays at the background color.
pub fn render_implicit_scene(width: u32, height: u32, camera_pos: Vec3) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height);
    render_scene(
        &tank_scene(),
        &mut fb,
        camera_pos,
        TANK_REGION_OFFSET,
        TANK_REGION_SIZE,
    );
    fb
}
