use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SHAPE_COUNT: usize = 15;
pub const PARTICLE_COUNT: usize = 30;
pub const PERSPECTIVE: f64 = 400.0;
/// Scene time added per animation frame.
pub const TIME_STEP: f64 = 0.008;
pub const FRAMES_PER_SECOND: f64 = 60.0;
pub const LINK_DISTANCE: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Building,
    Crane,
    Blueprint,
    Gear,
    Pyramid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Building,
        ShapeKind::Crane,
        ShapeKind::Blueprint,
        ShapeKind::Gear,
        ShapeKind::Pyramid,
    ];

    /// Gears spin on their own axis; everything else sways at half the y rate.
    pub fn spin_rate(&self, speed: f64) -> f64 {
        match self {
            ShapeKind::Gear => 0.004 * speed,
            _ => 0.002 * speed * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub speed: f64,
    pub rotation: Rotation,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Shape {
    pub fn color(&self) -> String {
        format!("hsl({:.0}, {:.0}%, {:.0}%)", self.hue, self.saturation, self.lightness)
    }

    /// Current on-screen angle in radians.
    pub fn angle(&self) -> f64 {
        match self.kind {
            ShapeKind::Gear => self.rotation.z,
            _ => self.rotation.y * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const HERO: Viewport = Viewport { width: 1200.0, height: 800.0 };

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Pointer position relative to the canvas centre, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedShape {
    pub index: usize,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub angle: f64,
    pub alpha: f64,
    pub line_width: f64,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub alpha: f64,
}

pub fn perspective_scale(z: f64) -> f64 {
    PERSPECTIVE / (PERSPECTIVE + z)
}

pub fn float_offset(time: f64, speed: f64, index: usize) -> (f64, f64) {
    let i = index as f64;
    (
        (time * speed + i * 0.5).sin() * 20.0,
        (time * speed * 0.7 + i * 0.3).cos() * 15.0,
    )
}

pub fn parallax(pointer: Pointer, z: f64) -> (f64, f64) {
    let depth = 1.0 + z * 0.002;
    (pointer.x * depth * 50.0, pointer.y * depth * 50.0)
}

pub fn depth_alpha(z: f64) -> f64 {
    (1.0 - z.abs() / 300.0).max(0.3)
}

pub fn particle_at(time: f64, index: usize, viewport: Viewport) -> Particle {
    let i = index as f64;
    let (cx, cy) = viewport.center();
    let z = (time + i).sin() * 100.0;
    let scale = perspective_scale(z);
    let alpha = ((time * 2.0 + i).sin() * 0.3 + 0.2) * scale;
    Particle {
        x: (time * 0.5 + i * 0.3).sin() * 200.0 + cx,
        y: (time * 0.3 + i * 0.7).cos() * 150.0 + cy,
        radius: 1.5 * scale,
        alpha: alpha.max(0.0),
    }
}

/// The decorative hero scene: a fixed set of shapes plus a clock.
#[derive(Clone, Debug)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub time: f64,
}

impl Scene {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let shapes = (0..SHAPE_COUNT)
            .map(|_| Shape {
                x: rng.gen_range(-300.0..300.0),
                y: rng.gen_range(-200.0..200.0),
                z: rng.gen_range(-150.0..150.0),
                size: rng.gen_range(25.0..65.0),
                kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
                rotation: Rotation {
                    x: rng.gen_range(0.0..std::f64::consts::TAU),
                    y: rng.gen_range(0.0..std::f64::consts::TAU),
                    z: rng.gen_range(0.0..std::f64::consts::TAU),
                },
                hue: rng.gen_range(200.0..240.0),
                saturation: rng.gen_range(60.0..90.0),
                lightness: rng.gen_range(55.0..75.0),
                speed: rng.gen_range(0.2..0.7),
            })
            .collect();
        Self { shapes, time: 0.0 }
    }

    /// Step one frame: advance the clock and every shape's rotation.
    pub fn advance(&mut self) {
        self.time += TIME_STEP;
        for shape in &mut self.shapes {
            shape.rotation.x += 0.003 * shape.speed;
            shape.rotation.y += 0.002 * shape.speed;
            shape.rotation.z += 0.004 * shape.speed;
        }
    }

    /// Screen-space shapes for the current time; off-screen shapes are culled.
    pub fn project(&self, viewport: Viewport, pointer: Pointer) -> Vec<ProjectedShape> {
        let (cx, cy) = viewport.center();
        self.shapes
            .iter()
            .enumerate()
            .filter_map(|(index, shape)| {
                let scale = perspective_scale(shape.z);
                let (fx, fy) = float_offset(self.time, shape.speed, index);
                let (px, py) = parallax(pointer, shape.z);
                let x = cx + (shape.x + fx + px) * scale;
                let y = cy + (shape.y + fy + py) * scale;
                let size = shape.size * scale;
                if x < -size || x > viewport.width + size || y < -size || y > viewport.height + size {
                    return None;
                }
                Some(ProjectedShape {
                    index,
                    kind: shape.kind,
                    x,
                    y,
                    size,
                    angle: shape.angle(),
                    alpha: depth_alpha(shape.z),
                    line_width: scale.max(0.5),
                    color: shape.color(),
                })
            })
            .collect()
    }

    pub fn particles(&self, viewport: Viewport) -> Vec<Particle> {
        (0..PARTICLE_COUNT)
            .map(|i| particle_at(self.time, i, viewport))
            .collect()
    }

    /// Faint lines from each shape to its next two neighbours when close enough.
    pub fn connections(&self, viewport: Viewport) -> Vec<Connection> {
        let (cx, cy) = viewport.center();
        let mut lines = Vec::new();
        for (i, a) in self.shapes.iter().enumerate() {
            for b in self.shapes.iter().skip(i + 1).take(2) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance >= LINK_DISTANCE {
                    continue;
                }
                let (sa, sb) = (perspective_scale(a.z), perspective_scale(b.z));
                lines.push(Connection {
                    x1: cx + a.x * sa,
                    y1: cy + a.y * sa,
                    x2: cx + b.x * sb,
                    y2: cy + b.y * sb,
                    alpha: 0.1 * (1.0 - distance / LINK_DISTANCE),
                });
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_shapes_stay_in_range() {
        let scene = Scene::generate(7);
        assert_eq!(scene.shapes.len(), SHAPE_COUNT);
        for s in &scene.shapes {
            assert!((-300.0..300.0).contains(&s.x));
            assert!((-200.0..200.0).contains(&s.y));
            assert!((-150.0..150.0).contains(&s.z));
            assert!((25.0..65.0).contains(&s.size));
            assert!((0.2..0.7).contains(&s.speed));
            assert!((200.0..240.0).contains(&s.hue));
        }
    }

    #[test]
    fn same_seed_same_scene() {
        assert_eq!(Scene::generate(42).shapes, Scene::generate(42).shapes);
        assert_ne!(Scene::generate(42).shapes, Scene::generate(43).shapes);
    }

    #[test]
    fn perspective_shrinks_distant_shapes() {
        assert_eq!(perspective_scale(0.0), 1.0);
        assert!(perspective_scale(100.0) < 1.0);
        assert!(perspective_scale(-100.0) > 1.0);
    }

    #[test]
    fn depth_alpha_is_floored() {
        assert_eq!(depth_alpha(0.0), 1.0);
        assert!((depth_alpha(150.0) - 0.5).abs() < 1e-9);
        assert_eq!(depth_alpha(-290.0), 0.3);
    }

    #[test]
    fn centred_pointer_has_no_parallax() {
        assert_eq!(parallax(Pointer::default(), 120.0), (0.0, 0.0));
        let (x, _) = parallax(Pointer { x: 0.5, y: 0.0 }, 0.0);
        assert_eq!(x, 25.0);
    }

    #[test]
    fn advance_moves_clock_and_rotation() {
        let mut scene = Scene::generate(1);
        let before = scene.shapes[0].rotation;
        scene.advance();
        assert!((scene.time - TIME_STEP).abs() < 1e-12);
        assert!(scene.shapes[0].rotation.z > before.z);
    }

    #[test]
    fn offscreen_shapes_are_culled() {
        let mut scene = Scene::generate(3);
        scene.shapes[0].x = 5000.0;
        let projected = scene.project(Viewport::HERO, Pointer::default());
        assert!(projected.iter().all(|p| p.index != 0));
        assert!(projected.len() < SHAPE_COUNT);
    }

    #[test]
    fn connections_only_link_nearby_neighbours() {
        let mut scene = Scene::generate(5);
        for (i, s) in scene.shapes.iter_mut().enumerate() {
            s.x = i as f64 * 1000.0;
            s.y = 0.0;
        }
        assert!(scene.connections(Viewport::HERO).is_empty());
        scene.shapes[1].x = 60.0;
        scene.shapes[0].x = 0.0;
        let lines = scene.connections(Viewport::HERO);
        assert_eq!(lines.len(), 1);
        assert!((lines[0].alpha - 0.1 * (1.0 - 60.0 / 150.0)).abs() < 1e-9);
    }

    #[test]
    fn particles_never_have_negative_alpha() {
        let scene = Scene::generate(9);
        let particles = scene.particles(Viewport::HERO);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        assert!(particles.iter().all(|p| p.alpha >= 0.0 && p.radius > 0.0));
    }
}
