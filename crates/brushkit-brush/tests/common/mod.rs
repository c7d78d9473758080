use brushkit_brush::{Brush, Face, TextureProjection};
use brushkit_geom::Plane;
use brushkit_math::{Point3, Vec3};

fn face(a: [f64; 3], b: [f64; 3], c: [f64; 3], u: Vec3, v: Vec3) -> Face {
    Face::new(
        Plane::new(Point3::from(a), Point3::from(b), Point3::from(c)),
        TextureProjection::with_axes("null", u, v),
    )
}

/// Axis-aligned box with minimum corner `min`, faces in editor order.
pub fn cuboid(min: [f64; 3], size: [f64; 3]) -> Brush {
    let [x, y, z] = min;
    let [w, l, h] = size;
    let faces = vec![
        face([x, y, z + h], [x, y + l, z + h], [x + w, y + l, z + h], Vec3::x(), -Vec3::y()),
        face([x, y + l, z], [x, y, z], [x + w, y, z], Vec3::x(), -Vec3::y()),
        face([x + w, y + l, z], [x + w, y + l, z + h], [x, y + l, z + h], -Vec3::x(), -Vec3::z()),
        face([x + w, y, z + h], [x + w, y, z], [x, y, z], Vec3::x(), -Vec3::z()),
        face([x, y, z], [x, y + l, z], [x, y + l, z + h], -Vec3::y(), -Vec3::z()),
        face([x + w, y + l, z], [x + w, y, z], [x + w, y, z + h], Vec3::y(), -Vec3::z()),
    ];
    Brush::new(faces).expect("six faces")
}

/// Cuboid centered on `center`.
pub fn centered_cuboid(center: [f64; 3], size: [f64; 3]) -> Brush {
    let min = [
        center[0] - size[0] / 2.0,
        center[1] - size[1] / 2.0,
        center[2] - size[2] / 2.0,
    ];
    cuboid(min, size)
}

/// Ramp over `[0, w] x [0, l]` rising from z = 0 at x = 0 to z = h at x = w.
pub fn wedge(w: f64, l: f64, h: f64) -> Brush {
    let faces = vec![
        // bottom
        face([0.0, l, 0.0], [0.0, 0.0, 0.0], [w, 0.0, 0.0], Vec3::x(), -Vec3::y()),
        // slope, normal pointing up and towards -x
        face([0.0, 0.0, 0.0], [0.0, l, 0.0], [w, l, h], Vec3::x(), -Vec3::y()),
        // high end at x = w
        face([w, l, 0.0], [w, 0.0, 0.0], [w, 0.0, h], Vec3::y(), -Vec3::z()),
        // front y = l
        face([w, l, 0.0], [w, l, h], [0.0, l, h], -Vec3::x(), -Vec3::z()),
        // back y = 0
        face([w, 0.0, h], [w, 0.0, 0.0], [0.0, 0.0, 0.0], Vec3::x(), -Vec3::z()),
    ];
    Brush::new(faces).expect("five faces")
}

/// Upright prism over a regular `sides`-gon of radius `r`, from z = 0 to `h`.
pub fn prism(sides: usize, r: f64, h: f64) -> Brush {
    let mut faces = vec![
        face([0.0, 0.0, h], [0.0, 1.0, h], [1.0, 1.0, h], Vec3::x(), -Vec3::y()),
        face([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], Vec3::x(), -Vec3::y()),
    ];
    let corner = |i: usize| {
        let t = std::f64::consts::TAU * i as f64 / sides as f64;
        [r * t.cos(), r * t.sin(), 0.0]
    };
    for i in 0..sides {
        let [ax, ay, _] = corner(i);
        let [bx, by, _] = corner(i + 1);
        let u = Vec3::new(bx - ax, by - ay, 0.0).normalize();
        faces.push(face([ax, ay, 0.0], [ax, ay, h], [bx, by, 0.0], u, -Vec3::z()));
    }
    Brush::new(faces).expect("prism faces")
}

/// True if every consecutive pair turns clockwise seen from the tip of `normal`.
pub fn is_clockwise(ring: &[Point3], normal: &Vec3) -> bool {
    let n = ring.len();
    let sum = ring.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
    let center = Point3::from(sum / n as f64);
    (0..n).all(|i| {
        let a = ring[i] - center;
        let b = ring[(i + 1) % n] - center;
        a.cross(&b).dot(normal) < 0.0
    })
}

/// True if both point sets match one-to-one within `eps`.
pub fn same_points(a: &[Point3], b: &[Point3], eps: f64) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| b.iter().any(|q| (p - q).norm() < eps))
        && b.iter().all(|q| a.iter().any(|p| (p - q).norm() < eps))
}
