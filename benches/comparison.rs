use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: the same rotation in both libraries
// ---------------------------------------------------------------------------

const AXIS: [f64; 3] = [0.3, -0.5, 0.8];
const ANGLE: f64 = 2.4;

fn versor_quat() -> versor::Quaternion<f64> {
    versor::Quaternion::from_axis_angle(versor::Vector3::from_array(AXIS), ANGLE)
}

fn nalgebra_quat() -> nalgebra::UnitQuaternion<f64> {
    let axis = nalgebra::Unit::new_normalize(nalgebra::Vector3::new(AXIS[0], AXIS[1], AXIS[2]));
    nalgebra::UnitQuaternion::from_axis_angle(&axis, ANGLE)
}

// ---------------------------------------------------------------------------
// Hamilton product
// ---------------------------------------------------------------------------

fn quat_mul(c: &mut Criterion) {
    let mut g = c.benchmark_group("quat_mul");

    g.bench_function("versor", |b| {
        let p = versor_quat();
        let q = p.conjugate();
        b.iter(|| std::hint::black_box(&p) * std::hint::black_box(&q))
    });

    g.bench_function("nalgebra", |b| {
        let p = nalgebra_quat();
        let q = p.inverse();
        b.iter(|| std::hint::black_box(&p) * std::hint::black_box(&q))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Vector rotation
// ---------------------------------------------------------------------------

fn rotate_vector(c: &mut Criterion) {
    let mut g = c.benchmark_group("rotate_vector");

    g.bench_function("versor", |b| {
        let q = versor_quat();
        let p = versor::Vector3::from_array([1.0, 2.0, 3.0]);
        b.iter(|| std::hint::black_box(&q) * std::hint::black_box(&p))
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra_quat();
        let p = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        b.iter(|| std::hint::black_box(&q) * std::hint::black_box(&p))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Quaternion -> matrix
// ---------------------------------------------------------------------------

fn to_matrix(c: &mut Criterion) {
    let mut g = c.benchmark_group("to_matrix33");

    g.bench_function("versor", |b| {
        let q = versor_quat();
        b.iter(|| std::hint::black_box(&q).to_matrix33())
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra_quat();
        b.iter(|| std::hint::black_box(&q).to_rotation_matrix())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Matrix -> quaternion
// ---------------------------------------------------------------------------

fn from_matrix(c: &mut Criterion) {
    let mut g = c.benchmark_group("from_matrix33");

    g.bench_function("versor", |b| {
        let m = versor_quat().to_matrix33();
        b.iter(|| versor::Quaternion::from_rotation_matrix(std::hint::black_box(&m)))
    });

    g.bench_function("nalgebra", |b| {
        let m = nalgebra_quat().to_rotation_matrix();
        b.iter(|| nalgebra::UnitQuaternion::from_rotation_matrix(std::hint::black_box(&m)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Axis-angle extraction
// ---------------------------------------------------------------------------

fn axis_angle(c: &mut Criterion) {
    let mut g = c.benchmark_group("axis_angle");

    g.bench_function("versor", |b| {
        let q = versor_quat();
        b.iter(|| std::hint::black_box(&q).to_axis_angle())
    });

    g.bench_function("nalgebra", |b| {
        let q = nalgebra_quat();
        b.iter(|| std::hint::black_box(&q).axis_angle())
    });

    g.finish();
}

criterion_group!(benches, quat_mul, rotate_vector, to_matrix, from_matrix, axis_angle);
criterion_main!(benches);
