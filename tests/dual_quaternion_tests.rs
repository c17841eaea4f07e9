use approx::assert_abs_diff_eq;
use dualquat::{D, DI, DJ, DK, I, J, K, R, RIJK, RIJKD};
use dualquat::{Norm2, Unitize};

fn unit_rotation(x: f32, y: f32, z: f32, w: f32) -> RIJK<f32> {
    RIJK::from(RIJK::from_xyzw(x, y, z, w).unit())
}

#[test]
fn addition_is_componentwise_across_all_eight_components() {
    let a = RIJKD::new(
        R(1.0f32),
        I(2.0),
        J(3.0),
        K(4.0),
        D(5.0),
        DI(6.0),
        DJ(7.0),
        DK(8.0),
    );
    let b = RIJKD::new(
        R(10.0),
        I(11.0),
        J(12.0),
        K(13.0),
        D(14.0),
        DI(15.0),
        DJ(16.0),
        DK(17.0),
    );

    let sum = a + b;
    assert_eq!(
        [11.0, 13.0, 15.0, 17.0, 19.0, 21.0, 23.0, 25.0],
        sum.into_components(),
    );

    let diff = sum - b;
    assert_eq!(a, diff);
}

#[test]
fn position_survives_the_encode_decode_round_trip() {
    let rotation = unit_rotation(1.0, 2.0, 3.0, 4.0);
    let dq = RIJKD::from_rotation_position(rotation, [10.0, 20.0, 30.0]);

    let [x, y, z] = dq.position();
    assert_abs_diff_eq!(x, 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(y, 20.0, epsilon = 1e-4);
    assert_abs_diff_eq!(z, 30.0, epsilon = 1e-4);
}

#[test]
fn encoding_preserves_the_rotation_part() {
    let rotation = unit_rotation(1.0, 2.0, 3.0, 4.0);
    let dq = RIJKD::from_rotation_position(rotation, [10.0, 20.0, 30.0]);
    assert_eq!(rotation, dq.real());
    assert_abs_diff_eq!(dq.real().norm2().0, 1.0, epsilon = 1e-5);
}

#[test]
fn extracted_position_has_negligible_real_part() {
    let rotation = unit_rotation(-2.0, 5.0, 0.5, 3.0);
    let dq = RIJKD::from_rotation_position(rotation, [-4.0, 7.0, 0.25]);

    let (real, _, _, _) = dq.position_units();
    assert_abs_diff_eq!(real.0, 0.0, epsilon = 1e-4);
}

#[test]
fn composition_matches_isometry_composition() {
    let qa = unit_rotation(1.0, 2.0, 3.0, 4.0);
    let qb = unit_rotation(-2.0, 1.0, 0.5, 5.0);
    let ta = [10.0, 20.0, 30.0];
    let tb = [-5.0, 2.5, 7.0];

    let a = RIJKD::from_rotation_position(qa, ta);
    let b = RIJKD::from_rotation_position(qb, tb);
    let c = a * b;

    let na = nalgebra::Isometry3::from_parts(
        nalgebra::Translation3::new(ta[0], ta[1], ta[2]),
        nalgebra::UnitQuaternion::new_normalize(nalgebra::Quaternion::new(4.0f32, 1.0, 2.0, 3.0)),
    );
    let nb = nalgebra::Isometry3::from_parts(
        nalgebra::Translation3::new(tb[0], tb[1], tb[2]),
        nalgebra::UnitQuaternion::new_normalize(nalgebra::Quaternion::new(5.0f32, -2.0, 1.0, 0.5)),
    );
    let nc = na * nb;

    let [x, y, z] = c.position();
    assert_abs_diff_eq!(x, nc.translation.vector.x, epsilon = 1e-3);
    assert_abs_diff_eq!(y, nc.translation.vector.y, epsilon = 1e-3);
    assert_abs_diff_eq!(z, nc.translation.vector.z, epsilon = 1e-3);

    let r = c.real();
    assert_abs_diff_eq!(r.r.0, nc.rotation.w, epsilon = 1e-4);
    assert_abs_diff_eq!(r.i.0, nc.rotation.i, epsilon = 1e-4);
    assert_abs_diff_eq!(r.j.0, nc.rotation.j, epsilon = 1e-4);
    assert_abs_diff_eq!(r.k.0, nc.rotation.k, epsilon = 1e-4);
}

#[test]
fn composing_with_the_identity_transform_is_a_no_op() {
    let rotation = unit_rotation(1.0, 2.0, 3.0, 4.0);
    let a = RIJKD::from_rotation_position(rotation, [10.0, 20.0, 30.0]);
    let id = RIJKD::from_rotation_position(RIJK::identity(), [0.0, 0.0, 0.0]);

    assert_abs_diff_eq!(a, a * id, epsilon = 1e-6);
    assert_abs_diff_eq!(a, id * a, epsilon = 1e-6);
}
