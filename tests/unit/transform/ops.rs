use super::*;

fn parts() -> TransformParts {
    TransformParts {
        offset: Vec2::new(12.0, -4.5),
        translate_z: -30.0,
        rotate_x_deg: 10.0,
        rotate_y_deg: 20.0,
        rotate_deg: 5.0,
        scale: 1.25,
    }
}

#[test]
fn op_order_is_fixed() {
    let ops = compose_transform(parts());
    assert_eq!(ops.len(), 7);
    assert_eq!(ops[0], TransformOp::CenterOnAnchor);
    assert!(matches!(ops[1], TransformOp::Translate { .. }));
    assert!(matches!(ops[2], TransformOp::TranslateZ { .. }));
    assert!(matches!(ops[3], TransformOp::RotateX { .. }));
    assert!(matches!(ops[4], TransformOp::RotateY { .. }));
    assert!(matches!(ops[5], TransformOp::Rotate { .. }));
    assert!(matches!(ops[6], TransformOp::Scale { .. }));
}

#[test]
fn css_rendering() {
    let css = to_css(&compose_transform(parts()));
    assert_eq!(
        css,
        "translate(-50%, -50%) translate(12px, -4.5px) translateZ(-30px) rotateX(10deg) \
         rotateY(20deg) rotate(5deg) scale(1.25)"
    );
}

#[test]
fn identity_parts_flatten_to_identity() {
    let ops = compose_transform(TransformParts {
        offset: Vec2::ZERO,
        translate_z: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        rotate_deg: 0.0,
        scale: 1.0,
    });
    assert_eq!(flatten_to_affine(&ops, 800.0), Affine::IDENTITY);
}

#[test]
fn flattening_pivots_on_the_text_center() {
    let ops = compose_transform(TransformParts {
        offset: Vec2::new(10.0, 0.0),
        translate_z: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        rotate_deg: 90.0,
        scale: 2.0,
    });
    let a = flatten_to_affine(&ops, 800.0);
    // The text center stays on the offset point regardless of rotation and scale.
    let c = a * kurbo::Point::ZERO;
    assert!((c.x - 10.0).abs() < 1e-9);
    assert!(c.y.abs() < 1e-9);
}

#[test]
fn depth_away_from_viewer_shrinks() {
    let ops = [TransformOp::TranslateZ { z: -800.0 }];
    let a = flatten_to_affine(&ops, 800.0);
    let p = a * kurbo::Point::new(10.0, 0.0);
    assert!((p.x - 5.0).abs() < 1e-9);
}
