//! Pieces tests - canonical set and clockwise rotation

use tui_blocks::core::{get_shape, Shape, CANONICAL_SHAPES};
use tui_blocks::types::PieceKind;

fn pattern(shape: &Shape) -> Vec<String> {
    shape
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_some() { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_canonical_set_order_and_kinds() {
    for (shape, kind) in CANONICAL_SHAPES.iter().zip(PieceKind::ALL) {
        assert_eq!(shape.kind(), Some(kind));
        assert_eq!(*shape, get_shape(kind));
    }
}

#[test]
fn test_canonical_patterns() {
    assert_eq!(pattern(&get_shape(PieceKind::I)), ["####"]);
    assert_eq!(pattern(&get_shape(PieceKind::J)), ["#..", "###"]);
    assert_eq!(pattern(&get_shape(PieceKind::L)), ["###", "#.."]);
    assert_eq!(pattern(&get_shape(PieceKind::O)), ["##", "##"]);
    assert_eq!(pattern(&get_shape(PieceKind::S)), [".##", "##."]);
    assert_eq!(pattern(&get_shape(PieceKind::T)), ["###", ".#."]);
    assert_eq!(pattern(&get_shape(PieceKind::Z)), ["##.", ".##"]);
}

#[test]
fn test_rotation_swaps_dimensions() {
    let i = get_shape(PieceKind::I).rotated_cw();
    assert_eq!((i.width(), i.height()), (1, 4));
    assert_eq!(pattern(&i), ["#", "#", "#", "#"]);
}

#[test]
fn test_rotate_t_clockwise() {
    let t = get_shape(PieceKind::T).rotated_cw();
    assert_eq!(pattern(&t), [".#", "##", ".#"]);

    let t2 = t.rotated_cw();
    assert_eq!(pattern(&t2), [".#.", "###"]);
}

#[test]
fn test_rotate_l_clockwise() {
    let l = get_shape(PieceKind::L).rotated_cw();
    assert_eq!(pattern(&l), ["##", ".#", ".#"]);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for shape in CANONICAL_SHAPES {
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", shape.kind());
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = get_shape(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}
