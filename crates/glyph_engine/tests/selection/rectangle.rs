use glyph_engine::{Position, Rectangle, SelectionMask, Shape};

#[test]
fn test_rectangle_mask_fills_bounds() {
    for (start, end) in [((0, 0), (0, 0)), ((1, 2), (5, 3)), ((7, 7), (2, 0)), ((3, 9), (3, 1))] {
        let mask = SelectionMask::from_rectangle(start, end);
        let bounds = mask.bounds().expect("rectangle mask is never empty");
        assert_eq!(mask.len(), bounds.area(), "start {start:?} end {end:?}");
        assert_eq!(mask.shape(), Some(Shape::Rectangle));
    }
}

#[test]
fn test_rectangle_mask_is_order_independent() {
    let a = SelectionMask::from_rectangle((1, 1), (3, 4));
    let b = SelectionMask::from_rectangle((3, 4), (1, 1));
    let c = SelectionMask::from_rectangle((1, 4), (3, 1));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_rectangle_mask_bounds() {
    let mask = SelectionMask::from_rectangle((4, 2), (1, 5));
    assert_eq!(mask.bounds(), Some(Rectangle::from_corners((1, 2), (4, 5))));
    assert!(mask.is_selected(Position::new(1, 2)));
    assert!(mask.is_selected(Position::new(4, 5)));
    assert!(!mask.is_selected(Position::new(5, 5)));
}
