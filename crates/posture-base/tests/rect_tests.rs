use posture_base::{Rect, Vec2};

#[test]
fn test_max_and_area() {
    let r = Rect::new(Vec2::new(1.0_f32, 2.0), Vec2::new(3.0, 4.0));
    assert_eq!(r.max(), Vec2::new(4.0, 6.0));
    assert_eq!(r.area(), 12.0);
}

#[test]
fn test_intersection_overlap() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
    let i = a.intersection(b).unwrap();
    assert_eq!(i.origin, Vec2::new(5.0, 5.0));
    assert_eq!(i.size, Vec2::new(5.0, 5.0));
}

#[test]
fn test_intersection_disjoint() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(5.0, 5.0));
    assert_eq!(a.intersection(b), None);
}

#[test]
fn test_intersection_touching_edges_is_none() {
    let a = Rect::new(Vec2::new(0.0_f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
    assert_eq!(a.intersection(b), None);
}
