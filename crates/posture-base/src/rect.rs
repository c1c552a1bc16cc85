use crate::Vec2;
use std::ops::{Add, Mul, Sub};

/// Axis-aligned rectangle given by its top-left origin and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn intersection(&self, other: Rect<T>) -> Option<Rect<T>> {
        let self_max = self.max();
        let other_max = other.max();
        let min = Vec2::new(
            larger(self.origin.x, other.origin.x),
            larger(self.origin.y, other.origin.y),
        );
        let max = Vec2::new(
            smaller(self_max.x, other_max.x),
            smaller(self_max.y, other_max.y),
        );
        if min.x < max.x && min.y < max.y {
            Some(Rect::new(min, max - min))
        } else {
            None
        }
    }
}

fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

fn smaller<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}
