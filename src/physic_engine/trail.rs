use std::collections::VecDeque;

use crate::physic_engine::types::Point;

/// Historique borné des dernières positions, la plus récente en tête.
///
/// Sert uniquement au rendu (segment de traînée), jamais à la physique.
/// Rempli à la création avec la position initiale : il n'est donc jamais vide.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Point>,
}

impl Trail {
    /// Crée une traînée de `capacity` points (au moins 1), tous à `origin`.
    pub fn filled(origin: Point, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: std::iter::repeat_n(origin, capacity).collect(),
        }
    }

    /// Insère `point` en tête et oublie le plus ancien (capacité constante).
    #[inline]
    pub fn push_front(&mut self, point: Point) {
        self.points.pop_back();
        self.points.push_front(point);
    }

    /// Point le plus ancien : origine du segment dessiné.
    #[inline]
    pub fn oldest(&self) -> Point {
        // jamais vide par construction
        self.points.back().copied().unwrap_or_default()
    }

    #[inline]
    pub fn newest(&self) -> Point {
        self.points.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_keeps_capacity_and_order() {
        let mut trail = Trail::filled(Point::new(0.0, 0.0), 3);
        for i in 1..=10 {
            trail.push_front(Point::new(i as f32, 0.0));
            assert_eq!(trail.len(), 3);
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10.0, 9.0, 8.0]);
        assert_eq!(trail.oldest(), Point::new(8.0, 0.0));
        assert_eq!(trail.newest(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_zero_capacity_is_promoted_to_one() {
        let trail = Trail::filled(Point::new(1.0, 2.0), 0);
        assert_eq!(trail.len(), 1);
        assert!(!trail.is_empty());
        assert_eq!(trail.oldest(), Point::new(1.0, 2.0));
    }
}
