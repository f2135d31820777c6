#![allow(missing_docs)]
use crate::math::side_query;
use crate::Point2;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

/// Uniformly distributed points in the square `center ± range`.
pub fn random_points_around(
    center: Point2<f64>,
    range: f64,
    size: usize,
    seed: &[u8; 32],
) -> Vec<Point2<f64>> {
    let mut rng = StdRng::from_seed(*seed);
    let xs = Uniform::new(center.x - range, center.x + range);
    let ys = Uniform::new(center.y - range, center.y + range);
    (0..size)
        .map(|_| Point2::new(xs.sample(&mut rng), ys.sample(&mut rng)))
        .collect()
}

pub fn random_points_in_range(range: f64, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    random_points_around(Point2::new(0.0, 0.0), range, size, seed)
}

pub fn random_points_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    random_points_in_range(1.0, size, seed)
}

/// Sorts points lexicographically. Used to compare vertex sets regardless of their order.
pub fn sorted_by_coordinates(mut points: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    points.sort_by(|l, r| l.x.total_cmp(&r.x).then_with(|| l.y.total_cmp(&r.y)));
    points
}

/// Corners of the convex hull in counter clockwise order, without collinear boundary points.
///
/// Andrew's monotone chain on exact orientation queries.
pub fn convex_hull(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut sorted = sorted_by_coordinates(points.to_vec());
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point2<f64>> = Vec::new();
    for &point in &sorted {
        while lower.len() >= 2
            && !side_query(lower[lower.len() - 2], lower[lower.len() - 1], point).is_on_left_side()
        {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<Point2<f64>> = Vec::new();
    for &point in sorted.iter().rev() {
        while upper.len() >= 2
            && !side_query(upper[upper.len() - 2], upper[upper.len() - 1], point).is_on_left_side()
        {
            upper.pop();
        }
        upper.push(point);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Counts the points lying on the boundary of their convex hull. Points must be distinct.
pub fn convex_hull_size(points: &[Point2<f64>]) -> usize {
    let hull = convex_hull(points);
    let within = |a: f64, b: f64, value: f64| a.min(b) <= value && value <= a.max(b);
    points
        .iter()
        .filter(|point| {
            (0..hull.len()).any(|i| {
                let (from, to) = (hull[i], hull[(i + 1) % hull.len()]);
                side_query(from, to, **point).is_on_line()
                    && within(from.x, to.x, point.x)
                    && within(from.y, to.y, point.y)
            })
        })
        .count()
}
