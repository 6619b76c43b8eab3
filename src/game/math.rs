use super::types::Point;

pub fn distance(a: Point, b: Point) -> f64 {
  ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn angle_to(from: Point, to: Point) -> f64 {
  (to.y - from.y).atan2(to.x - from.x)
}

pub fn wrap_axis(value: f64, extent: f64) -> f64 {
  let wrapped = value.rem_euclid(extent);
  // rem_euclid can round up to `extent` for tiny negative inputs.
  if wrapped >= extent {
    0.0
  } else {
    wrapped
  }
}

pub fn wrap(point: Point, extent: f64) -> Point {
  Point {
    x: wrap_axis(point.x, extent),
    y: wrap_axis(point.y, extent),
  }
}

pub fn in_bounds(point: Point, extent: f64) -> bool {
  (0.0..extent).contains(&point.x) && (0.0..extent).contains(&point.y)
}

pub fn step(from: Point, heading: f64, speed: f64) -> Point {
  Point {
    x: from.x + heading.cos() * speed,
    y: from.y + heading.sin() * speed,
  }
}

/// Index of the point closest to `origin`. Ties keep the earliest candidate.
pub fn nearest_index<I>(origin: Point, candidates: I) -> Option<usize>
where
  I: IntoIterator<Item = Point>,
{
  let mut nearest: Option<(usize, f64)> = None;
  for (index, candidate) in candidates.into_iter().enumerate() {
    let dist = distance(origin, candidate);
    match nearest {
      Some((_, best)) if dist >= best => {}
      _ => nearest = Some((index, dist)),
    }
  }
  nearest.map(|(index, _)| index)
}
