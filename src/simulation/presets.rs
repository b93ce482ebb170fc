//! Built-in initial conditions
//!
//! Planets start on the +x axis with velocity along -y (clockwise on a
//! y-down screen). Masses in kg, distances in metres, draw radii in pixels.

use super::states::{Body, System, NVec2, Rgb, G_SI};

/// Astronomical unit, metres
pub const AU: f64 = 1.496e11;
pub const HOUR: f64 = 3600.0;
pub const DAY: f64 = 24.0 * HOUR;

/// Default step: three simulated hours per tick
pub const DEFAULT_DT: f64 = 3.0 * HOUR;

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;
pub const EARTH_SPEED: f64 = 29.78e3;

// name, distance (AU), orbital speed (m/s), mass (kg), draw radius (px), colour
const PLANETS: [(&str, f64, f64, f64, f64, Rgb); 8] = [
    ("Mercury", 0.387, 47.36e3, 0.33011e24, 5.0, [200, 150, 100]),
    ("Venus", 0.723, 35.02e3, 4.867e24, 7.0, [230, 200, 160]),
    ("Earth", 1.0, EARTH_SPEED, EARTH_MASS, 8.0, [100, 150, 255]),
    ("Mars", 1.524, 24.077e3, 0.64171e24, 6.0, [255, 100, 80]),
    ("Jupiter", 5.204, 13.07e3, 1.898e27, 14.0, [200, 150, 120]),
    ("Saturn", 9.582, 9.68e3, 5.683e26, 12.0, [210, 180, 140]),
    ("Uranus", 19.201, 6.8e3, 8.681e25, 10.0, [160, 200, 255]),
    ("Neptune", 30.047, 5.43e3, 1.024e26, 10.0, [100, 150, 255]),
];

pub fn sun() -> Body {
    Body::new("Sun", NVec2::zeros(), NVec2::zeros(), SUN_MASS, 18.0, [255, 210, 0])
}

/// Planet on the +x axis at `distance_au`, moving along -y at `speed`
pub fn planet(name: &str, distance_au: f64, speed: f64, mass: f64, draw_radius: f64, color: Rgb) -> Body {
    Body::new(
        name,
        NVec2::new(distance_au * AU, 0.0),
        NVec2::new(0.0, -speed),
        mass,
        draw_radius,
        color,
    )
}

/// Sun plus the eight planets, 3-hour steps
pub fn solar_system() -> System {
    PLANETS
        .iter()
        .fold(System::new(G_SI, DEFAULT_DT).with_body(sun()), |sys, &(name, d, s, m, r, c)| {
            sys.with_body(planet(name, d, s, m, r, c))
        })
}

/// Two-body reference case: Earth at 1 AU around the Sun
pub fn sun_earth() -> System {
    let (name, d, s, m, r, c) = PLANETS[2];
    System::new(G_SI, DEFAULT_DT)
        .with_body(sun())
        .with_body(planet(name, d, s, m, r, c))
}
