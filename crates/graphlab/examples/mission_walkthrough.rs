//! Walk a seeded mission session through the built-in catalog.
//!
//! For each mission the walkthrough nudges the line with a coarse grid search
//! over the slider ranges until the mission clears, then prints the found
//! parameters next to the measured value the lab would display.
//!
//! Run: cargo run -p graphlab --example mission_walkthrough

use graphlab::mission::{MissionSession, CATALOG};
use graphlab::plane::util::round_to_places;
use graphlab::plane::{Line, Parabola};

fn main() {
    let par = Parabola::new(1.0, 1.0, -2.0);
    let mut session = MissionSession::seeded(2024);
    session.start();
    for _ in 0..CATALOG.len() {
        let Some(mission) = session.current().copied() else {
            break;
        };
        let found = search_line(&mut session, &par);
        match found {
            Some(line) => println!(
                "{:<26} target={:<8} m={:>5} n={:>6} value={}",
                mission.title,
                mission.target_label(),
                round_to_places(line.m(), 2),
                round_to_places(line.n(), 2),
                session.current_value_label(&par, &line)
            ),
            None => println!(
                "{:<26} target={:<8} no line found",
                mission.title,
                mission.target_label()
            ),
        }
        session.next();
    }
}

fn search_line(session: &mut MissionSession, par: &Parabola) -> Option<Line> {
    for i in 0..=100 {
        for j in 0..=400 {
            let line = Line::new(-5.0 + 0.1 * i as f64, -10.0 + 0.05 * j as f64);
            if session.check(par, &line) {
                return Some(line);
            }
        }
    }
    None
}
