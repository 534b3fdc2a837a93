//! Built-in missions.

use super::{Goal, Mission};

pub static CATALOG: [Mission; 7] = [
    Mission {
        title: "Make the area 6!",
        description: "Triangle of apex and intersections: S = 6",
        goal: Goal::Area { target: 6.0 },
        tolerance: 0.3,
    },
    Mission {
        title: "Make the area 12!",
        description: "Triangle of apex and intersections: S = 12",
        goal: Goal::Area { target: 12.0 },
        tolerance: 0.5,
    },
    Mission {
        title: "Make the area 18!",
        description: "Triangle of apex and intersections: S = 18",
        goal: Goal::Area { target: 18.0 },
        tolerance: 0.5,
    },
    Mission {
        title: "Pass through (2, 4)!",
        description: "Adjust the line so it passes through (2, 4)",
        goal: Goal::PassThrough { x: 2.0, y: 4.0 },
        tolerance: 0.15,
    },
    Mission {
        title: "Pass through (-1, 3)!",
        description: "Adjust the line so it passes through (-1, 3)",
        goal: Goal::PassThrough { x: -1.0, y: 3.0 },
        tolerance: 0.15,
    },
    Mission {
        title: "Pass through (3, -2)!",
        description: "Adjust the line so it passes through (3, -2)",
        goal: Goal::PassThrough { x: 3.0, y: -2.0 },
        tolerance: 0.15,
    },
    Mission {
        title: "Make it a tangent!",
        description: "Make the line touch the parabola",
        goal: Goal::Tangent,
        tolerance: 0.2,
    },
];
