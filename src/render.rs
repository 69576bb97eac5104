use std::fmt;

use crate::geometry::Position;
use crate::puzzle::Puzzle;

/// ASCII board: each grid row takes three text rows, robots are uppercase,
/// goals lowercase (`?` for any robot), walls drawn as `|` and `----`.
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        let rows = grid.rows();
        let cols = grid.cols();

        write!(f, " ")?;
        for col in 1..=cols {
            write!(f, "{col:>5}")?;
        }
        writeln!(f)?;

        for row in 0..=rows {
            if row > 0 {
                let mut outer = String::from("  ");
                let mut middle = String::new();

                for boundary in 0..=cols {
                    if boundary > 0 {
                        let pos = Position::new(row as i16, boundary as i16);
                        let robot = self.occupant(pos).unwrap_or(' ');
                        let goal = self
                            .goal_at(pos)
                            .map_or(' ', |target| target.marker().to_ascii_lowercase());
                        outer.push_str("    ");
                        middle.push(' ');
                        middle.push(robot);
                        middle.push(goal);
                        middle.push(' ');
                    }

                    let wall = if grid.vertical_wall(row, boundary) { '|' } else { ' ' };
                    outer.push(wall);
                    middle.push(wall);
                }

                writeln!(f, "{outer}")?;
                writeln!(f, "{row:>2}{middle}")?;
                writeln!(f, "{outer}")?;
            }

            write!(f, "  +")?;
            for col in 1..=cols {
                let segment = if grid.horizontal_wall(row, col) { "----" } else { "    " };
                write!(f, "{segment}+")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
