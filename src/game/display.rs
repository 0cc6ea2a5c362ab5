use std::fmt::{Display, Error, Formatter};

use colored::{Color, Colorize};

use crate::constants::UNVISITED;

use super::Board;

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for row in self.rows() {
            for cell in row {
                write!(f, "{:2} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Same layout as the plain board, with the start and the knight's last square highlighted.
pub struct ColoredBoard<'a> {
    board: &'a Board,
}

impl Board {
    pub fn colored(&self) -> ColoredBoard<'_> {
        ColoredBoard { board: self }
    }
}

pub(super) fn foreground(cell: i32, last: Option<i32>, background: Color) -> Color {
    if cell == UNVISITED {
        Color::BrightBlack
    } else if cell == 0 {
        Color::Green
    } else if Some(cell) == last {
        Color::Red
    } else if background == Color::White {
        Color::Black
    } else {
        Color::BrightWhite
    }
}

impl Display for ColoredBoard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        // breadth first boards repeat step numbers, so the count of visited squares is no guide
        let last = self.board.last_step();
        for (y, row) in self.board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let text = format!("{:2}", cell);
                let background = if (x + y) % 2 == 0 { Color::White } else { Color::Black };
                let foreground = foreground(cell, last, background);
                write!(f, "{} ", text.color(foreground).on_color(background))?;
            }
            write!(f, "\n")?;
        }
        write!(f, "")
    }
}
