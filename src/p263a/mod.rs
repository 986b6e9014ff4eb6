use crate::{
    error::{Error, Result},
    output::Answer,
    scanner::Scanner,
};

pub const SIZE: usize = 5;
const CENTER: usize = SIZE / 2;

pub type Grid = [[u8; SIZE]; SIZE];

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let mut grid: Grid = Default::default();
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = scanner.value("matrix cell")?;
        }
    }
    let moves = solve(&grid).ok_or(Error::NoMarkedCell)?;
    Ok(Answer::Int(moves as i64))
}

/// Moves needed to bring the cell holding 1 to the middle of the matrix.
///
/// With several marked cells the first one in row-major order counts.
pub fn solve(grid: &Grid) -> Option<usize> {
    let (row, col) = grid.iter().enumerate().find_map(|(i, row)| {
        row.iter().position(|&cell| cell == 1).map(|j| (i, j))
    })?;
    Some(row.abs_diff(CENTER) + col.abs_diff(CENTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(row: usize, col: usize) -> Grid {
        let mut grid = Grid::default();
        grid[row][col] = 1;
        grid
    }

    #[test]
    fn distance_to_center() {
        assert_eq!(solve(&marked(2, 2)), Some(0));
        assert_eq!(solve(&marked(0, 0)), Some(4));
        assert_eq!(solve(&marked(1, 4)), Some(3));
        assert_eq!(solve(&marked(4, 2)), Some(2));
    }

    #[test]
    fn first_mark_in_row_major_order_counts() {
        let mut grid = marked(1, 3);
        grid[4][0] = 1;
        assert_eq!(solve(&grid), Some(2));
    }

    #[test]
    fn no_mark() {
        assert_eq!(solve(&Grid::default()), None);
    }

    #[test]
    fn reads_grid() {
        let input = "0 0 0 0 0\n0 0 0 0 1\n0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n";
        let mut scanner = Scanner::new(input, Default::default());
        assert_eq!(main(&mut scanner).unwrap(), Answer::Int(3));
    }
}
