// Stand-alone acceptance checks, reported as "<name>: OK|Fail"
use bit_grid::PackedBitGrid;
use std::process::ExitCode;

const DIM: usize = 16;

fn empty_grid() -> PackedBitGrid {
    PackedBitGrid::new(DIM, DIM).expect("16x16 grid fits")
}

fn test_empty_grid() -> bool {
    let grid = empty_grid();
    let any_set = (0..DIM).any(|row| (0..DIM).any(|col| grid.get(row, col) != Ok(false)));
    !any_set && grid.clear_count() == DIM * DIM
}

fn test_all_cols() -> bool {
    let mut grid = empty_grid();
    (0..DIM).all(|col| grid.set_column(col).is_ok()) && grid.clear_count() == 0
}

fn test_all_rows() -> bool {
    let mut grid = empty_grid();
    if !(0..DIM).all(|row| grid.set_row(row).is_ok()) {
        return false;
    }
    (0..DIM).all(|row| (0..DIM).all(|col| grid.get(row, col) == Ok(true)))
}

fn test_example_operations() -> bool {
    let mut grid = empty_grid();
    let applied = [(0xF, 0xF), (0x1, 0x1), (0x1, 0x2)]
        .into_iter()
        .all(|(row, col)| grid.toggle(row, col).is_ok());
    applied && grid.clear_count() == 200
}

fn test_col_out_of_bounds() -> bool {
    empty_grid().set_column(DIM + 1).is_err()
}

fn test_row_out_of_bounds() -> bool {
    empty_grid().set_row(DIM + 1).is_err()
}

fn test_diag_row_out_of_bounds() -> bool {
    empty_grid().clear_diagonals(DIM + 1, 0).is_err()
}

fn test_diag_col_out_of_bounds() -> bool {
    empty_grid().clear_diagonals(0, DIM + 1).is_err()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let checks: [(&str, fn() -> bool); 8] = [
        ("test_empty_grid", test_empty_grid),
        ("test_all_cols", test_all_cols),
        ("test_all_rows", test_all_rows),
        ("test_example_operations", test_example_operations),
        ("test_col_out_of_bounds", test_col_out_of_bounds),
        ("test_row_out_of_bounds", test_row_out_of_bounds),
        ("test_diag_row_out_of_bounds", test_diag_row_out_of_bounds),
        ("test_diag_col_out_of_bounds", test_diag_col_out_of_bounds),
    ];

    let mut failed = 0;
    for (name, check) in checks {
        let ok = check();
        if !ok {
            failed += 1;
        }
        println!("{}: {}", name, if ok { "OK" } else { "Fail" });
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
