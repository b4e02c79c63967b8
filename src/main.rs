use std::collections::HashSet;

use mazecore::{Maze, MazeError, Solver};

/// Log to a file so tracing output never interleaves with the maze
/// printout on stdout. The guard must stay alive for the program's
/// lifetime to flush the non-blocking writer.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazecore.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    let mut input = String::new();
    println!("Enter maze dimensions (rows cols):");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for rows and cols.");
        return Ok(());
    }
    let (rows, cols) = (dims[0], dims[1]);

    let maze = match Maze::generate(rows, cols, None) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("Could not generate maze: {err}");
            return Ok(());
        }
    };

    // Let user select the solving algorithm
    println!("Select maze solving algorithm:");
    println!("1. {}", Solver::Dfs);
    println!("2. {}", Solver::Bfs);
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let solver = match input.trim() {
        "1" => Solver::Dfs,
        "2" => Solver::Bfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let path = maze.solve(solver);
    if let Err(err) = print_maze(&maze, &path) {
        eprintln!("Could not print maze: {err}");
        return Ok(());
    }
    println!("Solution ({} cells): {:?}", path.len(), path);
    Ok(())
}

/// Draws the maze as ASCII walls from the per-cell open-sides
/// descriptors, marking solution cells with `*`.
fn print_maze(maze: &Maze, path: &[usize]) -> Result<(), MazeError> {
    let on_path: HashSet<usize> = path.iter().copied().collect();

    for row in 0..maze.rows() {
        let mut top = String::new();
        let mut mid = String::new();
        for col in 0..maze.cols() {
            let vertex = row * maze.cols() + col;
            let sides = maze.open_sides(vertex)?;
            top.push('+');
            top.push_str(if sides.north { "   " } else { "---" });
            mid.push(if sides.west { ' ' } else { '|' });
            mid.push_str(if on_path.contains(&vertex) { " * " } else { "   " });
        }
        top.push('+');
        mid.push('|');
        println!("{top}");
        println!("{mid}");
    }

    // Bottom border comes from the last row's south sides
    let mut bottom = String::new();
    for col in 0..maze.cols() {
        let vertex = (maze.rows() - 1) * maze.cols() + col;
        let sides = maze.open_sides(vertex)?;
        bottom.push('+');
        bottom.push_str(if sides.south { "   " } else { "---" });
    }
    bottom.push('+');
    println!("{bottom}");
    Ok(())
}
