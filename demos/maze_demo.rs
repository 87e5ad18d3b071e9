//! Analyze a small maze and print its direction map, distances and the
//! line network of its actors.
//!
//! Run: cargo run --bin maze-demo [ROW COL]
//!
//! With `ROW COL` the shortest path from that cell is printed as well. Set
//! `MAZE_LOG=debug` to see the solver's log output.

use maze_core::Point;
use maze_demos::{parse_maze, render_distances, render_lines};
use maze_solver::{FloodFill, MazeError};

const MAZE: &str = "
2...#.....#....3
.##.#.###.#.##..
.#..........#...
.#.####.###.#.#.
...#X.....#...#.
##.#####..###.#.
4.........#...X.
.##.#.###.#.####
.#..#...#.......
...##.#...#.##.5
";

fn start_from_args() -> Result<Option<Point>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(None),
        [row, col] => {
            let row: i32 = row.parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
            let col: i32 = col.parse().map_err(|e| format!("bad column {col:?}: {e}"))?;
            Ok(Some(Point::from_row_col(row, col)))
        }
        _ => Err("usage: maze-demo [ROW COL]".to_string()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let start = start_from_args()?;
    let maze = parse_maze(MAZE)?;
    log::info!("loaded {}x{} maze", maze.width(), maze.height());
    let analysis = FloodFill::new().analyze(&maze)?;

    println!("Arrows:\n{}\n", analysis.arrows());
    println!("Distances (mod 10):\n{}\n", render_distances(&analysis));
    println!("Lines:\n{}\n", render_lines(&maze, &analysis));
    println!(
        "{} goals, {} actors, every open cell reachable: {}",
        analysis.goals().len(),
        analysis.actors().len(),
        analysis.is_reachable()
    );

    if let Some(start) = start {
        match analysis.path(start) {
            Ok(path) => {
                let steps: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                println!("Path from {start} ({} steps): {}", path.len() - 1, steps.join(" "));
            }
            Err(err @ (MazeError::Wall(_) | MazeError::Unreachable(_))) => {
                println!("No path: {err}");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn main() {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
