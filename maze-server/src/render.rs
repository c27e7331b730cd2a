//! HTML rendering of solved mazes.
//!
//! Every cell becomes a `div` whose id is the visit token of that cell for
//! the panel's algorithm (`"<y>,<x>-<algo>"`), so the page script can
//! replay a trace by looking cells up by token.

use maze_core::{Cell, Grid};
use maze_paths::{Algo, Trace, VisitToken};

use crate::snapshot::SolvedMaze;

const PAGE: &str = include_str!("../assets/maze.html");

fn title(algo: Algo) -> &'static str {
    match algo {
        Algo::Dfs => "Depth-first search",
        Algo::Bfs => "Breadth-first search",
        Algo::AStar => "A* search",
    }
}

fn cell_class(grid: &Grid, cell: &Cell) -> &'static str {
    match (cell.pos == grid.start(), cell.pos == grid.end()) {
        (true, true) => "cell start end",
        (true, false) => "cell start",
        (false, true) => "cell end",
        _ if cell.obstacle => "cell obstacle",
        _ => "cell",
    }
}

/// The grid as nested row/cell `div`s with ids for `algo`.
pub fn render_grid(grid: &Grid, algo: Algo) -> String {
    let mut html = String::with_capacity(grid.cells().len() * 48);
    for row in grid.cells().chunks(grid.width() as usize) {
        html.push_str("<div class=\"row\">");
        for cell in row {
            html.push_str(&format!(
                "<div class=\"{}\" id=\"{}\"></div>",
                cell_class(grid, cell),
                VisitToken::new(cell.pos, algo)
            ));
        }
        html.push_str("</div>");
    }
    html
}

/// One panel: heading, outcome, grid and the script replaying `trace`.
pub fn render_section(grid: &Grid, algo: Algo, trace: &Trace) -> Result<String, serde_json::Error> {
    let status = if trace.reached(grid.end()) {
        format!("reached the end after {} expansions", trace.len())
    } else {
        format!("no path; {} cells expanded", trace.len())
    };
    let tokens = serde_json::to_string(trace)?;
    Ok(format!(
        "<section class=\"panel\">\n<h2>{} ({algo})</h2>\n<p class=\"status\">{status}</p>\n\
         <div class=\"maze\" id=\"maze-{algo}\">{}</div>\n<script>animateTrace({tokens});</script>\n</section>",
        title(algo),
        render_grid(grid, algo),
    ))
}

/// The full page for a solved maze.
pub fn render_page(solved: &SolvedMaze) -> Result<String, serde_json::Error> {
    let mut sections = Vec::with_capacity(solved.traces.len());
    for (algo, trace) in &solved.traces {
        sections.push(render_section(&solved.grid, *algo, trace)?);
    }
    let heading = format!("{}×{} maze", solved.grid.width(), solved.grid.height());
    Ok(PAGE
        .replace("{{title}}", &heading)
        .replace("{{sections}}", &sections.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;

    const GRID: &str = "
        S.#
        .#.
        ..E
    ";

    #[test]
    fn grid_has_one_div_per_cell_with_token_ids() {
        let grid = Grid::parse(GRID).unwrap();
        let html = render_grid(&grid, Algo::Bfs);
        assert_eq!(html.matches("<div class=\"row\">").count(), 3);
        assert_eq!(html.matches("class=\"cell").count(), 9);
        for p in grid.bounds() {
            let id = format!("id=\"{}-BFS\"", p);
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }
    }

    #[test]
    fn cell_classes_mark_terminals_and_obstacles() {
        let grid = Grid::parse(GRID).unwrap();
        let html = render_grid(&grid, Algo::Dfs);
        assert!(html.contains("<div class=\"cell start\" id=\"0,0-DFS\">"));
        assert!(html.contains("<div class=\"cell end\" id=\"2,2-DFS\">"));
        assert!(html.contains("<div class=\"cell obstacle\" id=\"0,2-DFS\">"));
        assert!(html.contains("<div class=\"cell obstacle\" id=\"1,1-DFS\">"));
        assert!(html.contains("<div class=\"cell\" id=\"1,0-DFS\">"));
    }

    #[test]
    fn coinciding_terminals_get_both_classes() {
        let grid = Grid::new(1, 1, Point::ZERO, Point::ZERO);
        assert!(render_grid(&grid, Algo::AStar).contains("class=\"cell start end\""));
    }

    #[test]
    fn page_contains_every_panel_and_trace() {
        let solved = SolvedMaze::solve(Grid::parse(GRID).unwrap());
        let page = render_page(&solved).unwrap();
        assert!(page.contains("<h1>3×3 maze</h1>"));
        for algo in Algo::ALL {
            assert!(page.contains(&format!("id=\"maze-{algo}\"")));
            assert!(page.contains(&format!("\"2,2-{algo}\"]);")));
        }
        assert!(page.contains("reached the end after"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn unsolved_panel_says_so() {
        let grid = Grid::parse("S#\n#E").unwrap();
        let trace = maze_paths::Solver::new().solve(&mut grid.clone(), Algo::Dfs).clone();
        let html = render_section(&grid, Algo::Dfs, &trace).unwrap();
        assert!(html.contains("no path; 1 cells expanded"));
        assert!(html.contains("animateTrace([\"0,0-DFS\"]);"));
    }
}
