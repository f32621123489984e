use std::path::PathBuf;

use armcheck::scene::SceneFile;
use clap::Parser;

/// Armcheck: collision checks for a planar multi-link arm
///
/// Loads a scene (workspace, obstacles, goals) and a list of arm configurations from
/// a JSON file and reports, for every arm, whether it hits an obstacle, reaches a
/// goal and stays inside the workspace.
#[derive(Parser, Debug)]
#[command(name = "armcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the scene file (JSON)
    #[arg(short, long, value_name = "FILE")]
    scene: PathBuf,

    /// Print the results as JSON instead of one line per arm
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let path = cli.scene.to_string_lossy();
    let file = match SceneFile::load_from_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: failed to load scene {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let statuses = file.evaluate();

    if cli.json {
        match serde_json::to_string_pretty(&statuses) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to encode results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Checking {} arm(s) against {} obstacle(s) and {} goal(s) in {}x{}",
        file.arms.len(),
        file.scene.obstacles.len(),
        file.scene.goals.len(),
        file.scene.workspace.width,
        file.scene.workspace.height,
    );

    for (i, status) in statuses.iter().enumerate() {
        let verdict = if status.is_goal() {
            "goal"
        } else if status.is_valid() {
            "valid"
        } else {
            "invalid"
        };
        println!(
            "arm {}: {} (obstacle: {}, goal links: {}, tip in goal: {}, in workspace: {})",
            i,
            verdict,
            status.hits_obstacle,
            status.links_touch_goal,
            status.tip_in_goal,
            status.within_workspace,
        );
    }
}
